//! Error types and Result aliases.
//!
//! [`AuthError`] classifies why an `Authorization` header could not yield a
//! credential. [`Error`] is the crate-level error used by configuration and
//! logging setup.

use axum::http::StatusCode;
use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for crate operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Credential extraction error.
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Generic internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Failure to extract an API key from request headers.
///
/// The two kinds are mutually exclusive: a header that exists but cannot be
/// parsed is always [`AuthError::MalformedHeader`], never
/// [`AuthError::NoAuthHeader`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthError {
    /// No `Authorization` header, or an empty one.
    #[error("no authorization header included")]
    NoAuthHeader,

    /// The header is not of the form `ApiKey <credential>`.
    #[error("malformed authorization header")]
    MalformedHeader,
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl AuthError {
    /// Message suitable for returning to the client.
    #[must_use]
    pub const fn client_message(self) -> &'static str {
        match self {
            Self::NoAuthHeader => "missing credentials",
            Self::MalformedHeader => "invalid credentials format",
        }
    }

    /// HTTP status a request handler should answer with.
    ///
    /// Both kinds map to `401 Unauthorized`.
    #[must_use]
    pub const fn status_code(self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }
}
