//! `Authorization: ApiKey <key>` header parsing.

use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::error::AuthError;

/// The only scheme accepted in the `Authorization` header.
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Extract the API key from request headers.
///
/// Expects `Authorization: ApiKey <key>`. When the header appears more than
/// once, the first value is used. Everything after the first space is
/// returned as-is, so `"ApiKey "` yields an empty key and `"ApiKey a b"`
/// yields `"a b"`. Callers that need a non-empty key must check it.
///
/// # Errors
///
/// - [`AuthError::NoAuthHeader`] if the header is missing or empty.
/// - [`AuthError::MalformedHeader`] if the value has no space, the scheme is
///   not exactly `ApiKey`, or the value is not valid UTF-8.
pub fn get_api_key(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = match headers.get(AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => {
            tracing::debug!("No authorization header included");
            return Err(AuthError::NoAuthHeader);
        }
    };

    let value = std::str::from_utf8(value.as_bytes()).map_err(|_| {
        tracing::debug!("Authorization header is not valid UTF-8");
        AuthError::MalformedHeader
    })?;

    let Some((scheme, key)) = value.split_once(' ') else {
        tracing::debug!("Authorization header has no scheme separator");
        return Err(AuthError::MalformedHeader);
    };

    if scheme != API_KEY_SCHEME {
        tracing::debug!(
            scheme_len = scheme.len(),
            "Authorization header uses unsupported scheme"
        );
        return Err(AuthError::MalformedHeader);
    }

    Ok(key)
}
