//! API key extraction for HTTP services.
//!
//! Parses `Authorization: ApiKey <key>` headers into a raw credential, or
//! classifies why that was not possible. Validating the key is left to the
//! caller.
//!
//! ```
//! use apikey_auth::{get_api_key, AuthError};
//! use axum::http::{header::AUTHORIZATION, HeaderMap};
//!
//! let mut headers = HeaderMap::new();
//! assert_eq!(get_api_key(&headers), Err(AuthError::NoAuthHeader));
//!
//! headers.insert(AUTHORIZATION, "ApiKey my-secret-api-key".parse().unwrap());
//! assert_eq!(get_api_key(&headers), Ok("my-secret-api-key"));
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod auth;
pub mod config;
pub mod error;
pub mod observability;

pub use auth::{get_api_key, ApiKey, API_KEY_SCHEME};
pub use config::Config;
pub use error::{AuthError, Error, Result};
