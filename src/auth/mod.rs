//! API key extraction.
//!
//! Parses `Authorization: ApiKey <key>` request headers. Only extraction is
//! done here; checking that the key is authorized is up to the caller.
//!
//! - [`get_api_key`] works on any [`HeaderMap`](axum::http::HeaderMap).
//! - [`ApiKey`] is an axum extractor built on top of it.

mod extract;
mod extractor;

pub use extract::{get_api_key, API_KEY_SCHEME};
pub use extractor::ApiKey;
