//! Configuration management.
//!
//! Only logging is configurable. Values come from environment variables,
//! falling back to defaults.

mod settings;

pub use settings::{Config, LOG_JSON_ENV, LOG_LEVEL_ENV};
