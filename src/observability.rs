//! Structured logging setup.
//!
//! Installs a `tracing` subscriber with:
//! - Log level from `RUST_LOG`, falling back to [`Config::log_level`]
//! - Plain text or JSON output

use tracing_subscriber::{
    filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, Registry,
};

use crate::config::Config;
use crate::{Error, Result};

/// Initialize tracing with the given configuration.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed in
/// this process.
pub fn init_tracing(config: &Config) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_lowercase()));

    let installed = if config.log_json {
        let json_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);

        Registry::default().with(env_filter).with(json_layer).try_init()
    } else {
        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);

        Registry::default().with(env_filter).with(fmt_layer).try_init()
    };

    installed.map_err(|e| Error::internal(format!("failed to install tracing subscriber: {e}")))?;

    tracing::debug!(
        level = %config.log_level,
        json = config.log_json,
        "Tracing initialized"
    );
    Ok(())
}
