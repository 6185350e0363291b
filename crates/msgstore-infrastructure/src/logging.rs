//! Structured logging with tracing
//!
//! Centralized logging configuration using the tracing ecosystem. The store
//! decorators emit records through whatever subscriber is installed here;
//! this subsystem only emits, it never reads logs back.

use msgstore_domain::error::{Error, Result};

// Re-export LoggingConfig for convenience
pub use crate::config::LoggingConfig;
use crate::error_ext::ErrorContext;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable overriding the configured log filter
pub const LOG_ENV_VAR: &str = "MSGSTORE_LOG";

/// Initialize logging with the provided configuration
///
/// Double initialization surfaces as a configuration error rather than a
/// panic, so embedding applications can install their own subscriber first.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.level));

    // json_format branches separately: the layer types differ
    if config.json_format {
        let stdout = fmt::layer().json().with_target(true);
        Registry::default()
            .with(filter)
            .with(stdout)
            .try_init()
            .config_context("failed to initialize logging")?;
    } else {
        let stdout = fmt::layer().with_target(true);
        Registry::default()
            .with(filter)
            .with(stdout)
            .try_init()
            .config_context("failed to initialize logging")?;
    }

    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::config(format!(
            "invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}
