//! Logging System
//!
//! Structured logging via the `tracing` crate, trimmed to what a one-shot
//! bootstrap needs: configurable level, text or JSON format, stdout or
//! stderr. No file output or rotation.

use crate::error::BootstrapError;
use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, stderr
    #[serde(default = "default_output")]
    pub output: String,

    /// Enable colored output (text format only)
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            color: default_true(),
        }
    }
}

/// Initialize the logging system.
///
/// Priority order (highest to lowest):
/// 1. `OPENCLAW_BOOTSTRAP_LOG` environment variable (full filter directives)
/// 2. Provided configuration
/// 3. Defaults
pub fn init_logging(config: &LoggingConfig) -> Result<(), BootstrapError> {
    let filter = build_env_filter(config)?;
    let format = validate_format(&config.format)?;
    let to_stdout = validate_output(&config.output)?;

    let base_subscriber = Registry::default().with(filter);

    if format == "json" {
        if to_stdout {
            base_subscriber
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_writer(std::io::stdout),
                )
                .init();
        } else {
            base_subscriber
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    } else if to_stdout {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(config.color)
                    .with_writer(std::io::stdout),
            )
            .init();
    } else {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(config.color)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

/// Build environment filter from config or the env var override.
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, BootstrapError> {
    if let Ok(filter) = EnvFilter::try_from_env("OPENCLAW_BOOTSTRAP_LOG") {
        return Ok(filter);
    }

    match config.level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" | "off" => {
            Ok(EnvFilter::new(&config.level))
        }
        other => Err(BootstrapError::Config(format!(
            "Invalid log level: {} (must be trace, debug, info, warn, error, or off)",
            other
        ))),
    }
}

fn validate_format(format: &str) -> Result<&str, BootstrapError> {
    match format {
        "json" | "text" => Ok(format),
        other => Err(BootstrapError::Config(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            other
        ))),
    }
}

/// Returns true for stdout, false for stderr.
fn validate_output(output: &str) -> Result<bool, BootstrapError> {
    match output {
        "stdout" => Ok(true),
        "stderr" => Ok(false),
        other => Err(BootstrapError::Config(format!(
            "Invalid log output: {} (must be 'stdout' or 'stderr')",
            other
        ))),
    }
}
