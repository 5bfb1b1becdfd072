//! Error types for the OpenClaw bootstrap utility.

use std::path::PathBuf;
use thiserror::Error;

/// Bootstrap errors. All variants are fatal; the driver makes no attempt to
/// retry or partially recover, and propagates to the process boundary.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed configuration at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl BootstrapError {
    /// Attach a path to an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BootstrapError::Io {
            path: path.into(),
            source,
        }
    }
}
