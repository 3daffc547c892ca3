use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading runtime settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown log level `{0}` (expected off, error, warn, info, debug or trace)")]
    InvalidLogLevel(String),
}

/// Top-level application error returned by the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("cannot start file logger at {path}: {source}")]
    Logger {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
