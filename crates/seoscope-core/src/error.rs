//! Error types for seoscope-core.
//!
//! Text analysis itself never fails: degenerate input produces zero-valued
//! reports. Only loading configuration (and the files it points at) can fail.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,

    /// A stop-word list file referenced by the config could not be read.
    #[error("failed to read stop-word file {path}: {source}")]
    StopWordFile {
        /// The resolved path that was attempted.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;
