//! Error kinds raised by a validation run.
//!
//! Missing substructure inside a loaded document is never an error: it
//! surfaces as an empty extraction or a failed check instead.

use std::path::PathBuf;

use thiserror::Error;

/// An input document could not be acquired. Aborts the run.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file is missing or unreadable.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid JSON, or not of the expected JSON shape.
    #[error("failed to parse {} as JSON: {source}", .path.display())]
    Parse {
        /// Path that was being parsed.
        path: PathBuf,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },
}

/// The run is misconfigured and cannot produce meaningful metrics.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The source token set has no tokens, so every percentage would be undefined.
    #[error("source token set is empty; completeness and accuracy are undefined")]
    EmptySourceTokens,
    /// The configuration file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        /// Config file path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The configuration file is not valid TOML for [`ValidatorConfig`](crate::ValidatorConfig).
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        /// Config file path.
        path: PathBuf,
        /// Underlying parse failure.
        #[source]
        source: toml::de::Error,
    },
}

/// Any failure that ends a validation run without a report.
#[derive(Debug, Error)]
pub enum Error {
    /// An input document could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// The run configuration is unusable.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// The report could not be serialized.
    #[error("failed to serialize validation report: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The report could not be written.
    #[error("failed to write validation report {}: {source}", .path.display())]
    Write {
        /// Report destination.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
