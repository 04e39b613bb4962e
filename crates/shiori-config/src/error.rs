//! Error types for shiori configuration.

use std::{io, path::PathBuf};

use thiserror::Error;
use toml::{de, ser};

use crate::vocab::Axis;

/// Errors that can occur when loading or processing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: de::Error,
    },

    /// Failed to render the effective configuration as TOML.
    #[error("failed to serialize settings: {0}")]
    SerializeToml(#[from] ser::Error),

    /// Failed to determine home directory.
    #[error("could not determine home directory")]
    NoHomeDirectory,
}

/// A category name that is not part of the built-in vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {axis} category: {value}")]
pub struct UnknownCategory {
    /// Axis the value was parsed for.
    pub axis: Axis,
    /// The rejected input.
    pub value: String,
}
