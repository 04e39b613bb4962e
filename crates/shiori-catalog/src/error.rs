//! Error types for the shiori-catalog crate.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to read the catalog file.
    #[error("failed to read catalog {path}: {source}")]
    ReadFile {
        /// Path to the catalog file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The file is not valid JSON.
    #[error("failed to parse catalog {path}: {source}")]
    ParseJson {
        /// Path to the catalog file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The document is valid JSON but not an array of rows.
    #[error("catalog {path} must be a JSON array of objects")]
    NotAnArray {
        /// Path to the catalog file.
        path: PathBuf,
    },

    /// A row is not a JSON object.
    #[error("catalog {path}: row {index} is not an object")]
    RowNotObject {
        /// Path to the catalog file.
        path: PathBuf,
        /// Zero-based row index.
        index: usize,
    },
}
