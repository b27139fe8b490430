//! Error types for catalog loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a publication catalog.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to read the catalog file.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The JSON catalog is malformed.
    #[error("failed to parse JSON catalog {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The CSV catalog is malformed.
    #[error("failed to parse CSV catalog {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// File extension is neither `.json` nor `.csv`.
    #[error("unsupported catalog format: {path} (expected .json or .csv)")]
    UnsupportedFormat { path: PathBuf },

    /// A record is missing a required field.
    #[error("invalid record {record} in {path}: {message}")]
    InvalidRecord {
        path: PathBuf,
        record: usize,
        message: String,
    },

    /// No catalog path was given and the environment does not name one.
    #[error("no catalog given; pass a path or set {env_var}")]
    NoCatalog { env_var: &'static str },
}

pub type Result<T> = std::result::Result<T, IngestError>;
