//! Error handling for the dashboard pipeline.

use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;
use thiserror::Error;

/// Specialized error type for dataset loading and serving
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Error opening or reading the dataset file
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path of the file that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
    /// Error decoding delimited data into record batches
    #[error("failed to decode dataset: {0}")]
    Decode(#[from] ArrowError),
    /// The input file does not satisfy the required column contract
    #[error("schema error: {0}")]
    Schema(String),
    /// Error binding or serving the HTTP listener
    #[error("server error: {0}")]
    Server(#[source] io::Error),
}

impl DashboardError {
    /// Build an I/O error carrying the offending path
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Build a schema-contract error
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema(message.into())
    }
}

/// Result type for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;
