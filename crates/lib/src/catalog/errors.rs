//! Catalog loading and validation errors.

use std::path::PathBuf;

use thiserror::Error as ThisError;

use crate::Error;

#[non_exhaustive]
#[derive(Debug, ThisError)]
pub enum CatalogError {
    #[error("Catalog has no categories")]
    Empty,

    #[error("Category '{category}' has no keywords")]
    MissingKeywords { category: String },

    #[error("Category '{category}' has an empty keyword")]
    EmptyKeyword { category: String },

    #[error("Category '{category}' has no tools")]
    MissingTools { category: String },

    #[error("Tool '{tool}' has an invalid URL: {reason}")]
    InvalidToolUrl { tool: String, reason: String },

    #[error("Failed to read catalog {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl CatalogError {
    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, CatalogError::Read { .. })
    }
}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}
