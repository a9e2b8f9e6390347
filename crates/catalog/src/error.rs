//! Error types for the catalog crate.

use thiserror::Error;

use crate::types::MediumId;

/// Errors that can occur while loading or querying the catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be found or opened.
    #[error("failed to open catalog file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a catalog file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file is not valid JSON or does not match the record shape.
    #[error("failed to parse catalog file {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// A field carried a value outside its closed value set.
    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// A record violated a catalog invariant.
    #[error("record {id} failed validation: {reason}")]
    Validation { id: MediumId, reason: String },

    /// Two records share an identifier.
    #[error("duplicate record id {id}")]
    DuplicateId { id: MediumId },
}

/// Convenience type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, CatalogError>;
