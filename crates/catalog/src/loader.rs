//! Loading the catalog from a JSON document.
//!
//! The catalog file is a JSON array of medium records in the wire shape
//! (camelCase fields, snake_case enum tags). Every record is validated
//! against the catalog invariants before it is accepted; one bad record
//! fails the whole load with a pointed error rather than silently shipping
//! a partial catalog.

use std::fs;
use std::path::Path;

use crate::error::{CatalogError, Result};
use crate::types::MediumRecord;

/// Parse a catalog document from a JSON string.
///
/// # Arguments
/// * `json` - JSON array of medium records
/// * `origin` - label used in parse errors (usually the file path)
pub fn parse_catalog(json: &str, origin: &str) -> Result<Vec<MediumRecord>> {
    let records: Vec<MediumRecord> =
        serde_json::from_str(json).map_err(|source| CatalogError::Parse {
            file: origin.to_string(),
            source,
        })?;

    for record in &records {
        record.validate()?;
    }

    Ok(records)
}

/// Read and parse a catalog file from disk.
pub fn load_catalog_file(path: &Path) -> Result<Vec<MediumRecord>> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let json = fs::read_to_string(path)?;
    parse_catalog(&json, &path.display().to_string())
}
