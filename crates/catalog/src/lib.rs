//! # Catalog Crate
//!
//! Domain types and storage for the transmission-medium catalog.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MediumRecord, MediumType, Scenario)
//! - **loader**: Parse and validate JSON catalog documents
//! - **store**: The CatalogStore query capability and the in-memory catalog
//! - **error**: Error types for loading and querying
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{CapabilityQuery, CatalogStore, InMemoryCatalog};
//! use std::path::Path;
//!
//! let catalog = InMemoryCatalog::load_from_file(Path::new("data/catalog.json"))?;
//!
//! let candidates = catalog.find_by_capabilities(&CapabilityQuery {
//!     min_bandwidth: 1000.0,
//!     min_distance: 50.0,
//!     max_cost_per_km: 10000.0,
//! })?;
//!
//! println!("{} media can serve this link", candidates.len());
//! ```

// Public modules
pub mod error;
pub mod loader;
pub mod store;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use store::{CapabilityQuery, CatalogStore, InMemoryCatalog};
pub use types::{CatalogStats, MediumId, MediumRecord, MediumType, Scenario};
