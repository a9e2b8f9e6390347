//! In-memory catalog store and the read-only query capability.
//!
//! The engine never touches a concrete store type; it is handed an
//! `Arc<dyn CatalogStore>` and asks for a snapshot of capable records. That
//! keeps the recommendation pipeline pure and testable against fixture data.

use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use crate::error::{CatalogError, Result};
use crate::loader;
use crate::types::{CatalogStats, MediumId, MediumRecord, MediumType, Scenario};

/// Coarse capability query answered by a catalog store.
///
/// This is a superset filter: the store only narrows by bandwidth, distance
/// capability, and unit cost. Exact scenario and constraint filtering happens
/// downstream in the engine, so a store may safely over-return.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapabilityQuery {
    /// Required sustained bandwidth (Mbps).
    pub min_bandwidth: f64,
    /// Link length the medium must be able to span (km).
    pub min_distance: f64,
    /// Budget ceiling per km.
    pub max_cost_per_km: f64,
}

/// Read-only query capability over a catalog of transmission media.
///
/// Implementations return owned snapshots; callers never observe later
/// catalog changes through a snapshot. Only active records are returned.
pub trait CatalogStore: Send + Sync {
    /// Return active records satisfying the coarse capability query,
    /// preserving catalog order.
    fn find_by_capabilities(&self, query: &CapabilityQuery) -> Result<Vec<MediumRecord>>;
}

/// Catalog held entirely in memory, preserving insertion order.
///
/// ## Usage
/// ```ignore
/// let catalog = InMemoryCatalog::load_from_file(Path::new("data/catalog.json"))?;
/// let fiber = catalog.get(1).unwrap();
/// let wan_media = catalog.find_by_scenario(Scenario::Wan);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    records: Vec<MediumRecord>,
    id_index: HashMap<MediumId, usize>,
}

impl InMemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            id_index: HashMap::new(),
        }
    }

    /// Build a catalog from pre-parsed records, rejecting duplicate ids.
    pub fn from_records(records: Vec<MediumRecord>) -> Result<Self> {
        let mut catalog = Self::new();
        for record in records {
            catalog.insert(record)?;
        }
        Ok(catalog)
    }

    /// Load and validate a JSON catalog file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let records = loader::load_catalog_file(path)?;
        let catalog = Self::from_records(records)?;
        info!(
            "loaded catalog: {} records ({} active)",
            catalog.len(),
            catalog.active_count()
        );
        Ok(catalog)
    }

    /// Insert a record, keeping insertion order for reproducible results.
    pub fn insert(&mut self, record: MediumRecord) -> Result<()> {
        if self.id_index.contains_key(&record.id) {
            return Err(CatalogError::DuplicateId { id: record.id });
        }
        self.id_index.insert(record.id, self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// Look up a record by id.
    pub fn get(&self, id: MediumId) -> Option<&MediumRecord> {
        self.id_index.get(&id).map(|&i| &self.records[i])
    }

    /// All records, in insertion order.
    pub fn all(&self) -> &[MediumRecord] {
        &self.records
    }

    /// Active records rated for the given scenario, in catalog order.
    pub fn find_by_scenario(&self, scenario: Scenario) -> Vec<&MediumRecord> {
        self.records
            .iter()
            .filter(|r| r.active && r.supports_scenario(scenario))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn active_count(&self) -> usize {
        self.records.iter().filter(|r| r.active).count()
    }

    /// Aggregate figures over the catalog.
    pub fn statistics(&self) -> CatalogStats {
        let active: Vec<&MediumRecord> = self.records.iter().filter(|r| r.active).collect();

        let type_distribution = MediumType::ALL
            .iter()
            .filter_map(|&medium_type| {
                let count = active
                    .iter()
                    .filter(|r| r.medium_type == medium_type)
                    .count();
                (count > 0).then_some((medium_type, count))
            })
            .collect();

        let average_cost_per_km = if active.is_empty() {
            0.0
        } else {
            active.iter().map(|r| r.cost_per_km).sum::<f64>() / active.len() as f64
        };

        CatalogStats {
            total: self.records.len(),
            active: active.len(),
            type_distribution,
            average_cost_per_km,
        }
    }
}

impl CatalogStore for InMemoryCatalog {
    fn find_by_capabilities(&self, query: &CapabilityQuery) -> Result<Vec<MediumRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| {
                r.active
                    && r.max_bandwidth >= query.min_bandwidth
                    && r.max_distance >= query.min_distance
                    && r.cost_per_km <= query.max_cost_per_km
            })
            .cloned()
            .collect())
    }
}
