//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use anyhow::Result;
use catalog::MediumRecord;
use tracing;

use crate::profile::RequirementProfile;
use crate::traits::Filter;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(CapabilityFilter)
///     .add_filter(ConstraintFilter);
///
/// let filtered = pipeline.apply(candidates, &profile)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    ///
    /// # Arguments
    /// * `filter` - Any type implementing the Filter trait
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// An empty result is a valid outcome, not an error; later stages turn
    /// it into the fallback summary.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter
    /// * `profile` - Requirement profile for filtering decisions
    ///
    /// # Returns
    /// * `Ok(Vec<MediumRecord>)` - The candidates surviving all filters
    /// * `Err` - If any filter fails
    pub fn apply(
        &self,
        candidates: Vec<MediumRecord>,
        profile: &RequirementProfile,
    ) -> Result<Vec<MediumRecord>> {
        let mut current = candidates;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, profile)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
