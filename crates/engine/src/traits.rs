//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to candidate sets.

use anyhow::Result;
use catalog::MediumRecord;

use crate::profile::RequirementProfile;

/// Core trait for filtering candidate media.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters take ownership of the Vec and return a filtered Vec, so a
///   pass-through stage costs nothing
/// - Filters must preserve the relative order of the candidates they keep
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter (takes ownership)
    /// * `profile` - The requirement profile driving filtering decisions
    ///
    /// # Returns
    /// * `Ok(Vec<MediumRecord>)` - The filtered candidates
    /// * `Err` - If filtering fails
    fn apply(
        &self,
        candidates: Vec<MediumRecord>,
        profile: &RequirementProfile,
    ) -> Result<Vec<MediumRecord>>;
}
