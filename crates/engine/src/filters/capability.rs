//! Hard capability filter.
//!
//! Drops every medium that cannot physically or economically serve the
//! requested link. This re-applies the store's coarse capability query
//! (the store is allowed to over-return) and adds the scenario check.

use anyhow::Result;
use catalog::MediumRecord;

use crate::profile::RequirementProfile;
use crate::traits::Filter;

/// Keeps media satisfying every hard requirement of the profile.
///
/// ## Predicate (all must hold)
/// - `max_bandwidth >= required_bandwidth`
/// - `max_distance >= distance`
/// - `cost_per_km <= budget_limit`
/// - profile scenario is in `applicable_scenarios`
/// - record is active
///
/// Order preserving; never reorders what it keeps.
pub struct CapabilityFilter;

impl Filter for CapabilityFilter {
    fn name(&self) -> &str {
        "CapabilityFilter"
    }

    fn apply(
        &self,
        candidates: Vec<MediumRecord>,
        profile: &RequirementProfile,
    ) -> Result<Vec<MediumRecord>> {
        let filtered = candidates
            .into_iter()
            .filter(|record| {
                record.active
                    && record.max_bandwidth >= profile.required_bandwidth
                    && record.max_distance >= profile.distance
                    && record.cost_per_km <= profile.budget_limit
                    && record.supports_scenario(profile.scenario)
            })
            .collect();

        Ok(filtered)
    }
}
