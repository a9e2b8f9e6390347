//! Optional soft-requirement constraints.
//!
//! Each constraint applies only when the caller set the corresponding
//! profile field; an absent field imposes nothing. Latency is checked end
//! to end: per-km latency times the requested distance.

use anyhow::Result;
use catalog::MediumRecord;

use crate::profile::RequirementProfile;
use crate::traits::Filter;

/// Drops candidates failing any constraint the profile declares.
///
/// ## Checks (each only when present)
/// - `reliability >= reliability_minimum`
/// - `latency_per_km * distance <= latency_maximum`
/// - `environmental_adaptability >= environmental_minimum`
/// - `installation_difficulty <= installation_difficulty_maximum`
pub struct ConstraintFilter;

impl ConstraintFilter {
    fn passes(record: &MediumRecord, profile: &RequirementProfile) -> bool {
        if let Some(min) = profile.reliability_minimum {
            if record.reliability < min {
                return false;
            }
        }

        if let Some(max) = profile.latency_maximum {
            if record.latency_per_km * profile.distance > max {
                return false;
            }
        }

        if let Some(min) = profile.environmental_minimum {
            if record.environmental_adaptability < min {
                return false;
            }
        }

        if let Some(max) = profile.installation_difficulty_maximum {
            if record.installation_difficulty > max {
                return false;
            }
        }

        true
    }
}

impl Filter for ConstraintFilter {
    fn name(&self) -> &str {
        "ConstraintFilter"
    }

    fn apply(
        &self,
        candidates: Vec<MediumRecord>,
        profile: &RequirementProfile,
    ) -> Result<Vec<MediumRecord>> {
        let filtered = candidates
            .into_iter()
            .filter(|record| Self::passes(record, profile))
            .collect();

        Ok(filtered)
    }
}
