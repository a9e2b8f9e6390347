//! Response types: the wire contract of the engine.
//!
//! Field names serialize in camelCase; the JSON shape is consumed by an
//! existing client and must not drift.

use serde::{Deserialize, Serialize};

use catalog::MediumRecord;

use crate::explain;
use crate::profile::RequirementProfile;
use crate::score::ScoredMedium;

/// One recommended medium with its score, costs, and justification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    /// The catalog record this result scores.
    pub media: MediumRecord,
    /// Weighted match score, rounded to the nearest integer. Not bounded by
    /// 100 (see [`crate::weights`]).
    pub match_score: u32,
    /// Build-out cost: cost per km times link length.
    pub total_cost: f64,
    /// Yearly upkeep: maintenance cost per km-year times link length.
    pub annual_maintenance_cost: f64,
    pub reason: String,
    pub advantages: Vec<String>,
    pub considerations: Vec<String>,
}

impl RecommendationResult {
    /// Assemble the full result for one scored candidate.
    pub fn from_scored(scored: ScoredMedium, profile: &RequirementProfile) -> Self {
        let ScoredMedium {
            record,
            weighted_score,
            match_score,
            ..
        } = scored;

        let reason = explain::reason(&record, profile, weighted_score);
        let advantages = explain::advantages(&record, profile);
        let considerations = explain::considerations(&record, profile);

        Self {
            total_cost: record.cost_per_km * profile.distance,
            annual_maintenance_cost: record.maintenance_cost_per_km_year * profile.distance,
            media: record,
            match_score,
            reason,
            advantages,
            considerations,
        }
    }
}

/// The complete answer to one recommendation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    /// Best-first, at most the configured result limit.
    pub recommendations: Vec<RecommendationResult>,
    pub summary: String,
    /// The input profile, echoed unchanged.
    pub request_params: RequirementProfile,
}
