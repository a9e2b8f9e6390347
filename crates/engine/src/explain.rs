//! Human-readable justification text.
//!
//! Everything here is threshold-driven and deterministic: the same record,
//! profile, and score always produce the same text. The record's own
//! free-text advantages/disadvantages, when present, lead the generated
//! lists so curated copy stays ahead of derived clauses.

use catalog::MediumRecord;

use crate::profile::RequirementProfile;
use crate::result::RecommendationResult;

/// Separator between reason clauses.
pub const CLAUSE_SEPARATOR: &str = ", ";

/// Summary returned when no medium survives filtering.
pub const NO_MATCH_SUMMARY: &str = "No transmission medium fully matches the requested \
     parameters. Consider relaxing the budget or performance requirements and trying again.";

// Reason thresholds operate on the unrounded weighted score.
const EXCELLENT_SCORE: f64 = 80.0;
const ADEQUATE_SCORE: f64 = 60.0;

/// Compose the recommendation reason for one candidate.
///
/// `weighted_score` is the raw weighted sum, not the rounded match score;
/// a candidate that rounds up to 80 can still read as merely adequate.
pub fn reason(record: &MediumRecord, profile: &RequirementProfile, weighted_score: f64) -> String {
    let mut clauses: Vec<String> = Vec::new();

    if weighted_score >= EXCELLENT_SCORE {
        clauses.push(format!(
            "{} performs excellently for this scenario",
            record.name
        ));
    } else if weighted_score >= ADEQUATE_SCORE {
        clauses.push(format!("{} basically meets the requirements", record.name));
    } else {
        clauses.push(format!("{} may require trade-offs", record.name));
    }

    if record.cost_per_km <= profile.budget_limit * 0.7 {
        clauses.push("cost-efficient".to_string());
    }

    if record.max_bandwidth >= profile.required_bandwidth * 2.0 {
        clauses.push("ample bandwidth headroom".to_string());
    }

    if record.reliability >= 8.0 {
        clauses.push("excellent reliability".to_string());
    }

    clauses.join(CLAUSE_SEPARATOR)
}

/// Derive the advantages list for one candidate.
///
/// The record's own advantages text, if any, comes first.
pub fn advantages(record: &MediumRecord, profile: &RequirementProfile) -> Vec<String> {
    let mut advantages: Vec<String> = Vec::new();

    if let Some(text) = &record.advantages {
        advantages.push(text.clone());
    }

    if record.max_bandwidth >= profile.required_bandwidth * 1.5 {
        advantages.push("superior bandwidth, future-proof".to_string());
    }

    if record.reliability >= 9.0 {
        advantages.push("very high reliability, suited to critical workloads".to_string());
    }

    if record.installation_difficulty <= 5.0 {
        advantages.push("simple installation, short deployment".to_string());
    }

    if record.environmental_adaptability >= 8.0 {
        advantages.push("strong environmental adaptability".to_string());
    }

    advantages
}

/// Derive the considerations list for one candidate.
///
/// The record's own disadvantages text, if any, comes first.
pub fn considerations(record: &MediumRecord, profile: &RequirementProfile) -> Vec<String> {
    let mut considerations: Vec<String> = Vec::new();

    if let Some(text) = &record.disadvantages {
        considerations.push(text.clone());
    }

    if record.installation_difficulty >= 8.0 {
        considerations.push("requires skilled installers".to_string());
    }

    if record.maintenance_cost_per_km_year > profile.budget_limit * 0.05 {
        considerations.push("relatively high maintenance cost".to_string());
    }

    if record.latency_per_km * profile.distance > 5.0 {
        considerations.push("latency may matter over long distances".to_string());
    }

    if record.attenuation > 1.0 {
        considerations.push("significant attenuation, may need repeaters".to_string());
    }

    considerations
}

/// Compose the response summary.
///
/// All referenced values are rounded to integers in the text; the JSON
/// fields themselves stay unrounded.
pub fn summary(profile: &RequirementProfile, results: &[RecommendationResult]) -> String {
    let Some(best) = results.first() else {
        return NO_MATCH_SUMMARY.to_string();
    };

    format!(
        "Based on a {} km link requiring {} Mbps within a budget of {} per km, \
         {} recommendation(s) were produced; the best fit is {} with a match score \
         of {}, an estimated total cost of {} and an annual maintenance cost of {}.",
        profile.distance.round(),
        profile.required_bandwidth.round(),
        profile.budget_limit.round(),
        results.len(),
        best.media.name,
        best.match_score,
        best.total_cost.round(),
        best.annual_maintenance_cost.round(),
    )
}
