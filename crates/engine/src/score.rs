//! Match scoring.
//!
//! Five sub-scores are computed per candidate, each nominally in [0, 100],
//! then combined through the caller's weight vector. Because unselected
//! criteria keep a 0.1 weight floor (see [`crate::weights`]), the combined
//! match score is not bounded by 100: with `n` distinct priorities its
//! maximum is `100 * (1 + 0.1 * (5 - n))`.

use catalog::MediumRecord;
use rayon::prelude::*;

use crate::profile::RequirementProfile;
use crate::weights::CriterionWeights;

/// Points available for each term of the performance sub-score.
const BANDWIDTH_POINTS: f64 = 50.0;
const DISTANCE_POINTS: f64 = 30.0;
const LATENCY_POINTS: f64 = 20.0;

/// Maintenance budget assumed acceptable: this fraction of the per-km budget
/// per year.
const MAINTENANCE_BUDGET_FRACTION: f64 = 0.1;

/// The five per-criterion sub-scores for one candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub cost: f64,
    pub performance: f64,
    pub reliability: f64,
    pub installation: f64,
    pub maintenance: f64,
}

impl SubScores {
    /// Combine the sub-scores through a weight vector.
    pub fn weighted(&self, weights: &CriterionWeights) -> f64 {
        self.cost * weights.cost
            + self.performance * weights.performance
            + self.reliability * weights.reliability
            + self.installation * weights.installation
            + self.maintenance * weights.maintenance
    }
}

/// A candidate with its sub-scores and combined match score.
#[derive(Debug, Clone)]
pub struct ScoredMedium {
    pub record: MediumRecord,
    pub scores: SubScores,
    /// Weighted sum before rounding; explanation thresholds read this.
    pub weighted_score: f64,
    /// Rounded match score reported to the caller and used for ranking.
    pub match_score: u32,
}

/// Cost sub-score: headroom under the per-km budget, 0 when over budget.
///
/// The capability filter drops over-budget candidates before scoring; the
/// zero branch also holds without it.
pub fn cost_score(cost_per_km: f64, budget_limit: f64) -> f64 {
    if cost_per_km > budget_limit {
        return 0.0;
    }
    ((budget_limit - cost_per_km) / budget_limit) * 100.0
}

/// Performance sub-score: bandwidth headroom (up to 50) plus distance
/// headroom (up to 30) plus a latency term (20 minus end-to-end latency,
/// floored at 0).
pub fn performance_score(record: &MediumRecord, profile: &RequirementProfile) -> f64 {
    // A zero bandwidth requirement is trivially covered; short-circuit so
    // the ratio cannot become NaN when max_bandwidth is also zero.
    let bandwidth_score = if profile.required_bandwidth <= 0.0 {
        BANDWIDTH_POINTS
    } else {
        (record.max_bandwidth / profile.required_bandwidth * BANDWIDTH_POINTS)
            .min(BANDWIDTH_POINTS)
    };

    let distance_score =
        (record.max_distance / profile.distance * DISTANCE_POINTS).min(DISTANCE_POINTS);

    let latency_score = (LATENCY_POINTS - record.latency_per_km * profile.distance).max(0.0);

    bandwidth_score + distance_score + latency_score
}

/// Reliability sub-score: the 1-10 rating scaled to 0-100.
pub fn reliability_score(reliability: f64) -> f64 {
    reliability * 10.0
}

/// Installation sub-score: inverted difficulty scaled to 0-100 (difficulty 1
/// scores 100, difficulty 10 scores 10).
pub fn installation_score(installation_difficulty: f64) -> f64 {
    (11.0 - installation_difficulty) * 10.0
}

/// Maintenance sub-score: headroom under the acceptable yearly upkeep,
/// where "acceptable" is [`MAINTENANCE_BUDGET_FRACTION`] of the per-km
/// budget; 0 when upkeep exceeds it.
pub fn maintenance_score(maintenance_cost_per_km_year: f64, budget_limit: f64) -> f64 {
    let max_acceptable = budget_limit * MAINTENANCE_BUDGET_FRACTION;
    if maintenance_cost_per_km_year > max_acceptable {
        return 0.0;
    }
    ((max_acceptable - maintenance_cost_per_km_year) / max_acceptable) * 100.0
}

/// Compute all five sub-scores for one candidate.
pub fn sub_scores(record: &MediumRecord, profile: &RequirementProfile) -> SubScores {
    SubScores {
        cost: cost_score(record.cost_per_km, profile.budget_limit),
        performance: performance_score(record, profile),
        reliability: reliability_score(record.reliability),
        installation: installation_score(record.installation_difficulty),
        maintenance: maintenance_score(
            record.maintenance_cost_per_km_year,
            profile.budget_limit,
        ),
    }
}

/// Round a weighted score to the reported match score.
///
/// Rounding rule: nearest integer, ties away from zero (`f64::round`).
/// Weighted scores are never negative, so ties round up.
pub fn round_match_score(weighted_score: f64) -> u32 {
    weighted_score.round() as u32
}

/// Score every candidate, preserving input order.
///
/// Candidates are scored in parallel; the output `Vec` keeps one entry per
/// input, in the same order.
pub fn score_candidates(
    candidates: Vec<MediumRecord>,
    profile: &RequirementProfile,
    weights: &CriterionWeights,
) -> Vec<ScoredMedium> {
    candidates
        .into_par_iter()
        .map(|record| {
            let scores = sub_scores(&record, profile);
            let weighted_score = scores.weighted(weights);
            ScoredMedium {
                record,
                scores,
                weighted_score,
                match_score: round_match_score(weighted_score),
            }
        })
        .collect()
}
