//! Ranking and truncation of scored candidates.

use crate::score::ScoredMedium;

/// How many recommendations a response carries by default.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 5;

/// Sort candidates best-first and keep the top `limit`.
///
/// Ordering: match score descending; equal scores break by ascending record
/// id so results are reproducible regardless of catalog order.
pub fn rank_and_truncate(mut scored: Vec<ScoredMedium>, limit: usize) -> Vec<ScoredMedium> {
    scored.sort_by(|a, b| {
        b.match_score
            .cmp(&a.match_score)
            .then_with(|| a.record.id.cmp(&b.record.id))
    });
    scored.truncate(limit);
    scored
}
