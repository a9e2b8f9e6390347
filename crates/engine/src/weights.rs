//! Priority weighting.
//!
//! Turns the caller's priority set into a per-criterion weight vector. Two
//! schemes are provided behind the same function signature so the
//! orchestrator can swap them without touching the scoring stage:
//!
//! - [`priority_weights`] (default): selected criteria get `1/n`, unselected
//!   criteria keep a fixed 0.1 floor. The weights therefore sum to
//!   `1 + 0.1 * (5 - n)`, and match scores can exceed 100. This reproduces
//!   the shipped behavior and is load-bearing for existing clients.
//! - [`normalized_priority_weights`]: same 0.1 floor, but the selected
//!   criteria share the remainder so the vector sums to exactly 1.

use std::collections::HashSet;

use crate::profile::Priority;

/// Weight given to a criterion the caller did not select.
pub const DEFAULT_WEIGHT: f64 = 0.1;

/// Per-criterion weight vector used to combine sub-scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriterionWeights {
    pub cost: f64,
    pub performance: f64,
    pub reliability: f64,
    pub installation: f64,
    pub maintenance: f64,
}

impl CriterionWeights {
    /// Sum of all five weights.
    pub fn sum(&self) -> f64 {
        self.cost + self.performance + self.reliability + self.installation + self.maintenance
    }

    fn build(selected: &HashSet<Priority>, selected_weight: f64) -> Self {
        let weight_for = |priority: Priority| {
            if selected.contains(&priority) {
                selected_weight
            } else {
                DEFAULT_WEIGHT
            }
        };
        Self {
            cost: weight_for(Priority::Cost),
            performance: weight_for(Priority::Performance),
            reliability: weight_for(Priority::Reliability),
            installation: weight_for(Priority::EaseOfInstallation),
            maintenance: weight_for(Priority::Maintenance),
        }
    }
}

/// Signature shared by the weight schemes; the orchestrator stores one of
/// these and the rest of the pipeline never knows which.
pub type WeightFn = fn(&[Priority]) -> CriterionWeights;

/// Default scheme: `1/n` for each of the `n` distinct selected criteria,
/// [`DEFAULT_WEIGHT`] for the rest.
///
/// Duplicate priorities are ignored. With an empty priority list every
/// criterion falls back to the floor weight.
pub fn priority_weights(priorities: &[Priority]) -> CriterionWeights {
    let selected: HashSet<Priority> = priorities.iter().copied().collect();
    let n = selected.len();
    if n == 0 {
        return CriterionWeights::build(&selected, DEFAULT_WEIGHT);
    }
    CriterionWeights::build(&selected, 1.0 / n as f64)
}

/// Corrected scheme: unselected criteria keep the floor, selected criteria
/// share `1 - 0.1 * (5 - n)` equally, so the vector sums to 1.
pub fn normalized_priority_weights(priorities: &[Priority]) -> CriterionWeights {
    let selected: HashSet<Priority> = priorities.iter().copied().collect();
    let n = selected.len();
    if n == 0 {
        // Degenerate input; spread evenly rather than divide by zero.
        return CriterionWeights {
            cost: 0.2,
            performance: 0.2,
            reliability: 0.2,
            installation: 0.2,
            maintenance: 0.2,
        };
    }
    let shared = (1.0 - DEFAULT_WEIGHT * (5 - n) as f64) / n as f64;
    CriterionWeights::build(&selected, shared)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_criteria_split_the_unit_weight() {
        let weights = priority_weights(&[Priority::Cost, Priority::Performance]);
        assert_eq!(weights.cost, 0.5);
        assert_eq!(weights.performance, 0.5);
        assert_eq!(weights.reliability, 0.1);
        assert_eq!(weights.installation, 0.1);
        assert_eq!(weights.maintenance, 0.1);
    }

    #[test]
    fn weight_sum_follows_the_floor_formula() {
        // sum = 1 + 0.1 * (5 - n)
        let cases = [
            (vec![Priority::Cost], 1.4),
            (vec![Priority::Cost, Priority::Performance], 1.3),
            (
                vec![Priority::Cost, Priority::Performance, Priority::Reliability],
                1.2,
            ),
            (
                vec![
                    Priority::Cost,
                    Priority::Performance,
                    Priority::Reliability,
                    Priority::EaseOfInstallation,
                ],
                1.1,
            ),
            (Priority::ALL.to_vec(), 1.0),
        ];
        for (priorities, expected) in cases {
            let sum = priority_weights(&priorities).sum();
            assert!(
                (sum - expected).abs() < 1e-9,
                "n={} expected {expected} got {sum}",
                priorities.len()
            );
        }
    }

    #[test]
    fn duplicate_priorities_are_ignored() {
        let weights = priority_weights(&[Priority::Cost, Priority::Cost, Priority::Performance]);
        assert_eq!(weights, priority_weights(&[Priority::Cost, Priority::Performance]));
    }

    #[test]
    fn empty_priorities_fall_back_to_the_floor() {
        let weights = priority_weights(&[]);
        assert_eq!(weights.sum(), 0.5);
        assert_eq!(weights.cost, DEFAULT_WEIGHT);
    }

    #[test]
    fn all_five_priorities_weigh_evenly() {
        let weights = priority_weights(&Priority::ALL);
        for w in [
            weights.cost,
            weights.performance,
            weights.reliability,
            weights.installation,
            weights.maintenance,
        ] {
            assert!((w - 0.2).abs() < 1e-9);
        }
    }

    #[test]
    fn normalized_scheme_sums_to_one() {
        let mut priorities: Vec<Priority> = Vec::new();
        for priority in Priority::ALL {
            priorities.push(priority);
            let sum = normalized_priority_weights(&priorities).sum();
            assert!((sum - 1.0).abs() < 1e-9, "n={} got {sum}", priorities.len());
        }
    }

    #[test]
    fn normalized_scheme_keeps_the_floor_for_unselected() {
        let weights = normalized_priority_weights(&[Priority::Reliability]);
        assert_eq!(weights.cost, DEFAULT_WEIGHT);
        assert!((weights.reliability - 0.6).abs() < 1e-9);
    }
}
