//! Integration tests for the recommendation pipeline.
//!
//! These run the filter, scoring, ranking, and explanation stages together
//! over a realistic fixture catalog, the way the orchestrator composes them.

use catalog::{MediumRecord, MediumType, Scenario};
use engine::filters::{CapabilityFilter, ConstraintFilter};
use engine::{
    FilterPipeline, Priority, RecommendationResult, RequirementProfile,
    DEFAULT_RECOMMENDATION_LIMIT, explain, priority_weights, rank_and_truncate, score_candidates,
    sub_scores,
};

fn medium(
    id: u32,
    name: &str,
    medium_type: MediumType,
    cost_per_km: f64,
    max_bandwidth: f64,
    scenarios: Vec<Scenario>,
) -> MediumRecord {
    MediumRecord {
        id,
        name: name.to_string(),
        medium_type,
        max_distance: 100.0,
        max_bandwidth,
        cost_per_km,
        attenuation: 0.3,
        latency_per_km: 0.005,
        reliability: 8.0,
        installation_difficulty: 6.0,
        maintenance_cost_per_km_year: 400.0,
        environmental_adaptability: 7.0,
        applicable_scenarios: scenarios,
        specifications: None,
        advantages: None,
        disadvantages: None,
        active: true,
    }
}

/// A small catalog with media that exercise every filter clause.
fn fixture_catalog() -> Vec<MediumRecord> {
    vec![
        medium(
            1,
            "Single-mode fiber",
            MediumType::FiberOptic,
            5_000.0,
            10_000.0,
            vec![Scenario::Wan, Scenario::Metro, Scenario::LongHaul],
        ),
        medium(
            2,
            "Multi-mode fiber",
            MediumType::FiberOptic,
            3_500.0,
            4_000.0,
            vec![Scenario::Wan, Scenario::Campus],
        ),
        // over budget for the fixture profile
        medium(
            3,
            "Buried armored fiber",
            MediumType::FiberOptic,
            15_000.0,
            10_000.0,
            vec![Scenario::Wan],
        ),
        // not rated for WAN
        medium(
            4,
            "Cat6a twisted pair",
            MediumType::Copper,
            800.0,
            10_000.0,
            vec![Scenario::Lan, Scenario::Datacenter],
        ),
        // too little bandwidth
        medium(
            5,
            "Legacy coax",
            MediumType::Coaxial,
            1_200.0,
            300.0,
            vec![Scenario::Wan],
        ),
    ]
}

fn wan_profile() -> RequirementProfile {
    RequirementProfile {
        distance: 50.0,
        required_bandwidth: 1_000.0,
        budget_limit: 10_000.0,
        scenario: Scenario::Wan,
        priorities: vec![Priority::Cost, Priority::Performance],
        reliability_minimum: None,
        latency_maximum: None,
        environmental_minimum: None,
        installation_difficulty_maximum: None,
    }
}

fn run_pipeline(
    catalog: Vec<MediumRecord>,
    profile: &RequirementProfile,
) -> Vec<RecommendationResult> {
    let pipeline = FilterPipeline::new()
        .add_filter(CapabilityFilter)
        .add_filter(ConstraintFilter);
    let filtered = pipeline.apply(catalog, profile).unwrap();
    let weights = priority_weights(&profile.priorities);
    let scored = score_candidates(filtered, profile, &weights);
    let ranked = rank_and_truncate(scored, DEFAULT_RECOMMENDATION_LIMIT);
    ranked
        .into_iter()
        .map(|s| RecommendationResult::from_scored(s, profile))
        .collect()
}

#[test]
fn pipeline_keeps_only_capable_wan_media() {
    let results = run_pipeline(fixture_catalog(), &wan_profile());

    let ids: Vec<u32> = results.iter().map(|r| r.media.id).collect();
    assert!(ids.contains(&1));
    assert!(ids.contains(&2));
    // over budget, wrong scenario, and underpowered media are gone
    assert!(!ids.contains(&3));
    assert!(!ids.contains(&4));
    assert!(!ids.contains(&5));
}

#[test]
fn results_are_ordered_best_first() {
    let results = run_pipeline(fixture_catalog(), &wan_profile());
    assert!(!results.is_empty());
    for pair in results.windows(2) {
        assert!(pair[0].match_score >= pair[1].match_score);
    }
}

#[test]
fn result_count_never_exceeds_the_limit() {
    // 12 equally-capable media; only 5 may come back
    let catalog: Vec<MediumRecord> = (1..=12)
        .map(|id| {
            medium(
                id,
                &format!("Fiber variant {id}"),
                MediumType::FiberOptic,
                4_000.0,
                8_000.0,
                vec![Scenario::Wan],
            )
        })
        .collect();

    let results = run_pipeline(catalog, &wan_profile());
    assert_eq!(results.len(), DEFAULT_RECOMMENDATION_LIMIT);

    // identical scores: ties resolve by ascending id
    let ids: Vec<u32> = results.iter().map(|r| r.media.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn over_budget_media_are_cut_before_scoring_and_would_score_zero_anyway() {
    let profile = wan_profile();
    let catalog = fixture_catalog();
    let over_budget = catalog.iter().find(|r| r.id == 3).unwrap().clone();

    // the filter removes it
    let results = run_pipeline(catalog, &profile);
    assert!(results.iter().all(|r| r.media.id != 3));

    // and even if it slipped through, its cost sub-score is zero
    assert_eq!(sub_scores(&over_budget, &profile).cost, 0.0);
}

#[test]
fn soft_constraints_narrow_the_result() {
    let mut profile = wan_profile();
    profile.reliability_minimum = Some(9.0);

    let mut catalog = fixture_catalog();
    catalog[0].reliability = 9.5; // only single-mode fiber clears the floor

    let results = run_pipeline(catalog, &profile);
    let ids: Vec<u32> = results.iter().map(|r| r.media.id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn fully_filtered_catalog_yields_the_fallback_summary() {
    let mut profile = wan_profile();
    profile.required_bandwidth = 1_000_000.0;

    let results = run_pipeline(fixture_catalog(), &profile);
    assert!(results.is_empty());
    assert_eq!(explain::summary(&profile, &results), explain::NO_MATCH_SUMMARY);
}

#[test]
fn empty_catalog_yields_the_fallback_summary() {
    let profile = wan_profile();
    let results = run_pipeline(Vec::new(), &profile);
    assert!(results.is_empty());
    assert_eq!(explain::summary(&profile, &results), explain::NO_MATCH_SUMMARY);
}

#[test]
fn summary_names_the_top_candidate() {
    let profile = wan_profile();
    let results = run_pipeline(fixture_catalog(), &profile);
    let summary = explain::summary(&profile, &results);

    assert!(summary.contains(&results[0].media.name));
    assert!(summary.contains(&format!("match score of {}", results[0].match_score)));
}

#[test]
fn costs_are_reported_for_the_requested_distance() {
    let profile = wan_profile();
    let results = run_pipeline(fixture_catalog(), &profile);

    for result in &results {
        assert_eq!(result.total_cost, result.media.cost_per_km * profile.distance);
        assert_eq!(
            result.annual_maintenance_cost,
            result.media.maintenance_cost_per_km_year * profile.distance
        );
    }
}
