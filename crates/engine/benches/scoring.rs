//! Benchmarks for the recommendation pipeline.
//!
//! Run with: cargo bench --package engine
//!
//! Uses a synthetic catalog large enough to exercise the parallel scoring
//! path; real catalogs are far smaller.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use catalog::{MediumRecord, MediumType, Scenario};
use engine::filters::{CapabilityFilter, ConstraintFilter};
use engine::{
    FilterPipeline, Priority, RequirementProfile, DEFAULT_RECOMMENDATION_LIMIT,
    priority_weights, rank_and_truncate, score_candidates,
};

fn synthetic_catalog(size: u32) -> Vec<MediumRecord> {
    (1..=size)
        .map(|id| MediumRecord {
            id,
            name: format!("Medium {id}"),
            medium_type: MediumType::ALL[(id % 5) as usize],
            max_distance: 50.0 + (id % 100) as f64,
            max_bandwidth: 1_000.0 + (id % 40) as f64 * 500.0,
            cost_per_km: 500.0 + (id % 20) as f64 * 400.0,
            attenuation: 0.1 + (id % 10) as f64 * 0.3,
            latency_per_km: 0.003 + (id % 7) as f64 * 0.002,
            reliability: 1.0 + (id % 10) as f64,
            installation_difficulty: 1.0 + (id % 10) as f64,
            maintenance_cost_per_km_year: (id % 15) as f64 * 60.0,
            environmental_adaptability: 1.0 + (id % 10) as f64,
            applicable_scenarios: vec![Scenario::Wan, Scenario::Metro],
            specifications: None,
            advantages: None,
            disadvantages: None,
            active: true,
        })
        .collect()
}

fn bench_profile() -> RequirementProfile {
    RequirementProfile {
        distance: 50.0,
        required_bandwidth: 1_000.0,
        budget_limit: 8_000.0,
        scenario: Scenario::Wan,
        priorities: vec![Priority::Cost, Priority::Performance],
        reliability_minimum: None,
        latency_maximum: None,
        environmental_minimum: None,
        installation_difficulty_maximum: None,
    }
}

fn bench_score_candidates(c: &mut Criterion) {
    let catalog = synthetic_catalog(512);
    let profile = bench_profile();
    let weights = priority_weights(&profile.priorities);

    c.bench_function("score_candidates_512", |b| {
        b.iter(|| {
            let scored =
                score_candidates(black_box(catalog.clone()), &profile, black_box(&weights));
            black_box(scored)
        })
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let catalog = synthetic_catalog(512);
    let profile = bench_profile();
    let weights = priority_weights(&profile.priorities);
    let pipeline = FilterPipeline::new()
        .add_filter(CapabilityFilter)
        .add_filter(ConstraintFilter);

    c.bench_function("filter_score_rank_512", |b| {
        b.iter(|| {
            let filtered = pipeline
                .apply(black_box(catalog.clone()), &profile)
                .expect("filtering failed");
            let scored = score_candidates(filtered, &profile, &weights);
            let ranked = rank_and_truncate(scored, DEFAULT_RECOMMENDATION_LIMIT);
            black_box(ranked)
        })
    });
}

criterion_group!(benches, bench_score_candidates, bench_full_pipeline);
criterion_main!(benches);
