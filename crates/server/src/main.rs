//! Simple test harness for the recommendation orchestrator.
//!
//! This binary runs the end-to-end pipeline once against the seed catalog
//! with a representative WAN profile.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use catalog::{InMemoryCatalog, Scenario};
use engine::{Priority, RequirementProfile};
use server::RecommendationOrchestrator;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info,server=debug,engine=debug,catalog=debug")
        .init();

    info!("Starting recommendation test harness");

    info!("Loading catalog...");
    let catalog = Arc::new(InMemoryCatalog::load_from_file(Path::new(
        "data/catalog.json",
    ))?);
    info!("Catalog loaded successfully");

    let orchestrator = RecommendationOrchestrator::new(catalog);

    let profile = RequirementProfile {
        distance: 50.0,
        required_bandwidth: 1_000.0,
        budget_limit: 10_000.0,
        scenario: Scenario::Wan,
        priorities: vec![Priority::Cost, Priority::Performance],
        reliability_minimum: None,
        latency_maximum: None,
        environmental_minimum: None,
        installation_difficulty_maximum: None,
    };

    info!(
        "Requesting recommendations for a {} km {} link at {} Mbps",
        profile.distance, profile.scenario, profile.required_bandwidth
    );
    let response = orchestrator.recommend(profile).await?;

    info!("Received {} recommendation(s):", response.recommendations.len());
    for (i, rec) in response.recommendations.iter().enumerate() {
        info!(
            "{}. {} [{}] - score {} - total cost {:.0}",
            i + 1,
            rec.media.name,
            rec.media.medium_type,
            rec.match_score,
            rec.total_cost
        );
        info!("   {}", rec.reason);
    }
    info!("Summary: {}", response.summary);

    Ok(())
}
