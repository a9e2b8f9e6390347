//! # Recommendation Orchestrator
//!
//! This module coordinates one recommendation request:
//! 1. Guard the requirement profile
//! 2. Fetch a candidate snapshot from the catalog store (the only I/O)
//! 3. Apply the capability and constraint filters
//! 4. Derive the weight vector from the priorities
//! 5. Score and rank the candidates
//! 6. Attach justification text and the summary
//!
//! Everything after the fetch is pure; the store call is the single await
//! point, so cancellation and timeout policy stay with the caller.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use catalog::{CapabilityQuery, CatalogStore, MediumRecord};
use engine::filters::{CapabilityFilter, ConstraintFilter};
use engine::weights::priority_weights;
use engine::{
    DEFAULT_RECOMMENDATION_LIMIT, FilterPipeline, RecommendationResponse, RecommendationResult,
    RequirementProfile, WeightFn, explain, rank_and_truncate, score_candidates,
};

/// Composes the catalog store and the pure pipeline into one
/// request/response cycle.
#[derive(Clone)]
pub struct RecommendationOrchestrator {
    store: Arc<dyn CatalogStore>,
    filter_pipeline: Arc<FilterPipeline>,
    weight_fn: WeightFn,
    limit: usize,
}

impl RecommendationOrchestrator {
    /// Create an orchestrator over the given catalog store.
    ///
    /// Defaults: capability + constraint filters, the shipped (unnormalized)
    /// weight scheme, and a result limit of [`DEFAULT_RECOMMENDATION_LIMIT`].
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        let filter_pipeline = Arc::new(
            FilterPipeline::new()
                .add_filter(CapabilityFilter)
                .add_filter(ConstraintFilter),
        );
        Self {
            store,
            filter_pipeline,
            weight_fn: priority_weights,
            limit: DEFAULT_RECOMMENDATION_LIMIT,
        }
    }

    /// Override how many recommendations a response carries.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Substitute the weight scheme (e.g.
    /// [`engine::normalized_priority_weights`]) without touching the rest of
    /// the pipeline.
    pub fn with_weight_fn(mut self, weight_fn: WeightFn) -> Self {
        self.weight_fn = weight_fn;
        self
    }

    /// Main entry point: evaluate one requirement profile.
    ///
    /// # Returns
    /// The full response: ranked recommendations (best first, at most the
    /// configured limit), a summary sentence, and the echoed profile. An
    /// empty recommendation list is a normal outcome with the fallback
    /// summary, never an error.
    pub async fn recommend(&self, profile: RequirementProfile) -> Result<RecommendationResponse> {
        let start_time = Instant::now();

        profile.validate()?;

        let candidates = self.fetch_candidates(&profile).await?;
        info!(
            "fetched {} candidate media for scenario {}",
            candidates.len(),
            profile.scenario
        );

        let filtered = self
            .filter_pipeline
            .apply(candidates, &profile)
            .context("Failed to apply filters")?;
        info!("applied filters, {} candidates remain", filtered.len());

        let weights = (self.weight_fn)(&profile.priorities);
        let scored = score_candidates(filtered, &profile, &weights);
        let ranked = rank_and_truncate(scored, self.limit);

        let recommendations: Vec<RecommendationResult> = ranked
            .into_iter()
            .map(|scored| RecommendationResult::from_scored(scored, &profile))
            .collect();
        let summary = explain::summary(&profile, &recommendations);

        info!(
            "selected {} recommendation(s) in {:.2?}",
            recommendations.len(),
            start_time.elapsed()
        );

        Ok(RecommendationResponse {
            recommendations,
            summary,
            request_params: profile,
        })
    }

    /// Fetch the candidate snapshot from the catalog store.
    ///
    /// The store answers a coarse superset query; exact scenario and
    /// constraint filtering happens in the pipeline. Store implementations
    /// are synchronous, so the call runs on the blocking pool.
    async fn fetch_candidates(&self, profile: &RequirementProfile) -> Result<Vec<MediumRecord>> {
        let store = self.store.clone();
        let query = CapabilityQuery {
            min_bandwidth: profile.required_bandwidth,
            min_distance: profile.distance,
            max_cost_per_km: profile.budget_limit,
        };
        let records = tokio::task::spawn_blocking(move || store.find_by_capabilities(&query))
            .await
            .context("Catalog query task panicked")??;
        Ok(records)
    }
}
