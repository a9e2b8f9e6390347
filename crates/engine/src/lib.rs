//! # Engine Crate
//!
//! The recommendation engine: a deterministic, side-effect-free pipeline
//! that turns a requirement profile and a catalog snapshot into ranked,
//! explained medium recommendations.
//!
//! ## Pipeline
//!
//! 1. **filters**: hard capability predicate, then optional soft constraints
//! 2. **weights**: priority set to per-criterion weight vector
//! 3. **score**: five sub-scores per candidate, weighted combination
//! 4. **rank**: best-first ordering, truncated to the result limit
//! 5. **explain**: reason, advantages, considerations, and summary text
//!
//! Every stage is a pure function over immutable inputs; requests can be
//! evaluated fully in parallel with no coordination. The orchestrator in the
//! server crate composes these stages after a single catalog fetch.
//!
//! ## Example Usage
//!
//! ```ignore
//! use engine::filters::{CapabilityFilter, ConstraintFilter};
//! use engine::{FilterPipeline, priority_weights, rank_and_truncate, score_candidates};
//!
//! let pipeline = FilterPipeline::new()
//!     .add_filter(CapabilityFilter)
//!     .add_filter(ConstraintFilter);
//!
//! let candidates = pipeline.apply(snapshot, &profile)?;
//! let weights = priority_weights(&profile.priorities);
//! let scored = score_candidates(candidates, &profile, &weights);
//! let ranked = rank_and_truncate(scored, engine::DEFAULT_RECOMMENDATION_LIMIT);
//! ```

// Public modules
pub mod error;
pub mod explain;
pub mod filter_pipeline;
pub mod filters;
pub mod profile;
pub mod rank;
pub mod result;
pub mod score;
pub mod traits;
pub mod weights;

// Re-export commonly used types
pub use error::EngineError;
pub use filter_pipeline::FilterPipeline;
pub use profile::{Priority, RequirementProfile};
pub use rank::{DEFAULT_RECOMMENDATION_LIMIT, rank_and_truncate};
pub use result::{RecommendationResponse, RecommendationResult};
pub use score::{ScoredMedium, SubScores, score_candidates, sub_scores};
pub use traits::Filter;
pub use weights::{CriterionWeights, WeightFn, normalized_priority_weights, priority_weights};
