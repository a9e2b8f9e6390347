//! Server crate for the transmission-medium recommendation engine.
//!
//! This crate contains the orchestrator that composes the catalog store
//! and the pure recommendation pipeline.

pub mod orchestrator;

pub use orchestrator::RecommendationOrchestrator;
