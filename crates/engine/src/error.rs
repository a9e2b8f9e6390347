//! Error types for the recommendation engine.

use thiserror::Error;

/// Errors raised by the recommendation engine.
///
/// The engine assumes the caller has already validated types and ranges; it
/// only guards the inputs that would otherwise poison the arithmetic with a
/// division by zero. Everything else (empty catalog, empty filter result,
/// all-zero scores) is a normal data outcome, not an error.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A profile field would cause a division by zero downstream.
    #[error("invalid requirement profile: {field} must be positive, got {value}")]
    InvalidInput { field: &'static str, value: f64 },

    /// A priority tag outside the closed value set.
    #[error("unknown priority: {0}")]
    UnknownPriority(String),
}
