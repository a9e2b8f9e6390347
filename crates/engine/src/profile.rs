//! The caller's link-design requirements for one recommendation request.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use catalog::Scenario;

use crate::error::EngineError;

/// A criterion the caller wants weighted more heavily.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Cost,
    Performance,
    Reliability,
    EaseOfInstallation,
    Maintenance,
}

impl Priority {
    /// All five criteria, in scoring order.
    pub const ALL: [Priority; 5] = [
        Priority::Cost,
        Priority::Performance,
        Priority::Reliability,
        Priority::EaseOfInstallation,
        Priority::Maintenance,
    ];

    /// The wire tag for this priority (`cost`, `ease_of_installation`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Cost => "cost",
            Priority::Performance => "performance",
            Priority::Reliability => "reliability",
            Priority::EaseOfInstallation => "ease_of_installation",
            Priority::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cost" => Ok(Priority::Cost),
            "performance" => Ok(Priority::Performance),
            "reliability" => Ok(Priority::Reliability),
            "ease_of_installation" => Ok(Priority::EaseOfInstallation),
            "maintenance" => Ok(Priority::Maintenance),
            _ => Err(EngineError::UnknownPriority(s.to_string())),
        }
    }
}

/// Requirements and preferences for one link-design request.
///
/// The profile lives for the duration of a single recommendation call and is
/// echoed back verbatim in the response. Optional fields are omitted from
/// JSON when absent so the echo round-trips exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementProfile {
    /// Link length (km). Must be positive.
    pub distance: f64,
    /// Required sustained bandwidth (Mbps).
    pub required_bandwidth: f64,
    /// Budget ceiling per km. Must be positive.
    pub budget_limit: f64,
    /// Deployment scenario of the link.
    pub scenario: Scenario,
    /// Criteria to weight more heavily. Duplicates are ignored.
    pub priorities: Vec<Priority>,
    /// Minimum acceptable reliability rating (1-10).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reliability_minimum: Option<f64>,
    /// Maximum acceptable end-to-end latency (ms).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_maximum: Option<f64>,
    /// Minimum acceptable environmental adaptability rating (1-10).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environmental_minimum: Option<f64>,
    /// Maximum acceptable installation difficulty rating (1-10).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installation_difficulty_maximum: Option<f64>,
}

impl RequirementProfile {
    /// Guard the fields that scoring divides by.
    ///
    /// The API layer validates types and ranges; this re-checks only what
    /// would turn into NaN or infinity inside the pipeline.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(self.distance.is_finite() && self.distance > 0.0) {
            return Err(EngineError::InvalidInput {
                field: "distance",
                value: self.distance,
            });
        }
        if !(self.budget_limit.is_finite() && self.budget_limit > 0.0) {
            return Err(EngineError::InvalidInput {
                field: "budgetLimit",
                value: self.budget_limit,
            });
        }
        Ok(())
    }
}
