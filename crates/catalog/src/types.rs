//! Core domain types for the transmission-medium catalog.
//!
//! This module defines the record shape shared by the catalog store, the
//! recommendation engine, and the wire contract. Field names serialize in
//! camelCase so JSON output matches the existing client contract.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// Unique identifier for a catalog record.
pub type MediumId = u32;

// =============================================================================
// Enumerations
// =============================================================================
// Closed value sets. Keeping these as enums (rather than open strings) lets
// filtering and scoring match exhaustively, so a new variant fails to compile
// until every consumer handles it.

/// Physical transmission technology of a medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediumType {
    FiberOptic,
    Copper,
    Wireless,
    Satellite,
    Coaxial,
}

impl MediumType {
    /// All known medium types, in display order.
    pub const ALL: [MediumType; 5] = [
        MediumType::FiberOptic,
        MediumType::Copper,
        MediumType::Wireless,
        MediumType::Satellite,
        MediumType::Coaxial,
    ];

    /// The wire tag for this type (`fiber_optic`, `copper`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            MediumType::FiberOptic => "fiber_optic",
            MediumType::Copper => "copper",
            MediumType::Wireless => "wireless",
            MediumType::Satellite => "satellite",
            MediumType::Coaxial => "coaxial",
        }
    }
}

impl fmt::Display for MediumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediumType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fiber_optic" => Ok(MediumType::FiberOptic),
            "copper" => Ok(MediumType::Copper),
            "wireless" => Ok(MediumType::Wireless),
            "satellite" => Ok(MediumType::Satellite),
            "coaxial" => Ok(MediumType::Coaxial),
            _ => Err(CatalogError::InvalidValue {
                field: "type".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Deployment scenario a medium is suited for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    Lan,
    Wan,
    Datacenter,
    Campus,
    Metro,
    LongHaul,
}

impl Scenario {
    /// The wire tag for this scenario (`lan`, `wan`, `long_haul`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Lan => "lan",
            Scenario::Wan => "wan",
            Scenario::Datacenter => "datacenter",
            Scenario::Campus => "campus",
            Scenario::Metro => "metro",
            Scenario::LongHaul => "long_haul",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lan" => Ok(Scenario::Lan),
            "wan" => Ok(Scenario::Wan),
            "datacenter" => Ok(Scenario::Datacenter),
            "campus" => Ok(Scenario::Campus),
            "metro" => Ok(Scenario::Metro),
            "long_haul" => Ok(Scenario::LongHaul),
            _ => Err(CatalogError::InvalidValue {
                field: "scenario".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// Catalog record
// =============================================================================

/// One catalog entry describing a transmission technology's physical and
/// economic characteristics.
///
/// Invariants (enforced by [`MediumRecord::validate`] at load time):
/// - rating fields (`reliability`, `installation_difficulty`,
///   `environmental_adaptability`) lie in [1, 10]
/// - numeric magnitudes are never negative
/// - `applicable_scenarios` is non-empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediumRecord {
    pub id: MediumId,
    pub name: String,
    #[serde(rename = "type")]
    pub medium_type: MediumType,
    /// Maximum usable link length (km).
    pub max_distance: f64,
    /// Maximum sustained bandwidth (Mbps).
    pub max_bandwidth: f64,
    /// Deployment cost per km.
    pub cost_per_km: f64,
    /// Signal attenuation (dB/km).
    pub attenuation: f64,
    /// Propagation latency (ms/km).
    pub latency_per_km: f64,
    /// Reliability rating, 1-10.
    pub reliability: f64,
    /// Installation difficulty rating, 1-10 (higher is harder).
    pub installation_difficulty: f64,
    /// Yearly upkeep cost per km.
    pub maintenance_cost_per_km_year: f64,
    /// Environmental adaptability rating, 1-10.
    pub environmental_adaptability: f64,
    pub applicable_scenarios: Vec<Scenario>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifications: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advantages: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disadvantages: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl MediumRecord {
    /// Whether this medium is rated for the given deployment scenario.
    pub fn supports_scenario(&self, scenario: Scenario) -> bool {
        self.applicable_scenarios.contains(&scenario)
    }

    /// Check the record invariants.
    ///
    /// Called once per record when the catalog is loaded; the engine relies
    /// on these holding and never re-checks them.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let fail = |reason: String| {
            Err(CatalogError::Validation {
                id: self.id,
                reason,
            })
        };

        if self.name.trim().is_empty() {
            return fail("name must not be empty".to_string());
        }

        for (field, value) in [
            ("maxDistance", self.max_distance),
            ("maxBandwidth", self.max_bandwidth),
            ("costPerKm", self.cost_per_km),
            ("attenuation", self.attenuation),
            ("latencyPerKm", self.latency_per_km),
            ("maintenanceCostPerKmYear", self.maintenance_cost_per_km_year),
        ] {
            if !value.is_finite() || value < 0.0 {
                return fail(format!("{field} must be a non-negative number, got {value}"));
            }
        }

        for (field, value) in [
            ("reliability", self.reliability),
            ("installationDifficulty", self.installation_difficulty),
            ("environmentalAdaptability", self.environmental_adaptability),
        ] {
            if !value.is_finite() || !(1.0..=10.0).contains(&value) {
                return fail(format!("{field} must lie in [1, 10], got {value}"));
            }
        }

        if self.applicable_scenarios.is_empty() {
            return fail("applicableScenarios must not be empty".to_string());
        }

        Ok(())
    }
}

// =============================================================================
// Aggregate statistics
// =============================================================================

/// Summary figures over the catalog, for reporting and the `stats` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total: usize,
    pub active: usize,
    /// Active record count per medium type, in [`MediumType::ALL`] order.
    /// Types with no active records are omitted.
    pub type_distribution: Vec<(MediumType, usize)>,
    /// Mean cost per km over active records; 0 when the catalog is empty.
    pub average_cost_per_km: f64,
}
