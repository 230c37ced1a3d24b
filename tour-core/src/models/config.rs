#[cfg(test)]
#[path = "../../tests/unit/models/config_test.rs"]
mod config_test;

use crate::algorithms::geometry::Coordinate;
use crate::models::{CoordinateTable, Region, RegionTable, defaults};
use crate::utils::{Float, GenericError, GenericResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default factor which turns straight-line distance into an approximated road distance.
pub const DEFAULT_ROAD_FACTOR: Float = 1.3;

/// Default minimal gain in kilometers for a 2-opt move to be accepted. It is a tunable parameter
/// which keeps the local search away from floating point noise, not a precision guarantee.
pub const DEFAULT_IMPROVEMENT_THRESHOLD_KM: Float = 0.05;

/// Default label of the group with orders which have no region.
pub const DEFAULT_UNKNOWN_REGION: &str = "unknown";

/// A planner configuration: depot, tunable parameters and reference tables.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerConfig {
    /// Start point of every tour.
    pub depot: Coordinate,
    /// Road distance inflation factor.
    pub road_factor: Float,
    /// Minimal 2-opt gain in kilometers.
    pub improvement_threshold: Float,
    /// Coordinate used for postcodes with an unknown prefix.
    pub fallback_coordinate: Coordinate,
    /// Label of the region group for unmatched postcodes.
    pub unknown_region: String,
    /// Postcode prefix to centroid table.
    pub coordinates: BTreeMap<String, Coordinate>,
    /// Curated regions.
    pub regions: Vec<Region>,
}

impl PlannerConfig {
    /// Checks configuration consistency.
    pub fn validate(&self) -> GenericResult<()> {
        let mut errors: Vec<GenericError> = vec![];

        if !self.depot.is_finite() {
            errors.push("depot coordinate must be finite".into());
        }

        if !self.fallback_coordinate.is_finite() {
            errors.push("fallback coordinate must be finite".into());
        }

        if !self.road_factor.is_finite() || self.road_factor < 1. {
            errors.push(format!("road factor must be a finite number not less than 1, got {}", self.road_factor).into());
        }

        if !self.improvement_threshold.is_finite() || self.improvement_threshold <= 0. {
            errors.push(
                format!("improvement threshold must be a positive number, got {}", self.improvement_threshold).into(),
            );
        }

        if let Some((prefix, _)) = self.coordinates.iter().find(|(_, coord)| !coord.is_finite()) {
            errors.push(format!("coordinate of prefix '{prefix}' must be finite").into());
        }

        if errors.is_empty() { Ok(()) } else { Err(GenericError::join_many(&errors, ", ").into()) }
    }

    /// Creates the coordinate lookup table.
    pub fn create_coordinate_table(&self) -> CoordinateTable {
        CoordinateTable::new(self.coordinates.clone(), self.fallback_coordinate)
    }

    /// Creates the region lookup table.
    pub fn create_region_table(&self) -> RegionTable {
        RegionTable::new(self.regions.clone())
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        defaults::get_default_config().clone()
    }
}
