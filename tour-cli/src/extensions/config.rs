//! Planner configuration read from a user supplied file.

#[cfg(test)]
#[path = "../../tests/unit/extensions/config_test.rs"]
mod config_test;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::{BufReader, Read};
use tour_core::prelude::*;

/// A partial planner configuration. Every specified field overrides the built-in default.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverride {
    /// Start point of every tour.
    pub depot: Option<Coordinate>,
    /// Road distance inflation factor.
    pub road_factor: Option<Float>,
    /// Minimal 2-opt gain in kilometers.
    pub improvement_threshold: Option<Float>,
    /// Coordinate used for unknown postcode prefixes.
    pub fallback_coordinate: Option<Coordinate>,
    /// Label of the region group for unmatched postcodes.
    pub unknown_region: Option<String>,
    /// Prefix centroids, merged over the default table.
    pub coordinates: Option<BTreeMap<String, Coordinate>>,
    /// Regions, replace the default list.
    pub regions: Option<Vec<Region>>,
}

impl ConfigOverride {
    /// Applies the override to the given configuration.
    pub fn apply(self, mut config: PlannerConfig) -> PlannerConfig {
        if let Some(depot) = self.depot {
            config.depot = depot;
        }

        if let Some(road_factor) = self.road_factor {
            config.road_factor = road_factor;
        }

        if let Some(improvement_threshold) = self.improvement_threshold {
            config.improvement_threshold = improvement_threshold;
        }

        if let Some(fallback_coordinate) = self.fallback_coordinate {
            config.fallback_coordinate = fallback_coordinate;
        }

        if let Some(unknown_region) = self.unknown_region {
            config.unknown_region = unknown_region;
        }

        if let Some(coordinates) = self.coordinates {
            config.coordinates.extend(coordinates);
        }

        if let Some(regions) = self.regions {
            config.regions = regions;
        }

        config
    }
}

/// Reads config override from the reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<ConfigOverride> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates a validated planner configuration: defaults with the optional override applied.
pub fn create_config<R: Read>(reader: Option<BufReader<R>>) -> GenericResult<PlannerConfig> {
    let config = match reader {
        Some(reader) => read_config(reader)?.apply(PlannerConfig::default()),
        None => PlannerConfig::default(),
    };

    config.validate()?;

    Ok(config)
}
