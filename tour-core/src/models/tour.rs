#[cfg(test)]
#[path = "../../tests/unit/models/tour_test.rs"]
mod tour_test;

use crate::models::Order;
use crate::utils::Float;
use serde::{Deserialize, Serialize};

/// Represents one vehicle's planned one-way route from the depot.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    /// Tour id, unique within a plan.
    pub id: String,
    /// Human readable name, e.g. "2. Hannover".
    pub name: String,
    /// Stops in visiting order.
    pub stops: Vec<Order>,
    /// Sum of stop weights.
    pub total_weight: Float,
    /// Capacity the tour was planned against.
    pub max_weight: Float,
    /// Total weight to capacity ratio in percent, rounded.
    pub utilization: u32,
    /// Route distance inflated by the road factor.
    pub estimated_distance_km: Float,
    /// Compass direction from the depot to the last stop.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    /// Stop cities in visiting order.
    #[serde(default)]
    pub description: String,
}

impl Tour {
    /// Returns the sum of weights of given stops.
    pub fn weight_of(stops: &[Order]) -> Float {
        stops.iter().map(|order| order.weight).sum()
    }

    /// Returns utilization in percent for given weight and capacity.
    pub fn utilization_of(weight: Float, capacity: Float) -> u32 {
        if capacity > 0. { (weight / capacity * 100.).round().max(0.) as u32 } else { 0 }
    }

    /// Returns the description of given stops.
    pub fn describe(stops: &[Order]) -> String {
        stops.iter().map(|order| order.city.as_str()).collect::<Vec<_>>().join(" -> ")
    }

    /// Returns true if tour has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}
