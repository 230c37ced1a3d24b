use crate::models::Tour;
use crate::utils::Float;
use serde::{Deserialize, Serialize};

/// Aggregated metrics of a plan.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanStatistics {
    /// Amount of tours.
    pub tours: usize,
    /// Amount of planned stops.
    pub stops: usize,
    /// Amount of orders which could not be planned.
    pub unplanned: usize,
    /// Total planned weight.
    pub total_weight: Float,
    /// Total estimated road distance.
    pub total_distance_km: Float,
    /// Average tour utilization in percent.
    pub average_utilization: Float,
}

impl PlanStatistics {
    /// Creates statistics for given tours.
    pub fn new(tours: &[Tour], unplanned: usize) -> Self {
        let average_utilization = if tours.is_empty() {
            0.
        } else {
            tours.iter().map(|tour| tour.utilization as Float).sum::<Float>() / tours.len() as Float
        };

        Self {
            tours: tours.len(),
            stops: tours.iter().map(|tour| tour.stops.len()).sum(),
            unplanned,
            total_weight: tours.iter().map(|tour| tour.total_weight).sum(),
            total_distance_km: tours.iter().map(|tour| tour.estimated_distance_km).sum(),
            average_utilization,
        }
    }
}
