#[cfg(test)]
#[path = "../../tests/unit/construction/classification_test.rs"]
mod classification_test;

use crate::algorithms::geometry::Coordinate;
use crate::models::{CoordinateTable, Order, PlannerConfig, RegionTable};
use crate::utils::Float;
use rustc_hash::FxHasher;
use std::collections::HashMap;
use std::hash::BuildHasherDefault;

/// An order enriched with data derived for the duration of one planning run.
#[derive(Clone, Debug, PartialEq)]
pub struct Delivery {
    /// Original order.
    pub order: Order,
    /// Resolved destination coordinate.
    pub location: Coordinate,
    /// Resolved region name, `None` if postcode matches no region.
    pub region: Option<String>,
}

impl Delivery {
    /// Returns order weight.
    pub fn weight(&self) -> Float {
        self.order.weight
    }
}

/// Resolves coordinates and regions of orders.
pub struct Classifier {
    coordinates: CoordinateTable,
    regions: RegionTable,
}

impl Classifier {
    /// Creates a new instance of `Classifier`.
    pub fn new(coordinates: CoordinateTable, regions: RegionTable) -> Self {
        Self { coordinates, regions }
    }

    /// Creates a new instance of `Classifier` using tables from the configuration.
    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(config.create_coordinate_table(), config.create_region_table())
    }

    /// Returns approximate coordinate of the postcode, never fails.
    pub fn coordinate_for_postcode(&self, postcode: &str) -> Coordinate {
        self.coordinates.coordinate_for_postcode(postcode)
    }

    /// Returns region name of the postcode if it is known.
    pub fn region_for_postcode(&self, postcode: &str) -> Option<&str> {
        self.regions.region_for_postcode(postcode)
    }

    /// Enriches a single order.
    pub fn classify(&self, order: &Order) -> Delivery {
        Delivery {
            order: order.clone(),
            location: self.coordinate_for_postcode(order.postcode.as_str()),
            region: self.region_for_postcode(order.postcode.as_str()).map(|region| region.to_string()),
        }
    }

    /// Enriches all orders keeping their order.
    pub fn classify_all(&self, orders: &[Order]) -> Vec<Delivery> {
        orders.iter().map(|order| self.classify(order)).collect()
    }
}

/// Groups deliveries by region label. Deliveries without region go to the `unknown_region`
/// group. Groups follow the first appearance of their label, members keep input order.
pub fn group_by_region(deliveries: Vec<Delivery>, unknown_region: &str) -> Vec<(String, Vec<Delivery>)> {
    let mut index: HashMap<String, usize, BuildHasherDefault<FxHasher>> = HashMap::default();
    let mut groups: Vec<(String, Vec<Delivery>)> = Vec::new();

    deliveries.into_iter().for_each(|delivery| {
        let label = delivery.region.clone().unwrap_or_else(|| unknown_region.to_string());

        let group_idx = *index.entry(label.clone()).or_insert_with(|| {
            groups.push((label, Vec::new()));
            groups.len() - 1
        });

        groups[group_idx].1.push(delivery);
    });

    groups
}
