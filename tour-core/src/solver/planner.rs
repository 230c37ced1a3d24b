#[cfg(test)]
#[path = "../../tests/unit/solver/planner_test.rs"]
mod planner_test;

use crate::construction::*;
use crate::models::{Order, PlannerConfig, Tour};
use crate::solver::PlanStatistics;
use crate::utils::{Environment, Float, GenericResult, Timer};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A result of one planning run.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Planned tours.
    pub tours: Vec<Tour>,
    /// Orders which are heavier than the capacity and cannot be planned.
    pub unplanned: Vec<Order>,
    /// Plan statistics.
    pub statistics: PlanStatistics,
}

/// Returns orders which cannot be planned as each of them alone exceeds the capacity.
pub fn find_unplannable(orders: &[Order], capacity: Float) -> Vec<Order> {
    orders.iter().filter(|order| !is_plannable(order, capacity)).cloned().collect()
}

fn is_plannable(order: &Order, capacity: Float) -> bool {
    order.weight <= capacity
}

/// Assigns orders to tours which start at a single depot.
///
/// Orders are grouped by region, each region is split into capacity feasible buckets
/// preferring orders closer to the depot, and every bucket becomes a tour with a nearest
/// neighbor route improved by 2-opt. The planner keeps no state between runs.
pub struct Planner {
    config: PlannerConfig,
    classifier: Classifier,
    route_builder: RouteBuilder,
    environment: Arc<Environment>,
}

impl Planner {
    /// Creates a new instance of `Planner`.
    pub fn new(config: PlannerConfig, environment: Arc<Environment>) -> GenericResult<Self> {
        config.validate()?;

        Ok(Self {
            classifier: Classifier::from_config(&config),
            route_builder: RouteBuilder::from_config(&config),
            config,
            environment,
        })
    }

    /// Returns the classifier used to resolve postcodes.
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Plans tours for the orders. Orders heavier than capacity are silently excluded.
    pub fn plan(&self, orders: &[Order], capacity: Float) -> GenericResult<Vec<Tour>> {
        validate_capacity(capacity)?;

        let timer = Timer::start();
        let plannable = orders.iter().filter(|order| is_plannable(order, capacity)).cloned().collect::<Vec<_>>();

        self.environment.log(
            format!("planning {} of {} orders with capacity {capacity}", plannable.len(), orders.len()).as_str(),
        );

        let deliveries = self.classifier.classify_all(&plannable);
        let mut tours = self.plan_by_region(deliveries.clone(), capacity);

        if tours.is_empty() && !deliveries.is_empty() {
            self.environment.log("regional clustering produced no tours, falling back to weight packing");
            tours = self.plan_by_weight(&deliveries, capacity);
        }

        self.environment.log(format!("planned {} tours in {}ms", tours.len(), timer.elapsed_millis()).as_str());

        Ok(tours)
    }

    /// Plans tours and reports excluded orders together with plan statistics.
    pub fn plan_with_report(&self, orders: &[Order], capacity: Float) -> GenericResult<Plan> {
        let tours = self.plan(orders, capacity)?;
        let unplanned = find_unplannable(orders, capacity);
        let statistics = PlanStatistics::new(&tours, unplanned.len());

        Ok(Plan { tours, unplanned, statistics })
    }

    fn plan_by_region(&self, deliveries: Vec<Delivery>, capacity: Float) -> Vec<Tour> {
        let depot = self.config.depot;
        let mut tours = Vec::new();

        for (region, group) in group_by_region(deliveries, self.config.unknown_region.as_str()) {
            let before = tours.len();
            let mut remaining = group;

            while !remaining.is_empty() {
                let (bucket, rest) = take_bucket(&remaining, &depot, capacity);
                if bucket.is_empty() {
                    break;
                }

                tours.push(self.route_builder.build_tour(tours.len() + 1, &bucket, capacity));
                remaining = rest;
            }

            self.environment.log(format!("region '{region}': {} tours", tours.len() - before).as_str());
        }

        tours
    }

    /// Packs all deliveries by descending weight ignoring regions.
    pub(crate) fn plan_by_weight(&self, deliveries: &[Delivery], capacity: Float) -> Vec<Tour> {
        split_by_weight(deliveries, capacity)
            .iter()
            .enumerate()
            .map(|(idx, bucket)| self.route_builder.build_tour(idx + 1, bucket, capacity))
            .collect()
    }
}

fn validate_capacity(capacity: Float) -> GenericResult<()> {
    if capacity.is_finite() && capacity > 0. {
        Ok(())
    } else {
        Err(format!("capacity must be a positive finite number, got {capacity}").into())
    }
}
