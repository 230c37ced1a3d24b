//! Builds an ordered one-way route for a bucket and turns it into a tour.

#[cfg(test)]
#[path = "../../tests/unit/construction/routing_test.rs"]
mod routing_test;

use crate::algorithms::geometry::{Coordinate, compass_point, distance_km};
use crate::construction::Delivery;
use crate::models::{PlannerConfig, Tour};
use crate::utils::Float;

/// Constructs routes with nearest neighbor heuristic and improves them with 2-opt.
/// The depot is a fixed start of every route and never a stop, there is no return leg.
#[derive(Clone, Debug)]
pub struct RouteBuilder {
    depot: Coordinate,
    road_factor: Float,
    improvement_threshold: Float,
}

impl RouteBuilder {
    /// Creates a new instance of `RouteBuilder`.
    pub fn new(depot: Coordinate, road_factor: Float, improvement_threshold: Float) -> Self {
        Self { depot, road_factor, improvement_threshold }
    }

    /// Creates a new instance of `RouteBuilder` from the planner configuration.
    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(config.depot, config.road_factor, config.improvement_threshold)
    }

    /// Orders deliveries by always travelling to the closest unvisited one, starting from the depot.
    /// Ties are resolved in favor of the delivery which comes first in the input.
    pub fn nearest_neighbor(&self, deliveries: &[Delivery]) -> Vec<Delivery> {
        let mut visited = vec![false; deliveries.len()];
        let mut route = Vec::with_capacity(deliveries.len());
        let mut current = self.depot;

        while route.len() < deliveries.len() {
            let next = deliveries
                .iter()
                .enumerate()
                .filter(|(idx, _)| !visited[*idx])
                .map(|(idx, delivery)| (idx, distance_km(&current, &delivery.location)))
                .fold(None, |best: Option<(usize, Float)>, (idx, distance)| match best {
                    Some((_, best_distance)) if best_distance <= distance => best,
                    _ => Some((idx, distance)),
                });

            let Some((idx, _)) = next else { break };

            visited[idx] = true;
            current = deliveries[idx].location;
            route.push(deliveries[idx].clone());
        }

        route
    }

    /// Improves the route with 2-opt moves until no move shortens it by more than the threshold.
    ///
    /// A move reverses the segment `route[i..=k]`: edges `(prev, route[i])` and `(route[k], next)`
    /// are replaced by `(prev, route[k])` and `(route[i], next)`, where `prev` is the depot for the
    /// first stop and `next` does not exist for the last one.
    pub fn improve(&self, route: &mut [Delivery]) {
        let size = route.len();
        if size < 2 {
            return;
        }

        let mut has_improvement = true;
        while has_improvement {
            has_improvement = false;

            for i in 0..(size - 1) {
                for k in (i + 1)..size {
                    let prev = if i == 0 { self.depot } else { route[i - 1].location };
                    let first = route[i].location;
                    let last = route[k].location;
                    let next = route.get(k + 1).map(|delivery| delivery.location);

                    let old_distance = distance_km(&prev, &first) + next.map_or(0., |next| distance_km(&last, &next));
                    let new_distance = distance_km(&prev, &last) + next.map_or(0., |next| distance_km(&first, &next));

                    if old_distance - new_distance > self.improvement_threshold {
                        route[i..=k].reverse();
                        has_improvement = true;
                    }
                }
            }
        }
    }

    /// Returns straight-line length of the route starting at the depot.
    pub fn path_length(&self, route: &[Delivery]) -> Float {
        route
            .iter()
            .fold((self.depot, 0.), |(current, total), delivery| {
                (delivery.location, total + distance_km(&current, &delivery.location))
            })
            .1
    }

    /// Returns route length inflated by the road factor.
    pub fn road_distance(&self, route: &[Delivery]) -> Float {
        self.path_length(route) * self.road_factor
    }

    /// Builds a route for the bucket and wraps it into a tour named after the running tour counter.
    pub fn build_tour(&self, tour_number: usize, bucket: &[Delivery], capacity: Float) -> Tour {
        let mut route = self.nearest_neighbor(bucket);
        self.improve(route.as_mut_slice());

        let estimated_distance_km = self.road_distance(&route);
        let heading = route.last().map(|delivery| compass_point(self.depot.bearing_degrees(&delivery.location)));
        let name = route
            .last()
            .map(|delivery| format!("{tour_number}. {}", delivery.order.city))
            .unwrap_or_else(|| format!("{tour_number}."));

        let stops = route.into_iter().map(|delivery| delivery.order).collect::<Vec<_>>();
        let total_weight = Tour::weight_of(&stops);

        Tour {
            id: format!("tour_{tour_number}"),
            name,
            description: Tour::describe(&stops),
            utilization: Tour::utilization_of(total_weight, capacity),
            stops,
            total_weight,
            max_weight: capacity,
            estimated_distance_km,
            heading: heading.map(|heading| heading.to_string()),
        }
    }
}
