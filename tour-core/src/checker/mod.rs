//! Provides the way to check that a plan satisfies planning invariants.

#[cfg(test)]
#[path = "../../tests/unit/checker/checker_test.rs"]
mod checker_test;

use crate::models::{Order, Tour};
use crate::utils::Float;
use rustc_hash::FxHasher;
use std::collections::HashMap;
use std::hash::BuildHasherDefault;

type FxMap<'a, V> = HashMap<&'a str, V, BuildHasherDefault<FxHasher>>;

/// Tolerance used when comparing accumulated weights.
const WEIGHT_TOLERANCE: Float = 1E-6;

/// Checks the plan against the orders and capacity it was built for. The following rules are checked:
/// * tour weight does not exceed capacity and matches the sum of its stops
/// * tour utilization and max weight are consistent with capacity
/// * every order is planned at most once and planned orders exist in the input
/// * every input order is either planned or heavier than capacity
pub fn check_plan(orders: &[Order], capacity: Float, tours: &[Tour]) -> Result<(), Vec<String>> {
    let errors = check_tours(capacity, tours).into_iter().chain(check_assignment(orders, capacity, tours)).collect::<Vec<_>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn check_tours(capacity: Float, tours: &[Tour]) -> Vec<String> {
    tours
        .iter()
        .flat_map(|tour| {
            let weight = Tour::weight_of(&tour.stops);
            let mut errors = vec![];

            if weight > tour.max_weight + WEIGHT_TOLERANCE {
                errors.push(format!("load {weight} exceeds capacity {} in tour '{}'", tour.max_weight, tour.id));
            }

            if (weight - tour.total_weight).abs() > WEIGHT_TOLERANCE {
                errors.push(format!(
                    "total weight {} does not match stops weight {weight} in tour '{}'",
                    tour.total_weight, tour.id
                ));
            }

            if (tour.max_weight - capacity).abs() > WEIGHT_TOLERANCE {
                errors.push(format!("max weight {} differs from capacity {capacity} in tour '{}'", tour.max_weight, tour.id));
            }

            let utilization = Tour::utilization_of(weight, capacity);
            if tour.utilization != utilization {
                errors.push(format!(
                    "utilization {} differs from expected {utilization} in tour '{}'",
                    tour.utilization, tour.id
                ));
            }

            errors
        })
        .collect()
}

fn check_assignment(orders: &[Order], capacity: Float, tours: &[Tour]) -> Vec<String> {
    let known = orders.iter().map(|order| (order.id.as_str(), order)).collect::<FxMap<'_, &Order>>();
    let mut planned: FxMap<'_, usize> = FxMap::default();
    let mut errors = vec![];

    tours.iter().flat_map(|tour| tour.stops.iter().map(move |stop| (tour, stop))).for_each(|(tour, stop)| {
        *planned.entry(stop.id.as_str()).or_insert(0) += 1;

        if !known.contains_key(stop.id.as_str()) {
            errors.push(format!("unknown order '{}' in tour '{}'", stop.id, tour.id));
        }

        if stop.weight > capacity {
            errors.push(format!("oversized order '{}' is planned in tour '{}'", stop.id, tour.id));
        }
    });

    let mut duplicates = planned.iter().filter(|(_, count)| **count > 1).collect::<Vec<_>>();
    duplicates.sort_by_key(|(id, _)| **id);
    duplicates.into_iter().for_each(|(id, count)| errors.push(format!("order '{id}' is planned {count} times")));

    orders.iter().filter(|order| order.weight <= capacity && !planned.contains_key(order.id.as_str())).for_each(
        |order| {
            errors.push(format!("order '{}' is neither planned nor oversized", order.id));
        },
    );

    errors
}
