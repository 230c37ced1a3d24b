//! Core crate contains a deterministic engine which assigns delivery orders to vehicle tours
//! starting from a single depot.
//!
//! The pipeline is strictly one directional:
//! - orders heavier than vehicle capacity are filtered out
//! - every order gets a coordinate and a region derived from its postcode
//! - orders are grouped by region and each group is split into capacity feasible buckets,
//!   preferring orders closer to the depot
//! - every bucket becomes a one-way tour: a nearest neighbor route improved by 2-opt
//!
//! Reference data (depot, postcode centroids, regions) is passed as [`models::PlannerConfig`],
//! so the same engine can be used for another depot or country.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use tour_core::prelude::*;
//!
//! let planner = Planner::new(PlannerConfig::default(), Arc::new(Environment::silent())).unwrap();
//! let orders = vec![Order::new("o1", "30159", "Hannover", 50.)];
//!
//! let tours = planner.plan(&orders, 1300.).unwrap();
//!
//! assert_eq!(tours.len(), 1);
//! assert_eq!(tours[0].name, "1. Hannover");
//! assert_eq!(tours[0].utilization, 4);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/discovery/mod.rs"]
pub mod discovery;

pub mod algorithms;
pub mod checker;
pub mod construction;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
