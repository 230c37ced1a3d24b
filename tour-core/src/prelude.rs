//! This module reimports commonly used types.

pub use crate::algorithms::geometry::{Coordinate, bearing_degrees, distance_km};
pub use crate::checker::check_plan;
pub use crate::models::{Order, PlannerConfig, Region, Tour};
pub use crate::solver::{Plan, PlanStatistics, Planner, find_unplannable};
pub use crate::utils::{Environment, Float, GenericError, GenericResult, InfoLogger};
