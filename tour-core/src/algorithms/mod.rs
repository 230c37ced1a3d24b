//! This module contains generic algorithms used by the planner.

pub mod geometry;
