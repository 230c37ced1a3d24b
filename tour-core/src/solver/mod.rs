//! The solver module drives the whole planning pipeline.

mod planner;
pub use self::planner::*;

mod statistics;
pub use self::statistics::*;
