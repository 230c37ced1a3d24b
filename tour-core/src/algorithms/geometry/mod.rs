//! Contains geographic primitives and great-circle math.

mod coordinate;
pub use self::coordinate::*;
