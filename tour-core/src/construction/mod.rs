//! Contains building blocks of tour construction: order classification, capacity bucketing
//! and route building.

mod bucketing;
pub use self::bucketing::*;

mod classification;
pub use self::classification::*;

mod routing;
pub use self::routing::*;
