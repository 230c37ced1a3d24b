//! This module contains helper functionality.

/// Alias to a scalar floating type used for weights, coordinates and distances.
pub type Float = f64;

mod comparison;
pub use self::comparison::*;

mod environment;
pub use self::environment::*;

mod error;
pub use self::error::*;

mod timing;
pub use self::timing::*;
