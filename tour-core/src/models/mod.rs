//! Contains planner domain models: orders, tours, reference data and configuration.

mod config;
pub use self::config::*;

pub mod defaults;

mod order;
pub use self::order::*;

mod reference;
pub use self::reference::*;

mod tour;
pub use self::tour::*;
