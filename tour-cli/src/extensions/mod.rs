//! Module provides various helper functionality.

pub mod check;
pub mod config;
pub mod format;
