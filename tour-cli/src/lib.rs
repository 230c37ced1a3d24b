//! A command line front end of the tour planning engine.
//!
//! The library part exposes functionality used by the `tour-cli` binary: reading orders and
//! plans from JSON, merging user configuration over the built-in defaults and checking
//! previously written plans.

#![warn(missing_docs)]

pub mod extensions;
