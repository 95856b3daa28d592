//! Boatload Core - Core types for bounded subset selection
//!
//! This crate provides the fundamental abstractions shared by the solvers
//! and the benchmark harness:
//! - [`Instance`]: a validated `(weights, capacity)` pair
//! - [`Selection`]: a chosen multiset of weights together with its total
//! - [`BoatloadError`]: errors raised on out-of-contract input

pub mod error;
pub mod instance;
pub mod selection;


pub use error::{BoatloadError, Result};
pub use instance::Instance;
pub use selection::Selection;
