//! Shared test fixtures for boatload crates.
//!
//! - [`known`] - Hand-checked instances with their optimal totals
//! - [`strategy`] - `proptest` strategies producing random instances
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! boatload-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use boatload_test::known::{all_known, KnownInstance};
//! use boatload_test::strategy::instances;
//! ```

pub mod known;
pub mod strategy;

pub use known::{all_known, KnownInstance};
pub use strategy::{instances, optimum};
