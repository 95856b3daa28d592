//! Error types for boatload

use thiserror::Error;

/// Main error type for boatload operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoatloadError {
    /// An item weight of zero was supplied; weights must be positive
    #[error("Item {index} has zero weight")]
    ZeroWeight { index: usize },

    /// The sum of all item weights does not fit in a `u64`
    #[error("Total item weight overflows u64")]
    Overflow,
}

/// Result type alias for boatload operations
pub type Result<T> = std::result::Result<T, BoatloadError>;
