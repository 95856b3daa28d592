//! Error types for the benchmark harness.

use boatload_config::ConfigError;
use boatload_core::BoatloadError;
use thiserror::Error;

/// Errors raised while preparing, running or reporting a benchmark.
#[derive(Debug, Error)]
pub enum BenchmarkError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Instance error: {0}")]
    Instance(#[from] BoatloadError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
