//! Configuration system for boatload.
//!
//! The benchmark sweep is controlled by a [`BenchmarkConfig`]. Defaults
//! reproduce the standard run (sizes 4 to 10, weights 10 to 100, half of
//! the total weight as capacity, 10 000 random samples). A config may also be
//! loaded from TOML or YAML.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use boatload_config::BenchmarkConfig;
//!
//! let config = BenchmarkConfig::from_toml_str(r#"
//!     min_n = 2
//!     max_n = 6
//!     iterations = 500
//!     seed = 7
//!
//!     [weight_range]
//!     min = 1
//!     max = 9
//! "#).unwrap();
//!
//! assert_eq!(config.sizes(), 2..6);
//! assert_eq!(config.weight_range.max, 9);
//! assert_eq!(config.capacity_percent, 50);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use boatload_config::BenchmarkConfig;
//!
//! let config = BenchmarkConfig::load("boatload.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::fmt;
use std::ops::Range;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest instance size in the default sweep.
pub const DEFAULT_MIN_N: usize = 4;
/// Exclusive upper bound of the default sweep.
pub const DEFAULT_MAX_N: usize = 11;
/// Default number of random samples per randomized solve.
pub const DEFAULT_ITERATIONS: usize = 10_000;
/// Default capacity as a percentage of total weight.
pub const DEFAULT_CAPACITY_PERCENT: u32 = 50;
/// Largest accepted `max_n`.
pub const MAX_SIZE_LIMIT: usize = 64;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main benchmark configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct BenchmarkConfig {
    /// Smallest instance size (inclusive).
    pub min_n: usize,

    /// Largest instance size (exclusive).
    pub max_n: usize,

    /// Inclusive range item weights are drawn from.
    pub weight_range: WeightRange,

    /// Capacity as a percentage of an instance's total weight.
    pub capacity_percent: u32,

    /// Samples drawn by the randomized solver per instance.
    pub iterations: usize,

    /// Random seed for reproducible instances and sampling.
    pub seed: Option<u64>,

    /// Output format of the report.
    pub format: ReportFormat,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            min_n: DEFAULT_MIN_N,
            max_n: DEFAULT_MAX_N,
            weight_range: WeightRange::default(),
            capacity_percent: DEFAULT_CAPACITY_PERCENT,
            iterations: DEFAULT_ITERATIONS,
            seed: None,
            format: ReportFormat::default(),
        }
    }
}

impl BenchmarkConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, choosing the parser by extension
    /// (`.yaml` / `.yml` for YAML, anything else as TOML).
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or fails to parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the size sweep `[min_n, max_n)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use boatload_config::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new().with_sizes(3, 5);
    /// assert_eq!(config.sizes().collect::<Vec<_>>(), vec![3, 4]);
    /// ```
    pub fn with_sizes(mut self, min_n: usize, max_n: usize) -> Self {
        self.min_n = min_n;
        self.max_n = max_n;
        self
    }

    /// Sets the smallest instance size.
    pub fn with_min_n(mut self, min_n: usize) -> Self {
        self.min_n = min_n;
        self
    }

    /// Sets the exclusive upper bound on instance size.
    pub fn with_max_n(mut self, max_n: usize) -> Self {
        self.max_n = max_n;
        self
    }

    /// Sets the inclusive weight range.
    pub fn with_weight_range(mut self, min: u64, max: u64) -> Self {
        self.weight_range = WeightRange { min, max };
        self
    }

    /// Sets the capacity percentage.
    pub fn with_capacity_percent(mut self, percent: u32) -> Self {
        self.capacity_percent = percent;
        self
    }

    /// Sets the randomized solver's sample count.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the report format.
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Returns the instance sizes to benchmark.
    pub fn sizes(&self) -> Range<usize> {
        self.min_n..self.max_n
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_n > self.max_n {
            return Err(ConfigError::Invalid(format!(
                "min_n ({}) must not exceed max_n ({})",
                self.min_n, self.max_n
            )));
        }
        if self.max_n > MAX_SIZE_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "max_n must be at most {MAX_SIZE_LIMIT}, got {}",
                self.max_n
            )));
        }
        if self.weight_range.min == 0 {
            return Err(ConfigError::Invalid(
                "weight_range.min must be positive".into(),
            ));
        }
        if self.weight_range.min > self.weight_range.max {
            return Err(ConfigError::Invalid(format!(
                "weight_range is empty: [{}, {}]",
                self.weight_range.min, self.weight_range.max
            )));
        }
        if self.capacity_percent > 100 {
            return Err(ConfigError::Invalid(format!(
                "capacity_percent must be in [0, 100], got {}",
                self.capacity_percent
            )));
        }
        if self.iterations == 0 {
            return Err(ConfigError::Invalid("iterations must be positive".into()));
        }
        Ok(())
    }
}

/// Inclusive range of item weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct WeightRange {
    pub min: u64,
    pub max: u64,
}

impl Default for WeightRange {
    fn default() -> Self {
        Self { min: 10, max: 100 }
    }
}

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// One comma-separated block per solver.
    #[default]
    Text,

    /// A single CSV table.
    Csv,

    /// Markdown tables with a comparison summary.
    Markdown,

    /// The full result set as JSON.
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Csv => write!(f, "csv"),
            ReportFormat::Markdown => write!(f, "markdown"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "csv" => Ok(ReportFormat::Csv),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "json" => Ok(ReportFormat::Json),
            other => Err(ConfigError::Invalid(format!(
                "unknown report format '{other}' (expected text, csv, markdown or json)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests;
