//! Command-line front end.
//!
//! With no arguments the default sweep runs and the plain-text report goes to
//! stdout. Flags override single configuration fields.

use std::io;
use std::path::PathBuf;

use boatload_benchmark::{report, BenchmarkError, Harness};
use boatload_config::{BenchmarkConfig, ConfigError, ReportFormat};
use clap::Parser;
use thiserror::Error;
use tracing::info;

/// Errors surfaced by the binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Benchmark(#[from] BenchmarkError),
}

/// Benchmark exact, randomized and greedy subset selection.
#[derive(Debug, Parser)]
#[command(name = "boatload", version, about)]
pub struct Cli {
    /// Load the configuration from a TOML or YAML file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Smallest instance size (inclusive)
    #[arg(long)]
    pub min_n: Option<usize>,

    /// Largest instance size (exclusive)
    #[arg(long)]
    pub max_n: Option<usize>,

    /// Random subsets sampled per instance by the randomized solver
    #[arg(long)]
    pub iterations: Option<usize>,

    /// Seed for reproducible instances and sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Report format: text, csv, markdown or json
    #[arg(long)]
    pub format: Option<ReportFormat>,

    /// Write the report to a file instead of stdout
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(long, short, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Builds the effective configuration: file (or defaults), then flags.
    pub fn benchmark_config(&self) -> Result<BenchmarkConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => BenchmarkConfig::load(path)?,
            None => BenchmarkConfig::default(),
        };
        if let Some(min_n) = self.min_n {
            config = config.with_min_n(min_n);
        }
        if let Some(max_n) = self.max_n {
            config = config.with_max_n(max_n);
        }
        if let Some(iterations) = self.iterations {
            config = config.with_iterations(iterations);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(format) = self.format {
            config = config.with_format(format);
        }
        config.validate()?;
        Ok(config)
    }
}

/// Runs the benchmark described by the command line and writes the report.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    let config = cli.benchmark_config()?;
    let format = config.format;
    let results = Harness::new(config)?.run()?;

    match &cli.output {
        Some(path) => {
            report::write_report_file(&results, format, path)?;
            info!(event = "report_written", path = %path.display(), format = %format);
        }
        None => report::write_report(&results, format, io::stdout().lock())?,
    }
    Ok(())
}
