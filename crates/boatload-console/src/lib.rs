//! Colorful console output for benchmark progress.
//!
//! Provides a custom `tracing` layer that formats harness and solver events
//! with colors on stderr, leaving stdout to the report.
//!
//! ## Log Levels
//!
//! - **WARN**: Invariant violations and abandoned measurements
//! - **INFO**: Lifecycle events (benchmark start/end, one line per size)
//! - **DEBUG**: One line per solver call (time, memory, total, candidates)
//! - **TRACE**: Everything else the crates emit

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Maps a `-v` count to the default log level.
///
/// # Example
///
/// ```
/// use boatload_console::level_for_verbosity;
/// use tracing::level_filters::LevelFilter;
///
/// assert_eq!(level_for_verbosity(0), LevelFilter::WARN);
/// assert_eq!(level_for_verbosity(2), LevelFilter::DEBUG);
/// assert_eq!(level_for_verbosity(9), LevelFilter::TRACE);
/// ```
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Initializes console logging.
///
/// Safe to call multiple times - only the first call has effect.
/// `RUST_LOG` directives are applied on top of the verbosity default.
pub fn init(verbosity: u8) {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);

        let filter = EnvFilter::builder()
            .with_default_directive(level_for_verbosity(verbosity).into())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(BoatloadConsoleLayer)
            .try_init();
    });
}

// Returns elapsed time since init.
fn elapsed_secs() -> f64 {
    EPOCH.get().map_or(0.0, |epoch| epoch.elapsed().as_secs_f64())
}

/// A tracing layer that formats boatload events with colors.
pub struct BoatloadConsoleLayer;

impl<S: Subscriber> Layer<S> for BoatloadConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("boatload") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    solver: Option<String>,
    n: Option<u64>,
    min_n: Option<u64>,
    max_n: Option<u64>,
    solvers: Option<u64>,
    capacity: Option<u64>,
    total_weight: Option<u64>,
    total: Option<u64>,
    candidates: Option<u64>,
    elapsed_us: Option<u64>,
    peak_bytes: Option<u64>,
    duration_ms: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "solver" => self.solver = Some(s.trim_matches('"').to_string()),
            "message" => self.message = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "n" => self.n = Some(value),
            "min_n" => self.min_n = Some(value),
            "max_n" => self.max_n = Some(value),
            "solvers" => self.solvers = Some(value),
            "capacity" => self.capacity = Some(value),
            "total_weight" => self.total_weight = Some(value),
            "total" => self.total = Some(value),
            "candidates" => self.candidates = Some(value),
            "elapsed_us" => self.elapsed_us = Some(value),
            "peak_bytes" => self.peak_bytes = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "solver" => self.solver = Some(value.to_string()),
            "message" => self.message = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "benchmark_start" => format_benchmark_start(v),
        "benchmark_end" => format_benchmark_end(v),
        "size_step" => format_size_step(v),
        "measurement" => format_measurement(v),
        _ => format_plain(v, level),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_count(value: u64) -> String {
    value.to_formatted_string(&Locale::en)
}

fn format_benchmark_start(v: &EventVisitor) -> String {
    format!(
        "{} {} Benchmark │ n in [{}, {}) │ {} solvers",
        format_elapsed(),
        "▶".bright_green().bold(),
        v.min_n.unwrap_or(0).bright_yellow(),
        v.max_n.unwrap_or(0).bright_yellow(),
        v.solvers.unwrap_or(0).bright_yellow(),
    )
}

fn format_benchmark_end(v: &EventVisitor) -> String {
    format!(
        "{} {} Benchmark complete │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    )
}

fn format_size_step(v: &EventVisitor) -> String {
    format!(
        "{} {} n = {} │ capacity {} of {}",
        format_elapsed(),
        "▶".bright_blue(),
        v.n.unwrap_or(0).white().bold(),
        format_count(v.capacity.unwrap_or(0)).bright_yellow(),
        format_count(v.total_weight.unwrap_or(0)).bright_yellow(),
    )
}

fn format_measurement(v: &EventVisitor) -> String {
    format!(
        "{} {} {:<10} │ {:>12} │ {:>12} B │ total {} │ {} candidates",
        format_elapsed(),
        "◀".bright_blue(),
        v.solver.as_deref().unwrap_or("?").white().bold(),
        format_duration_us(v.elapsed_us.unwrap_or(0)).yellow(),
        format_count(v.peak_bytes.unwrap_or(0)).bright_magenta(),
        format_count(v.total.unwrap_or(0)).bright_green(),
        format_count(v.candidates.unwrap_or(0)).bright_black(),
    )
}

fn format_plain(v: &EventVisitor, level: Level) -> String {
    let message = v.message.as_deref().unwrap_or("");
    let label = match level {
        Level::ERROR => "ERROR".bright_red().bold().to_string(),
        Level::WARN => " WARN".yellow().bold().to_string(),
        Level::INFO => " INFO".bright_green().to_string(),
        Level::DEBUG => "DEBUG".bright_blue().to_string(),
        Level::TRACE => "TRACE".bright_black().to_string(),
    };

    let mut output = format!("{} {} {}", format_elapsed(), label, message);
    if let Some(ref event) = v.event {
        output.push_str(&format!(" │ {}", event.bright_black()));
    }
    if let Some(ref solver) = v.solver {
        output.push_str(&format!(" │ {}", solver.white().bold()));
    }
    if let Some(n) = v.n {
        output.push_str(&format!(" │ n = {}", n));
    }
    output
}

fn format_duration_us(us: u64) -> String {
    if us < 1_000 {
        format!("{}µs", us)
    } else if us < 1_000_000 {
        format!("{:.2}ms", us as f64 / 1_000.0)
    } else {
        format!("{:.3}s", us as f64 / 1_000_000.0)
    }
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_us() {
        assert_eq!(format_duration_us(999), "999µs");
        assert_eq!(format_duration_us(1_500), "1.50ms");
        assert_eq!(format_duration_us(2_500_000), "2.500s");
    }

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1_500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_unknown_event_falls_back_to_plain() {
        let visitor = EventVisitor {
            message: Some("measurement scope left without finishing".into()),
            event: Some("probe_abandoned".into()),
            ..EventVisitor::default()
        };
        let line = format_event(&visitor, Level::WARN);
        assert!(line.contains("measurement scope left without finishing"));
        assert!(line.contains("probe_abandoned"));
    }

    #[test]
    fn test_measurement_line_mentions_solver() {
        let visitor = EventVisitor {
            event: Some("measurement".into()),
            solver: Some("greedy".into()),
            elapsed_us: Some(12),
            peak_bytes: Some(4096),
            total: Some(40),
            candidates: Some(32_767),
            ..EventVisitor::default()
        };
        let line = format_event(&visitor, Level::DEBUG);
        assert!(line.contains("greedy"));
        assert!(line.contains("4,096"));
        assert!(line.contains("32,767"));
    }

    #[test]
    fn test_init_is_idempotent() {
        init(0);
        init(3);
    }
}
