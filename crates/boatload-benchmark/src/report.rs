//! Report generation for benchmark results.
//!
//! Each format is a [`Display`](fmt::Display) wrapper around a
//! [`ResultSet`]; [`render`] and [`write_report`] pick one by
//! [`ReportFormat`].

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;

use boatload_config::ReportFormat;

use crate::error::BenchmarkError;
use crate::result::ResultSet;

/// Plain-text report: one block per solver.
///
/// ```text
/// EXACT:
/// n,time_seconds,memory_bytes
/// 4,0.000012,1184
///
/// ```
///
/// # Example
///
/// ```
/// use boatload_benchmark::report::TextReport;
/// use boatload_benchmark::{MeasurementRecord, ResultSet};
/// use std::time::Duration;
///
/// let mut results = ResultSet::new();
/// results.record("greedy", MeasurementRecord {
///     n: 4,
///     elapsed: Duration::from_micros(12),
///     peak_memory_bytes: 96,
///     total: 40,
///     capacity: 45,
/// });
///
/// let text = TextReport::new(&results).to_string();
/// assert_eq!(text, "GREEDY:\nn,time_seconds,memory_bytes\n4,0.000012,96\n\n");
/// ```
pub struct TextReport<'a> {
    result: &'a ResultSet,
}

impl<'a> TextReport<'a> {
    pub fn new(result: &'a ResultSet) -> Self {
        Self { result }
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for series in self.result.series() {
            writeln!(f, "{}:", series.solver.to_uppercase())?;
            writeln!(f, "n,time_seconds,memory_bytes")?;
            for record in &series.records {
                writeln!(
                    f,
                    "{},{:.6},{}",
                    record.n,
                    record.seconds(),
                    record.peak_memory_bytes
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// CSV report: a single table over all solvers.
///
/// # Example
///
/// ```
/// use boatload_benchmark::report::CsvReport;
/// use boatload_benchmark::ResultSet;
///
/// let csv = CsvReport::new(&ResultSet::new()).to_string();
/// assert_eq!(csv, "solver,n,time_seconds,memory_bytes,total\n");
/// ```
pub struct CsvReport<'a> {
    result: &'a ResultSet,
}

impl<'a> CsvReport<'a> {
    pub fn new(result: &'a ResultSet) -> Self {
        Self { result }
    }
}

impl fmt::Display for CsvReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "solver,n,time_seconds,memory_bytes,total")?;
        for series in self.result.series() {
            for record in &series.records {
                writeln!(
                    f,
                    "{},{},{:.6},{},{}",
                    series.solver,
                    record.n,
                    record.seconds(),
                    record.peak_memory_bytes,
                    record.total
                )?;
            }
        }
        Ok(())
    }
}

/// Markdown report generator.
///
/// One table per solver followed by a comparison table and, if any were
/// observed, a list of invariant violations.
///
/// # Example
///
/// ```
/// use boatload_benchmark::report::MarkdownReport;
/// use boatload_benchmark::ResultSet;
///
/// let mut results = ResultSet::new();
/// results.register("exact");
///
/// let md = MarkdownReport::new(&results).to_string();
/// assert!(md.contains("# Boatload Benchmark"));
/// assert!(md.contains("## exact"));
/// assert!(md.contains("## Comparison"));
/// ```
pub struct MarkdownReport<'a> {
    result: &'a ResultSet,
}

impl<'a> MarkdownReport<'a> {
    pub fn new(result: &'a ResultSet) -> Self {
        Self { result }
    }
}

impl fmt::Display for MarkdownReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Boatload Benchmark")?;
        writeln!(f)?;

        for series in self.result.series() {
            writeln!(f, "## {}", series.solver)?;
            writeln!(f)?;
            if series.records.is_empty() {
                writeln!(f, "*No runs completed.*")?;
                writeln!(f)?;
                continue;
            }
            writeln!(f, "| n | Time (s) | Peak memory (B) | Total | Capacity |")?;
            writeln!(f, "|---|----------|-----------------|-------|----------|")?;
            for record in &series.records {
                writeln!(
                    f,
                    "| {} | {:.6} | {} | {} | {} |",
                    record.n,
                    record.seconds(),
                    record.peak_memory_bytes,
                    record.total,
                    record.capacity
                )?;
            }
            writeln!(f)?;
        }

        writeln!(f, "## Comparison")?;
        writeln!(f)?;
        writeln!(
            f,
            "| Solver | Mean time (s) | Max peak memory (B) | Total reached |"
        )?;
        writeln!(
            f,
            "|--------|---------------|---------------------|---------------|"
        )?;
        for series in self.result.series() {
            writeln!(
                f,
                "| {} | {:.6} | {} | {} |",
                series.solver,
                series.mean_time().as_secs_f64(),
                series.max_peak_memory(),
                series.total_reached()
            )?;
        }

        let violations = self.result.violations();
        if !violations.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Violations")?;
            writeln!(f)?;
            for violation in violations {
                writeln!(
                    f,
                    "- n={} `{}`: {:?}",
                    violation.n, violation.solver, violation.kind
                )?;
            }
        }
        Ok(())
    }
}

/// Renders the result set in the given format.
///
/// # Errors
///
/// Only JSON rendering can fail.
pub fn render(result: &ResultSet, format: ReportFormat) -> Result<String, BenchmarkError> {
    Ok(match format {
        ReportFormat::Text => TextReport::new(result).to_string(),
        ReportFormat::Csv => CsvReport::new(result).to_string(),
        ReportFormat::Markdown => MarkdownReport::new(result).to_string(),
        ReportFormat::Json => {
            let mut json = serde_json::to_string_pretty(result)?;
            json.push('\n');
            json
        }
    })
}

/// Writes the rendered report to a writer.
pub fn write_report<W: Write>(
    result: &ResultSet,
    format: ReportFormat,
    mut writer: W,
) -> Result<(), BenchmarkError> {
    let rendered = render(result, format)?;
    writer.write_all(rendered.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Writes the rendered report to a file.
pub fn write_report_file(
    result: &ResultSet,
    format: ReportFormat,
    path: impl AsRef<Path>,
) -> Result<(), BenchmarkError> {
    let rendered = render(result, format)?;
    fs::write(path, rendered)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::result::{MeasurementRecord, Violation, ViolationKind};

    fn sample_results() -> ResultSet {
        let mut results = ResultSet::new();
        for (solver, micros, bytes, total) in [
            ("exact", 1_234_567, 2048, 40),
            ("randomized", 1_500, 512, 30),
            ("greedy", 3, 96, 40),
        ] {
            results.record(
                solver,
                MeasurementRecord {
                    n: 3,
                    elapsed: Duration::from_micros(micros),
                    peak_memory_bytes: bytes,
                    total,
                    capacity: 40,
                },
            );
        }
        results
    }

    #[test]
    fn test_text_blocks() {
        let text = render(&sample_results(), ReportFormat::Text).unwrap();
        let expected = "\
EXACT:
n,time_seconds,memory_bytes
3,1.234567,2048

RANDOMIZED:
n,time_seconds,memory_bytes
3,0.001500,512

GREEDY:
n,time_seconds,memory_bytes
3,0.000003,96

";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_csv_rows() {
        let csv = render(&sample_results(), ReportFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "solver,n,time_seconds,memory_bytes,total");
        assert_eq!(lines[1], "exact,3,1.234567,2048,40");
        assert_eq!(lines[3], "greedy,3,0.000003,96,40");
    }

    #[test]
    fn test_markdown_sections() {
        let md = render(&sample_results(), ReportFormat::Markdown).unwrap();
        assert!(md.starts_with("# Boatload Benchmark\n"));
        assert!(md.contains("## randomized"));
        assert!(md.contains("| 3 | 1.234567 | 2048 | 40 | 40 |"));
        assert!(md.contains("| greedy | 0.000003 | 96 | 40 |"));
        assert!(!md.contains("## Violations"));
    }

    #[test]
    fn test_markdown_lists_violations() {
        let mut results = sample_results();
        results.add_violation(Violation {
            n: 3,
            solver: "greedy".into(),
            kind: ViolationKind::ExceedsCapacity {
                total: 41,
                capacity: 40,
            },
        });
        let md = MarkdownReport::new(&results).to_string();
        assert!(md.contains("## Violations"));
        assert!(md.contains("- n=3 `greedy`: ExceedsCapacity"));
    }

    #[test]
    fn test_json_round_trips_names() {
        let json = render(&sample_results(), ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["series"][2]["solver"], "greedy");
        assert_eq!(value["series"][0]["records"][0]["memory_bytes"], 2048);
    }

    #[test]
    fn test_write_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        write_report_file(&sample_results(), ReportFormat::Csv, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("solver,n,"));
    }

    #[test]
    fn test_write_report_to_writer() {
        let mut buffer = Vec::new();
        write_report(&sample_results(), ReportFormat::Text, &mut buffer).unwrap();
        assert!(String::from_utf8(buffer).unwrap().starts_with("EXACT:\n"));
    }
}
