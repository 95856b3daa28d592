//! Tests for benchmark configuration.

use std::io::Write;

use super::*;

#[test]
fn test_defaults() {
    let config = BenchmarkConfig::default();
    assert_eq!(config.sizes(), 4..11);
    assert_eq!(config.weight_range, WeightRange { min: 10, max: 100 });
    assert_eq!(config.capacity_percent, 50);
    assert_eq!(config.iterations, 10_000);
    assert_eq!(config.seed, None);
    assert_eq!(config.format, ReportFormat::Text);
    assert!(config.validate().is_ok());
}

#[test]
fn test_toml_parsing() {
    let toml = r#"
        min_n = 3
        max_n = 8
        capacity_percent = 75
        iterations = 250
        seed = 42
        format = "markdown"

        [weight_range]
        min = 1
        max = 20
    "#;

    let config = BenchmarkConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.sizes(), 3..8);
    assert_eq!(config.weight_range, WeightRange { min: 1, max: 20 });
    assert_eq!(config.capacity_percent, 75);
    assert_eq!(config.iterations, 250);
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.format, ReportFormat::Markdown);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = BenchmarkConfig::from_toml_str("max_n = 6").unwrap();
    assert_eq!(config.sizes(), 4..6);
    assert_eq!(config.iterations, DEFAULT_ITERATIONS);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        min_n: 2
        max_n: 5
        seed: 9
        weight_range:
          min: 5
          max: 6
        format: csv
    "#;

    let config = BenchmarkConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.sizes(), 2..5);
    assert_eq!(config.seed, Some(9));
    assert_eq!(config.weight_range.min, 5);
    assert_eq!(config.format, ReportFormat::Csv);
}

#[test]
fn test_toml_type_error() {
    let err = BenchmarkConfig::from_toml_str("min_n = \"four\"").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_load_by_extension() {
    let mut yaml = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(yaml, "max_n: 7").unwrap();
    assert_eq!(BenchmarkConfig::load(yaml.path()).unwrap().max_n, 7);

    let mut toml = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(toml, "max_n = 9").unwrap();
    assert_eq!(BenchmarkConfig::load(toml.path()).unwrap().max_n, 9);
}

#[test]
fn test_load_missing_file() {
    let err = BenchmarkConfig::load("/nonexistent/boatload.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let config = BenchmarkConfig::new()
        .with_sizes(1, 3)
        .with_weight_range(2, 4)
        .with_capacity_percent(30)
        .with_iterations(10)
        .with_seed(123)
        .with_format(ReportFormat::Json);

    assert_eq!(config.sizes(), 1..3);
    assert_eq!(config.weight_range, WeightRange { min: 2, max: 4 });
    assert_eq!(config.capacity_percent, 30);
    assert_eq!(config.iterations, 10);
    assert_eq!(config.seed, Some(123));
    assert_eq!(config.format, ReportFormat::Json);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_bad_values() {
    let cases = [
        BenchmarkConfig::new().with_sizes(5, 4),
        BenchmarkConfig::new().with_max_n(MAX_SIZE_LIMIT + 1),
        BenchmarkConfig::new().with_weight_range(0, 10),
        BenchmarkConfig::new().with_weight_range(20, 10),
        BenchmarkConfig::new().with_capacity_percent(101),
        BenchmarkConfig::new().with_iterations(0),
    ];
    for config in cases {
        assert!(
            matches!(config.validate(), Err(ConfigError::Invalid(_))),
            "expected invalid: {config:?}"
        );
    }
}

#[test]
fn test_empty_sweep_is_valid() {
    assert!(BenchmarkConfig::new().with_sizes(4, 4).validate().is_ok());
}

#[test]
fn test_report_format_parsing() {
    assert_eq!("TEXT".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
    assert_eq!("md".parse::<ReportFormat>().unwrap(), ReportFormat::Markdown);
    assert_eq!(ReportFormat::Json.to_string(), "json");
    assert!("xml".parse::<ReportFormat>().is_err());
}
