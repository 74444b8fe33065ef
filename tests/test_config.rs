// Configuration tests
// Author: Gabriel Demetrios Lafis

use std::io::Write;
use std::time::Duration;

use log::LevelFilter;
use rust_analytics_client::utils::{Config, ConfigError};
use tempfile::Builder;

fn write_config(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.defaults.max_results, 30);
    assert!(!config.service.pretty_print);
    assert!(config.service.report_data_url.starts_with("https://"));
    assert!(config.service.interface_name.starts_with("rust-analytics-client-"));
    assert_eq!(config.http.timeout(), Some(Duration::from_secs(30)));
    assert_eq!(config.log_level_filter(), LevelFilter::Info);
}

#[test]
fn test_json_config() {
    let file = write_config(
        ".json",
        r#"{
            "service": { "pretty_print": true, "report_data_url": "http://localhost:8080/data" },
            "defaults": { "max_results": 100 }
        }"#,
    );

    let config = Config::from_file(file.path()).unwrap();
    assert!(config.service.pretty_print);
    assert_eq!(config.service.report_data_url, "http://localhost:8080/data");
    assert_eq!(config.defaults.max_results, 100);

    // Sections and fields left out keep their defaults
    assert_eq!(
        config.service.account_data_url,
        Config::default().service.account_data_url
    );
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_yaml_config() {
    let file = write_config(
        ".yaml",
        "logging:\n  level: debug\nhttp:\n  timeout_secs: 5\n  user_agent: tests\n",
    );

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.log_level_filter(), LevelFilter::Debug);
    assert_eq!(config.http.timeout(), Some(Duration::from_secs(5)));
    assert_eq!(config.http.user_agent, "tests");
    assert_eq!(config.defaults.max_results, 30);
}

#[test]
fn test_config_errors() {
    let file = write_config(".toml", "[service]\n");
    assert!(matches!(
        Config::from_file(file.path()),
        Err(ConfigError::UnsupportedFormat(_))
    ));

    let file = write_config(".json", "{ not json");
    assert!(matches!(
        Config::from_file(file.path()),
        Err(ConfigError::Json(_))
    ));

    assert!(matches!(
        Config::from_file("/nonexistent/analytics.yaml"),
        Err(ConfigError::Io(_))
    ));
}
