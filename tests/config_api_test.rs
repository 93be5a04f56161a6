//! Integration tests for config module public API.

use launchcheck::config::{load_config, load_config_file, validate, LaunchConfig};
use launchcheck::LaunchError;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn public_api_is_accessible() {
    let config = LaunchConfig::default();
    validate(&config).unwrap();
    assert_eq!(config.speed_threshold(), Duration::from_secs(2));
}

#[test]
fn full_config_workflow() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("launch.yml");
    fs::write(
        &path,
        r#"
fetch:
  page_timeout_secs: 5
  user_agent: acme-bot/1.0
speed_threshold_secs: 1.5
scoring:
  weights:
    ssl: 30
    page_speed: 20
    robots_txt: 5
    sitemap: 5
    open_graph: 10
    meta_description: 10
    mobile_viewport: 15
    favicon: 5
"#,
    )
    .unwrap();

    let config = load_config(Some(&path)).unwrap();
    validate(&config).unwrap();

    assert_eq!(config.fetch.page_timeout(), Duration::from_secs(5));
    assert_eq!(config.fetch.resource_timeout(), Duration::from_secs(8));
    assert_eq!(config.fetch.user_agent, "acme-bot/1.0");
    assert_eq!(config.speed_threshold(), Duration::from_millis(1500));
    assert_eq!(config.scoring.weights.ssl, 30.0);
    assert_eq!(config.scoring.thresholds.ready, 80);
}

#[test]
fn invalid_config_collects_every_problem() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("launch.yml");
    fs::write(
        &path,
        r#"
fetch:
  page_timeout_secs: 0
speed_threshold_secs: -1
scoring:
  thresholds:
    ready: 40
    almost_ready: 60
"#,
    )
    .unwrap();

    let config = load_config_file(&path).unwrap();
    let err = validate(&config).unwrap_err();
    let LaunchError::ConfigValidationError { message } = err else {
        panic!("expected validation error, got {err:?}");
    };
    assert_eq!(message.matches("; ").count(), 2);
}

#[test]
fn missing_and_malformed_files() {
    let temp = TempDir::new().unwrap();

    let missing = temp.path().join("nope.yml");
    assert!(matches!(
        load_config_file(&missing),
        Err(LaunchError::ConfigNotFound { .. })
    ));

    let bad = temp.path().join("bad.yml");
    fs::write(&bad, "fetch: [1, 2").unwrap();
    assert!(matches!(
        load_config_file(&bad),
        Err(LaunchError::ConfigParseError { .. })
    ));
}
