//! Configuration file loading.
//!
//! There is no discovery: a config file is only read when one is named with
//! `--config` (or `LAUNCHCHECK_CONFIG`). Otherwise the built-in defaults apply.

use crate::config::schema::LaunchConfig;
use crate::error::{LaunchError, Result};
use std::fs;
use std::path::Path;

/// Parse YAML content into LaunchConfig.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<LaunchConfig> {
    // An empty file deserializes as YAML null rather than an empty mapping.
    if content.trim().is_empty() {
        return Ok(LaunchConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| LaunchError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<LaunchConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LaunchError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LaunchError::Io(e)
        }
    })?;

    tracing::debug!("Loaded config from {}", path.display());
    parse_config(&content, path)
}

/// Load the config file if one was given, else the defaults.
pub fn load_config(path: Option<&Path>) -> Result<LaunchConfig> {
    match path {
        Some(path) => load_config_file(path),
        None => Ok(LaunchConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn no_path_yields_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config, LaunchConfig::default());
    }

    #[test]
    fn loads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("launchcheck.yml");
        fs::write(&path, "speed_threshold_secs: 1.5\n").unwrap();

        let config = load_config(Some(&path)).unwrap();

        assert_eq!(config.speed_threshold_secs, 1.5);
    }

    #[test]
    fn empty_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("launchcheck.yml");
        fs::write(&path, "\n").unwrap();

        let config = load_config_file(&path).unwrap();

        assert_eq!(config, LaunchConfig::default());
    }

    #[test]
    fn missing_file_is_config_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.yml");

        let err = load_config_file(&path).unwrap_err();

        assert!(matches!(err, LaunchError::ConfigNotFound { path: p } if p == path));
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let err = parse_config("scoring: [unclosed", &PathBuf::from("bad.yml")).unwrap_err();
        match err {
            LaunchError::ConfigParseError { path, .. } => {
                assert_eq!(path, PathBuf::from("bad.yml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn wrong_type_is_parse_error() {
        let result = parse_config("speed_threshold_secs: fast", &PathBuf::from("c.yml"));
        assert!(matches!(result, Err(LaunchError::ConfigParseError { .. })));
    }
}
