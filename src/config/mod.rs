//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions (with built-in defaults) in [`schema`]
//! - File loading in [`loader`]
//! - Validation in [`validator`]
//!
//! The resulting [`LaunchConfig`] is immutable and passed explicitly to the
//! fetcher, the checks and the scorer.
//!
//! # Example
//!
//! ```
//! use launchcheck::config::{parse_config, validate};
//! use std::path::Path;
//!
//! let yaml = "scoring:\n  thresholds:\n    ready: 90\n    almost_ready: 60\n";
//! let config = parse_config(yaml, Path::new("launchcheck.yml")).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.scoring.thresholds.ready, 90);
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

// Schema re-exports
pub use schema::{
    CheckWeights, FetchConfig, LaunchConfig, PresenceConfig, ScoringConfig, VerdictThresholds,
    EQUAL_WEIGHT,
};

// Loader re-exports
pub use loader::{load_config, load_config_file, parse_config};

// Validator re-exports
pub use validator::{validate, validate_config, ValidationError};
