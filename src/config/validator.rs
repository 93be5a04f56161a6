//! Configuration validation rules.
//!
//! - Weights must be finite, non-negative and sum to 100
//! - Verdict thresholds must satisfy `0 < almost_ready < ready <= 100`
//! - Timeouts and the speed budget must be positive

use crate::checks::CheckId;
use crate::config::schema::LaunchConfig;
use crate::error::{LaunchError, Result};

/// Allowed drift when summing floating point weights.
const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config(config: &LaunchConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_weights(config));
    errors.extend(validate_thresholds(config));
    errors.extend(validate_timing(config));

    errors
}

fn validate_weights(config: &LaunchConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let weights = &config.scoring.weights;

    for id in CheckId::ALL {
        let weight = weights.get(id);
        if !weight.is_finite() || weight < 0.0 {
            errors.push(ValidationError::new(
                "invalid-weight",
                format!("Weight for '{}' must be a non-negative number, got {}", id.key(), weight),
            ));
        }
    }

    let total = weights.total();
    if errors.is_empty() && (total - 100.0).abs() > WEIGHT_TOLERANCE {
        errors.push(ValidationError::new(
            "weights-sum",
            format!("Check weights must sum to 100, got {}", total),
        ));
    }

    errors
}

fn validate_thresholds(config: &LaunchConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let thresholds = config.scoring.thresholds;

    if thresholds.ready > 100 {
        errors.push(ValidationError::new(
            "threshold-range",
            format!("'ready' threshold must be at most 100, got {}", thresholds.ready),
        ));
    }
    if thresholds.almost_ready == 0 {
        errors.push(ValidationError::new(
            "threshold-range",
            "'almost_ready' threshold must be above 0",
        ));
    }
    if thresholds.almost_ready >= thresholds.ready {
        errors.push(ValidationError::new(
            "threshold-order",
            format!(
                "'almost_ready' threshold ({}) must be below 'ready' ({})",
                thresholds.almost_ready, thresholds.ready
            ),
        ));
    }

    errors
}

fn validate_timing(config: &LaunchConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.fetch.page_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "timeout",
            "'page_timeout_secs' must be at least 1",
        ));
    }
    if config.fetch.resource_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "timeout",
            "'resource_timeout_secs' must be at least 1",
        ));
    }
    let speed = config.speed_threshold_secs;
    if !speed.is_finite() || speed <= 0.0 {
        errors.push(ValidationError::new(
            "speed-threshold",
            format!("'speed_threshold_secs' must be positive, got {}", speed),
        ));
    }

    errors
}

/// Validate a configuration, failing with all messages joined.
pub fn validate(config: &LaunchConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(LaunchError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
