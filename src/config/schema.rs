//! Configuration schema definitions.
//!
//! Every field has a built-in default, so an empty YAML document (or no
//! config file at all) yields the standard audit: equal weights, 80/55 verdict
//! thresholds, a 2 second speed budget and 10/8 second request timeouts.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::checks::CheckId;

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    /// HTTP request settings
    pub fetch: FetchConfig,

    /// Page load budget for the speed check, in seconds
    pub speed_threshold_secs: f64,

    /// Weights and verdict thresholds
    pub scoring: ScoringConfig,

    /// Launch platform lookups
    pub presence: PresenceConfig,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            speed_threshold_secs: default_speed_threshold(),
            scoring: ScoringConfig::default(),
            presence: PresenceConfig::default(),
        }
    }
}

impl LaunchConfig {
    /// Speed budget as a [`Duration`].
    ///
    /// Falls back to the default budget if the configured value cannot be
    /// represented (negative, NaN); validation rejects such values anyway.
    pub fn speed_threshold(&self) -> Duration {
        Duration::try_from_secs_f64(self.speed_threshold_secs).unwrap_or_else(|_| {
            tracing::warn!(
                "Ignoring unusable speed threshold {}s",
                self.speed_threshold_secs
            );
            Duration::from_secs_f64(default_speed_threshold())
        })
    }

    /// Override both request timeouts.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.fetch.page_timeout_secs = secs;
        self.fetch.resource_timeout_secs = secs;
        self
    }
}

fn default_speed_threshold() -> f64 {
    2.0
}

/// HTTP request settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Timeout for the page request
    pub page_timeout_secs: u64,

    /// Timeout for robots.txt, sitemap.xml and favicon.ico
    pub resource_timeout_secs: u64,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            page_timeout_secs: 10,
            resource_timeout_secs: 8,
            user_agent: default_user_agent(),
        }
    }
}

impl FetchConfig {
    pub fn page_timeout(&self) -> Duration {
        Duration::from_secs(self.page_timeout_secs)
    }

    pub fn resource_timeout(&self) -> Duration {
        Duration::from_secs(self.resource_timeout_secs)
    }
}

fn default_user_agent() -> String {
    format!("launchcheck/{}", env!("CARGO_PKG_VERSION"))
}

/// Scoring settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Points awarded per passing check; must sum to 100
    pub weights: CheckWeights,

    /// Minimum scores for each verdict tier
    pub thresholds: VerdictThresholds,
}

/// Points per check.
///
/// The default is an even split: 12.5 points each, so a score is the
/// floored percentage of checks passed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckWeights {
    pub ssl: f64,
    pub page_speed: f64,
    pub robots_txt: f64,
    pub sitemap: f64,
    pub open_graph: f64,
    pub meta_description: f64,
    pub mobile_viewport: f64,
    pub favicon: f64,
}

/// Even split across the eight checks.
pub const EQUAL_WEIGHT: f64 = 100.0 / CheckId::ALL.len() as f64;

impl Default for CheckWeights {
    fn default() -> Self {
        Self {
            ssl: EQUAL_WEIGHT,
            page_speed: EQUAL_WEIGHT,
            robots_txt: EQUAL_WEIGHT,
            sitemap: EQUAL_WEIGHT,
            open_graph: EQUAL_WEIGHT,
            meta_description: EQUAL_WEIGHT,
            mobile_viewport: EQUAL_WEIGHT,
            favicon: EQUAL_WEIGHT,
        }
    }
}

impl CheckWeights {
    /// Weight of a single check.
    pub fn get(&self, id: CheckId) -> f64 {
        match id {
            CheckId::Ssl => self.ssl,
            CheckId::PageSpeed => self.page_speed,
            CheckId::RobotsTxt => self.robots_txt,
            CheckId::Sitemap => self.sitemap,
            CheckId::OpenGraph => self.open_graph,
            CheckId::MetaDescription => self.meta_description,
            CheckId::MobileViewport => self.mobile_viewport,
            CheckId::Favicon => self.favicon,
        }
    }

    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        CheckId::ALL.iter().map(|id| self.get(*id)).sum()
    }
}

/// Minimum score for each verdict tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerdictThresholds {
    /// At or above: ready
    pub ready: u8,
    /// At or above (and below `ready`): almost ready
    pub almost_ready: u8,
}

impl Default for VerdictThresholds {
    fn default() -> Self {
        Self {
            ready: 80,
            almost_ready: 55,
        }
    }
}

/// Launch platform lookup settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenceConfig {
    /// Hacker News search endpoint (Algolia API)
    pub hacker_news_url: String,
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self {
            hacker_news_url: "https://hn.algolia.com/api/v1/search".to_string(),
        }
    }
}
