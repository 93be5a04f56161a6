//! Launch readiness checks.
//!
//! Eight fixed, independent checks run against a [`SiteSnapshot`]. Each one
//! is a pure function (see [`evaluators`]) producing exactly one
//! [`CheckOutcome`]; none reads another's result. Outcomes are always
//! returned in [`CheckId::ALL`] order, which is also display and fix-priority
//! order.
//!
//! - [`evaluators`] - one function per check
//! - [`html`] - `<meta>`/`<link>` tag scanning used by the body checks

pub mod evaluators;
pub mod html;

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::fetch::SiteSnapshot;
use crate::target::Target;

/// Identifies one of the launch checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckId {
    Ssl,
    PageSpeed,
    RobotsTxt,
    Sitemap,
    OpenGraph,
    MetaDescription,
    MobileViewport,
    Favicon,
}

impl CheckId {
    /// All checks in priority order.
    pub const ALL: [CheckId; 8] = [
        CheckId::Ssl,
        CheckId::PageSpeed,
        CheckId::RobotsTxt,
        CheckId::Sitemap,
        CheckId::OpenGraph,
        CheckId::MetaDescription,
        CheckId::MobileViewport,
        CheckId::Favicon,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ssl => "SSL/HTTPS",
            Self::PageSpeed => "Fast load (<2s)",
            Self::RobotsTxt => "robots.txt",
            Self::Sitemap => "sitemap.xml",
            Self::OpenGraph => "Open Graph tags",
            Self::MetaDescription => "Meta description",
            Self::MobileViewport => "Mobile viewport",
            Self::Favicon => "Favicon",
        }
    }

    /// Stable machine key (config and JSON output).
    pub fn key(self) -> &'static str {
        match self {
            Self::Ssl => "ssl",
            Self::PageSpeed => "page_speed",
            Self::RobotsTxt => "robots_txt",
            Self::Sitemap => "sitemap",
            Self::OpenGraph => "open_graph",
            Self::MetaDescription => "meta_description",
            Self::MobileViewport => "mobile_viewport",
            Self::Favicon => "favicon",
        }
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub id: CheckId,
    pub passed: bool,
    /// What to fix; only present on failure.
    pub hint: Option<String>,
}

impl CheckOutcome {
    pub fn pass(id: CheckId) -> Self {
        Self {
            id,
            passed: true,
            hint: None,
        }
    }

    pub fn fail(id: CheckId, hint: impl Into<String>) -> Self {
        Self {
            id,
            passed: false,
            hint: Some(hint.into()),
        }
    }

    /// Display name of the check.
    pub fn name(&self) -> &'static str {
        self.id.name()
    }
}

/// Everything a check may look at.
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    pub target: &'a Target,
    pub site: &'a SiteSnapshot,
    /// Page load budget for [`CheckId::PageSpeed`].
    pub speed_threshold: Duration,
}

/// Run one check.
pub fn evaluate(id: CheckId, ctx: &CheckContext<'_>) -> CheckOutcome {
    let outcome = match id {
        CheckId::Ssl => evaluators::ssl(ctx),
        CheckId::PageSpeed => evaluators::page_speed(ctx),
        CheckId::RobotsTxt => evaluators::robots_txt(ctx),
        CheckId::Sitemap => evaluators::sitemap(ctx),
        CheckId::OpenGraph => evaluators::open_graph(ctx),
        CheckId::MetaDescription => evaluators::meta_description(ctx),
        CheckId::MobileViewport => evaluators::mobile_viewport(ctx),
        CheckId::Favicon => evaluators::favicon(ctx),
    };
    tracing::debug!("Check {} -> passed={}", id, outcome.passed);
    outcome
}

/// Run every check, in priority order.
pub fn evaluate_all(ctx: &CheckContext<'_>) -> Vec<CheckOutcome> {
    CheckId::ALL.iter().map(|id| evaluate(*id, ctx)).collect()
}

/// Names of failed checks, in priority order.
pub fn failed_names(outcomes: &[CheckOutcome]) -> Vec<&'static str> {
    outcomes
        .iter()
        .filter(|o| !o.passed)
        .map(CheckOutcome::name)
        .collect()
}
