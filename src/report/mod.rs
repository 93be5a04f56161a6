//! Audit report model and output formatters.
//!
//! A [`Report`] is assembled once per audit and handed to a
//! [`ReportFormatter`]:
//!
//! - [`human`] - bordered terminal report, colored or plain
//! - [`json`] - machine-readable JSON for `--json`

pub mod human;
pub mod json;

use std::io::Write;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::checks::{failed_names, CheckOutcome};
use crate::config::ScoringConfig;
use crate::fetch::FetchResult;
use crate::presence::PresenceResult;
use crate::score::{score, verdict, Score, Verdict};
use crate::target::Target;

pub use human::HumanFormatter;
pub use json::JsonFormatter;

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Trait for formatting an audit report.
pub trait ReportFormatter {
    /// Format the report to the given writer.
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()>;
}

/// Summary of the page fetch shown under "WEBSITE STATUS".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageStatus {
    /// Any HTTP response arrived, whatever its status.
    pub live: bool,
    /// The target uses https.
    pub https: bool,
    /// HTTP status of the page, if a response arrived.
    pub status: Option<u16>,
    /// Response time, only known when a response arrived.
    pub response_time: Option<Duration>,
    /// Why the page fetch failed, if it did.
    pub error: Option<String>,
}

impl PageStatus {
    pub fn from_fetch(target: &Target, page: &FetchResult) -> Self {
        let live = page.connected();
        Self {
            live,
            https: target.is_https(),
            status: page.status,
            response_time: live.then_some(page.elapsed),
            error: page.failure.as_ref().map(ToString::to_string),
        }
    }
}

/// Everything one audit produced.
#[derive(Debug, Clone)]
pub struct Report {
    pub target: Target,
    pub page: PageStatus,
    /// One outcome per check, in check order.
    pub outcomes: Vec<CheckOutcome>,
    pub score: Score,
    pub verdict: Verdict,
    /// Presence lookups, when requested.
    pub presence: Option<Vec<PresenceResult>>,
    pub checked_at: DateTime<Utc>,
}

impl Report {
    /// Score the outcomes and assemble a report.
    pub fn new(
        target: Target,
        page: &FetchResult,
        outcomes: Vec<CheckOutcome>,
        scoring: &ScoringConfig,
    ) -> Self {
        let score = score(&outcomes, scoring);
        let verdict = verdict(score.value, &scoring.thresholds);
        let page = PageStatus::from_fetch(&target, page);

        Self {
            target,
            page,
            outcomes,
            score,
            verdict,
            presence: None,
            checked_at: Utc::now(),
        }
    }

    /// Attach presence lookup results.
    pub fn with_presence(mut self, presence: Vec<PresenceResult>) -> Self {
        self.presence = Some(presence);
        self
    }

    /// Names of failed checks, in priority order.
    pub fn fixes(&self) -> Vec<&'static str> {
        failed_names(&self.outcomes)
    }
}

/// Response time as shown in reports, e.g. `0.42s`.
pub fn format_response_time(elapsed: Duration) -> String {
    format!("{:.2}s", elapsed.as_secs_f64())
}


#[cfg(test)]
mod tests {
    use super::fixtures;
    use super::*;
    use crate::checks::CheckId;

    #[test]
    fn report_scores_outcomes() {
        let report = fixtures::report(&[CheckId::Ssl, CheckId::OpenGraph]);
        assert_eq!(report.score.value, 75);
        assert_eq!(report.score.passed, 6);
        assert_eq!(report.verdict, Verdict::AlmostReady);
        assert_eq!(report.fixes(), vec!["SSL/HTTPS", "Open Graph tags"]);
        assert!(report.presence.is_none());
    }

    #[test]
    fn page_status_for_live_page() {
        let report = fixtures::report(&[]);
        assert!(report.page.live);
        assert!(report.page.https);
        assert_eq!(report.page.status, Some(200));
        assert_eq!(report.page.response_time, Some(Duration::from_millis(420)));
        assert_eq!(report.page.error, None);
    }

    #[test]
    fn page_status_for_unreachable_page() {
        let report = fixtures::unreachable_report();
        assert!(!report.page.live);
        assert!(!report.page.https);
        assert_eq!(report.page.status, None);
        assert_eq!(report.page.response_time, None);
        assert_eq!(
            report.page.error.as_deref(),
            Some("connection failed: dns error")
        );
    }

    #[test]
    fn response_time_format() {
        assert_eq!(format_response_time(Duration::from_millis(420)), "0.42s");
        assert_eq!(format_response_time(Duration::from_secs(3)), "3.00s");
    }
}
