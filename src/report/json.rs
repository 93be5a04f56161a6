//! JSON report formatter.
//!
//! Formats the report as machine-readable JSON for scripting and CI.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Report, ReportFormatter};
use crate::checks::CheckId;
use crate::presence::PresenceResult;
use crate::score::Verdict;

/// Formats the report as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonReport<'a> {
    target: &'a str,
    checked_at: DateTime<Utc>,
    score: u8,
    verdict: Verdict,
    passed: usize,
    total: usize,
    page: JsonPage<'a>,
    checks: Vec<JsonCheck<'a>>,
    fixes: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    presence: Option<&'a [PresenceResult]>,
}

#[derive(Serialize)]
struct JsonPage<'a> {
    live: bool,
    https: bool,
    status: Option<u16>,
    response_time_ms: Option<u128>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

#[derive(Serialize)]
struct JsonCheck<'a> {
    id: CheckId,
    name: &'static str,
    passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<&'a str>,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        let output = JsonReport {
            target: report.target.url().as_str(),
            checked_at: report.checked_at,
            score: report.score.value,
            verdict: report.verdict,
            passed: report.score.passed,
            total: report.score.total,
            page: JsonPage {
                live: report.page.live,
                https: report.page.https,
                status: report.page.status,
                response_time_ms: report.page.response_time.map(|d| d.as_millis()),
                error: report.page.error.as_deref(),
            },
            checks: report
                .outcomes
                .iter()
                .map(|o| JsonCheck {
                    id: o.id,
                    name: o.name(),
                    passed: o.passed,
                    hint: o.hint.as_deref(),
                })
                .collect(),
            fixes: report.fixes(),
            presence: report.presence.as_deref(),
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures;

    fn render(report: &Report) -> serde_json::Value {
        let mut output = Vec::new();
        JsonFormatter::new().format(report, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn produces_valid_json() {
        let parsed = render(&fixtures::report(&[CheckId::Ssl, CheckId::OpenGraph]));
        assert_eq!(parsed["target"], "https://example.com/");
        assert_eq!(parsed["score"], 75);
        assert_eq!(parsed["verdict"], "almost ready");
        assert_eq!(parsed["passed"], 6);
        assert_eq!(parsed["total"], 8);
        assert!(parsed["checked_at"].is_string());
    }

    #[test]
    fn checks_in_order_with_hints_on_failures() {
        let parsed = render(&fixtures::report(&[CheckId::OpenGraph]));
        let checks = parsed["checks"].as_array().unwrap();
        assert_eq!(checks.len(), 8);
        assert_eq!(checks[0]["id"], "ssl");
        assert_eq!(checks[0]["name"], "SSL/HTTPS");
        assert!(checks[0].get("hint").is_none());
        assert_eq!(checks[4]["id"], "open_graph");
        assert_eq!(checks[4]["passed"], false);
        assert_eq!(checks[4]["hint"], "fix open_graph");
        assert_eq!(parsed["fixes"], serde_json::json!(["Open Graph tags"]));
    }

    #[test]
    fn page_summary() {
        let parsed = render(&fixtures::report(&[]));
        assert_eq!(parsed["page"]["live"], true);
        assert_eq!(parsed["page"]["status"], 200);
        assert_eq!(parsed["page"]["response_time_ms"], 420);
        assert!(parsed["page"].get("error").is_none());

        let parsed = render(&fixtures::unreachable_report());
        assert_eq!(parsed["page"]["live"], false);
        assert!(parsed["page"]["status"].is_null());
        assert!(parsed["page"]["response_time_ms"].is_null());
        assert_eq!(parsed["page"]["error"], "connection failed: dns error");
    }

    #[test]
    fn presence_omitted_unless_requested() {
        let report = fixtures::report(&[]);
        assert!(render(&report).get("presence").is_none());

        let report = report.with_presence(vec![PresenceResult {
            platform: "Hacker News",
            query: "example".to_string(),
            found: None,
        }]);
        let parsed = render(&report);
        assert_eq!(parsed["presence"][0]["platform"], "Hacker News");
        assert!(parsed["presence"][0]["found"].is_null());
    }
}
