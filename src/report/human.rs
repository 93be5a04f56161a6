//! Human-readable report formatter.

use std::io::Write;

use super::{format_response_time, Report, ReportFormatter};
use crate::ui::{LaunchTheme, StatusKind};

const WIDTH: usize = 60;
const TITLE: &str = "LAUNCH CHECK";

/// Formats the report as a bordered terminal summary.
pub struct HumanFormatter {
    theme: LaunchTheme,
    /// Unicode icons when true, bracketed words otherwise.
    unicode: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        if use_color {
            Self::with_theme(LaunchTheme::new(), true)
        } else {
            Self::with_theme(LaunchTheme::plain(), false)
        }
    }

    pub fn with_theme(theme: LaunchTheme, unicode: bool) -> Self {
        Self { theme, unicode }
    }

    fn border<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "{}", self.theme.border.apply_to("=".repeat(WIDTH)))
    }

    fn section<W: Write>(&self, writer: &mut W, title: &str) -> std::io::Result<()> {
        writeln!(writer)?;
        writeln!(writer, "{}", self.theme.header.apply_to(title))
    }

    fn key_value<W: Write>(&self, writer: &mut W, key: &str, value: &str) -> std::io::Result<()> {
        writeln!(
            writer,
            "  {} {}",
            self.theme.key.apply_to(format!("{:<15}", format!("{}:", key))),
            self.theme.value.apply_to(value)
        )
    }

    fn status_line(&self, kind: StatusKind, msg: &str) -> String {
        if self.unicode {
            kind.format(&self.theme, msg)
        } else {
            kind.format_plain(msg)
        }
    }

    fn yes_no(value: bool) -> &'static str {
        if value {
            "yes"
        } else {
            "no"
        }
    }

    fn write_header<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        self.border(writer)?;
        writeln!(writer, "  {}", self.theme.highlight.apply_to(TITLE))?;
        writeln!(writer, "  {}", report.target)?;
        writeln!(
            writer,
            "  {}",
            self.theme
                .dim
                .apply_to(report.checked_at.format("%Y-%m-%d %H:%M:%S UTC"))
        )?;
        self.border(writer)
    }

    fn write_status<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        let page = &report.page;
        self.section(writer, "WEBSITE STATUS")?;
        self.key_value(writer, "Live", Self::yes_no(page.live))?;
        self.key_value(writer, "HTTPS", Self::yes_no(page.https))?;

        let status = match (page.status, &page.error) {
            (Some(code), _) => code.to_string(),
            (None, Some(error)) => format!("N/A ({})", error),
            (None, None) => "N/A".to_string(),
        };
        self.key_value(writer, "HTTP status", &status)?;

        let time = page
            .response_time
            .map(format_response_time)
            .unwrap_or_else(|| "N/A".to_string());
        self.key_value(writer, "Response time", &time)
    }

    fn write_checklist<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        self.section(
            writer,
            &format!(
                "LAUNCH CHECKLIST ({}/{} passed)",
                report.score.passed, report.score.total
            ),
        )?;

        for outcome in &report.outcomes {
            let line = self.status_line(StatusKind::from(outcome.passed), outcome.name());
            match &outcome.hint {
                Some(hint) if !outcome.passed => writeln!(
                    writer,
                    "  {}  {}",
                    line,
                    self.theme.hint.apply_to(format!("<- {}", hint))
                )?,
                _ => writeln!(writer, "  {}", line)?,
            }
        }
        Ok(())
    }

    fn write_score<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        let style = self.theme.verdict(report.verdict);
        writeln!(writer)?;
        self.border(writer)?;
        writeln!(
            writer,
            "  {} {}",
            self.theme.highlight.apply_to("LAUNCH READINESS SCORE:"),
            style.apply_to(report.score)
        )?;
        writeln!(writer, "  {}", style.apply_to(report.verdict.headline()))?;
        self.border(writer)
    }

    fn write_fixes<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        let fixes = report.fixes();
        if fixes.is_empty() {
            return Ok(());
        }

        self.section(writer, "Priority fixes")?;
        for (i, name) in fixes.iter().enumerate() {
            writeln!(writer, "  {}. {}", i + 1, name)?;
        }
        Ok(())
    }

    fn write_presence<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        let Some(presence) = &report.presence else {
            return Ok(());
        };

        self.section(writer, "LAUNCH VISIBILITY")?;
        if presence.is_empty() {
            writeln!(
                writer,
                "  {}",
                self.theme.dim.apply_to("No product name to search for")
            )?;
        }
        for result in presence {
            let detail = match result.found {
                Some(true) => "mentioned",
                Some(false) => "not found",
                None => "lookup failed",
            };
            let line = self.status_line(
                StatusKind::from(result.found),
                &format!("{}: {} (\"{}\")", result.platform, detail, result.query),
            );
            writeln!(writer, "  {}", line)?;
        }
        Ok(())
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        self.write_header(report, writer)?;
        self.write_status(report, writer)?;
        self.write_checklist(report, writer)?;
        self.write_score(report, writer)?;
        self.write_fixes(report, writer)?;
        self.write_presence(report, writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::CheckId;
    use crate::presence::PresenceResult;
    use crate::report::fixtures;

    fn render(report: &Report) -> String {
        let mut output = Vec::new();
        HumanFormatter::new(false)
            .format(report, &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn sections_appear_in_order() {
        let output = render(&fixtures::report(&[CheckId::Favicon]));
        let positions: Vec<_> = [
            "LAUNCH CHECK",
            "WEBSITE STATUS",
            "LAUNCH CHECKLIST (7/8 passed)",
            "LAUNCH READINESS SCORE: 87/100",
            "LAUNCH READY: go live with confidence",
            "Priority fixes",
        ]
        .iter()
        .map(|needle| output.find(needle).unwrap_or_else(|| panic!("missing {}", needle)))
        .collect();

        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn header_shows_target() {
        let output = render(&fixtures::report(&[]));
        assert!(output.starts_with(&"=".repeat(WIDTH)));
        assert!(output.contains("  https://example.com/\n"));
    }

    #[test]
    fn status_section_values() {
        let output = render(&fixtures::report(&[]));
        assert!(output.contains("Live:           yes"));
        assert!(output.contains("HTTPS:          yes"));
        assert!(output.contains("HTTP status:    200"));
        assert!(output.contains("Response time:  0.42s"));
    }

    #[test]
    fn unreachable_page_shows_na() {
        let output = render(&fixtures::unreachable_report());
        assert!(output.contains("Live:           no"));
        assert!(output.contains("HTTP status:    N/A (connection failed: dns error)"));
        assert!(output.contains("Response time:  N/A"));
        assert!(output.contains("NOT READY: critical issues need fixing"));
    }

    #[test]
    fn checklist_lines_with_hints() {
        let output = render(&fixtures::report(&[CheckId::OpenGraph]));
        assert!(output.contains("  [ok] SSL/HTTPS\n"));
        assert!(output.contains("  [FAIL] Open Graph tags  <- fix open_graph\n"));
    }

    #[test]
    fn fixes_listed_in_check_order() {
        let output = render(&fixtures::report(&[CheckId::Favicon, CheckId::Ssl]));
        assert!(output.contains("  1. SSL/HTTPS\n  2. Favicon\n"));
    }

    #[test]
    fn no_fixes_section_when_all_pass() {
        let output = render(&fixtures::report(&[]));
        assert!(output.contains("LAUNCH READINESS SCORE: 100/100"));
        assert!(!output.contains("Priority fixes"));
    }

    #[test]
    fn presence_section_only_when_requested() {
        let report = fixtures::report(&[]);
        assert!(!render(&report).contains("LAUNCH VISIBILITY"));

        let report = report.with_presence(vec![PresenceResult {
            platform: "Hacker News",
            query: "example".to_string(),
            found: Some(false),
        }]);
        let output = render(&report);
        assert!(output.contains("LAUNCH VISIBILITY"));
        assert!(output.contains("[warn] Hacker News: not found (\"example\")"));
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let output = render(&fixtures::report(&[CheckId::Ssl]));
        assert!(!output.contains('\x1b'));
    }

    #[test]
    fn unicode_icons_when_colored() {
        let mut output = Vec::new();
        HumanFormatter::with_theme(LaunchTheme::plain(), true)
            .format(&fixtures::report(&[CheckId::Ssl]), &mut output)
            .unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("✗ SSL/HTTPS"));
        assert!(output.contains("✓ robots.txt"));
    }
}
