//! Status vocabulary for check lines.
//!
//! `StatusKind` provides the icons used in the checklist: unicode glyphs on
//! a TTY, bracketed words otherwise.

use super::theme::LaunchTheme;

/// Status of one line in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed.
    Success,
    /// Check failed.
    Failed,
    /// Non-fatal warning.
    Warning,
    /// Could not be determined.
    Unknown,
}

impl StatusKind {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Warning => "⚠",
            Self::Unknown => "○",
        }
    }

    /// Bracketed text for non-TTY output.
    pub fn bracketed(self) -> &'static str {
        match self {
            Self::Success => "[ok]",
            Self::Failed => "[FAIL]",
            Self::Warning => "[warn]",
            Self::Unknown => "[??]",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &LaunchTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
            Self::Unknown => theme.dim.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &LaunchTheme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }

    /// Format a status line for non-TTY: bracketed + message.
    pub fn format_plain(self, msg: &str) -> String {
        format!("{} {}", self.bracketed(), msg)
    }
}

impl From<bool> for StatusKind {
    fn from(passed: bool) -> Self {
        if passed {
            Self::Success
        } else {
            Self::Failed
        }
    }
}

impl From<Option<bool>> for StatusKind {
    fn from(found: Option<bool>) -> Self {
        match found {
            Some(true) => Self::Success,
            Some(false) => Self::Warning,
            None => Self::Unknown,
        }
    }
}
