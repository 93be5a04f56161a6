//! Visual theme and styling.

use console::Style;

use crate::score::Verdict;

/// Report styling.
#[derive(Debug, Clone)]
pub struct LaunchTheme {
    /// Style for passing checks (green).
    pub success: Style,
    /// Style for warnings and the middle verdict tier (orange).
    pub warning: Style,
    /// Style for failing checks (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for section titles (magenta bold).
    pub header: Style,
    /// Style for box-drawing borders (dim).
    pub border: Style,
    /// Style for inline fix hints (magenta dim).
    pub hint: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
    /// Style for values in key-value displays (normal).
    pub value: Style,
}

impl Default for LaunchTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl LaunchTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().magenta(),
            border: Style::new().dim(),
            hint: Style::new().magenta().dim(),
            key: Style::new().bold(),
            value: Style::new(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            border: Style::new(),
            hint: Style::new(),
            key: Style::new(),
            value: Style::new(),
        }
    }

    /// Pick the colored or plain theme for the current terminal.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Style matching a verdict tier.
    pub fn verdict(&self, verdict: Verdict) -> &Style {
        match verdict {
            Verdict::Ready => &self.success,
            Verdict::AlmostReady => &self.warning,
            Verdict::NotReady => &self.error,
        }
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_formats_without_escapes() {
        let theme = LaunchTheme::plain();
        assert_eq!(theme.format_error("boom"), "✗ boom");
    }

    #[test]
    fn default_impl_matches_new() {
        let default = LaunchTheme::default();
        let new = LaunchTheme::new();
        assert_eq!(default.format_error("test"), new.format_error("test"));
    }

    #[test]
    fn verdict_styles_exist() {
        let theme = LaunchTheme::new();
        for verdict in [Verdict::Ready, Verdict::AlmostReady, Verdict::NotReady] {
            let _ = theme.verdict(verdict).apply_to(verdict.headline());
        }
    }
}
