//! Progress spinner shown while fetching.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::theme::LaunchTheme;

/// A spinner for the fetch phase.
///
/// Draws to stderr, so it never mixes with the report on stdout.
pub struct ProgressSpinner {
    bar: ProgressBar,
    theme: LaunchTheme,
}

impl ProgressSpinner {
    /// Create and start a spinner with a message.
    pub fn new(message: &str, theme: LaunchTheme) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
            .template("{spinner:.magenta} {msg}")
        {
            bar.set_style(style);
        }
        bar.enable_steady_tick(Duration::from_millis(80));

        let spinner = Self { bar, theme };
        spinner.set_message(message);
        spinner
    }

    /// Create a spinner that doesn't show (quiet mode, JSON output).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            theme: LaunchTheme::plain(),
        }
    }

    /// Update the spinner message, dimmed per the theme.
    pub fn set_message(&self, msg: &str) {
        self.bar
            .set_message(self.theme.dim.apply_to(msg).to_string());
    }

    /// Stop the spinner and erase it.
    pub fn clear(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_spinner_accepts_messages_and_clears() {
        let spinner = ProgressSpinner::hidden();
        spinner.set_message("Searching launch platforms...");
        spinner.clear();
    }
}
