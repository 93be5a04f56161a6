//! Audit command implementation.
//!
//! `launchcheck <TARGET>` resolves the target, fetches the site, runs every
//! check and prints the report. The exit code does not depend on the score:
//! any completed audit exits 0.

use std::io::Write;
use std::path::PathBuf;

use crate::checks::{evaluate_all, CheckContext};
use crate::cli::args::Cli;
use crate::config::{load_config, validate, LaunchConfig};
use crate::error::Result;
use crate::fetch::{fetch_site, Fetcher, HttpFetcher};
use crate::presence::PresenceChecker;
use crate::report::{HumanFormatter, JsonFormatter, OutputFormat, Report, ReportFormatter};
use crate::target::{resolve_target, Target};
use crate::ui::{should_use_colors, LaunchTheme, ProgressSpinner};

use super::dispatcher::{Command, CommandResult};

/// Fetch, check and score one target.
///
/// Never fails: unreachable resources surface as failed checks.
pub fn run_audit(target: Target, fetcher: &dyn Fetcher, config: &LaunchConfig) -> Report {
    let site = fetch_site(&target, fetcher);
    let outcomes = evaluate_all(&CheckContext {
        target: &target,
        site: &site,
        speed_threshold: config.speed_threshold(),
    });

    Report::new(target, &site.page, outcomes, &config.scoring)
}

/// The audit command implementation.
#[derive(Debug, Clone)]
pub struct AuditCommand {
    /// Raw target as typed by the user.
    pub target: String,
    pub format: OutputFormat,
    /// Overrides both request timeouts.
    pub timeout: Option<u64>,
    pub config: Option<PathBuf>,
    pub presence: bool,
    /// Suppress the progress spinner.
    pub quiet: bool,
    pub use_color: bool,
}

impl AuditCommand {
    /// Build the command from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            target: cli.target.clone(),
            format: if cli.json {
                OutputFormat::Json
            } else {
                OutputFormat::Human
            },
            timeout: cli.timeout,
            config: cli.config.clone(),
            presence: cli.presence,
            quiet: cli.quiet,
            use_color: !cli.no_color && should_use_colors(),
        }
    }

    /// Load the config file and apply command-line overrides.
    fn effective_config(&self) -> Result<LaunchConfig> {
        let mut config = load_config(self.config.as_deref())?;
        if let Some(secs) = self.timeout {
            config = config.with_timeout_secs(secs);
        }
        validate(&config)?;
        Ok(config)
    }

    fn spinner(&self, target: &Target) -> ProgressSpinner {
        if self.quiet || self.format == OutputFormat::Json {
            return ProgressSpinner::hidden();
        }
        let theme = if self.use_color {
            LaunchTheme::new()
        } else {
            LaunchTheme::plain()
        };
        ProgressSpinner::new(&format!("Checking {}...", target), theme)
    }
}

impl Command for AuditCommand {
    fn execute(&self, mut out: &mut dyn Write) -> Result<CommandResult> {
        // Resolve before anything touches the network.
        let target = resolve_target(&self.target)?;
        let config = self.effective_config()?;
        let fetcher = HttpFetcher::new(&config.fetch)?;
        let presence = if self.presence {
            Some(PresenceChecker::new(&config.presence, &config.fetch)?)
        } else {
            None
        };

        let spinner = self.spinner(&target);
        tracing::debug!("Auditing {}", target);
        let mut report = run_audit(target, &fetcher, &config);

        if let Some(checker) = presence {
            spinner.set_message("Searching launch platforms...");
            let found = checker.check(&report.target);
            report = report.with_presence(found);
        }
        spinner.clear();

        match self.format {
            OutputFormat::Human => HumanFormatter::new(self.use_color).format(&report, &mut out)?,
            OutputFormat::Json => JsonFormatter::new().format(&report, &mut out)?,
        }
        out.flush()?;

        Ok(CommandResult::success())
    }
}
