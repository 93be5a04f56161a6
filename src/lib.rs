//! Launchcheck - launch readiness checks for a website.
//!
//! Given a domain or URL, launchcheck fetches the page plus `/robots.txt`,
//! `/sitemap.xml` and `/favicon.ico`, evaluates eight fixed checks, scores
//! them and prints a verdict with a prioritized fix list.
//!
//! # Modules
//!
//! - [`target`] - Turning user input into a canonical target URL
//! - [`fetch`] - HTTP fetching behind the [`fetch::Fetcher`] trait
//! - [`checks`] - The eight launch checks
//! - [`score`] - Scoring and verdict tiers
//! - [`report`] - Human and JSON report formatters
//! - [`presence`] - Optional launch platform lookup
//! - [`config`] - Configuration loading and validation
//! - [`cli`] - Command-line interface and argument parsing
//! - [`ui`] - Theme, status icons and spinner
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use launchcheck::cli::run_audit;
//! use launchcheck::config::LaunchConfig;
//! use launchcheck::fetch::{ResourceKind, StaticFetcher};
//! use launchcheck::score::Verdict;
//! use launchcheck::target::resolve_target;
//! use std::time::Duration;
//!
//! let fetcher = StaticFetcher::new()
//!     .with_page(200, Duration::from_millis(800), "<html></html>")
//!     .with_status(ResourceKind::Robots, 200)
//!     .with_status(ResourceKind::Sitemap, 200)
//!     .with_status(ResourceKind::Favicon, 200);
//!
//! let target = resolve_target("example.com").unwrap();
//! let report = run_audit(target, &fetcher, &LaunchConfig::default());
//!
//! // SSL, speed, robots, sitemap and favicon pass; the tag checks fail.
//! assert_eq!(report.score.value, 62);
//! assert_eq!(report.verdict, Verdict::AlmostReady);
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod presence;
pub mod report;
pub mod score;
pub mod target;
pub mod ui;

pub use error::{LaunchError, Result};
