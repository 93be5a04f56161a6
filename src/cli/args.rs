//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

/// Launchcheck - is your website ready to launch?
///
/// Fetches the page, /robots.txt, /sitemap.xml and /favicon.ico, runs eight
/// launch-readiness checks and prints a score with a prioritized fix list.
#[derive(Debug, Parser)]
#[command(name = "launchcheck")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Domain or URL to audit (e.g. example.com or https://example.com)
    pub target: String,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Timeout in seconds for every request (overrides config)
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Path to a YAML config file
    #[arg(short, long, env = "LAUNCHCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Also search launch platforms for the product name
    #[arg(long)]
    pub presence: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Minimal output (no progress spinner)
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
