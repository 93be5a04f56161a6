//! Launchcheck CLI entry point.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use launchcheck::cli::{AuditCommand, Cli, Command};
use launchcheck::ui::LaunchTheme;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN, so logs stay out of the report
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("launchcheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("launchcheck=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Launchcheck starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let command = AuditCommand::from_cli(&cli);
    let mut stdout = io::stdout().lock();

    match command.execute(&mut stdout) {
        Ok(result) => ExitCode::from(u8::try_from(result.exit_code).unwrap_or(1)),
        Err(e) => {
            eprintln!("{}", LaunchTheme::detect().format_error(&format!("Error: {}", e)));
            ExitCode::from(1)
        }
    }
}
