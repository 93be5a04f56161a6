//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.

pub mod audit;
pub mod dispatcher;

pub use audit::{run_audit, AuditCommand};
pub use dispatcher::{Command, CommandResult};
