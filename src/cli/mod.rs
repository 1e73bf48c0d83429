//! Command-line interface for the gateway.

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::run;
pub use errors::{CliError, CliErrorCode, CliResult};
