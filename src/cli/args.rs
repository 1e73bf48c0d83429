//! CLI argument definitions using clap
//!
//! Commands:
//! - hrgate serve [--config <path>] [--port <port>]
//! - hrgate schemas
//! - hrgate check <resource> <operation> [--body <json>] [--param k=v]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// hrgate - Request-validation and routing gateway for HR services
#[derive(Parser, Debug)]
#[command(name = "hrgate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the gateway server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// List every registered request schema as JSON
    Schemas,

    /// Validate a JSON payload against a resource operation and print
    /// the normalized value or the field errors
    Check {
        /// Resource name (employee, leave, attendance, department)
        resource: String,

        /// Operation name (create, update, get-by-id, delete)
        operation: String,

        /// Request body as a JSON string
        #[arg(long)]
        body: Option<String>,

        /// Path parameter as name=value; repeatable
        #[arg(long = "param", value_parser = parse_key_val)]
        params: Vec<(String, String)>,
    },
}

/// Parse a `name=value` argument.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected name=value, got '{}'", s)),
    }
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
