//! CLI command implementations
//!
//! `serve` builds the full registry and route table before binding;
//! any configuration error halts startup here rather than surfacing
//! at request time.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::auth::{JwtConfig, JwtVerifier};
use crate::controllers::LoopbackController;
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::schema::{validate, Operation, RawRequest, Resource, SchemaRegistry};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Serve { config, port } => serve(config, port),
        Command::Schemas => schemas(),
        Command::Check {
            resource,
            operation,
            body,
            params,
        } => check(&resource, &operation, body.as_deref(), params),
    }
}

fn load_config(path: Option<PathBuf>, port: Option<u16>) -> CliResult<HttpServerConfig> {
    let mut config = match path {
        Some(path) => HttpServerConfig::from_file(&path).map_err(|e| CliError::config_error(e))?,
        None => HttpServerConfig::default(),
    };
    if let Some(port) = port {
        config.port = port;
    }
    Ok(config)
}

fn jwt_config() -> JwtConfig {
    let mut config = JwtConfig::default();
    if let Ok(secret) = std::env::var("HRGATE_JWT_SECRET") {
        if !secret.is_empty() {
            config.secret = secret;
        }
    }
    config
}

fn serve(config_path: Option<PathBuf>, port: Option<u16>) -> CliResult<()> {
    let config = load_config(config_path, port)?;

    let registry = SchemaRegistry::hr_catalog()
        .map_err(|e| CliError::boot_failed(e.to_string()))?;
    let server = HttpServer::build(
        config,
        &registry,
        Arc::new(LoopbackController::new()),
        Arc::new(JwtVerifier::new(jwt_config())),
    )
    .map_err(|e| CliError::boot_failed(e.to_string()))?;

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("cannot start runtime: {}", e)))?;
    runtime
        .block_on(server.serve())
        .map_err(|e| CliError::boot_failed(e.to_string()))
}

fn schemas() -> CliResult<()> {
    let registry = SchemaRegistry::hr_catalog()
        .map_err(|e| CliError::boot_failed(e.to_string()))?;

    let mut listing = Vec::new();
    for (resource, operation) in registry.keys() {
        let schema = registry
            .get(resource, operation)
            .map_err(|e| CliError::boot_failed(e.to_string()))?;
        listing.push(json!({
            "resource": resource,
            "operation": operation,
            "schema": schema,
        }));
    }

    print_json(&json!({ "schemas": listing }))
}

fn check(
    resource: &str,
    operation: &str,
    body: Option<&str>,
    params: Vec<(String, String)>,
) -> CliResult<()> {
    let resource: Resource = resource
        .parse()
        .map_err(|e| CliError::invalid_arguments(e))?;
    let operation: Operation = operation
        .parse()
        .map_err(|e| CliError::invalid_arguments(e))?;

    let body: Value = match body {
        Some(text) => serde_json::from_str(text)
            .map_err(|e| CliError::invalid_arguments(format!("invalid --body JSON: {}", e)))?,
        None => Value::Null,
    };

    let registry = SchemaRegistry::hr_catalog()
        .map_err(|e| CliError::boot_failed(e.to_string()))?;
    let schema = registry
        .get(resource, operation)
        .map_err(|e| CliError::boot_failed(e.to_string()))?;

    let raw = RawRequest {
        params: params.into_iter().collect::<BTreeMap<_, _>>(),
        body,
    };

    match validate(schema, &raw) {
        Ok(normalized) => print_json(&json!({
            "valid": true,
            "normalized": normalized.into_value(),
        })),
        Err(errors) => {
            print_json(&json!({
                "valid": false,
                "details": errors.errors(),
            }))?;
            Err(CliError::check_failed(format!(
                "{} field error(s) for {} {}",
                errors.len(),
                resource,
                operation
            )))
        }
    }
}

fn print_json(value: &Value) -> CliResult<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::invalid_arguments(e.to_string()))?;
    println!("{}", rendered);
    Ok(())
}
