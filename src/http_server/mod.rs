//! # HR Gateway HTTP Module
//!
//! Route wiring for the HR resource groups. Each group sits behind
//! the shared authentication gate; requests are schema-validated
//! before any controller runs.
//!
//! # Endpoints
//!
//! - `/health` - health probe (unauthenticated)
//! - `/api/v1/employees/*`
//! - `/api/v1/leaves/*`
//! - `/api/v1/attendance/*`
//! - `/api/v1/departments/*`

pub mod config;
mod errors;
mod gate;
mod routes;
mod server;

pub use config::HttpServerConfig;
pub use errors::ApiError;
pub use gate::extract_bearer_token;
pub use routes::{resource_router, resource_routes, route_table, RouteMethod, RouteSpec};
pub use server::HttpServer;
