//! hrgate - Request-validation and routing gateway for HR services
//!
//! Declarative request schemas per resource operation, one generic
//! validator, and a declarative route table behind an authentication
//! gate. Controllers are collaborators invoked only after validation
//! succeeds.

pub mod auth;
pub mod cli;
pub mod controllers;
pub mod http_server;
pub mod observability;
pub mod schema;
