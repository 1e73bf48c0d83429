//! Observability for the gateway.
//!
//! Structured JSON logging with explicit severities. Metrics and
//! tracing exporters are out of scope; log lines are the operational
//! surface.

mod logger;

pub use logger::{LogLevel, Logger};
