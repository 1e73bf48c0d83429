//! Request schema subsystem.
//!
//! Declarative field rules per resource operation, a registry
//! populated once at startup, and one generic validator that either
//! normalizes a request or reports every failing field.
//!
//! # Design Principles
//!
//! - Schemas are pure data, immutable after registration
//! - Missing registrations fail startup, never a request
//! - All field errors are collected; no fail-fast
//! - Unknown fields are dropped, not rejected, unless a section
//!   explicitly denies them

mod errors;
mod registry;
pub mod resources;
mod types;
mod validator;

pub use errors::{
    FieldError, SchemaError, SchemaErrorCode, SchemaResult, Severity, ValidationError,
};
pub use registry::SchemaRegistry;
pub use types::{
    FieldKind, FieldRule, Operation, RequestSchema, Resource, Section, SectionSchema,
};
pub use validator::{validate, NormalizedRequest, RawRequest};
