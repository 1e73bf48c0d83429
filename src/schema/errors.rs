//! Schema error types.
//!
//! Two very different failure classes live here:
//! - configuration errors (`SchemaError`): fatal, raised while wiring
//!   routes at startup, never at request time
//! - validation errors (`ValidationError`): expected, per-request,
//!   returned as data with every failing field listed

use serde::Serialize;
use std::fmt;

/// Severity levels for schema errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Client request rejected.
    Reject,
    /// Startup must halt.
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Configuration error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// A route references a schema that was never registered.
    HrSchemaNotRegistered,
    /// An already-registered schema was registered again.
    HrSchemaAlreadyRegistered,
}

impl SchemaErrorCode {
    /// Returns the string code.
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::HrSchemaNotRegistered => "HR_SCHEMA_NOT_REGISTERED",
            SchemaErrorCode::HrSchemaAlreadyRegistered => "HR_SCHEMA_ALREADY_REGISTERED",
        }
    }

    /// Returns the severity level. Both codes are startup-time
    /// invariant violations.
    pub fn severity(&self) -> Severity {
        Severity::Fatal
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Fatal schema configuration error.
#[derive(Debug, Clone)]
pub struct SchemaError {
    code: SchemaErrorCode,
    message: String,
    resource: String,
    operation: String,
}

impl SchemaError {
    /// A route references an unregistered schema.
    pub fn not_registered(resource: impl Into<String>, operation: impl Into<String>) -> Self {
        let resource = resource.into();
        let operation = operation.into();
        Self {
            code: SchemaErrorCode::HrSchemaNotRegistered,
            message: format!("no schema registered for {} {}", resource, operation),
            resource,
            operation,
        }
    }

    /// A schema key was registered twice.
    pub fn already_registered(resource: impl Into<String>, operation: impl Into<String>) -> Self {
        let resource = resource.into();
        let operation = operation.into();
        Self {
            code: SchemaErrorCode::HrSchemaAlreadyRegistered,
            message: format!("schema for {} {} is already registered", resource, operation),
            resource,
            operation,
        }
    }

    /// Returns the error code.
    pub fn code(&self) -> SchemaErrorCode {
        self.code
    }

    /// Returns the severity level.
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the resource name.
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Returns the operation name.
    pub fn operation(&self) -> &str {
        &self.operation
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for SchemaError {}

/// Result type for schema configuration operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Section-qualified field path, e.g. `body.employeeId`.
    #[serde(rename = "field")]
    pub path: String,
    /// Human-readable message, e.g. `employeeId is required`.
    pub message: String,
}

impl FieldError {
    /// Create a field error.
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Per-request validation failure: the ordered list of every failing
/// field. Always fully collected; validation never stops at the first
/// problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    /// Wrap collected field errors.
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    /// Returns the number of field errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if there are no field errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns a slice of all field errors, in declaration order.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Consumes self and returns the inner list.
    pub fn into_inner(self) -> Vec<FieldError> {
        self.errors
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", e)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            SchemaErrorCode::HrSchemaNotRegistered.code(),
            "HR_SCHEMA_NOT_REGISTERED"
        );
        assert_eq!(
            SchemaErrorCode::HrSchemaAlreadyRegistered.code(),
            "HR_SCHEMA_ALREADY_REGISTERED"
        );
    }

    #[test]
    fn test_configuration_errors_are_fatal() {
        let err = SchemaError::not_registered("leave", "create");
        assert_eq!(err.severity(), Severity::Fatal);
        let err = SchemaError::already_registered("leave", "create");
        assert_eq!(err.severity(), Severity::Fatal);
    }

    #[test]
    fn test_schema_error_display() {
        let err = SchemaError::not_registered("attendance", "update");
        let display = err.to_string();
        assert!(display.contains("FATAL"));
        assert!(display.contains("HR_SCHEMA_NOT_REGISTERED"));
        assert!(display.contains("attendance"));
        assert!(display.contains("update"));
    }

    #[test]
    fn test_field_error_serializes_with_field_key() {
        let err = FieldError::new("body.employeeId", "employeeId is required");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["field"], "body.employeeId");
        assert_eq!(json["message"], "employeeId is required");
    }

    #[test]
    fn test_validation_error_preserves_order() {
        let err = ValidationError::new(vec![
            FieldError::new("params.id", "Department ID is required"),
            FieldError::new("body.name", "Department name is required"),
        ]);
        assert_eq!(err.len(), 2);
        assert_eq!(err.errors()[0].path, "params.id");
        assert_eq!(err.errors()[1].path, "body.name");
        let display = err.to_string();
        assert!(display.contains("Department ID is required"));
        assert!(display.contains("; "));
    }
}
