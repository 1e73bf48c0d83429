//! Generic request validator.
//!
//! One routine interprets every declarative schema:
//! - required fields must be present and satisfy their constraint
//! - optional absent fields are skipped (no default unless declared)
//! - every error across both sections is collected before returning
//! - on success, only declared fields survive into the normalized value
//!
//! Validation is a pure function over immutable schema data: no I/O,
//! no locking, deterministic for identical input.

use chrono::{DateTime, NaiveDate};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

use super::errors::{FieldError, ValidationError};
use super::types::{FieldKind, FieldRule, RequestSchema, Section, SectionSchema};

/// Raw request material handed to the validator: path parameters as
/// extracted strings, body as parsed JSON (`Null` when absent).
#[derive(Debug, Clone, Default)]
pub struct RawRequest {
    /// Path parameters by name.
    pub params: BTreeMap<String, String>,
    /// Parsed JSON body, `Value::Null` if the request had none.
    pub body: Value,
}

impl RawRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a path parameter.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Set the JSON body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = body;
        self
    }
}

/// The validated subset of the request: declared fields only, values
/// coerced per their rules. Extra incoming fields are dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedRequest {
    /// Validated path parameters.
    pub params: Map<String, Value>,
    /// Validated body fields.
    pub body: Map<String, Value>,
}

impl NormalizedRequest {
    /// Returns the combined `{params, body}` JSON object.
    pub fn into_value(self) -> Value {
        let mut root = Map::new();
        root.insert("params".to_string(), Value::Object(self.params));
        root.insert("body".to_string(), Value::Object(self.body));
        Value::Object(root)
    }

    /// Returns a body field by name.
    pub fn body_field(&self, name: &str) -> Option<&Value> {
        self.body.get(name)
    }

    /// Returns a path parameter by name.
    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }
}

/// Apply a schema to an incoming request.
///
/// Walks both declared sections in order (`params`, then `body`),
/// collecting every field error. Returns the normalized value only
/// when no rule failed.
pub fn validate(
    schema: &RequestSchema,
    raw: &RawRequest,
) -> Result<NormalizedRequest, ValidationError> {
    let mut errors = Vec::new();
    let mut out = NormalizedRequest::default();

    if let Some(section) = &schema.params {
        validate_params(section, &raw.params, &mut out.params, &mut errors);
    }
    if let Some(section) = &schema.body {
        validate_body(section, &raw.body, &mut out.body, &mut errors);
    }

    if errors.is_empty() {
        Ok(out)
    } else {
        Err(ValidationError::new(errors))
    }
}

fn validate_params(
    section: &SectionSchema,
    params: &BTreeMap<String, String>,
    out: &mut Map<String, Value>,
    errors: &mut Vec<FieldError>,
) {
    if section.deny_unknown {
        for name in params.keys() {
            if section.rule(name).is_none() {
                errors.push(FieldError::new(
                    field_path(Section::Params, name),
                    format!("{} is not allowed", name),
                ));
            }
        }
    }

    for rule in &section.rules {
        let path = field_path(Section::Params, &rule.name);
        match params.get(&rule.name) {
            Some(raw) => check_value(rule, &Value::String(raw.clone()), &path, out, errors),
            None => check_absent(rule, &path, out, errors),
        }
    }
}

fn validate_body(
    section: &SectionSchema,
    body: &Value,
    out: &mut Map<String, Value>,
    errors: &mut Vec<FieldError>,
) {
    let empty = Map::new();
    let fields = match body {
        // Absent body: every rule sees a missing field.
        Value::Null => &empty,
        Value::Object(map) => map,
        _ => {
            errors.push(FieldError::new(
                Section::Body.as_str(),
                "request body must be a JSON object",
            ));
            return;
        }
    };

    if section.deny_unknown {
        for name in fields.keys() {
            if section.rule(name).is_none() {
                errors.push(FieldError::new(
                    field_path(Section::Body, name),
                    format!("{} is not allowed", name),
                ));
            }
        }
    }

    for rule in &section.rules {
        let path = field_path(Section::Body, &rule.name);
        match fields.get(&rule.name) {
            Some(value) => check_value(rule, value, &path, out, errors),
            None => check_absent(rule, &path, out, errors),
        }
    }
}

/// Absent field: required fields error, optional fields are skipped
/// unless the rule declares an explicit default.
fn check_absent(
    rule: &FieldRule,
    path: &str,
    out: &mut Map<String, Value>,
    errors: &mut Vec<FieldError>,
) {
    if rule.required {
        errors.push(FieldError::new(path, required_message(rule)));
    } else if let Some(default) = &rule.default {
        out.insert(rule.name.clone(), default.clone());
    }
}

/// Present field: coerce/check against the declared kind. A passing
/// value is written into the normalized output.
fn check_value(
    rule: &FieldRule,
    value: &Value,
    path: &str,
    out: &mut Map<String, Value>,
    errors: &mut Vec<FieldError>,
) {
    match &rule.kind {
        FieldKind::Text { min_len } => match value {
            Value::String(s) if s.is_empty() => {
                let message = if rule.required {
                    required_message(rule)
                } else {
                    format!("{} must not be empty", rule.display_label())
                };
                errors.push(FieldError::new(path, message));
            }
            Value::String(s) => {
                if let Some(n) = min_len {
                    if s.chars().count() < *n {
                        errors.push(FieldError::new(
                            path,
                            format!(
                                "{} must be at least {} characters",
                                rule.display_label(),
                                n
                            ),
                        ));
                        return;
                    }
                }
                out.insert(rule.name.clone(), Value::String(s.clone()));
            }
            _ => {
                errors.push(FieldError::new(
                    path,
                    format!("{} must be a string", rule.display_label()),
                ));
            }
        },

        FieldKind::Number { min, max } => {
            let parsed = numeric_value(value);
            let Some((as_f64, normalized)) = parsed else {
                errors.push(FieldError::new(
                    path,
                    format!("{} must be a number", rule.display_label()),
                ));
                return;
            };
            if let Some(lo) = min {
                if as_f64 < *lo {
                    errors.push(FieldError::new(
                        path,
                        format!("{} must be at least {}", rule.display_label(), fmt_bound(*lo)),
                    ));
                    return;
                }
            }
            if let Some(hi) = max {
                if as_f64 > *hi {
                    errors.push(FieldError::new(
                        path,
                        format!("{} must be at most {}", rule.display_label(), fmt_bound(*hi)),
                    ));
                    return;
                }
            }
            out.insert(rule.name.clone(), normalized);
        }

        FieldKind::OneOf { variants } => {
            let matched = value
                .as_str()
                .map(|s| variants.iter().any(|v| v == s))
                .unwrap_or(false);
            if matched {
                out.insert(rule.name.clone(), value.clone());
            } else {
                errors.push(FieldError::new(
                    path,
                    format!(
                        "{} must be one of [{}]",
                        rule.display_label(),
                        variants.join(", ")
                    ),
                ));
            }
        }

        FieldKind::DateOrDateTime => {
            let valid = value.as_str().map(is_date_or_datetime).unwrap_or(false);
            if valid {
                out.insert(rule.name.clone(), value.clone());
            } else {
                errors.push(FieldError::new(
                    path,
                    format!(
                        "{} must be an ISO-8601 date (YYYY-MM-DD) or datetime",
                        rule.display_label()
                    ),
                ));
            }
        }
    }
}

fn required_message(rule: &FieldRule) -> String {
    format!("{} is required", rule.display_label())
}

fn field_path(section: Section, name: &str) -> String {
    format!("{}.{}", section.as_str(), name)
}

/// Accepts a JSON number, or a string that parses as one (path
/// parameters always arrive as strings). Returns the comparison value
/// and the normalized JSON representation. Non-finite values are
/// rejected.
fn numeric_value(value: &Value) -> Option<(f64, Value)> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).map(|v| (v, value.clone())),
        Value::String(s) => {
            let v: f64 = s.trim().parse().ok()?;
            if !v.is_finite() {
                return None;
            }
            let normalized = if v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
                Value::Number(Number::from(v as i64))
            } else {
                Number::from_f64(v).map(Value::Number)?
            };
            Some((v, normalized))
        }
        _ => None,
    }
}

/// Bounds render without a trailing `.0` when integral.
fn fmt_bound(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

/// Either a full RFC 3339 datetime with offset, or a calendar date.
fn is_date_or_datetime(s: &str) -> bool {
    DateTime::parse_from_rfc3339(s).is_ok() || NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}
