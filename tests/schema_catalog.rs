//! Catalog contract tests
//!
//! Properties that must hold across every registered resource
//! operation:
//! - a required field absent yields exactly one error naming it
//! - enum fields reject outsiders and accept every declared variant
//! - numeric bounds are inclusive on both ends
//! - temporal fields accept date and datetime forms
//! - validation is a pure function (idempotent)

use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

use hrgate::schema::{
    validate, FieldKind, FieldRule, RawRequest, RequestSchema, SchemaRegistry, SectionSchema,
};

// =============================================================================
// Helper Functions
// =============================================================================

fn catalog() -> SchemaRegistry {
    SchemaRegistry::hr_catalog().unwrap()
}

/// A value that satisfies the rule's constraints.
fn valid_value(rule: &FieldRule) -> Value {
    match &rule.kind {
        FieldKind::Text { .. } => json!("Valid Value"),
        FieldKind::Number { min, .. } => json!(min.unwrap_or(1.0)),
        FieldKind::OneOf { variants } => json!(variants[0].clone()),
        FieldKind::DateOrDateTime => json!("2024-01-15"),
    }
}

/// String form for path parameters.
fn valid_param(rule: &FieldRule) -> String {
    match &rule.kind {
        FieldKind::Text { .. } => "P1".to_string(),
        FieldKind::Number { min, .. } => format!("{}", min.unwrap_or(1.0)),
        FieldKind::OneOf { variants } => variants[0].clone(),
        FieldKind::DateOrDateTime => "2024-01-15".to_string(),
    }
}

/// A request satisfying every required rule of the schema.
fn valid_raw(schema: &RequestSchema) -> RawRequest {
    let mut params = BTreeMap::new();
    if let Some(section) = &schema.params {
        for rule in section.rules.iter().filter(|r| r.required) {
            params.insert(rule.name.clone(), valid_param(rule));
        }
    }

    let mut body = Map::new();
    if let Some(section) = &schema.body {
        for rule in section.rules.iter().filter(|r| r.required) {
            body.insert(rule.name.clone(), valid_value(rule));
        }
    }

    RawRequest {
        params,
        body: if body.is_empty() {
            Value::Object(Map::new())
        } else {
            Value::Object(body)
        },
    }
}

fn sections(schema: &RequestSchema) -> Vec<(&'static str, &SectionSchema)> {
    let mut out = Vec::new();
    if let Some(section) = &schema.params {
        out.push(("params", section));
    }
    if let Some(section) = &schema.body {
        out.push(("body", section));
    }
    out
}

// =============================================================================
// Required fields
// =============================================================================

#[test]
fn test_each_required_field_absent_yields_exactly_one_error() {
    let registry = catalog();

    for (resource, operation) in registry.keys() {
        let schema = registry.get(resource, operation).unwrap();

        for (section_name, section) in sections(schema) {
            for rule in section.rules.iter().filter(|r| r.required) {
                let mut raw = valid_raw(schema);
                if section_name == "params" {
                    raw.params.remove(&rule.name);
                } else if let Value::Object(body) = &mut raw.body {
                    body.remove(&rule.name);
                }

                let err = validate(schema, &raw).unwrap_err();
                assert_eq!(
                    err.len(),
                    1,
                    "{} {} without {}.{} should fail with exactly one error, got {:?}",
                    resource,
                    operation,
                    section_name,
                    rule.name,
                    err.errors()
                );
                assert_eq!(
                    err.errors()[0].path,
                    format!("{}.{}", section_name, rule.name)
                );
                assert_eq!(
                    err.errors()[0].message,
                    format!("{} is required", rule.display_label())
                );
            }
        }
    }
}

#[test]
fn test_fully_valid_requests_pass_everywhere() {
    let registry = catalog();
    for (resource, operation) in registry.keys() {
        let schema = registry.get(resource, operation).unwrap();
        let raw = valid_raw(schema);
        assert!(
            validate(schema, &raw).is_ok(),
            "{} {} rejected a valid request",
            resource,
            operation
        );
    }
}

// =============================================================================
// Enumerated fields
// =============================================================================

#[test]
fn test_enum_fields_accept_every_variant_and_reject_outsiders() {
    let registry = catalog();

    for (resource, operation) in registry.keys() {
        let schema = registry.get(resource, operation).unwrap();
        let Some(section) = &schema.body else { continue };

        for rule in &section.rules {
            let FieldKind::OneOf { variants } = &rule.kind else {
                continue;
            };

            for variant in variants {
                let mut raw = valid_raw(schema);
                if let Value::Object(body) = &mut raw.body {
                    body.insert(rule.name.clone(), json!(variant));
                }
                assert!(
                    validate(schema, &raw).is_ok(),
                    "{} {} rejected declared variant {}={}",
                    resource,
                    operation,
                    rule.name,
                    variant
                );
            }

            let mut raw = valid_raw(schema);
            if let Value::Object(body) = &mut raw.body {
                body.insert(rule.name.clone(), json!("NOT_IN_SET"));
            }
            let err = validate(schema, &raw).unwrap_err();
            assert_eq!(err.len(), 1);
            assert_eq!(err.errors()[0].path, format!("body.{}", rule.name));
            assert!(
                err.errors()[0].message.contains("must be one of ["),
                "enum error should name the allowed set: {}",
                err.errors()[0].message
            );
        }
    }
}

#[test]
fn test_pinned_enum_literals() {
    let registry = catalog();

    let leave_create = registry
        .get("leave".parse().unwrap(), "create".parse().unwrap())
        .unwrap();
    let type_rule = leave_create.body.as_ref().unwrap().rule("type").unwrap();
    assert_eq!(
        type_rule.kind,
        FieldKind::OneOf {
            variants: ["SICK", "VACATION", "PERSONAL", "MATERNITY", "PATERNITY", "EMERGENCY"]
                .iter()
                .map(|s| s.to_string())
                .collect()
        }
    );

    let leave_update = registry
        .get("leave".parse().unwrap(), "update".parse().unwrap())
        .unwrap();
    let status_rule = leave_update.body.as_ref().unwrap().rule("status").unwrap();
    assert_eq!(
        status_rule.kind,
        FieldKind::OneOf {
            variants: ["PENDING", "APPROVED", "REJECTED", "CANCELLED"]
                .iter()
                .map(|s| s.to_string())
                .collect()
        }
    );

    let attendance_create = registry
        .get("attendance".parse().unwrap(), "create".parse().unwrap())
        .unwrap();
    let status_rule = attendance_create
        .body
        .as_ref()
        .unwrap()
        .rule("status")
        .unwrap();
    assert_eq!(
        status_rule.kind,
        FieldKind::OneOf {
            variants: ["PRESENT", "ABSENT", "LATE", "HALF_DAY"]
                .iter()
                .map(|s| s.to_string())
                .collect()
        }
    );
}

// =============================================================================
// Numeric bounds
// =============================================================================

#[test]
fn test_hours_worked_bounds_are_inclusive() {
    let registry = catalog();
    let schema = registry
        .get("attendance".parse().unwrap(), "create".parse().unwrap())
        .unwrap();

    for (hours, expect_ok) in [
        (json!(-1), false),
        (json!(0), true),
        (json!(12.5), true),
        (json!(24), true),
        (json!(25), false),
    ] {
        let raw = RawRequest::new().with_body(json!({
            "employeeId": "E1",
            "hoursWorked": hours
        }));
        assert_eq!(
            validate(schema, &raw).is_ok(),
            expect_ok,
            "hoursWorked={:?}",
            hours
        );
    }
}

// =============================================================================
// Temporal fields
// =============================================================================

#[test]
fn test_every_temporal_field_accepts_both_forms() {
    let registry = catalog();

    for (resource, operation) in registry.keys() {
        let schema = registry.get(resource, operation).unwrap();
        let Some(section) = &schema.body else { continue };

        for rule in &section.rules {
            if rule.kind != FieldKind::DateOrDateTime {
                continue;
            }

            for good in ["2024-01-15", "2024-01-15T09:00:00Z"] {
                let mut raw = valid_raw(schema);
                if let Value::Object(body) = &mut raw.body {
                    body.insert(rule.name.clone(), json!(good));
                }
                assert!(
                    validate(schema, &raw).is_ok(),
                    "{} {} rejected {}={}",
                    resource,
                    operation,
                    rule.name,
                    good
                );
            }

            let mut raw = valid_raw(schema);
            if let Value::Object(body) = &mut raw.body {
                body.insert(rule.name.clone(), json!("15/01/2024"));
            }
            let err = validate(schema, &raw).unwrap_err();
            assert_eq!(err.errors()[0].path, format!("body.{}", rule.name));
        }
    }
}

// =============================================================================
// Purity
// =============================================================================

#[test]
fn test_validation_is_idempotent_across_catalog() {
    let registry = catalog();

    for (resource, operation) in registry.keys() {
        let schema = registry.get(resource, operation).unwrap();
        // An input that fails on most schemas and passes on none of
        // the required ones: empty everything.
        let raw = RawRequest::new();

        let first = validate(schema, &raw);
        let second = validate(schema, &raw);
        assert_eq!(
            first, second,
            "{} {} validation not idempotent",
            resource, operation
        );
    }
}

// =============================================================================
// Contract scenarios
// =============================================================================

#[test]
fn test_scenario_create_attendance_minimal() {
    let registry = catalog();
    let schema = registry
        .get("attendance".parse().unwrap(), "create".parse().unwrap())
        .unwrap();
    let raw = RawRequest::new().with_body(json!({"employeeId": "E1"}));

    let normalized = validate(schema, &raw).unwrap();
    assert_eq!(
        Value::Object(normalized.body),
        json!({"employeeId": "E1"})
    );
}

#[test]
fn test_scenario_create_leave() {
    let registry = catalog();
    let schema = registry
        .get("leave".parse().unwrap(), "create".parse().unwrap())
        .unwrap();
    let raw = RawRequest::new().with_body(json!({
        "type": "SICK",
        "startDate": "2024-03-01",
        "endDate": "2024-03-05",
        "employeeId": "E2"
    }));
    assert!(validate(schema, &raw).is_ok());
}

#[test]
fn test_scenario_create_leave_missing_employee_id() {
    let registry = catalog();
    let schema = registry
        .get("leave".parse().unwrap(), "create".parse().unwrap())
        .unwrap();
    let raw = RawRequest::new().with_body(json!({
        "type": "SICK",
        "startDate": "2024-03-01",
        "endDate": "2024-03-05"
    }));

    let err = validate(schema, &raw).unwrap_err();
    assert_eq!(err.len(), 1);
    assert_eq!(err.errors()[0].path, "body.employeeId");
}

#[test]
fn test_scenario_update_department_empty_id() {
    let registry = catalog();
    let schema = registry
        .get("department".parse().unwrap(), "update".parse().unwrap())
        .unwrap();
    let raw = RawRequest::new()
        .with_param("id", "")
        .with_body(json!({"name": "Engineering"}));

    let err = validate(schema, &raw).unwrap_err();
    assert_eq!(err.len(), 1);
    assert_eq!(err.errors()[0].message, "Department ID is required");
}
