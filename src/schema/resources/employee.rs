//! Employee request schemas.

use crate::schema::errors::SchemaResult;
use crate::schema::registry::SchemaRegistry;
use crate::schema::types::{FieldRule, Operation, RequestSchema, Resource, SectionSchema};

/// Employment status variants.
pub const STATUS_VALUES: &[&str] = &["ACTIVE", "INACTIVE", "TERMINATED"];

fn id_params() -> SectionSchema {
    SectionSchema::new(vec![FieldRule::text("id")
        .required()
        .label(Resource::Employee.id_label())])
}

fn profile_fields(create: bool) -> Vec<FieldRule> {
    let mut first_name = FieldRule::text("firstName");
    let mut last_name = FieldRule::text("lastName");
    let mut email = FieldRule::text("email");
    if create {
        first_name = first_name.required();
        last_name = last_name.required();
        email = email.required();
    }
    vec![
        first_name,
        last_name,
        email,
        FieldRule::text("phone"),
        FieldRule::text("departmentId"),
        FieldRule::text("position"),
        FieldRule::number("salary").min(0.0),
        FieldRule::date("hireDate"),
        FieldRule::one_of("status", STATUS_VALUES),
    ]
}

/// POST /api/v1/employees
pub fn create_schema() -> RequestSchema {
    RequestSchema::new().with_body(SectionSchema::new(profile_fields(true)))
}

/// PUT /api/v1/employees/{id}
pub fn update_schema() -> RequestSchema {
    RequestSchema::new()
        .with_params(id_params())
        .with_body(SectionSchema::new(profile_fields(false)))
}

/// GET /api/v1/employees/{id}
pub fn get_schema() -> RequestSchema {
    RequestSchema::new().with_params(id_params())
}

/// DELETE /api/v1/employees/{id}
pub fn delete_schema() -> RequestSchema {
    RequestSchema::new().with_params(id_params())
}

/// Register all employee schemas.
pub fn register(registry: &mut SchemaRegistry) -> SchemaResult<()> {
    registry.register(Resource::Employee, Operation::Create, create_schema())?;
    registry.register(Resource::Employee, Operation::Update, update_schema())?;
    registry.register(Resource::Employee, Operation::GetById, get_schema())?;
    registry.register(Resource::Employee, Operation::Delete, delete_schema())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::validator::{validate, RawRequest};
    use serde_json::json;

    #[test]
    fn test_create_requires_name_and_email() {
        let raw = RawRequest::new().with_body(json!({"phone": "555-0100"}));
        let err = validate(&create_schema(), &raw).unwrap_err();
        let paths: Vec<&str> = err.errors().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["body.firstName", "body.lastName", "body.email"]);
    }

    #[test]
    fn test_create_valid() {
        let raw = RawRequest::new().with_body(json!({
            "firstName": "Priya",
            "lastName": "Sharma",
            "email": "priya.sharma@example.com",
            "salary": 72000,
            "hireDate": "2023-11-01",
            "status": "ACTIVE"
        }));
        let ok = validate(&create_schema(), &raw).unwrap();
        assert_eq!(ok.body_field("salary"), Some(&json!(72000)));
    }

    #[test]
    fn test_negative_salary_rejected() {
        let raw = RawRequest::new().with_body(json!({
            "firstName": "Priya",
            "lastName": "Sharma",
            "email": "priya.sharma@example.com",
            "salary": -1
        }));
        let err = validate(&create_schema(), &raw).unwrap_err();
        assert_eq!(err.errors()[0].message, "salary must be at least 0");
    }

    #[test]
    fn test_status_variants() {
        for status in STATUS_VALUES {
            let raw = RawRequest::new()
                .with_param("id", "E1")
                .with_body(json!({ "status": status }));
            assert!(validate(&update_schema(), &raw).is_ok(), "{}", status);
        }
    }

    #[test]
    fn test_update_all_body_optional() {
        let raw = RawRequest::new().with_param("id", "E1").with_body(json!({}));
        assert!(validate(&update_schema(), &raw).is_ok());
    }

    #[test]
    fn test_get_requires_id() {
        let err = validate(&get_schema(), &RawRequest::new()).unwrap_err();
        assert_eq!(err.errors()[0].message, "Employee ID is required");
    }
}
