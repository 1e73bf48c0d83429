//! Attendance request schemas.
//!
//! Temporal fields (date, checkIn, checkOut) accept either a calendar
//! date or a full datetime. checkOut-after-checkIn is not checked
//! here; fields validate independently.

use crate::schema::errors::SchemaResult;
use crate::schema::registry::SchemaRegistry;
use crate::schema::types::{FieldRule, Operation, RequestSchema, Resource, SectionSchema};

/// Attendance status variants.
pub const STATUS_VALUES: &[&str] = &["PRESENT", "ABSENT", "LATE", "HALF_DAY"];

fn id_params() -> SectionSchema {
    SectionSchema::new(vec![FieldRule::text("id")
        .required()
        .label(Resource::Attendance.id_label())])
}

fn record_fields(create: bool) -> Vec<FieldRule> {
    let employee_id = if create {
        FieldRule::text("employeeId").required()
    } else {
        FieldRule::text("employeeId")
    };
    vec![
        employee_id,
        FieldRule::date("date"),
        FieldRule::date("checkIn"),
        FieldRule::date("checkOut"),
        FieldRule::one_of("status", STATUS_VALUES),
        FieldRule::number("hoursWorked").min(0.0).max(24.0),
        FieldRule::text("notes"),
    ]
}

/// POST /api/v1/attendance
pub fn create_schema() -> RequestSchema {
    RequestSchema::new().with_body(SectionSchema::new(record_fields(true)))
}

/// PUT /api/v1/attendance/{id}
pub fn update_schema() -> RequestSchema {
    RequestSchema::new()
        .with_params(id_params())
        .with_body(SectionSchema::new(record_fields(false)))
}

/// GET /api/v1/attendance/{id}
pub fn get_schema() -> RequestSchema {
    RequestSchema::new().with_params(id_params())
}

/// DELETE /api/v1/attendance/{id}
pub fn delete_schema() -> RequestSchema {
    RequestSchema::new().with_params(id_params())
}

/// Register all attendance schemas.
pub fn register(registry: &mut SchemaRegistry) -> SchemaResult<()> {
    registry.register(Resource::Attendance, Operation::Create, create_schema())?;
    registry.register(Resource::Attendance, Operation::Update, update_schema())?;
    registry.register(Resource::Attendance, Operation::GetById, get_schema())?;
    registry.register(Resource::Attendance, Operation::Delete, delete_schema())?;
    Ok(())
}
