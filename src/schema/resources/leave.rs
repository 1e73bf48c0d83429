//! Leave request schemas.
//!
//! startDate/endDate accept either a calendar date or a full
//! datetime. endDate-after-startDate is not checked here; fields
//! validate independently.

use crate::schema::errors::SchemaResult;
use crate::schema::registry::SchemaRegistry;
use crate::schema::types::{FieldRule, Operation, RequestSchema, Resource, SectionSchema};

/// Leave type variants.
pub const TYPE_VALUES: &[&str] = &[
    "SICK",
    "VACATION",
    "PERSONAL",
    "MATERNITY",
    "PATERNITY",
    "EMERGENCY",
];

/// Leave status variants. Settable through update only; a new request
/// always starts unreviewed.
pub const STATUS_VALUES: &[&str] = &["PENDING", "APPROVED", "REJECTED", "CANCELLED"];

fn id_params() -> SectionSchema {
    SectionSchema::new(vec![FieldRule::text("id")
        .required()
        .label(Resource::Leave.id_label())])
}

/// POST /api/v1/leaves
pub fn create_schema() -> RequestSchema {
    RequestSchema::new().with_body(SectionSchema::new(vec![
        FieldRule::text("employeeId").required(),
        FieldRule::one_of("type", TYPE_VALUES).required(),
        FieldRule::date("startDate").required(),
        FieldRule::date("endDate").required(),
        FieldRule::text("reason"),
    ]))
}

/// PUT /api/v1/leaves/{id}
pub fn update_schema() -> RequestSchema {
    RequestSchema::new()
        .with_params(id_params())
        .with_body(SectionSchema::new(vec![
            FieldRule::one_of("type", TYPE_VALUES),
            FieldRule::date("startDate"),
            FieldRule::date("endDate"),
            FieldRule::text("reason"),
            FieldRule::one_of("status", STATUS_VALUES),
        ]))
}

/// GET /api/v1/leaves/{id}
pub fn get_schema() -> RequestSchema {
    RequestSchema::new().with_params(id_params())
}

/// DELETE /api/v1/leaves/{id}
pub fn delete_schema() -> RequestSchema {
    RequestSchema::new().with_params(id_params())
}

/// Register all leave schemas.
pub fn register(registry: &mut SchemaRegistry) -> SchemaResult<()> {
    registry.register(Resource::Leave, Operation::Create, create_schema())?;
    registry.register(Resource::Leave, Operation::Update, update_schema())?;
    registry.register(Resource::Leave, Operation::GetById, get_schema())?;
    registry.register(Resource::Leave, Operation::Delete, delete_schema())?;
    Ok(())
}
