//! Department request schemas.

use crate::schema::errors::SchemaResult;
use crate::schema::registry::SchemaRegistry;
use crate::schema::types::{FieldRule, Operation, RequestSchema, Resource, SectionSchema};

fn id_params() -> SectionSchema {
    SectionSchema::new(vec![FieldRule::text("id")
        .required()
        .label(Resource::Department.id_label())])
}

/// POST /api/v1/departments
pub fn create_schema() -> RequestSchema {
    RequestSchema::new().with_body(SectionSchema::new(vec![
        FieldRule::text("name")
            .required()
            .min_len(2)
            .label("Department name"),
        FieldRule::text("description"),
        FieldRule::text("managerId"),
    ]))
}

/// PUT /api/v1/departments/{id}
pub fn update_schema() -> RequestSchema {
    RequestSchema::new()
        .with_params(id_params())
        .with_body(SectionSchema::new(vec![
            FieldRule::text("name").min_len(2).label("Department name"),
            FieldRule::text("description"),
            FieldRule::text("managerId"),
        ]))
}

/// GET /api/v1/departments/{id}
pub fn get_schema() -> RequestSchema {
    RequestSchema::new().with_params(id_params())
}

/// DELETE /api/v1/departments/{id}
pub fn delete_schema() -> RequestSchema {
    RequestSchema::new().with_params(id_params())
}

/// Register all department schemas.
pub fn register(registry: &mut SchemaRegistry) -> SchemaResult<()> {
    registry.register(Resource::Department, Operation::Create, create_schema())?;
    registry.register(Resource::Department, Operation::Update, update_schema())?;
    registry.register(Resource::Department, Operation::GetById, get_schema())?;
    registry.register(Resource::Department, Operation::Delete, delete_schema())?;
    Ok(())
}
