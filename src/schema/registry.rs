//! Schema registry.
//!
//! Holds every request schema keyed by (resource, operation). The
//! registry is populated once before request serving begins and is
//! read-only thereafter; a missing or duplicate registration is a
//! fatal configuration error, never a per-request condition.

use std::collections::HashMap;

use super::errors::{SchemaError, SchemaResult};
use super::resources;
use super::types::{Operation, RequestSchema, Resource};

/// Immutable lookup table of request schemas.
pub struct SchemaRegistry {
    schemas: HashMap<(Resource, Operation), RequestSchema>,
}

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            schemas: HashMap::new(),
        }
    }

    /// Register a schema. Registered schemas are immutable; a second
    /// registration under the same key fails.
    pub fn register(
        &mut self,
        resource: Resource,
        operation: Operation,
        schema: RequestSchema,
    ) -> SchemaResult<()> {
        let key = (resource, operation);
        if self.schemas.contains_key(&key) {
            return Err(SchemaError::already_registered(
                resource.as_str(),
                operation.as_str(),
            ));
        }
        self.schemas.insert(key, schema);
        Ok(())
    }

    /// Look up a schema. Pure; no side effects.
    pub fn get(&self, resource: Resource, operation: Operation) -> SchemaResult<&RequestSchema> {
        self.schemas
            .get(&(resource, operation))
            .ok_or_else(|| SchemaError::not_registered(resource.as_str(), operation.as_str()))
    }

    /// Checks if a schema is registered.
    pub fn contains(&self, resource: Resource, operation: Operation) -> bool {
        self.schemas.contains_key(&(resource, operation))
    }

    /// Returns the number of registered schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Registered (resource, operation) keys in stable catalog order.
    pub fn keys(&self) -> Vec<(Resource, Operation)> {
        let mut keys = Vec::with_capacity(self.schemas.len());
        for resource in Resource::ALL {
            for operation in Operation::ALL {
                if self.contains(resource, operation) {
                    keys.push((resource, operation));
                }
            }
        }
        keys
    }

    /// Build the full HR catalog: create, update, get-by-id, and
    /// delete schemas for every resource.
    pub fn hr_catalog() -> SchemaResult<Self> {
        let mut registry = Self::new();

        resources::employee::register(&mut registry)?;
        resources::leave::register(&mut registry)?;
        resources::attendance::register(&mut registry)?;
        resources::department::register(&mut registry)?;

        Ok(registry)
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
