//! Controller seam.
//!
//! The route layer sequences gate, then validation, then controller.
//! Everything after validation (persistence, business rules) belongs
//! to the controller behind this trait. Handlers receive only normalized,
//! schema-approved input.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

use crate::auth::AuthPrincipal;
use crate::schema::{NormalizedRequest, Operation, Resource};

/// Controller failures, mapped to HTTP statuses by the route layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    /// No record under the requested id.
    #[error("{0} not found")]
    NotFound(String),

    /// The operation conflicts with existing state.
    #[error("{0}")]
    Conflict(String),

    /// Unexpected downstream failure.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Successful controller outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum ControllerReply {
    /// Resource created; body echoes the stored record.
    Created(Value),
    /// Lookup or update result.
    Ok(Value),
    /// Deletion completed; nothing to return.
    NoContent,
}

/// One dispatched controller invocation.
#[derive(Debug, Clone)]
pub struct ControllerCall {
    /// Target resource.
    pub resource: Resource,
    /// Operation being performed.
    pub operation: Operation,
    /// Validated request content (declared fields only).
    pub request: NormalizedRequest,
}

/// Boxed controller future.
pub type ControllerFuture<'a> =
    Pin<Box<dyn Future<Output = Result<ControllerReply, ControllerError>> + Send + 'a>>;

/// The collaborator invoked after validation succeeds.
pub trait Controller: Send + Sync {
    /// Handle a validated request on behalf of the principal.
    fn handle<'a>(&'a self, principal: &'a AuthPrincipal, call: ControllerCall)
        -> ControllerFuture<'a>;
}

/// In-memory controller used by the dev server and integration tests.
///
/// Keeps records per resource in a map keyed by generated UUID:
/// create stores the body, get returns it, update merges, delete
/// removes. No durability, no business rules.
pub struct LoopbackController {
    records: Mutex<HashMap<(Resource, String), Map<String, Value>>>,
}

impl LoopbackController {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
        }
    }

    fn apply(
        &self,
        call: ControllerCall,
    ) -> Result<ControllerReply, ControllerError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| ControllerError::Internal("record store poisoned".to_string()))?;

        match call.operation {
            Operation::Create => {
                let id = Uuid::new_v4().to_string();
                let mut record = call.request.body;
                record.insert("id".to_string(), Value::String(id.clone()));
                records.insert((call.resource, id), record.clone());
                Ok(ControllerReply::Created(Value::Object(record)))
            }
            Operation::GetById => {
                let id = requested_id(&call.request)?;
                records
                    .get(&(call.resource, id.clone()))
                    .map(|record| ControllerReply::Ok(Value::Object(record.clone())))
                    .ok_or_else(|| not_found(call.resource, &id))
            }
            Operation::Update => {
                let id = requested_id(&call.request)?;
                let record = records
                    .get_mut(&(call.resource, id.clone()))
                    .ok_or_else(|| not_found(call.resource, &id))?;
                for (name, value) in call.request.body {
                    record.insert(name, value);
                }
                Ok(ControllerReply::Ok(Value::Object(record.clone())))
            }
            Operation::Delete => {
                let id = requested_id(&call.request)?;
                records
                    .remove(&(call.resource, id.clone()))
                    .map(|_| ControllerReply::NoContent)
                    .ok_or_else(|| not_found(call.resource, &id))
            }
        }
    }
}

impl Default for LoopbackController {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for LoopbackController {
    fn handle<'a>(
        &'a self,
        _principal: &'a AuthPrincipal,
        call: ControllerCall,
    ) -> ControllerFuture<'a> {
        let result = self.apply(call);
        Box::pin(async move { result })
    }
}

fn requested_id(request: &NormalizedRequest) -> Result<String, ControllerError> {
    request
        .param("id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ControllerError::Internal("id parameter missing after validation".to_string()))
}

fn not_found(resource: Resource, id: &str) -> ControllerError {
    ControllerError::NotFound(format!("{} {}", resource, id))
}
