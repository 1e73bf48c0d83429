//! Declarative route table and router assembly.
//!
//! Routing performs no validation logic of its own; each route only
//! sequences the gate, the validator, and the controller, in that
//! order. The table is explicit data
//! constructed at startup and handed to the server, with no
//! module-level registration side effects. Every schema a route references is
//! resolved during assembly, so a missing registration halts startup
//! instead of surfacing per-request.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{on, MethodFilter};
use axum::{Extension, Json, Router};
use serde_json::Value;

use crate::auth::AuthPrincipal;
use crate::controllers::{Controller, ControllerCall, ControllerReply};
use crate::observability::Logger;
use crate::schema::{
    validate, Operation, RawRequest, RequestSchema, Resource, SchemaRegistry, SchemaResult,
};

use super::errors::ApiError;

/// HTTP methods used by the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl RouteMethod {
    /// Returns the method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteMethod::Get => "GET",
            RouteMethod::Post => "POST",
            RouteMethod::Put => "PUT",
            RouteMethod::Delete => "DELETE",
        }
    }

    fn filter(&self) -> MethodFilter {
        match self {
            RouteMethod::Get => MethodFilter::GET,
            RouteMethod::Post => MethodFilter::POST,
            RouteMethod::Put => MethodFilter::PUT,
            RouteMethod::Delete => MethodFilter::DELETE,
        }
    }
}

/// One route: method and path within a resource group, bound to the
/// operation whose schema validates the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteSpec {
    /// HTTP method.
    pub method: RouteMethod,
    /// Path relative to the resource group prefix.
    pub path: &'static str,
    /// Operation key for schema lookup and controller dispatch.
    pub operation: Operation,
}

/// The four routes every resource group exposes.
pub fn resource_routes() -> [RouteSpec; 4] {
    [
        RouteSpec {
            method: RouteMethod::Post,
            path: "/",
            operation: Operation::Create,
        },
        RouteSpec {
            method: RouteMethod::Get,
            path: "/{id}",
            operation: Operation::GetById,
        },
        RouteSpec {
            method: RouteMethod::Put,
            path: "/{id}",
            operation: Operation::Update,
        },
        RouteSpec {
            method: RouteMethod::Delete,
            path: "/{id}",
            operation: Operation::Delete,
        },
    ]
}

/// The full route table: every resource group with its routes.
pub fn route_table() -> Vec<(Resource, [RouteSpec; 4])> {
    Resource::ALL
        .iter()
        .map(|r| (*r, resource_routes()))
        .collect()
}

/// Build the router for one resource group. Resolves each referenced
/// schema up front; a missing schema is the fatal configuration error.
pub fn resource_router(
    resource: Resource,
    registry: &SchemaRegistry,
    controller: Arc<dyn Controller>,
) -> SchemaResult<Router> {
    let mut router = Router::new();

    for spec in resource_routes() {
        let schema = Arc::new(registry.get(resource, spec.operation)?.clone());
        let controller = controller.clone();
        let operation = spec.operation;

        let handler = move |Path(params): Path<BTreeMap<String, String>>,
                            Extension(principal): Extension<AuthPrincipal>,
                            body: Bytes| async move {
            dispatch(schema, resource, operation, controller, principal, params, body).await
        };

        router = router.route(spec.path, on(spec.method.filter(), handler));
    }

    Ok(router)
}

/// Validate the request against its schema, then hand the normalized
/// value to the controller. Gate failures never reach here;
/// validation failures never reach the controller.
async fn dispatch(
    schema: Arc<RequestSchema>,
    resource: Resource,
    operation: Operation,
    controller: Arc<dyn Controller>,
    principal: AuthPrincipal,
    params: BTreeMap<String, String>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let body = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).map_err(|_| ApiError::MalformedBody)?
    };

    let raw = RawRequest { params, body };
    let normalized = validate(&schema, &raw).map_err(|e| {
        Logger::debug(
            "validation_rejected",
            &[
                ("resource", resource.as_str()),
                ("operation", operation.as_str()),
                ("error_count", &e.len().to_string()),
            ],
        );
        ApiError::Validation(e)
    })?;

    let reply = controller
        .handle(
            &principal,
            ControllerCall {
                resource,
                operation,
                request: normalized,
            },
        )
        .await?;

    Ok(match reply {
        ControllerReply::Created(value) => (StatusCode::CREATED, Json(value)).into_response(),
        ControllerReply::Ok(value) => (StatusCode::OK, Json(value)).into_response(),
        ControllerReply::NoContent => StatusCode::NO_CONTENT.into_response(),
    })
}
