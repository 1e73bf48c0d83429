//! # HTTP Server
//!
//! Assembles the gated resource routers, health probe, CORS, and
//! request logging into one axum application.

use std::sync::Arc;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::auth::TokenVerifier;
use crate::controllers::Controller;
use crate::observability::Logger;
use crate::schema::{SchemaRegistry, SchemaResult};

use super::config::HttpServerConfig;
use super::gate;
use super::routes::{resource_router, route_table};

/// HTTP server for the HR gateway.
#[derive(Debug)]
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Build the server. Fails with the fatal configuration error if
    /// the route table references an unregistered schema; startup
    /// halts rather than serving a broken route.
    pub fn build(
        config: HttpServerConfig,
        registry: &SchemaRegistry,
        controller: Arc<dyn Controller>,
        verifier: Arc<dyn TokenVerifier>,
    ) -> SchemaResult<Self> {
        let router = Self::build_router(&config, registry, controller, verifier)?;
        Ok(Self { config, router })
    }

    fn build_router(
        config: &HttpServerConfig,
        registry: &SchemaRegistry,
        controller: Arc<dyn Controller>,
        verifier: Arc<dyn TokenVerifier>,
    ) -> SchemaResult<Router> {
        // Health probe stays outside the gate.
        let mut app = Router::new().route("/health", get(health_handler));

        for (resource, _) in route_table() {
            let group = resource_router(resource, registry, controller.clone())?;
            let verifier = verifier.clone();
            let gated = group.layer(middleware::from_fn(move |request: Request, next: Next| {
                let verifier = verifier.clone();
                async move { gate::check(verifier, request, next).await }
            }));
            app = app.nest(resource.route_prefix(), gated);
        }

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Ok(app
            .layer(middleware::from_fn(log_request))
            .layer(cors))
    }

    /// The assembled router. Cloneable; used directly by in-process
    /// tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Bind and serve until the process is stopped.
    pub async fn serve(self) -> std::io::Result<()> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;
        Logger::info("server_started", &[("addr", &addr)]);
        axum::serve(listener, self.router).await
    }
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let response = next.run(request).await;
    Logger::request(&method, &path, response.status().as_u16());
    response
}
