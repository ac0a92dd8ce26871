// Copyright (c) 2025 - Cowboy AI, Inc.
//! Shared HTTP Service Layer
//!
//! Every service is assembled the same way:
//!
//! ```text
//! request ──> trim trailing slash ──> request id + trace ──> error_boundary
//!         ──> catch panic ──> routes
//!                               │
//!               /health, /api/{service}/..., fallback 404
//! ```
//!
//! Handlers are stateless. The only state is the [`ServiceContext`] (name,
//! start time, production flag), built once at startup and passed down to
//! the middleware and health handler.

pub mod envelope;
pub mod error;
pub mod middleware;
pub mod server;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use std::time::Instant;
use tower::{Layer, ServiceBuilder};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};

use self::middleware::MakeRequestUuidV7;

pub use envelope::{timestamp, ApiResponse, ErrorResponse, HealthCheckResponse, HealthStatus};
pub use error::{AppError, ELIDED_MESSAGE};
pub use server::{serve, ServerSettings};

/// Per-service context shared by middleware and handlers
#[derive(Debug, Clone)]
pub struct ServiceContext {
    /// Service name reported by `/health` and in logs
    pub name: String,
    pub started_at: Instant,
    /// Elide handler error messages
    pub production: bool,
}

impl ServiceContext {
    pub fn new(name: impl Into<String>, production: bool) -> Self {
        Self {
            name: name.into(),
            started_at: Instant::now(),
            production,
        }
    }

    /// Seconds since the context was created
    pub fn uptime(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}

/// `GET /health`
pub async fn health(State(ctx): State<Arc<ServiceContext>>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: HealthStatus::Ok,
        service: ctx.name.clone(),
        uptime: ctx.uptime(),
        timestamp: timestamp(),
    })
}

/// Assembled service: router behind trailing-slash normalisation
pub type HttpApp = NormalizePath<Router>;

/// Wrap a service's API routes with the shared endpoints and middleware
///
/// Unknown paths and unsupported methods both answer with the 404 envelope.
pub fn build_router(ctx: ServiceContext, api: Router<Arc<ServiceContext>>) -> HttpApp {
    let ctx = Arc::new(ctx);

    let router = Router::new()
        .route("/health", get(health))
        .merge(api)
        .fallback(error::not_found)
        .method_not_allowed_fallback(error::not_found)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(axum::middleware::from_fn_with_state(
            ctx.clone(),
            error::error_boundary,
        ))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
                .layer(middleware::request_tracing(&ctx.name))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .with_state(ctx);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
