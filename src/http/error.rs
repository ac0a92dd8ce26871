// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error boundary
//!
//! Handler failures ([`AppError`] returns and panics) become an
//! [`ErrorResponse`] carrying the failure's status, 500 unless the handler
//! chose another. In production the message is replaced with
//! `Internal server error`. Route misses become a 404 envelope and are never
//! elided.

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::any::Any;
use std::sync::Arc;
use tracing::error;

use super::envelope::ErrorResponse;
use super::ServiceContext;

/// Message shown in place of handler errors in production
pub const ELIDED_MESSAGE: &str = "Internal server error";

/// Handler failure
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    /// Failure with the default 500 status
    pub fn internal(message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn with_status(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Marker left on responses produced from a handler failure
#[derive(Debug, Clone)]
struct HandlerFailure(String);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorResponse::new(self.status.as_u16(), self.message.clone());
        let mut response = (self.status, Json(body)).into_response();
        response.extensions_mut().insert(HandlerFailure(self.message));
        response
    }
}

/// Convert a caught panic into a 500 failure
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    AppError::internal(message).into_response()
}

/// Log handler failures and elide their message in production
pub async fn error_boundary(
    State(ctx): State<Arc<ServiceContext>>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let response = next.run(request).await;

    let Some(HandlerFailure(message)) = response.extensions().get::<HandlerFailure>().cloned()
    else {
        return response;
    };

    let status = response.status();
    error!(
        service = %ctx.name,
        method = %method,
        uri = %uri,
        status = status.as_u16(),
        error = %message,
        "Unhandled error"
    );

    if !ctx.production {
        return response;
    }

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(axum::http::header::CONTENT_LENGTH);
    let body = ErrorResponse::new(status.as_u16(), ELIDED_MESSAGE);
    let bytes = serde_json::to_vec(&body).unwrap_or_default();
    Response::from_parts(parts, Body::from(bytes))
}

/// Fallback for unmatched routes
pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(404, "Route not found")),
    )
}
