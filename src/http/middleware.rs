// Copyright (c) 2025 - Cowboy AI, Inc.
//! Request tracing
//!
//! Each request gets a uuid v7 id in `x-request-id` (set on the way in,
//! echoed on the way out) and a `request` span carrying the service name, id,
//! method and uri. One event is emitted when the response is ready; its level
//! follows the outcome: `error` for 5xx, `warn` for 4xx, `info` otherwise.

use axum::http::{HeaderValue, Request, Response};
use std::sync::Arc;
use std::time::Duration;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::request_id::{MakeRequestId, RequestId};
use tower_http::trace::{DefaultOnBodyChunk, DefaultOnEos, MakeSpan, OnResponse, TraceLayer};
use tracing::{error, info, info_span, warn, Span};
use uuid::Uuid;

/// Header carrying the per-request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Time-ordered request ids
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::now_v7().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// `request` span for one service
#[derive(Debug, Clone)]
pub struct RequestSpan {
    service: Arc<str>,
}

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let request_id = request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("-");

        info_span!(
            "request",
            service = %self.service,
            request_id = %request_id,
            method = %request.method(),
            uri = %request.uri(),
        )
    }
}

/// Completion event, levelled by status class
#[derive(Debug, Clone, Copy, Default)]
pub struct LogResponse;

impl<B> OnResponse<B> for LogResponse {
    fn on_response(self, response: &Response<B>, latency: Duration, _span: &Span) {
        let status = response.status();
        let code = status.as_u16();
        let latency_ms = latency.as_secs_f64() * 1000.0;

        if status.is_server_error() {
            error!(status = code, latency_ms, "request completed");
        } else if status.is_client_error() {
            warn!(status = code, latency_ms, "request completed");
        } else {
            info!(status = code, latency_ms, "request completed");
        }
    }
}

/// Tracing layer type produced by [`request_tracing`]
pub type RequestTraceLayer = TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    RequestSpan,
    (),
    LogResponse,
    DefaultOnBodyChunk,
    DefaultOnEos,
    (),
>;

/// Trace layer for `service`
///
/// Failures are reported by [`LogResponse`] only, so the default failure
/// event is disabled.
pub fn request_tracing(service: &str) -> RequestTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(RequestSpan {
            service: Arc::from(service),
        })
        .on_request(())
        .on_response(LogResponse)
        .on_failure(())
}
