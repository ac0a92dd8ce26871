// Copyright (c) 2025 - Cowboy AI, Inc.
//! Response envelopes shared by every endpoint

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Current time as ISO-8601 UTC with millisecond precision
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Standard API response
///
/// Absent `data` and `error` fields are omitted from the JSON body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: timestamp(),
        }
    }
}

/// Error response
///
/// Same envelope as [`ApiResponse`] with the HTTP status echoed in the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub status_code: u16,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(status_code: u16, error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            status_code,
            timestamp: timestamp(),
        }
    }
}

/// Health status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Error,
}

/// `GET /health` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: HealthStatus,
    pub service: String,
    /// Seconds since the service started
    pub uptime: f64,
    pub timestamp: String,
}
