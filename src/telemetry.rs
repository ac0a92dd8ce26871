// Copyright (c) 2025 - Cowboy AI, Inc.
//! Logging setup
//!
//! Binaries call [`init`] once at startup. Output is one JSON object per line
//! with an ISO-8601 timestamp and the lowercase level. `LOG_LEVEL` sets the
//! default directive; `RUST_LOG` overrides it when present.

use tracing_subscriber::EnvFilter;

use crate::errors::{PlatformError, PlatformResult};

/// Install the global subscriber
pub fn init(log_level: &str) -> PlatformResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_current_span(true)
        .with_target(false)
        .try_init()
        .map_err(|e| PlatformError::Telemetry(e.to_string()))
}
