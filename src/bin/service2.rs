// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service 2 HTTP server
//!
//! Environment:
//! - `PORT` (default 3002)
//! - `LOG_LEVEL` (default `info`)
//! - `NODE_ENV` (`production` hides handler error messages)

use anyhow::{Context, Result};
use ecs_platform::http::{serve, ServerSettings};
use ecs_platform::services::service2;
use ecs_platform::telemetry;
use tracing::{info, info_span, Instrument};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = ServerSettings::from_env(service2::DEFAULT_PORT);
    telemetry::init(&settings.log_level).context("Failed to initialise logging")?;

    let span = info_span!("service", name = service2::NAME);
    async {
        info!(
            port = settings.port,
            production = settings.production,
            "Service2 starting"
        );
        serve(service2::app(settings.production), &settings).await
    }
    .instrument(span)
    .await
    .context("Service2 terminated with an error")?;

    Ok(())
}
