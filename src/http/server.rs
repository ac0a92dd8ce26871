// Copyright (c) 2025 - Cowboy AI, Inc.
//! Server settings and run loop

use axum::extract::Request;
use axum::ServiceExt;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, warn};

use super::HttpApp;
use crate::errors::PlatformResult;

/// Runtime settings read from the process environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub port: u16,
    pub log_level: String,
    pub production: bool,
}

impl ServerSettings {
    /// Load settings from `PORT`, `LOG_LEVEL` and `NODE_ENV`
    ///
    /// An unparsable `PORT` falls back to `default_port`.
    pub fn from_env(default_port: u16) -> Self {
        Self::from_lookup(default_port, |key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup
    pub fn from_lookup(default_port: u16, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(value = %raw, default_port, "Ignoring invalid PORT");
                default_port
            }),
            None => default_port,
        };

        Self {
            port,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            production: lookup("NODE_ENV").as_deref() == Some("production"),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Serve `app` until Ctrl-C or SIGTERM
pub async fn serve(app: HttpApp, settings: &ServerSettings) -> PlatformResult<()> {
    let listener = TcpListener::bind(settings.addr()).await?;
    info!(port = settings.port, "Listening on {}", settings.addr());

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
