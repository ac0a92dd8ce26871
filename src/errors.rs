// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for platform operations

use thiserror::Error;

use crate::config::ConfigError;
use crate::stack::StackError;

/// Errors that can occur anywhere in the platform
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Environment configuration could not be resolved or loaded
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// Infrastructure composition failed
    #[error("Stack error: {0}")]
    Stack(#[from] StackError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Logging could not be initialised
    #[error("Telemetry error: {0}")]
    Telemetry(String),

    /// Server I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for platform operations
pub type PlatformResult<T> = Result<T, PlatformError>;

impl From<serde_json::Error> for PlatformError {
    fn from(err: serde_json::Error) -> Self {
        PlatformError::Serialization(err.to_string())
    }
}
