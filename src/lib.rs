// Copyright (c) 2025 - Cowboy AI, Inc.
//! Container platform: provisioning library and HTTP services
//!
//! This crate provides the environment configuration registry, resource
//! naming and tagging, configuration validation and the infrastructure
//! composition that declares a VPC, an ECS cluster and its services through a
//! substitutable provisioning backend. It also hosts the shared HTTP layer and
//! the two services that the cluster runs.

pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod naming;
pub mod provision;
pub mod services;
pub mod stack;
pub mod tags;
pub mod telemetry;

// Re-export commonly used types
pub use config::{get_config, EnvironmentConfig};
pub use domain::{validate_config, Environment};
pub use errors::{PlatformError, PlatformResult};
pub use naming::{NamingConfig, ResourceNaming};
pub use stack::{create_infrastructure, InfrastructureOutputs};
