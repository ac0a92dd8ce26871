// Copyright (c) 2025 - Cowboy AI, Inc.
//! Platform Domain Models
//!
//! Core concepts shared by configuration, naming and provisioning.
//!
//! # Value Objects
//!
//! - [`Environment`] - Deployment stage (`dev`, `staging`, `production`)
//! - [`RemovalPolicy`] - What a teardown does to a stage's resources
//! - [`Region`] - Cloud region and its availability zones
//! - [`ResourceKind`] - Taxonomy of nameable cloud resources
//!
//! # Invariants
//!
//! - [`validate_config`] - Structural, cardinality and capacity checks run
//!   before any resource is declared

pub mod environment;
pub mod invariants;
pub mod network;
pub mod resource_type;

pub use environment::{Environment, Region, RemovalPolicy};
pub use invariants::{validate_config, ValidationError, ValidationResult};
pub use network::{availability_zone_suffix, is_valid_cidr};
pub use resource_type::{ResourceCategory, ResourceKind, RouteTable, SubnetType};
