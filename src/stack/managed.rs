// Copyright (c) 2025 - Cowboy AI, Inc.
//! Backend-managed resources
//!
//! The provisioning backend creates these implicitly while declaring the
//! cluster and its services:
//!
//! - IAM: task execution role (image pulls, log writes) and task role
//! - Container registry: one repository per service, image scanning,
//!   lifecycle cleanup
//! - Observability: one log group per service and its log streams
//!
//! The functions below declare nothing. They mark where explicit definitions
//! go if implicit creation is ever turned off, and report the names the
//! backend is expected to use.

use tracing::debug;

use crate::domain::Environment;
use crate::naming::{NamingConfig, ResourceNaming};

use super::compute::SERVICE1;

/// Identity resources owned by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IamResources;

/// Registry resources owned by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerRegistryResources;

/// Observability resources owned by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityResources;

fn naming(environment: Environment) -> ResourceNaming {
    ResourceNaming::new(NamingConfig::for_environment(environment))
}

pub fn create_iam(environment: Environment) -> IamResources {
    let naming = naming(environment);
    debug!(
        execution_role = %naming.iam_role("task-execution"),
        task_role = %naming.iam_role("task"),
        "IAM roles managed by backend"
    );
    IamResources
}

pub fn create_container_registry(environment: Environment) -> ContainerRegistryResources {
    debug!(
        repository = %naming(environment).ecr_repository(SERVICE1),
        "Container registry managed by backend"
    );
    ContainerRegistryResources
}

pub fn create_observability(environment: Environment) -> ObservabilityResources {
    debug!(
        log_group = %naming(environment).log_group(SERVICE1),
        "Log groups managed by backend"
    );
    ObservabilityResources
}
