// Copyright (c) 2025 - Cowboy AI, Inc.
//! Infrastructure Composition
//!
//! Thin adapters that read a validated [`EnvironmentConfig`], derive names and
//! declare resources through a [`Provisioner`].
//!
//! # Run Sequence
//!
//! ```text
//! get_config → validate_config → network → IAM → registry → observability → compute
//! ```
//!
//! The sequence is linear. A validation failure aborts the run before the
//! backend sees any declaration; a backend failure aborts the remaining steps.
//! Retries and rollback belong to the backend.

pub mod compute;
pub mod managed;
pub mod network;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

use crate::config::{get_config, ConfigError, EnvironmentConfig};
use crate::domain::{validate_config, Environment, ValidationError};
use crate::provision::{ProvisionError, Provisioner, ResourceHandle, ServiceHandle};

pub use compute::{create_compute, ComputeResources, SERVICE1};
pub use managed::{
    create_container_registry, create_iam, create_observability, ContainerRegistryResources,
    IamResources, ObservabilityResources,
};
pub use network::{create_network, NetworkResources};

/// Stack result type
pub type StackResult<T> = Result<T, StackError>;

/// Errors that abort a provisioning run
#[derive(Debug, Error)]
pub enum StackError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Provision(#[from] ProvisionError),

    #[error("No compute configuration for service: {0}")]
    MissingService(String),
}

/// Identifiers exported by a provisioning run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureOutputs {
    pub vpc_id: String,
    pub cluster_name: String,
    pub service1_name: String,
    pub service1_url: Option<String>,
}

/// Provision a stage from its registry configuration
pub async fn create_infrastructure<P: Provisioner>(
    provisioner: &P,
    environment: Environment,
) -> StackResult<InfrastructureOutputs> {
    create_infrastructure_with(provisioner, environment, &get_config(environment)).await
}

/// Provision a stage from an explicit configuration
pub async fn create_infrastructure_with<P: Provisioner>(
    provisioner: &P,
    environment: Environment,
    config: &EnvironmentConfig,
) -> StackResult<InfrastructureOutputs> {
    info!(
        environment = %environment,
        backend = provisioner.backend_name(),
        "Provisioning infrastructure"
    );

    if let Err(e) = validate_config(config) {
        error!(environment = %environment, error = %e, "Configuration rejected");
        return Err(e.into());
    }

    let network = create_network(provisioner, config, environment).await?;
    let _iam = create_iam(environment);
    let _registry = create_container_registry(environment);
    let _observability = create_observability(environment);
    let compute = create_compute(provisioner, &network, config, environment).await?;

    let outputs = InfrastructureOutputs {
        vpc_id: network.vpc.id().to_string(),
        cluster_name: compute.cluster.name().to_string(),
        service1_name: compute.service1.name().to_string(),
        service1_url: compute.service1.url().map(str::to_string),
    };

    info!(
        environment = %environment,
        vpc_id = %outputs.vpc_id,
        cluster = %outputs.cluster_name,
        "Infrastructure declared"
    );

    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provision::RecordingProvisioner;

    #[tokio::test]
    async fn test_dev_outputs() {
        let provisioner = RecordingProvisioner::new();
        let outputs = create_infrastructure(&provisioner, Environment::Dev)
            .await
            .unwrap();

        assert_eq!(outputs.vpc_id, "vpc-0001");
        assert_eq!(outputs.cluster_name, "sst-ecs-dev-cluster");
        assert_eq!(outputs.service1_name, "sst-ecs-dev-service1");
        assert_eq!(
            outputs.service1_url.as_deref(),
            Some("http://sst-ecs-dev-service1.sst-ecs-dev-cluster.local")
        );
    }

    #[tokio::test]
    async fn test_outputs_serialize_camel_case() {
        let provisioner = RecordingProvisioner::new();
        let outputs = create_infrastructure(&provisioner, Environment::Production)
            .await
            .unwrap();

        let json = serde_json::to_value(&outputs).unwrap();
        assert_eq!(json["clusterName"], "sst-ecs-production-cluster");
        assert_eq!(json["service1Name"], "sst-ecs-production-service1");
        assert!(json.get("vpcId").is_some());
    }
}
