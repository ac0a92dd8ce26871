// Copyright (c) 2025 - Cowboy AI, Inc.
//! Compute composition

use std::collections::BTreeMap;
use tracing::info;

use crate::config::EnvironmentConfig;
use crate::domain::{Environment, ResourceKind};
use crate::naming::{NamingConfig, ResourceNaming};
use crate::provision::{
    ClusterArgs, ImageArgs, PortMapping, Provisioner, ResourceHandle, ServiceArgs, ServiceHandle,
};
use crate::tags::tags_for;

use super::network::NetworkResources;
use super::{StackError, StackResult};

/// Service deployed by this stack
pub const SERVICE1: &str = "service1";

/// Public listener in front of every exposed service
const PUBLIC_LISTENER: &str = "80/http";

/// Handles produced by [`create_compute`]
#[derive(Debug)]
pub struct ComputeResources<C, S> {
    pub cluster: C,
    pub service1: S,
}

/// Declare the cluster and its services
///
/// The backend derives the task definition, image repository, roles and log
/// group from each service declaration.
pub async fn create_compute<P: Provisioner>(
    provisioner: &P,
    network: &NetworkResources<P::Vpc>,
    config: &EnvironmentConfig,
    environment: Environment,
) -> StackResult<ComputeResources<P::Cluster, P::Service>> {
    let naming = ResourceNaming::new(NamingConfig::for_environment(environment));
    let base_tags = config.tags.to_tags();

    let cluster_name = naming.ecs_cluster();
    let cluster = provisioner
        .create_cluster(
            &cluster_name,
            &network.vpc,
            ClusterArgs {
                removal: environment.removal_policy(),
                tags: tags_for(&naming, &ResourceKind::Cluster, &base_tags),
            },
        )
        .await?;
    info!(cluster = %cluster_name, vpc_id = network.vpc.id(), "Declared cluster");

    let service_config = config
        .ecs
        .get(SERVICE1)
        .ok_or_else(|| StackError::MissingService(SERVICE1.to_string()))?;

    let service_kind = ResourceKind::Service {
        service: SERVICE1.to_string(),
    };
    let service_name = naming.name(&service_kind);

    let mut env = BTreeMap::new();
    env.insert("PORT".to_string(), service_config.container_port.to_string());
    env.insert("NODE_ENV".to_string(), environment.runtime_mode().to_string());
    env.insert("LOG_LEVEL".to_string(), "info".to_string());

    let args = ServiceArgs {
        image: ImageArgs {
            context: ".".to_string(),
            dockerfile: format!("docker/{SERVICE1}.Dockerfile"),
        },
        architecture: service_config.architecture.as_platform_str().to_string(),
        cpu: service_config.cpu_vcpu(SERVICE1)?,
        memory: service_config.memory_gb(SERVICE1)?,
        public_ports: vec![PortMapping {
            listen: PUBLIC_LISTENER.to_string(),
            forward: format!("{}/http", service_config.container_port),
        }],
        environment: env,
        dev_command: Some(format!("pnpm --filter {SERVICE1} dev")),
        removal: environment.removal_policy(),
        tags: tags_for(&naming, &service_kind, &base_tags),
    };

    let service1 = provisioner.add_service(&cluster, &service_name, args).await?;
    info!(
        service = %service_name,
        url = service1.url().unwrap_or("-"),
        desired = service_config.desired_count,
        "Declared service"
    );

    Ok(ComputeResources { cluster, service1 })
}
