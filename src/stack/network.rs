// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network composition

use tracing::info;

use crate::config::EnvironmentConfig;
use crate::domain::{Environment, ResourceKind};
use crate::naming::{NamingConfig, ResourceNaming};
use crate::provision::{NatMode, Provisioner, ResourceHandle, VpcArgs};
use crate::tags::tags_for;

use super::StackResult;

/// Handles produced by [`create_network`]
#[derive(Debug)]
pub struct NetworkResources<V> {
    pub vpc: V,
}

/// Declare the VPC
///
/// Subnets, gateways and route tables are created by the backend as part of
/// the VPC: one zone per configured availability zone, a managed NAT gateway
/// only when enabled, no bastion host.
pub async fn create_network<P: Provisioner>(
    provisioner: &P,
    config: &EnvironmentConfig,
    environment: Environment,
) -> StackResult<NetworkResources<P::Vpc>> {
    let naming = ResourceNaming::new(NamingConfig::for_environment(environment));
    let name = naming.vpc();

    let args = VpcArgs {
        nat: config.vpc.enable_nat_gateway.then_some(NatMode::Managed),
        az_count: config.vpc.availability_zones.len(),
        bastion: false,
        removal: environment.removal_policy(),
        tags: tags_for(&naming, &ResourceKind::Vpc, &config.tags.to_tags()),
    };

    let vpc = provisioner.create_vpc(&name, args).await?;
    info!(
        vpc_id = vpc.id(),
        name = %name,
        zones = config.vpc.availability_zones.len(),
        nat = config.vpc.enable_nat_gateway,
        removal = %environment.removal_policy(),
        "Declared VPC"
    );

    Ok(NetworkResources { vpc })
}
