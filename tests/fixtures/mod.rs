// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for ecs-platform
//!
//! Deterministic configurations and provisioning backends shared by the
//! integration tests. Configurations start from the shipped registry records
//! so tests only spell out the field they break.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use ecs_platform::config::{dev_config, EnvironmentConfig};
use ecs_platform::provision::{
    ClusterArgs, ProvisionError, ProvisionResult, Provisioner, RecordedHandle,
    RecordingProvisioner, ServiceArgs, VpcArgs,
};

/// Dev record with service1's capacity bounds replaced
pub fn config_with_capacity(min: u32, desired: u32, max: u32) -> EnvironmentConfig {
    let mut config = dev_config();
    let service = config
        .ecs
        .get_mut("service1")
        .expect("dev config declares service1");
    service.min_capacity = min;
    service.desired_count = desired;
    service.max_capacity = max;
    config
}

/// Dev record with one public subnet missing
pub fn config_with_missing_public_subnet() -> EnvironmentConfig {
    let mut config = dev_config();
    config.vpc.public_subnet_cidrs.pop();
    config
}

/// Dev record with a different VPC CIDR block
pub fn config_with_cidr(cidr: &str) -> EnvironmentConfig {
    let mut config = dev_config();
    config.vpc.cidr_block = cidr.to_string();
    config
}

/// Backend that counts calls and can refuse one resource kind
#[derive(Debug, Default)]
pub struct CountingProvisioner {
    inner: RecordingProvisioner,
    calls: AtomicUsize,
    refuse_services: bool,
}

impl CountingProvisioner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that accepts the VPC and cluster but refuses every service
    pub fn refusing_services() -> Self {
        Self {
            refuse_services: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn recorded(&self) -> &RecordingProvisioner {
        &self.inner
    }
}

#[async_trait]
impl Provisioner for CountingProvisioner {
    type Vpc = RecordedHandle;
    type Cluster = RecordedHandle;
    type Service = RecordedHandle;

    async fn create_vpc(&self, name: &str, args: VpcArgs) -> ProvisionResult<Self::Vpc> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.create_vpc(name, args).await
    }

    async fn create_cluster(
        &self,
        name: &str,
        vpc: &Self::Vpc,
        args: ClusterArgs,
    ) -> ProvisionResult<Self::Cluster> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.create_cluster(name, vpc, args).await
    }

    async fn add_service(
        &self,
        cluster: &Self::Cluster,
        name: &str,
        args: ServiceArgs,
    ) -> ProvisionResult<Self::Service> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.refuse_services {
            return Err(ProvisionError::Unavailable(format!(
                "image build for {name} failed"
            )));
        }
        self.inner.add_service(cluster, name, args).await
    }

    fn backend_name(&self) -> &str {
        "counting"
    }
}
