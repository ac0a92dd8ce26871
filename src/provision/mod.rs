// Copyright (c) 2025 - Cowboy AI, Inc.
//! Provisioning Boundary
//!
//! The cloud provisioning engine (resource graph, diffing, apply, retries,
//! rollback) lives outside this crate. Composition functions talk to it
//! through the [`Provisioner`] trait and only ever see opaque handles that
//! expose an id, a name and, for services, a URL.
//!
//! # Architecture
//!
//! ```text
//! stack::create_infrastructure
//!     ↓
//! create_network ──> Provisioner::create_vpc ──────> Vpc handle
//!     ↓
//! create_compute ──> Provisioner::create_cluster ──> Cluster handle
//!               └──> Provisioner::add_service ────> Service handle
//!     ↓
//! InfrastructureOutputs { vpcId, clusterName, service1Name, service1Url }
//! ```
//!
//! [`RecordingProvisioner`] is an in-process backend that records every
//! declaration and returns deterministic handles. It backs the `provision`
//! binary's plan mode and the test suite.

pub mod recording;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::domain::RemovalPolicy;
use crate::tags::Tags;

pub use recording::{PlannedResource, RecordedHandle, RecordingProvisioner};

/// Provisioning result type
pub type ProvisionResult<T> = Result<T, ProvisionError>;

/// Errors reported by a provisioning backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProvisionError {
    /// Backend refused the declaration
    #[error("{resource} rejected by provisioning backend: {reason}")]
    Rejected { resource: String, reason: String },

    /// A resource with this name was already declared in the run
    #[error("Duplicate resource name: {0}")]
    Duplicate(String),

    /// Backend could not be reached
    #[error("Provisioning backend unavailable: {0}")]
    Unavailable(String),
}

/// Reference to a declared resource
pub trait ResourceHandle: Send + Sync {
    /// Provider-assigned identifier
    fn id(&self) -> &str;

    /// Declared name
    fn name(&self) -> &str;
}

/// Reference to a declared service
pub trait ServiceHandle: ResourceHandle {
    /// Public endpoint, if the service is exposed
    fn url(&self) -> Option<&str>;
}

/// NAT gateway mode for private subnets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NatMode {
    /// Provider-managed NAT gateway
    Managed,
}

/// Virtual network declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VpcArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nat: Option<NatMode>,
    /// Number of availability zones to spread subnets across
    pub az_count: usize,
    pub bastion: bool,
    pub removal: RemovalPolicy,
    pub tags: Tags,
}

/// Container cluster declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterArgs {
    pub removal: RemovalPolicy,
    pub tags: Tags,
}

/// Image build context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageArgs {
    pub context: String,
    pub dockerfile: String,
}

/// Public listener forwarded to a container port, e.g. `80/http` → `3001/http`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortMapping {
    pub listen: String,
    pub forward: String,
}

/// Container service declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceArgs {
    pub image: ImageArgs,
    /// `arm64` or `x86_64`
    pub architecture: String,
    /// e.g. `0.25 vCPU`
    pub cpu: String,
    /// e.g. `0.5 GB`
    pub memory: String,
    pub public_ports: Vec<PortMapping>,
    pub environment: BTreeMap<String, String>,
    /// Command run in place of the container during local development
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_command: Option<String>,
    pub removal: RemovalPolicy,
    pub tags: Tags,
}

/// Cloud provisioning backend
///
/// Implementations own retries, consistency and rollback. Calls are issued
/// in a single linear sequence per run.
#[async_trait]
pub trait Provisioner: Send + Sync {
    type Vpc: ResourceHandle;
    type Cluster: ResourceHandle;
    type Service: ServiceHandle;

    /// Declare a virtual network
    async fn create_vpc(&self, name: &str, args: VpcArgs) -> ProvisionResult<Self::Vpc>;

    /// Declare a container cluster inside `vpc`
    async fn create_cluster(
        &self,
        name: &str,
        vpc: &Self::Vpc,
        args: ClusterArgs,
    ) -> ProvisionResult<Self::Cluster>;

    /// Declare a service on `cluster`, building its image from the context
    async fn add_service(
        &self,
        cluster: &Self::Cluster,
        name: &str,
        args: ServiceArgs,
    ) -> ProvisionResult<Self::Service>;

    /// Get the name of this backend
    fn backend_name(&self) -> &str;
}
