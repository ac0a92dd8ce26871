// Copyright (c) 2025 - Cowboy AI, Inc.
//! Recording provisioner
//!
//! Declares nothing remotely. Every call is appended to an in-memory plan and
//! answered with a handle whose id is `{kind}-{sequence}`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::{ResourceCategory, ResourceKind};

use super::{
    ClusterArgs, ProvisionError, ProvisionResult, Provisioner, ResourceHandle, ServiceArgs,
    ServiceHandle, VpcArgs,
};

/// One declared resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedResource {
    pub id: String,
    /// `vpc`, `cluster` or `service`
    pub kind: String,
    pub category: ResourceCategory,
    pub name: String,
    /// Id of the resource this one is placed in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    pub properties: serde_json::Value,
}

/// Handle returned by [`RecordingProvisioner`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedHandle {
    id: String,
    name: String,
    url: Option<String>,
}

impl ResourceHandle for RecordedHandle {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl ServiceHandle for RecordedHandle {
    fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

/// In-memory plan of declared resources
#[derive(Debug, Default)]
pub struct RecordingProvisioner {
    plan: Mutex<Vec<PlannedResource>>,
}

impl RecordingProvisioner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declared resources, in declaration order
    pub async fn resources(&self) -> Vec<PlannedResource> {
        self.plan.lock().await.clone()
    }

    async fn record(
        &self,
        kind: &ResourceKind,
        name: &str,
        parent: Option<&str>,
        properties: serde_json::Value,
    ) -> ProvisionResult<String> {
        let mut plan = self.plan.lock().await;

        if plan.iter().any(|resource| resource.name == name) {
            return Err(ProvisionError::Duplicate(name.to_string()));
        }

        let id = format!("{}-{:04}", kind.as_str(), plan.len() + 1);
        debug!(id = %id, kind = kind.as_str(), name, "Recorded resource");

        plan.push(PlannedResource {
            id: id.clone(),
            kind: kind.as_str().to_string(),
            category: kind.category(),
            name: name.to_string(),
            parent: parent.map(str::to_string),
            properties,
        });

        Ok(id)
    }
}

fn to_properties<T: Serialize>(resource: &str, args: &T) -> ProvisionResult<serde_json::Value> {
    serde_json::to_value(args).map_err(|e| ProvisionError::Rejected {
        resource: resource.to_string(),
        reason: e.to_string(),
    })
}

#[async_trait]
impl Provisioner for RecordingProvisioner {
    type Vpc = RecordedHandle;
    type Cluster = RecordedHandle;
    type Service = RecordedHandle;

    async fn create_vpc(&self, name: &str, args: VpcArgs) -> ProvisionResult<Self::Vpc> {
        let properties = to_properties(name, &args)?;
        let id = self.record(&ResourceKind::Vpc, name, None, properties).await?;
        Ok(RecordedHandle {
            id,
            name: name.to_string(),
            url: None,
        })
    }

    async fn create_cluster(
        &self,
        name: &str,
        vpc: &Self::Vpc,
        args: ClusterArgs,
    ) -> ProvisionResult<Self::Cluster> {
        let properties = to_properties(name, &args)?;
        let id = self
            .record(&ResourceKind::Cluster, name, Some(vpc.id()), properties)
            .await?;
        Ok(RecordedHandle {
            id,
            name: name.to_string(),
            url: None,
        })
    }

    async fn add_service(
        &self,
        cluster: &Self::Cluster,
        name: &str,
        args: ServiceArgs,
    ) -> ProvisionResult<Self::Service> {
        let url = (!args.public_ports.is_empty())
            .then(|| format!("http://{}.{}.local", name, cluster.name()));
        let properties = to_properties(name, &args)?;
        let id = self
            .record(
                &ResourceKind::Service {
                    service: name.to_string(),
                },
                name,
                Some(cluster.id()),
                properties,
            )
            .await?;
        Ok(RecordedHandle {
            id,
            name: name.to_string(),
            url,
        })
    }

    fn backend_name(&self) -> &str {
        "recording"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RemovalPolicy;
    use crate::tags::Tags;

    fn vpc_args() -> VpcArgs {
        VpcArgs {
            nat: None,
            az_count: 2,
            bastion: false,
            removal: RemovalPolicy::Remove,
            tags: Tags::new(),
        }
    }

    fn cluster_args() -> ClusterArgs {
        ClusterArgs {
            removal: RemovalPolicy::Retain,
            tags: Tags::new(),
        }
    }

    #[tokio::test]
    async fn test_ids_follow_declaration_order() {
        let provisioner = RecordingProvisioner::new();
        let vpc = provisioner.create_vpc("net", vpc_args()).await.unwrap();
        let cluster = provisioner
            .create_cluster("compute", &vpc, cluster_args())
            .await
            .unwrap();

        assert_eq!(vpc.id(), "vpc-0001");
        assert_eq!(cluster.id(), "cluster-0002");

        let plan = provisioner.resources().await;
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[1].parent.as_deref(), Some("vpc-0001"));
        assert_eq!(plan[0].properties["azCount"], 2);
        assert!(plan[0].properties.get("nat").is_none());
        assert_eq!(plan[0].category, ResourceCategory::Network);
        assert_eq!(plan[1].category, ResourceCategory::Compute);
        assert_eq!(plan[1].properties["removal"], "retain");
    }

    #[tokio::test]
    async fn test_duplicate_names_are_rejected() {
        let provisioner = RecordingProvisioner::new();
        provisioner.create_vpc("net", vpc_args()).await.unwrap();

        let err = provisioner.create_vpc("net", vpc_args()).await.unwrap_err();
        assert_eq!(err, ProvisionError::Duplicate("net".into()));
        assert_eq!(provisioner.resources().await.len(), 1);
    }
}
