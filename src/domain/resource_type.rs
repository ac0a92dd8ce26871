// Copyright (c) 2025 - Cowboy AI, Inc.
//! Provisioned Resource Taxonomy
//!
//! Defines every kind of cloud resource the platform can name, together with
//! the qualifiers that distinguish one instance of a kind from another.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Subnet placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubnetType {
    Public,
    Private,
}

impl SubnetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

impl fmt::Display for SubnetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Route table placement
///
/// There is a single public route table; private tables are per zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteTable {
    Public,
    Private(u32),
}

/// Resource kind with its naming qualifiers
///
/// Pass one of these to [`crate::naming::ResourceNaming::name`] to get the
/// deterministic name for that resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResourceKind {
    // Network
    Vpc,
    Subnet {
        subnet_type: SubnetType,
        availability_zone: String,
    },
    InternetGateway,
    NatGateway {
        index: u32,
    },
    ElasticIp {
        index: u32,
    },
    RouteTable {
        table: RouteTable,
    },
    SecurityGroup {
        name: String,
    },

    // Compute
    Cluster,
    Service {
        service: String,
    },
    TaskDefinitionFamily {
        service: String,
    },
    Repository {
        service: String,
    },

    // Identity
    IamRole {
        name: String,
    },
    IamPolicy {
        name: String,
    },

    // Observability
    LogGroup {
        service: String,
    },
    Topic {
        name: String,
    },
    Alarm {
        service: String,
        metric: String,
    },
}

impl ResourceKind {
    /// Get the canonical string representation of the kind (qualifiers dropped)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vpc => "vpc",
            Self::Subnet { .. } => "subnet",
            Self::InternetGateway => "internet_gateway",
            Self::NatGateway { .. } => "nat_gateway",
            Self::ElasticIp { .. } => "elastic_ip",
            Self::RouteTable { .. } => "route_table",
            Self::SecurityGroup { .. } => "security_group",
            Self::Cluster => "cluster",
            Self::Service { .. } => "service",
            Self::TaskDefinitionFamily { .. } => "task_definition_family",
            Self::Repository { .. } => "repository",
            Self::IamRole { .. } => "iam_role",
            Self::IamPolicy { .. } => "iam_policy",
            Self::LogGroup { .. } => "log_group",
            Self::Topic { .. } => "topic",
            Self::Alarm { .. } => "alarm",
        }
    }

    /// Human-readable name, used as the `ResourceType` tag value
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Vpc => "VPC",
            Self::Subnet { .. } => "Subnet",
            Self::InternetGateway => "Internet Gateway",
            Self::NatGateway { .. } => "NAT Gateway",
            Self::ElasticIp { .. } => "Elastic IP",
            Self::RouteTable { .. } => "Route Table",
            Self::SecurityGroup { .. } => "Security Group",
            Self::Cluster => "ECS Cluster",
            Self::Service { .. } => "ECS Service",
            Self::TaskDefinitionFamily { .. } => "Task Definition",
            Self::Repository { .. } => "ECR Repository",
            Self::IamRole { .. } => "IAM Role",
            Self::IamPolicy { .. } => "IAM Policy",
            Self::LogGroup { .. } => "Log Group",
            Self::Topic { .. } => "SNS Topic",
            Self::Alarm { .. } => "CloudWatch Alarm",
        }
    }

    /// Get the primary category for this resource kind
    pub fn category(&self) -> ResourceCategory {
        match self {
            Self::Vpc
            | Self::Subnet { .. }
            | Self::InternetGateway
            | Self::NatGateway { .. }
            | Self::ElasticIp { .. }
            | Self::RouteTable { .. }
            | Self::SecurityGroup { .. } => ResourceCategory::Network,

            Self::Cluster
            | Self::Service { .. }
            | Self::TaskDefinitionFamily { .. }
            | Self::Repository { .. } => ResourceCategory::Compute,

            Self::IamRole { .. } | Self::IamPolicy { .. } => ResourceCategory::Identity,

            Self::LogGroup { .. } | Self::Topic { .. } | Self::Alarm { .. } => {
                ResourceCategory::Observability
            }
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Resource category (high-level grouping)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceCategory {
    /// VPC, subnets, gateways, routing, security groups
    Network,
    /// Cluster, services and their images
    Compute,
    /// Roles and policies
    Identity,
    /// Logs, topics and alarms
    Observability,
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network => write!(f, "Network"),
            Self::Compute => write!(f, "Compute"),
            Self::Identity => write!(f, "Identity"),
            Self::Observability => write!(f, "Observability"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_categories() {
        assert_eq!(ResourceKind::Vpc.category(), ResourceCategory::Network);
        assert_eq!(ResourceKind::Cluster.category(), ResourceCategory::Compute);
        assert_eq!(
            ResourceKind::IamRole { name: "task".into() }.category(),
            ResourceCategory::Identity
        );
        assert_eq!(
            ResourceKind::Alarm {
                service: "service1".into(),
                metric: "cpu".into()
            }
            .category(),
            ResourceCategory::Observability
        );
    }

    #[test]
    fn test_display_name() {
        assert_eq!(ResourceKind::Vpc.display_name(), "VPC");
        assert_eq!(ResourceKind::Cluster.to_string(), "ECS Cluster");
        assert_eq!(
            ResourceKind::NatGateway { index: 2 }.display_name(),
            "NAT Gateway"
        );
    }

    #[test]
    fn test_serialized_shape() {
        let kind = ResourceKind::Subnet {
            subnet_type: SubnetType::Private,
            availability_zone: "ap-southeast-1b".into(),
        };
        let json = serde_json::to_value(&kind).unwrap();
        assert_eq!(json["kind"], "subnet");
        assert_eq!(json["subnet_type"], "private");
    }
}
