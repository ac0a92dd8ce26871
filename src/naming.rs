// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource Naming
//!
//! Deterministic names for every resource the platform declares. Each kind
//! has its own fixed template:
//!
//! ```text
//! VPC                   {app}-{env}-vpc
//! Subnet                {app}-{env}-{type}-subnet-{azSuffix}
//! Internet gateway      {app}-{env}-igw
//! NAT gateway           {app}-{env}-nat-{index}
//! Elastic IP            {app}-{env}-eip-{index}
//! Route table           {app}-{env}-public-rt | {app}-{env}-private-rt-{index}
//! Security group        {app}-{env}-{name}-sg
//! Cluster               {app}-{env}-cluster
//! Service               {app}-{env}-{service}
//! Task definition       {env}-{service}
//! Repository            {app}/{env}-{service}
//! Log group             /ecs/{env}/{service}
//! IAM role              {env}-{name}-role
//! IAM policy            {env}-{name}-policy
//! Topic                 {env}-{name}-topic
//! Alarm                 {env}-{service}-{metric}
//! ```
//!
//! Inputs are interpolated as-is; nothing is validated or escaped.

use serde::{Deserialize, Serialize};

use crate::config::{APP_NAME, DEFAULT_REGION};
use crate::domain::{availability_zone_suffix, Environment, ResourceKind, RouteTable, SubnetType};

/// Naming context: application, environment and region
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamingConfig {
    pub app_name: String,
    pub environment: String,
    pub region: String,
}

impl NamingConfig {
    pub fn new(
        app_name: impl Into<String>,
        environment: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            environment: environment.into(),
            region: region.into(),
        }
    }

    /// Platform defaults for a stage
    pub fn for_environment(environment: Environment) -> Self {
        Self::new(APP_NAME, environment.as_str(), DEFAULT_REGION.as_str())
    }
}

/// Resource name generator bound to one [`NamingConfig`]
///
/// # Examples
///
/// ```rust
/// use ecs_platform::domain::SubnetType;
/// use ecs_platform::naming::{NamingConfig, ResourceNaming};
///
/// let naming = ResourceNaming::new(NamingConfig::new("shop", "dev", "us-east-1"));
/// assert_eq!(naming.vpc(), "shop-dev-vpc");
/// assert_eq!(naming.subnet(SubnetType::Public, "us-east-1b"), "shop-dev-public-subnet-b");
/// assert_eq!(naming.log_group("api"), "/ecs/dev/api");
/// ```
#[derive(Debug, Clone)]
pub struct ResourceNaming {
    config: NamingConfig,
}

impl ResourceNaming {
    pub fn new(config: NamingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NamingConfig {
        &self.config
    }

    pub fn environment(&self) -> &str {
        &self.config.environment
    }

    pub fn region(&self) -> &str {
        &self.config.region
    }

    fn prefixed(&self, suffix: &str) -> String {
        format!("{}-{}-{}", self.config.app_name, self.config.environment, suffix)
    }

    fn scoped(&self, suffix: &str) -> String {
        format!("{}-{}", self.config.environment, suffix)
    }

    pub fn vpc(&self) -> String {
        self.prefixed("vpc")
    }

    pub fn subnet(&self, subnet_type: SubnetType, az: &str) -> String {
        self.prefixed(&format!(
            "{}-subnet-{}",
            subnet_type,
            availability_zone_suffix(az)
        ))
    }

    pub fn internet_gateway(&self) -> String {
        self.prefixed("igw")
    }

    pub fn nat_gateway(&self, index: u32) -> String {
        self.prefixed(&format!("nat-{index}"))
    }

    pub fn eip(&self, index: u32) -> String {
        self.prefixed(&format!("eip-{index}"))
    }

    pub fn route_table(&self, table: RouteTable) -> String {
        match table {
            RouteTable::Public => self.prefixed("public-rt"),
            RouteTable::Private(index) => self.prefixed(&format!("private-rt-{index}")),
        }
    }

    pub fn security_group(&self, name: &str) -> String {
        self.prefixed(&format!("{name}-sg"))
    }

    pub fn ecs_cluster(&self) -> String {
        self.prefixed("cluster")
    }

    pub fn ecs_service(&self, service: &str) -> String {
        self.prefixed(service)
    }

    pub fn task_definition_family(&self, service: &str) -> String {
        self.scoped(service)
    }

    pub fn ecr_repository(&self, service: &str) -> String {
        format!(
            "{}/{}-{}",
            self.config.app_name, self.config.environment, service
        )
    }

    pub fn log_group(&self, service: &str) -> String {
        format!("/ecs/{}/{}", self.config.environment, service)
    }

    pub fn iam_role(&self, name: &str) -> String {
        self.scoped(&format!("{name}-role"))
    }

    pub fn iam_policy(&self, name: &str) -> String {
        self.scoped(&format!("{name}-policy"))
    }

    pub fn sns_topic(&self, name: &str) -> String {
        self.scoped(&format!("{name}-topic"))
    }

    pub fn alarm(&self, service: &str, metric: &str) -> String {
        self.scoped(&format!("{service}-{metric}"))
    }

    /// Name any [`ResourceKind`] with its template
    pub fn name(&self, kind: &ResourceKind) -> String {
        match kind {
            ResourceKind::Vpc => self.vpc(),
            ResourceKind::Subnet {
                subnet_type,
                availability_zone,
            } => self.subnet(*subnet_type, availability_zone),
            ResourceKind::InternetGateway => self.internet_gateway(),
            ResourceKind::NatGateway { index } => self.nat_gateway(*index),
            ResourceKind::ElasticIp { index } => self.eip(*index),
            ResourceKind::RouteTable { table } => self.route_table(*table),
            ResourceKind::SecurityGroup { name } => self.security_group(name),
            ResourceKind::Cluster => self.ecs_cluster(),
            ResourceKind::Service { service } => self.ecs_service(service),
            ResourceKind::TaskDefinitionFamily { service } => self.task_definition_family(service),
            ResourceKind::Repository { service } => self.ecr_repository(service),
            ResourceKind::IamRole { name } => self.iam_role(name),
            ResourceKind::IamPolicy { name } => self.iam_policy(name),
            ResourceKind::LogGroup { service } => self.log_group(service),
            ResourceKind::Topic { name } => self.sns_topic(name),
            ResourceKind::Alarm { service, metric } => self.alarm(service, metric),
        }
    }
}
