// Copyright (c) 2025 - Cowboy AI, Inc.
//! Environment Configuration Registry
//!
//! Static, read-only configuration records for each deployment stage: network
//! sizing, per-service compute sizing, monitoring settings and base tags.
//!
//! Records are resolved with [`get_config`]. A record can also be read from a
//! JSON file with [`EnvironmentConfig::from_json_file`]; the file uses the same
//! camelCase field names as the serialized form.

mod environments;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::Path;
use thiserror::Error;

use crate::domain::{Environment, Region};
use crate::tags::{Tags, TAG_COST_CENTER, TAG_ENVIRONMENT, TAG_MANAGED_BY, TAG_OWNER, TAG_PROJECT};

pub use environments::{dev_config, production_config};

/// Application name used as the prefix of most resource names
pub const APP_NAME: &str = "sst-ecs";

/// Project name recorded in the `Project` tag
pub const PROJECT_NAME: &str = "sst-ecs-monorepo";

/// Value of the `ManagedBy` tag
pub const MANAGED_BY: &str = "sst";

/// Region every stage is deployed to
pub const DEFAULT_REGION: Region = Region::ApSoutheast1;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No configuration found for environment: {0}")]
    UnknownEnvironment(String),

    #[error("{service}: {field} must be a whole number of units, got {value:?}")]
    InvalidSizing {
        service: String,
        field: &'static str,
        value: String,
    },

    #[error("Failed to read configuration file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Network sizing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VpcConfig {
    pub cidr_block: String,
    pub availability_zones: Vec<String>,
    pub public_subnet_cidrs: Vec<String>,
    pub private_subnet_cidrs: Vec<String>,
    pub enable_nat_gateway: bool,
    /// One shared NAT gateway instead of one per zone
    pub single_nat_gateway: bool,
}

/// CPU architecture of a service's containers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Architecture {
    #[serde(rename = "ARM64")]
    Arm64,
    #[serde(rename = "X86_64")]
    X86_64,
}

impl Architecture {
    /// Lowercase form expected by the provisioning backend
    pub fn as_platform_str(&self) -> &'static str {
        match self {
            Self::Arm64 => "arm64",
            Self::X86_64 => "x86_64",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arm64 => write!(f, "ARM64"),
            Self::X86_64 => write!(f, "X86_64"),
        }
    }
}

/// Compute sizing for one service
///
/// `cpu` and `memory` are unit strings (`"256"` = 0.25 vCPU, `"512"` =
/// 0.5 GB), kept as strings to match the provider's task-definition fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceConfig {
    pub cpu: String,
    pub memory: String,
    pub desired_count: u32,
    pub min_capacity: u32,
    pub max_capacity: u32,
    pub container_port: u16,
    pub health_check_path: String,
    pub architecture: Architecture,
}

impl ServiceConfig {
    /// CPU as a vCPU string: `"256"` → `"0.25 vCPU"`, `"1024"` → `"1 vCPU"`
    pub fn cpu_vcpu(&self, service: &str) -> Result<String, ConfigError> {
        let units = parse_units(service, "cpu", &self.cpu)?;
        Ok(format!("{} vCPU", units / 1024.0))
    }

    /// Memory as a GB string: `"512"` → `"0.5 GB"`, `"2048"` → `"2 GB"`
    pub fn memory_gb(&self, service: &str) -> Result<String, ConfigError> {
        let units = parse_units(service, "memory", &self.memory)?;
        Ok(format!("{} GB", units / 1024.0))
    }
}

fn parse_units(service: &str, field: &'static str, value: &str) -> Result<f64, ConfigError> {
    value
        .trim()
        .parse::<u32>()
        .map(f64::from)
        .map_err(|_| ConfigError::InvalidSizing {
            service: service.to_string(),
            field,
            value: value.to_string(),
        })
}

/// Per-service compute sizing, in declaration order
///
/// Serialized as a JSON object keyed by service name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EcsConfig {
    services: Vec<(String, ServiceConfig)>,
}

impl EcsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a service, keeping its original position on replace
    pub fn insert(&mut self, name: impl Into<String>, config: ServiceConfig) {
        let name = name.into();
        match self.services.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = config,
            None => self.services.push((name, config)),
        }
    }

    pub fn with_service(mut self, name: impl Into<String>, config: ServiceConfig) -> Self {
        self.insert(name, config);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ServiceConfig> {
        self.services
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, config)| config)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ServiceConfig> {
        self.services
            .iter_mut()
            .find(|(existing, _)| existing == name)
            .map(|(_, config)| config)
    }

    /// Iterate `(name, config)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ServiceConfig)> {
        self.services
            .iter()
            .map(|(name, config)| (name.as_str(), config))
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl Serialize for EcsConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.services.len()))?;
        for (name, config) in &self.services {
            map.serialize_entry(name, config)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for EcsConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EcsConfigVisitor;

        impl<'de> Visitor<'de> for EcsConfigVisitor {
            type Value = EcsConfig;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of service name to service configuration")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut ecs = EcsConfig::new();
                while let Some((name, config)) = access.next_entry::<String, ServiceConfig>()? {
                    ecs.insert(name, config);
                }
                Ok(ecs)
            }
        }

        deserializer.deserialize_map(EcsConfigVisitor)
    }
}

/// Monitoring settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringConfig {
    pub alarm_email: String,
    pub log_retention_days: u32,
    pub enable_detailed_monitoring: bool,
    pub enable_container_insights: bool,
}

/// Base tag record of an environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagConfig {
    pub environment: String,
    pub managed_by: String,
    pub project: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_center: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl TagConfig {
    /// Flatten into a tag map, omitting unset optional keys
    pub fn to_tags(&self) -> Tags {
        let mut tags = Tags::new();
        tags.insert(TAG_ENVIRONMENT.to_string(), self.environment.clone());
        tags.insert(TAG_MANAGED_BY.to_string(), self.managed_by.clone());
        tags.insert(TAG_PROJECT.to_string(), self.project.clone());
        if let Some(cost_center) = &self.cost_center {
            tags.insert(TAG_COST_CENTER.to_string(), cost_center.clone());
        }
        if let Some(owner) = &self.owner {
            tags.insert(TAG_OWNER.to_string(), owner.clone());
        }
        tags
    }
}

/// Complete configuration of one deployment stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentConfig {
    pub vpc: VpcConfig,
    pub ecs: EcsConfig,
    pub monitoring: MonitoringConfig,
    pub tags: TagConfig,
}

impl EnvironmentConfig {
    /// Load a configuration record from a JSON file
    ///
    /// The record is not validated here; run
    /// [`crate::domain::validate_config`] before using it.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })
    }
}

/// Resolve the configuration record of a stage
///
/// Staging shares the dev record.
pub fn get_config(environment: Environment) -> EnvironmentConfig {
    match environment {
        Environment::Dev | Environment::Staging => dev_config(),
        Environment::Production => production_config(),
    }
}

/// Resolve a stage by its identifier
pub fn get_config_by_name(environment: &str) -> Result<EnvironmentConfig, ConfigError> {
    Ok(get_config(environment.parse()?))
}
