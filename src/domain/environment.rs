// Copyright (c) 2025 - Cowboy AI, Inc.
//! Deployment Target Value Objects
//!
//! An [`Environment`] identifies one deployment stage and decides what a
//! teardown does to its resources ([`RemovalPolicy`]). A [`Region`] pins the
//! availability zones resources are spread across.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

/// Deployment stage
///
/// # Examples
///
/// ```rust
/// use ecs_platform::domain::Environment;
///
/// let env: Environment = "staging".parse().unwrap();
/// assert_eq!(env.as_str(), "staging");
/// assert!(!env.is_production());
/// assert!("qa".parse::<Environment>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    Staging,
    Production,
}

impl Environment {
    /// Every known stage, in promotion order
    pub const ALL: [Environment; 3] = [Self::Dev, Self::Staging, Self::Production];

    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Runtime mode injected into containers as `NODE_ENV`
    pub fn runtime_mode(&self) -> &'static str {
        if self.is_production() {
            "production"
        } else {
            "development"
        }
    }

    /// Production resources survive stack removal; every other stage is
    /// deleted with it
    pub fn removal_policy(&self) -> RemovalPolicy {
        if self.is_production() {
            RemovalPolicy::Retain
        } else {
            RemovalPolicy::Remove
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Self::Dev),
            "staging" => Ok(Self::Staging),
            "production" => Ok(Self::Production),
            other => Err(ConfigError::UnknownEnvironment(other.to_string())),
        }
    }
}

/// Fate of a stage's resources when its stack is removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemovalPolicy {
    /// Keep the resources
    Retain,
    /// Delete the resources
    Remove,
}

impl RemovalPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Retain => "retain",
            Self::Remove => "remove",
        }
    }
}

impl fmt::Display for RemovalPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Cloud region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "us-east-1")]
    UsEast1,
    #[serde(rename = "us-west-2")]
    UsWest2,
    #[serde(rename = "eu-west-1")]
    EuWest1,
    #[serde(rename = "ap-southeast-1")]
    ApSoutheast1,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UsEast1 => "us-east-1",
            Self::UsWest2 => "us-west-2",
            Self::EuWest1 => "eu-west-1",
            Self::ApSoutheast1 => "ap-southeast-1",
        }
    }

    /// The three zones this platform spreads subnets across
    pub fn availability_zones(&self) -> [String; 3] {
        let region = self.as_str();
        ["a", "b", "c"].map(|zone| format!("{region}{zone}"))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
