// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Validation Functions - Configuration Invariants
//!
//! Checks an [`EnvironmentConfig`] before any resource is declared. All
//! functions are pure and stop at the first violated invariant.
//!
//! # Invariant Categories
//!
//! 1. **Structural Invariants**: the VPC CIDR block has IPv4 CIDR shape
//! 2. **Cardinality Invariants**: one public and one private subnet per zone
//! 3. **Capacity Invariants**: `min_capacity <= desired_count <= max_capacity`
//!    for every service, checked in declaration order

use crate::config::{EnvironmentConfig, ServiceConfig, VpcConfig};
use crate::domain::network::is_valid_cidr;

/// Validation result with detailed error information
pub type ValidationResult = Result<(), ValidationError>;

/// Validation error with context
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// VPC CIDR block is not shaped like `a.b.c.d/n`
    #[error("Invalid VPC CIDR: {0}")]
    InvalidCidr(String),

    /// Public subnet list length differs from the zone list length
    #[error("Public subnet count must match availability zone count")]
    PublicSubnetCount { subnets: usize, zones: usize },

    /// Private subnet list length differs from the zone list length
    #[error("Private subnet count must match availability zone count")]
    PrivateSubnetCount { subnets: usize, zones: usize },

    #[error("{service}: minCapacity cannot exceed maxCapacity")]
    MinExceedsMax { service: String, min: u32, max: u32 },

    #[error("{service}: desiredCount cannot be less than minCapacity")]
    DesiredBelowMin {
        service: String,
        desired: u32,
        min: u32,
    },

    #[error("{service}: desiredCount cannot exceed maxCapacity")]
    DesiredAboveMax {
        service: String,
        desired: u32,
        max: u32,
    },
}

/// Validate a full environment configuration
///
/// # Rules
/// - VPC CIDR block is shape-valid
/// - Public and private subnet counts each equal the zone count
/// - Every service satisfies its capacity ordering
pub fn validate_config(config: &EnvironmentConfig) -> ValidationResult {
    validate_vpc(&config.vpc)?;

    for (name, service) in config.ecs.iter() {
        validate_capacity(name, service)?;
    }

    Ok(())
}

/// Validate network sizing
pub fn validate_vpc(vpc: &VpcConfig) -> ValidationResult {
    if !is_valid_cidr(&vpc.cidr_block) {
        return Err(ValidationError::InvalidCidr(vpc.cidr_block.clone()));
    }

    let zones = vpc.availability_zones.len();

    if vpc.public_subnet_cidrs.len() != zones {
        return Err(ValidationError::PublicSubnetCount {
            subnets: vpc.public_subnet_cidrs.len(),
            zones,
        });
    }

    if vpc.private_subnet_cidrs.len() != zones {
        return Err(ValidationError::PrivateSubnetCount {
            subnets: vpc.private_subnet_cidrs.len(),
            zones,
        });
    }

    Ok(())
}

/// Validate one service's capacity bounds
///
/// # Rules
/// - `min_capacity <= max_capacity`
/// - `desired_count >= min_capacity`
/// - `desired_count <= max_capacity`
pub fn validate_capacity(name: &str, service: &ServiceConfig) -> ValidationResult {
    if service.min_capacity > service.max_capacity {
        return Err(ValidationError::MinExceedsMax {
            service: name.to_string(),
            min: service.min_capacity,
            max: service.max_capacity,
        });
    }

    if service.desired_count < service.min_capacity {
        return Err(ValidationError::DesiredBelowMin {
            service: name.to_string(),
            desired: service.desired_count,
            min: service.min_capacity,
        });
    }

    if service.desired_count > service.max_capacity {
        return Err(ValidationError::DesiredAboveMax {
            service: name.to_string(),
            desired: service.desired_count,
            max: service.max_capacity,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::get_config;
    use crate::domain::Environment;

    #[test]
    fn test_shipped_configs_are_valid() {
        for env in Environment::ALL {
            assert_eq!(validate_config(&get_config(env)), Ok(()));
        }
    }

    #[test]
    fn test_cidr_checked_before_subnets() {
        let mut config = get_config(Environment::Dev);
        config.vpc.cidr_block = "10.0.0/16".into();
        config.vpc.public_subnet_cidrs.pop();

        assert_eq!(
            validate_config(&config),
            Err(ValidationError::InvalidCidr("10.0.0/16".into()))
        );
    }

    #[test]
    fn test_public_checked_before_private() {
        let mut config = get_config(Environment::Production);
        config.vpc.public_subnet_cidrs.pop();
        config.vpc.private_subnet_cidrs.pop();

        let err = validate_config(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Public subnet count must match availability zone count"
        );
    }

    #[test]
    fn test_min_over_max_reported_first() {
        let mut config = get_config(Environment::Dev);
        if let Some(service) = config.ecs.get_mut("service1") {
            service.min_capacity = 5;
            service.max_capacity = 3;
            service.desired_count = 1;
        }

        let err = validate_config(&config).unwrap_err();
        assert_eq!(err.to_string(), "service1: minCapacity cannot exceed maxCapacity");
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let mut config = get_config(Environment::Dev);
        if let Some(service) = config.ecs.get_mut("service1") {
            service.min_capacity = 3;
            service.desired_count = 3;
            service.max_capacity = 3;
        }

        assert!(validate_config(&config).is_ok());
    }
}
