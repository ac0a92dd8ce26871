// Copyright (c) 2025 - Cowboy AI, Inc.
//! Per-stage configuration records

use super::{
    Architecture, EcsConfig, EnvironmentConfig, MonitoringConfig, ServiceConfig, TagConfig,
    VpcConfig, DEFAULT_REGION, MANAGED_BY, PROJECT_NAME,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// First `count` zones of the deployment region
fn zones(count: usize) -> Vec<String> {
    DEFAULT_REGION
        .availability_zones()
        .into_iter()
        .take(count)
        .collect()
}

/// Development record (also used by staging)
///
/// Two zones and no NAT gateway to keep cost down.
pub fn dev_config() -> EnvironmentConfig {
    EnvironmentConfig {
        vpc: VpcConfig {
            cidr_block: "10.0.0.0/16".into(),
            availability_zones: zones(2),
            public_subnet_cidrs: strings(&["10.0.1.0/24", "10.0.2.0/24"]),
            private_subnet_cidrs: strings(&["10.0.10.0/24", "10.0.20.0/24"]),
            enable_nat_gateway: false,
            single_nat_gateway: false,
        },
        ecs: EcsConfig::new().with_service(
            "service1",
            ServiceConfig {
                cpu: "256".into(),
                memory: "512".into(),
                desired_count: 1,
                min_capacity: 1,
                max_capacity: 2,
                container_port: 3001,
                health_check_path: "/health".into(),
                architecture: Architecture::Arm64,
            },
        ),
        monitoring: MonitoringConfig {
            alarm_email: "dev-team@example.com".into(),
            log_retention_days: 7,
            enable_detailed_monitoring: false,
            enable_container_insights: true,
        },
        tags: TagConfig {
            environment: "dev".into(),
            managed_by: MANAGED_BY.into(),
            project: PROJECT_NAME.into(),
            cost_center: None,
            owner: None,
        },
    }
}

/// Production record
///
/// Three zones with a NAT gateway per zone.
pub fn production_config() -> EnvironmentConfig {
    EnvironmentConfig {
        vpc: VpcConfig {
            cidr_block: "10.0.0.0/16".into(),
            availability_zones: zones(3),
            public_subnet_cidrs: strings(&["10.0.1.0/24", "10.0.2.0/24", "10.0.3.0/24"]),
            private_subnet_cidrs: strings(&["10.0.10.0/24", "10.0.20.0/24", "10.0.30.0/24"]),
            enable_nat_gateway: true,
            single_nat_gateway: false,
        },
        ecs: EcsConfig::new().with_service(
            "service1",
            ServiceConfig {
                cpu: "512".into(),
                memory: "1024".into(),
                desired_count: 2,
                min_capacity: 2,
                max_capacity: 10,
                container_port: 3001,
                health_check_path: "/health".into(),
                architecture: Architecture::Arm64,
            },
        ),
        monitoring: MonitoringConfig {
            alarm_email: "ops-team@example.com".into(),
            log_retention_days: 90,
            enable_detailed_monitoring: true,
            enable_container_insights: true,
        },
        tags: TagConfig {
            environment: "production".into(),
            managed_by: MANAGED_BY.into(),
            project: PROJECT_NAME.into(),
            cost_center: Some("engineering".into()),
            owner: None,
        },
    }
}
