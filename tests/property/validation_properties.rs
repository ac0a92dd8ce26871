// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Configuration Validation
//!
//! Validation is total over configurations: every capacity triple and every
//! subnet layout is either accepted or rejected with a specific error, and a
//! rejected configuration never reaches the provisioning backend.

use proptest::prelude::*;

use ecs_platform::config::{dev_config, EnvironmentConfig};
use ecs_platform::domain::{is_valid_cidr, validate_config, Environment, ValidationError};
use ecs_platform::provision::RecordingProvisioner;
use ecs_platform::stack::create_infrastructure_with;

fn with_capacity(min: u32, desired: u32, max: u32) -> EnvironmentConfig {
    let mut config = dev_config();
    if let Some(service) = config.ecs.get_mut("service1") {
        service.min_capacity = min;
        service.desired_count = desired;
        service.max_capacity = max;
    }
    config
}

fn octet() -> impl Strategy<Value = u16> {
    0u16..1000
}

proptest! {
    /// Ordered capacity bounds are always accepted
    #[test]
    fn prop_ordered_capacity_is_valid(a in 0u32..50, b in 0u32..50, c in 0u32..50) {
        let mut bounds = [a, b, c];
        bounds.sort_unstable();
        let [min, desired, max] = bounds;

        prop_assert_eq!(validate_config(&with_capacity(min, desired, max)), Ok(()));
    }

    /// min > max is rejected whatever the desired count
    #[test]
    fn prop_min_above_max_always_fails(
        max in 0u32..50,
        gap in 1u32..50,
        desired in 0u32..100,
    ) {
        let min = max + gap;
        let result = validate_config(&with_capacity(min, desired, max));
        prop_assert_eq!(
            result,
            Err(ValidationError::MinExceedsMax {
                service: "service1".to_string(),
                min,
                max,
            })
        );
    }

    /// Desired count outside the bounds is rejected
    #[test]
    fn prop_desired_outside_bounds_fails(min in 1u32..20, span in 0u32..20, below in any::<bool>()) {
        let max = min + span;
        let desired = if below { min - 1 } else { max + 1 };

        let result = validate_config(&with_capacity(min, desired, max));
        if below {
            let is_below = matches!(result, Err(ValidationError::DesiredBelowMin { .. }));
            prop_assert!(is_below);
        } else {
            let is_above = matches!(result, Err(ValidationError::DesiredAboveMax { .. }));
            prop_assert!(is_above);
        }
    }

    /// Subnet lists whose length differs from the zone list are rejected
    #[test]
    fn prop_subnet_count_mismatch_fails(public in 0usize..5, private in 0usize..5) {
        let mut config = dev_config();
        let zones = config.vpc.availability_zones.len();
        prop_assume!(public != zones || private != zones);

        config.vpc.public_subnet_cidrs = vec!["10.0.1.0/24".to_string(); public];
        config.vpc.private_subnet_cidrs = vec!["10.0.10.0/24".to_string(); private];

        let result = validate_config(&config);
        if public != zones {
            prop_assert_eq!(
                result,
                Err(ValidationError::PublicSubnetCount { subnets: public, zones })
            );
        } else {
            prop_assert_eq!(
                result,
                Err(ValidationError::PrivateSubnetCount { subnets: private, zones })
            );
        }
    }

    /// Any dotted quad with a one- or two-digit prefix has CIDR shape
    #[test]
    fn prop_dotted_quads_are_accepted(
        a in octet(), b in octet(), c in octet(), d in octet(), prefix in 0u8..100,
    ) {
        let cidr = format!("{a}.{b}.{c}.{d}/{prefix}");
        prop_assert!(is_valid_cidr(&cidr), "{}", cidr);
    }

    /// Anything containing a letter is rejected
    #[test]
    fn prop_cidr_with_letters_is_rejected(prefix in "[0-9./]{0,8}", letter in "[a-zA-Z]", suffix in "[0-9./]{0,8}") {
        let cidr = format!("{prefix}{letter}{suffix}");
        prop_assert!(!is_valid_cidr(&cidr), "{}", cidr);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// A run declares three resources when valid and none when not
    #[test]
    fn prop_run_declares_all_or_nothing(min in 0u32..6, desired in 0u32..6, max in 0u32..6) {
        let config = with_capacity(min, desired, max);
        let valid = validate_config(&config).is_ok();

        let provisioner = RecordingProvisioner::new();
        let result = tokio_test::block_on(create_infrastructure_with(
            &provisioner,
            Environment::Dev,
            &config,
        ));
        let declared = tokio_test::block_on(provisioner.resources()).len();

        prop_assert_eq!(result.is_ok(), valid);
        prop_assert_eq!(declared, if valid { 3 } else { 0 });
    }
}
