// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Naming and Tagging
//!
//! Names are a pure function of (app, environment, kind, qualifiers): the
//! same inputs always give the same name, and distinct resources of one
//! deployment never share a name.

use proptest::prelude::*;

use ecs_platform::domain::{Environment, Region, ResourceKind, RouteTable, SubnetType};
use ecs_platform::naming::{NamingConfig, ResourceNaming};
use ecs_platform::tags::{
    create_resource_tags, create_tags, tags_for, Tags, TAG_RESOURCE_NAME, TAG_RESOURCE_TYPE,
};

// ============================================================================
// Strategies
// ============================================================================

fn environment() -> impl Strategy<Value = Environment> {
    prop::sample::select(Environment::ALL.to_vec())
}

fn service_name() -> impl Strategy<Value = String> {
    "service[0-9]{1,2}"
}

fn component_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["web", "app", "alerts", "task", "execution"]).prop_map(String::from)
}

fn availability_zone() -> impl Strategy<Value = String> {
    prop::sample::select(Region::ApSoutheast1.availability_zones().to_vec())
}

fn subnet_type() -> impl Strategy<Value = SubnetType> {
    prop_oneof![Just(SubnetType::Public), Just(SubnetType::Private)]
}

fn route_table() -> impl Strategy<Value = RouteTable> {
    prop_oneof![Just(RouteTable::Public), (0u32..4).prop_map(RouteTable::Private)]
}

fn resource_kind() -> impl Strategy<Value = ResourceKind> {
    prop_oneof![
        Just(ResourceKind::Vpc),
        (subnet_type(), availability_zone()).prop_map(|(subnet_type, availability_zone)| {
            ResourceKind::Subnet {
                subnet_type,
                availability_zone,
            }
        }),
        Just(ResourceKind::InternetGateway),
        (0u32..4).prop_map(|index| ResourceKind::NatGateway { index }),
        (0u32..4).prop_map(|index| ResourceKind::ElasticIp { index }),
        route_table().prop_map(|table| ResourceKind::RouteTable { table }),
        component_name().prop_map(|name| ResourceKind::SecurityGroup { name }),
        Just(ResourceKind::Cluster),
        service_name().prop_map(|service| ResourceKind::Service { service }),
        service_name().prop_map(|service| ResourceKind::TaskDefinitionFamily { service }),
        service_name().prop_map(|service| ResourceKind::Repository { service }),
        component_name().prop_map(|name| ResourceKind::IamRole { name }),
        component_name().prop_map(|name| ResourceKind::IamPolicy { name }),
        service_name().prop_map(|service| ResourceKind::LogGroup { service }),
        component_name().prop_map(|name| ResourceKind::Topic { name }),
        (service_name(), prop::sample::select(vec!["cpu", "memory"])).prop_map(
            |(service, metric)| ResourceKind::Alarm {
                service,
                metric: metric.to_string(),
            }
        ),
    ]
}

fn extra_tags() -> impl Strategy<Value = Tags> {
    prop::collection::btree_map("[A-Z][A-Za-z]{0,11}", "[a-z0-9-]{0,16}", 0..6)
}

fn naming(environment: Environment) -> ResourceNaming {
    ResourceNaming::new(NamingConfig::for_environment(environment))
}

// ============================================================================
// Naming Properties
// ============================================================================

proptest! {
    /// Naming the same resource twice gives the same name
    #[test]
    fn prop_naming_is_deterministic(env in environment(), kind in resource_kind()) {
        prop_assert_eq!(naming(env).name(&kind), naming(env).name(&kind));
    }

    /// Distinct resources of one deployment get distinct names
    #[test]
    fn prop_naming_is_injective_within_environment(
        env in environment(),
        a in resource_kind(),
        b in resource_kind(),
    ) {
        prop_assume!(a != b);
        let naming = naming(env);
        prop_assert_ne!(naming.name(&a), naming.name(&b));
    }

    /// The same resource in two environments gets two names
    #[test]
    fn prop_environments_never_share_names(
        a in environment(),
        b in environment(),
        kind in resource_kind(),
    ) {
        prop_assume!(a != b);
        prop_assert_ne!(naming(a).name(&kind), naming(b).name(&kind));
    }

    /// Every name mentions its environment
    #[test]
    fn prop_name_contains_environment(env in environment(), kind in resource_kind()) {
        let name = naming(env).name(&kind);
        prop_assert!(name.contains(env.as_str()), "{} lacks {}", name, env);
    }
}

// ============================================================================
// Tagging Properties
// ============================================================================

proptest! {
    /// Re-applying the base tags over an already tagged set changes nothing
    #[test]
    fn prop_create_tags_is_idempotent(env in environment(), extra in extra_tags()) {
        let once = create_tags(env.as_str(), &extra);
        let twice = create_tags(env.as_str(), &once);
        prop_assert_eq!(once, twice);
    }

    /// Caller tags override base tags, key by key
    #[test]
    fn prop_additional_tags_win(env in environment(), extra in extra_tags()) {
        let tags = create_tags(env.as_str(), &extra);
        for (key, value) in &extra {
            prop_assert_eq!(&tags[key], value);
        }
        prop_assert!(tags.len() >= 3);
    }

    /// Resource type and name cannot be overridden by caller tags
    #[test]
    fn prop_resource_tags_keep_identity(
        env in environment(),
        mut extra in extra_tags(),
        spoofed in "[a-z]{1,8}",
    ) {
        extra.insert(TAG_RESOURCE_TYPE.to_string(), spoofed.clone());
        extra.insert(TAG_RESOURCE_NAME.to_string(), spoofed);

        let tags = create_resource_tags(env.as_str(), "VPC", "sst-ecs-dev-vpc", &extra);
        prop_assert_eq!(&tags[TAG_RESOURCE_TYPE], "VPC");
        prop_assert_eq!(&tags[TAG_RESOURCE_NAME], "sst-ecs-dev-vpc");
    }

    /// Kind-derived tags name the resource exactly as naming does
    #[test]
    fn prop_tags_for_matches_naming(env in environment(), kind in resource_kind()) {
        let naming = naming(env);
        let tags = tags_for(&naming, &kind, &Tags::new());
        prop_assert_eq!(&tags[TAG_RESOURCE_NAME], &naming.name(&kind));
        prop_assert_eq!(&tags[TAG_RESOURCE_TYPE], kind.display_name());
    }
}
