// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource Tagging
//!
//! Every resource carries the base set (`Environment`, `ManagedBy`,
//! `Project`). Caller-supplied tags are overlaid on top of the base set, so
//! later keys win. Resource-scoped tags additionally record the resource's
//! type and name.

use std::collections::BTreeMap;

use crate::config::{MANAGED_BY, PROJECT_NAME};
use crate::domain::ResourceKind;
use crate::naming::ResourceNaming;

/// Tag key → value, ordered by key
pub type Tags = BTreeMap<String, String>;

pub const TAG_ENVIRONMENT: &str = "Environment";
pub const TAG_MANAGED_BY: &str = "ManagedBy";
pub const TAG_PROJECT: &str = "Project";
pub const TAG_COST_CENTER: &str = "CostCenter";
pub const TAG_OWNER: &str = "Owner";
pub const TAG_RESOURCE_TYPE: &str = "ResourceType";
pub const TAG_RESOURCE_NAME: &str = "ResourceName";

/// Base tags overlaid with `additional`
///
/// # Examples
///
/// ```rust
/// use ecs_platform::tags::{create_tags, Tags};
///
/// let mut extra = Tags::new();
/// extra.insert("ManagedBy".into(), "terraform".into());
///
/// let tags = create_tags("dev", &extra);
/// assert_eq!(tags["Environment"], "dev");
/// assert_eq!(tags["ManagedBy"], "terraform");
/// ```
pub fn create_tags(environment: &str, additional: &Tags) -> Tags {
    let mut tags = Tags::new();
    tags.insert(TAG_ENVIRONMENT.to_string(), environment.to_string());
    tags.insert(TAG_MANAGED_BY.to_string(), MANAGED_BY.to_string());
    tags.insert(TAG_PROJECT.to_string(), PROJECT_NAME.to_string());
    tags.extend(
        additional
            .iter()
            .map(|(key, value)| (key.clone(), value.clone())),
    );
    tags
}

/// Tags for one resource: [`create_tags`] plus `ResourceType` and
/// `ResourceName`
///
/// The two resource keys are applied last and cannot be overridden by
/// `additional`.
pub fn create_resource_tags(
    environment: &str,
    resource_type: &str,
    resource_name: &str,
    additional: &Tags,
) -> Tags {
    let mut tags = create_tags(environment, additional);
    tags.insert(TAG_RESOURCE_TYPE.to_string(), resource_type.to_string());
    tags.insert(TAG_RESOURCE_NAME.to_string(), resource_name.to_string());
    tags
}

/// Resource tags for a [`ResourceKind`], naming it through `naming`
pub fn tags_for(naming: &ResourceNaming, kind: &ResourceKind, additional: &Tags) -> Tags {
    create_resource_tags(
        naming.environment(),
        kind.display_name(),
        &naming.name(kind),
        additional,
    )
}
