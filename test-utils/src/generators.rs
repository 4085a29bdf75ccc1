//! Shared proptest generators for IAM SDK types.
//!
//! This module provides reusable generators for resource names, selectors,
//! and API addressing used across the SDK crates.

use iam_rest::GroupVersion;
use proptest::prelude::*;

/// Generate resource names that pass path segment validation.
pub fn resource_name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,30}".prop_filter("reserved segment", |name| name != "." && name != "..")
}

/// Generate names that must be rejected when used in a URL path.
pub fn invalid_resource_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(".".to_string()),
        Just("..".to_string()),
        "[a-z]{0,5}/[a-z]{1,5}",
        "[a-z]{0,5}%[a-z]{1,5}",
    ]
}

/// Generate plural resource kinds the API server exposes.
pub fn resource_kind_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("users".to_string()),
        Just("secrets".to_string()),
        Just("policies".to_string()),
    ]
}

/// Generate group/version pairs.
pub fn group_version_strategy() -> impl Strategy<Value = GroupVersion> {
    ("[a-z]{2,8}(\\.[a-z]{2,8})?", "v[0-9]{1}")
        .prop_map(|(group, version)| GroupVersion::new(group, version))
}

/// Generate `key=value` field selectors.
pub fn field_selector_strategy() -> impl Strategy<Value = String> {
    ("[a-z]{2,10}", "[a-z0-9]{1,10}").prop_map(|(key, value)| format!("{key}={value}"))
}
