//! Shared metadata and call-option types.
//!
//! Wire names are camelCase, matching the IAM API conventions.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Extended, schema-free attributes attached to a resource.
pub type Extend = HashMap<String, serde_json::Value>;

/// Metadata every persisted IAM resource carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    /// Server-assigned numeric identifier.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: u64,

    /// Server-assigned unique instance identifier.
    #[serde(default, rename = "instanceID", skip_serializing_if = "String::is_empty")]
    pub instance_id: String,

    /// Resource name, unique within its kind.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Extended attributes.
    #[serde(default, skip_serializing_if = "Extend::is_empty")]
    pub extend: Extend,

    /// Creation timestamp, set by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Last update timestamp, set by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(v: &u64) -> bool {
    *v == 0
}

impl ObjectMeta {
    /// Metadata carrying only a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Metadata for list responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta {
    /// Total number of items matching the query, across all pages.
    #[serde(default)]
    pub total_count: u64,
}

/// Options for create calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOptions {
    /// When non-empty, the request is validated but not persisted.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dry_run: Vec<String>,
}

/// Options for update calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOptions {
    /// When non-empty, the request is validated but not persisted.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dry_run: Vec<String>,
}

/// Options for delete calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOptions {
    /// Delete the row physically instead of marking it deleted.
    #[serde(default)]
    pub unscoped: bool,
}

/// Options for single-resource get calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetOptions {}

/// Options for list calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOptions {
    /// Selector restricting the list by labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_selector: Option<String>,

    /// Selector restricting the list by resource fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_selector: Option<String>,

    /// Server-side timeout for the list call, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,

    /// Offset of the first item to return.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,

    /// Maximum number of items to return.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

/// Options for authorization calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorizeOptions {}
