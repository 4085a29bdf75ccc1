//! IAM resource types: users, secrets, policies, and authorization
//! requests/responses.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::meta::{ListMeta, ObjectMeta};

/// Policy effect granting access.
pub const EFFECT_ALLOW: &str = "allow";

/// Policy effect denying access.
pub const EFFECT_DENY: &str = "deny";

/// A platform account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Standard object metadata.
    #[serde(flatten)]
    pub meta: ObjectMeta,

    /// Account status; 1 means enabled.
    #[serde(default)]
    pub status: i32,

    /// Display name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub nickname: String,

    /// Login password. Sent on create/update, never returned by the server.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password: String,

    /// Contact email.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,

    /// Contact phone number.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone: String,

    /// Whether the account has administrative privileges; 1 means yes.
    #[serde(default)]
    pub is_admin: i32,

    /// Number of policies owned by the user.
    #[serde(default)]
    pub total_policy: i64,
}

/// A page of users.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserList {
    /// Standard list metadata.
    #[serde(flatten)]
    pub meta: ListMeta,

    /// The users on this page.
    #[serde(default)]
    pub items: Vec<User>,
}

/// An API credential pair owned by a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Secret {
    /// Standard object metadata.
    #[serde(flatten)]
    pub meta: ObjectMeta,

    /// Owning username, set by the server.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub username: String,

    /// Key identifier, generated by the server.
    #[serde(default, rename = "secretID", skip_serializing_if = "String::is_empty")]
    pub secret_id: String,

    /// Key material, generated by the server.
    #[serde(default, rename = "secretKey", skip_serializing_if = "String::is_empty")]
    pub secret_key: String,

    /// Expiry as a Unix timestamp; 0 means the secret never expires.
    #[serde(default)]
    pub expires: i64,

    /// Human-readable description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// A page of secrets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecretList {
    /// Standard list metadata.
    #[serde(flatten)]
    pub meta: ListMeta,

    /// The secrets on this page.
    #[serde(default)]
    pub items: Vec<Secret>,
}

/// An authorization policy document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthzPolicy {
    /// Policy identifier.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Human-readable description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Subjects the policy applies to.
    #[serde(default)]
    pub subjects: Vec<String>,

    /// [`EFFECT_ALLOW`] or [`EFFECT_DENY`].
    #[serde(default)]
    pub effect: String,

    /// Resource patterns the policy covers.
    #[serde(default)]
    pub resources: Vec<String>,

    /// Actions the policy covers.
    #[serde(default)]
    pub actions: Vec<String>,

    /// Named conditions gating the policy.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub conditions: HashMap<String, serde_json::Value>,
}

/// A named, persisted policy resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    /// Standard object metadata.
    #[serde(flatten)]
    pub meta: ObjectMeta,

    /// Owning username, set by the server.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub username: String,

    /// The policy document.
    #[serde(default)]
    pub policy: AuthzPolicy,
}

/// A page of policies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyList {
    /// Standard list metadata.
    #[serde(flatten)]
    pub meta: ListMeta,

    /// The policies on this page.
    #[serde(default)]
    pub items: Vec<Policy>,
}

/// A single access-control question: may `subject` perform `action` on
/// `resource`?
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthzRequest {
    /// Resource being accessed.
    #[serde(default)]
    pub resource: String,

    /// Action being performed.
    #[serde(default)]
    pub action: String,

    /// Subject performing the action.
    #[serde(default)]
    pub subject: String,

    /// Context evaluated against policy conditions.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub context: HashMap<String, serde_json::Value>,
}

/// The decision for an authorization request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthzResponse {
    /// Whether access is granted.
    #[serde(default)]
    pub allowed: bool,

    /// Whether an explicit deny matched.
    #[serde(default)]
    pub denied: bool,

    /// Human-readable explanation of the decision.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reason: String,

    /// Evaluation error, if any.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error: String,
}
