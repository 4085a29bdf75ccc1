//! Test fixtures with sample data.
//!
//! This module provides pre-built IAM resources and configuration files for
//! use in tests.

use iam_client::meta::ObjectMeta;
use iam_client::{AuthzPolicy, AuthzRequest, Policy, Secret, User, EFFECT_ALLOW};

/// A complete iamconfig file using basic authentication.
#[must_use]
pub fn sample_iamconfig_yaml() -> &'static str {
    r"apiVersion: v1
user:
  username: admin
  password: Admin@2021
server:
  address: https://127.0.0.1:8443
  timeout: 10s
  max-retries: 3
  retry-interval: 1s
  insecure-skip-tls-verify: true
"
}

/// An iamconfig file using signed secret-key authentication.
#[must_use]
pub fn sample_secret_iamconfig_yaml() -> &'static str {
    r"apiVersion: v1
user:
  secret-id: sample-secret-id
  secret-key: sample-secret-key
server:
  address: https://127.0.0.1:8443
"
}

/// A user as a caller would create it.
#[must_use]
pub fn sample_user(name: &str) -> User {
    User {
        meta: ObjectMeta::named(name),
        nickname: format!("{name}-nickname"),
        password: "User@2021".to_string(),
        email: format!("{name}@example.com"),
        phone: "1812884xxxx".to_string(),
        ..Default::default()
    }
}

/// A secret request without server-generated material.
#[must_use]
pub fn sample_secret(name: &str) -> Secret {
    Secret {
        meta: ObjectMeta::named(name),
        expires: 0,
        description: format!("test secret {name}"),
        ..Default::default()
    }
}

/// A policy allowing `create` and `update` on articles.
#[must_use]
pub fn sample_policy(name: &str) -> Policy {
    Policy {
        meta: ObjectMeta::named(name),
        policy: AuthzPolicy {
            subjects: vec!["users:maria".to_string()],
            effect: EFFECT_ALLOW.to_string(),
            resources: vec!["resources:articles:<.*>".to_string()],
            actions: vec!["create".to_string(), "update".to_string()],
            ..Default::default()
        },
        ..Default::default()
    }
}

/// An authorization question matching [`sample_policy`].
#[must_use]
pub fn sample_authz_request() -> AuthzRequest {
    AuthzRequest {
        subject: "users:maria".to_string(),
        action: "update".to_string(),
        resource: "resources:articles:ladon-introduction".to_string(),
        ..Default::default()
    }
}
