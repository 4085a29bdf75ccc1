//! Typed clientset for the IAM API.
//!
//! The entry point is [`Clientset`] (or [`IamClient`] directly), built from
//! an [`iam_rest::Config`]:
//!
//! ```no_run
//! use iam_client::meta::{CreateOptions, GetOptions};
//! use iam_client::{Clientset, User};
//! use iam_rest::Config;
//!
//! # async fn run() -> Result<(), iam_rest::RestError> {
//! let config = Config::new("https://iam.example.com").with_bearer_token("token");
//! let clients = Clientset::for_config(&config)?;
//!
//! let users = clients.iam().api_v1().users();
//! let user = users.get("colin", &GetOptions::default()).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod apiserver;
pub mod authz;
pub mod meta;
pub mod resources;

pub use apiserver::ApiV1Client;
pub use authz::AuthzV1Client;
pub use resources::{
    AuthzPolicy, AuthzRequest, AuthzResponse, Policy, PolicyList, Secret, SecretList, User,
    UserList, EFFECT_ALLOW, EFFECT_DENY,
};

use iam_rest::{Config, RestResult};

/// Clients for every IAM service group, one version each.
#[derive(Debug, Clone)]
pub struct IamClient {
    api_v1: ApiV1Client,
    authz_v1: AuthzV1Client,
}

impl IamClient {
    /// Build clients for every group from the given config.
    ///
    /// # Errors
    ///
    /// Returns an error if any group client cannot be built.
    pub fn for_config(config: &Config) -> RestResult<Self> {
        Ok(Self {
            api_v1: ApiV1Client::for_config(config)?,
            authz_v1: AuthzV1Client::for_config(config)?,
        })
    }

    /// The `iam.api/v1` client.
    #[must_use]
    pub const fn api_v1(&self) -> &ApiV1Client {
        &self.api_v1
    }

    /// The `iam.authz/v1` client.
    #[must_use]
    pub const fn authz_v1(&self) -> &AuthzV1Client {
        &self.authz_v1
    }
}

/// The clients for every supported service, grouped by organization.
#[derive(Debug, Clone)]
pub struct Clientset {
    iam: IamClient,
}

impl Clientset {
    /// Build a clientset for the given config.
    ///
    /// # Errors
    ///
    /// Returns an error if any service client cannot be built.
    pub fn for_config(config: &Config) -> RestResult<Self> {
        Ok(Self {
            iam: IamClient::for_config(config)?,
        })
    }

    /// The IAM service client.
    #[must_use]
    pub const fn iam(&self) -> &IamClient {
        &self.iam
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clientset_builds_both_groups() {
        let clients = Clientset::for_config(&Config::new("https://iam.example.com")).unwrap();

        assert_eq!(clients.iam().api_v1().rest_client().api_version().group, "iam.api");
        assert_eq!(
            clients.iam().authz_v1().rest_client().api_version().group,
            "iam.authz"
        );
    }
}
