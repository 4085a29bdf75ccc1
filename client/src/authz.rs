//! Client for the `iam.authz` group: authorization checks.

use iam_rest::{Config, GroupVersion, RestClient, RestResult};
use tracing::debug;

use crate::meta::AuthorizeOptions;
use crate::resources::{AuthzRequest, AuthzResponse};

/// Client for the `iam.authz/v1` group.
#[derive(Debug, Clone)]
pub struct AuthzV1Client {
    rest: RestClient,
}

impl AuthzV1Client {
    /// Build a client for the given config, applying the group defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying REST client cannot be built.
    pub fn for_config(config: &Config) -> RestResult<Self> {
        let mut config = config.clone();
        config.group_version = Some(GroupVersion::new("iam.authz", "v1"));
        config.api_path = String::new();

        Ok(Self {
            rest: RestClient::for_config(&config)?,
        })
    }

    /// Wrap an existing REST client.
    #[must_use]
    pub const fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// The authorization resource client.
    #[must_use]
    pub const fn authz(&self) -> Authz<'_> {
        Authz { client: &self.rest }
    }

    /// The REST client used to communicate with the authz server.
    #[must_use]
    pub const fn rest_client(&self) -> &RestClient {
        &self.rest
    }
}

/// Typed access-control checks.
#[derive(Debug, Clone, Copy)]
pub struct Authz<'a> {
    client: &'a RestClient,
}

impl Authz<'_> {
    /// Ask the server whether the request's subject may perform its action
    /// on its resource.
    ///
    /// # Errors
    ///
    /// Returns any transport or API error from the server.
    pub async fn authorize(
        &self,
        request: &AuthzRequest,
        opts: &AuthorizeOptions,
    ) -> RestResult<AuthzResponse> {
        debug!(subject = %request.subject, action = %request.action, "authorizing");

        self.client
            .post()
            .resource("authz")
            .versioned_params(opts)
            .body(request)
            .send()
            .await?
            .decode()
    }
}
