//! Client for the `iam.api` group: users, secrets, and policies.

mod policies;
mod secrets;
mod users;

pub use policies::Policies;
pub use secrets::Secrets;
pub use users::Users;

use iam_rest::{Config, GroupVersion, RestClient, RestResult};

/// Client for the `iam.api/v1` group.
#[derive(Debug, Clone)]
pub struct ApiV1Client {
    rest: RestClient,
}

impl ApiV1Client {
    /// Build a client for the given config, applying the group defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying REST client cannot be built.
    pub fn for_config(config: &Config) -> RestResult<Self> {
        let config = with_api_defaults(config);
        Ok(Self {
            rest: RestClient::for_config(&config)?,
        })
    }

    /// Wrap an existing REST client.
    #[must_use]
    pub const fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// The user resource client.
    #[must_use]
    pub const fn users(&self) -> Users<'_> {
        Users::new(&self.rest)
    }

    /// The secret resource client.
    #[must_use]
    pub const fn secrets(&self) -> Secrets<'_> {
        Secrets::new(&self.rest)
    }

    /// The policy resource client.
    #[must_use]
    pub const fn policies(&self) -> Policies<'_> {
        Policies::new(&self.rest)
    }

    /// The REST client used to communicate with the API server.
    #[must_use]
    pub const fn rest_client(&self) -> &RestClient {
        &self.rest
    }
}

/// Fills in the group-specific defaults on a copy of the config.
fn with_api_defaults(config: &Config) -> Config {
    let mut config = config.clone();
    config.group_version = Some(GroupVersion::new("iam.api", "v1"));
    config.api_path = String::new();
    config
}
