//! REST client construction and verb entry points.

use reqwest::Method;
use url::Url;

use crate::config::{Config, ContentConfig};
use crate::error::{RestError, RestResult};
use crate::request::RequestBuilder;
use crate::retry::RetryPolicy;
use crate::scheme::GroupVersion;
use crate::tls::apply_tls;
use crate::url::default_server_url;
use crate::version::default_user_agent;

/// Generic client imposing the IAM API conventions on a set of resource
/// paths.
///
/// The base URL points at the parent of one or more resources; requests are
/// built with the chained [`RequestBuilder`] and decoded from JSON. Most
/// consumers construct one through a typed client rather than directly.
#[derive(Debug, Clone)]
pub struct RestClient {
    /// Root URL for all invocations of the client.
    pub(crate) base: Url,
    /// Client group, e.g. `iam.api` or `iam.authz`.
    pub(crate) group: String,
    /// Path segment connecting the base URL to the resource root.
    pub(crate) versioned_api_path: String,
    /// How the client authenticates and encodes requests.
    pub(crate) content: ContentConfig,
    /// Shared HTTP client.
    pub(crate) http: reqwest::Client,
    /// Retry policy for transient failures.
    pub(crate) retry: RetryPolicy,
}

impl RestClient {
    /// Build a `RestClient` satisfying the attributes of a client [`Config`].
    ///
    /// # Errors
    ///
    /// Returns `RestError::InvalidConfig` when the group version is missing,
    /// the host is malformed, or the TLS settings are contradictory.
    pub fn for_config(config: &Config) -> RestResult<Self> {
        if config.group_version.is_none() {
            return Err(RestError::invalid_config(
                "group version is required when initializing a RestClient",
            ));
        }

        let gv = config.group_version.clone().unwrap_or_default();

        // Insecure means "I want HTTPS but don't bother checking the certs".
        let default_tls = config.tls.has_ca()
            || !config.tls.cert_data.is_empty()
            || config.tls.cert_file.is_some()
            || config.tls.insecure;

        let (base, versioned_api_path) =
            default_server_url(&config.host, &config.api_path, &gv, default_tls)?;

        let user_agent = if config.user_agent.is_empty() {
            default_user_agent()
        } else {
            config.user_agent.clone()
        };

        let mut builder = reqwest::Client::builder().user_agent(user_agent);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        builder = apply_tls(builder, &config.tls)?;
        let http = builder.build()?;

        let mut client = Self::new(base, versioned_api_path, config.content_config(), http);
        client.retry = RetryPolicy::new(config.max_retries, config.retry_interval);

        Ok(client)
    }

    /// Create a `RestClient` from already-built parts. Performs generic REST
    /// functions (GET, PUT, POST, DELETE) on the given base URL.
    #[must_use]
    pub fn new(
        base: Url,
        versioned_api_path: impl Into<String>,
        mut content: ContentConfig,
        http: reqwest::Client,
    ) -> Self {
        if content.content_type.is_empty() {
            content.content_type = "application/json".to_string();
        }

        let mut base = base;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.set_query(None);
        base.set_fragment(None);

        Self {
            group: content.group_version.group.clone(),
            base,
            versioned_api_path: versioned_api_path.into(),
            content,
            http,
            retry: RetryPolicy::disabled(),
        }
    }

    /// Begin a request with an arbitrary HTTP method.
    #[must_use]
    pub fn verb(&self, verb: Method) -> RequestBuilder<'_> {
        RequestBuilder::new(self, verb)
    }

    /// Begin a GET request.
    #[must_use]
    pub fn get(&self) -> RequestBuilder<'_> {
        self.verb(Method::GET)
    }

    /// Begin a POST request.
    #[must_use]
    pub fn post(&self) -> RequestBuilder<'_> {
        self.verb(Method::POST)
    }

    /// Begin a PUT request.
    #[must_use]
    pub fn put(&self) -> RequestBuilder<'_> {
        self.verb(Method::PUT)
    }

    /// Begin a DELETE request.
    #[must_use]
    pub fn delete(&self) -> RequestBuilder<'_> {
        self.verb(Method::DELETE)
    }

    /// The API group/version this client addresses.
    #[must_use]
    pub const fn api_version(&self) -> &GroupVersion {
        &self.content.group_version
    }
}
