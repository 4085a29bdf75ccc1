//! REST client configuration.
//!
//! Credential fields are held as [`secrecy::SecretString`] so a `Debug`
//! rendering of a config never leaks passwords, keys, or tokens.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;

use crate::scheme::GroupVersion;
use crate::tls::TlsClientConfig;
use crate::version::default_user_agent;

/// Common attributes passed to an IAM client on initialization.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server address: a URL, a hostname, or a `host:port` pair.
    pub host: String,
    /// Path prefix under which the versioned API is mounted.
    pub api_path: String,
    /// API group/version the client will address. Required.
    pub group_version: Option<GroupVersion>,

    /// Username for basic authentication.
    pub username: String,
    /// Password for basic authentication.
    pub password: Option<SecretString>,

    /// Secret ID for signed secret-key authentication.
    pub secret_id: String,
    /// Secret key for signed secret-key authentication.
    pub secret_key: Option<SecretString>,

    /// Bearer token for token authentication.
    pub bearer_token: Option<SecretString>,
    /// Path to a file containing a bearer token. The file contents take
    /// precedence over `bearer_token`.
    pub bearer_token_file: Option<PathBuf>,

    /// Transport layer security settings.
    pub tls: TlsClientConfig,

    /// Content types the client accepts. If empty, derived from `content_type`.
    pub accept_content_types: String,
    /// Wire format for request bodies. Defaults to `application/json`.
    pub content_type: String,

    /// Caller identification sent in the `User-Agent` header.
    pub user_agent: String,

    /// Overall request timeout. `None` means no timeout.
    pub timeout: Option<Duration>,
    /// Maximum number of retries for transient failures.
    pub max_retries: u32,
    /// Delay between retries.
    pub retry_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: String::new(),
            api_path: String::new(),
            group_version: None,
            username: String::new(),
            password: None,
            secret_id: String::new(),
            secret_key: None,
            bearer_token: None,
            bearer_token_file: None,
            tls: TlsClientConfig::default(),
            accept_content_types: String::new(),
            content_type: String::new(),
            user_agent: String::new(),
            timeout: None,
            max_retries: 0,
            retry_interval: Duration::from_secs(1),
        }
    }
}

impl Config {
    /// Create a configuration for the given server address.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Default::default()
        }
    }

    /// Set the API group/version.
    #[must_use]
    pub fn with_group_version(mut self, gv: GroupVersion) -> Self {
        self.group_version = Some(gv);
        self
    }

    /// Set basic authentication credentials.
    #[must_use]
    pub fn with_basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = username.into();
        self.password = Some(SecretString::from(password.into()));
        self
    }

    /// Set a bearer token.
    #[must_use]
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(SecretString::from(token.into()));
        self
    }

    /// Set signed secret-key credentials.
    #[must_use]
    pub fn with_secret_key_auth(
        mut self,
        secret_id: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        self.secret_id = secret_id.into();
        self.secret_key = Some(SecretString::from(secret_key.into()));
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the retry budget for transient failures.
    #[must_use]
    pub const fn with_retries(mut self, max_retries: u32, interval: Duration) -> Self {
        self.max_retries = max_retries;
        self.retry_interval = interval;
        self
    }

    /// Set the User-Agent to the SDK default with `/{suffix}` appended.
    #[must_use]
    pub fn with_user_agent_suffix(mut self, suffix: &str) -> Self {
        self.user_agent = format!("{}/{suffix}", default_user_agent());
        self
    }

    /// Extract the content/auth portion of the configuration.
    ///
    /// Fills in the `application/json` default content type and resolves the
    /// group version (callers must have set one by this point).
    #[must_use]
    pub fn content_config(&self) -> ContentConfig {
        let content_type = if self.content_type.is_empty() {
            "application/json".to_string()
        } else {
            self.content_type.clone()
        };

        ContentConfig {
            username: self.username.clone(),
            password: self.password.clone(),
            secret_id: self.secret_id.clone(),
            secret_key: self.secret_key.clone(),
            bearer_token: self.bearer_token.clone(),
            bearer_token_file: self.bearer_token_file.clone(),
            accept_content_types: self.accept_content_types.clone(),
            content_type,
            group_version: self.group_version.clone().unwrap_or_default(),
        }
    }
}

/// Controls how a [`crate::RestClient`] authenticates and negotiates content.
#[derive(Debug, Clone, Default)]
pub struct ContentConfig {
    /// Username for basic authentication.
    pub username: String,
    /// Password for basic authentication.
    pub password: Option<SecretString>,
    /// Secret ID for signed secret-key authentication.
    pub secret_id: String,
    /// Secret key for signed secret-key authentication.
    pub secret_key: Option<SecretString>,
    /// Bearer token for token authentication.
    pub bearer_token: Option<SecretString>,
    /// Path to a file containing a bearer token.
    pub bearer_token_file: Option<PathBuf>,
    /// Content types the client accepts.
    pub accept_content_types: String,
    /// Wire format for request bodies.
    pub content_type: String,
    /// API group/version the client addresses.
    pub group_version: GroupVersion,
}

impl ContentConfig {
    /// Whether basic authentication is configured.
    #[must_use]
    pub fn has_basic_auth(&self) -> bool {
        !self.username.is_empty()
    }

    /// Whether bearer token authentication is configured.
    #[must_use]
    pub fn has_token_auth(&self) -> bool {
        self.bearer_token.is_some() || self.bearer_token_file.is_some()
    }

    /// Whether signed secret-key authentication is configured.
    #[must_use]
    pub fn has_key_auth(&self) -> bool {
        !self.secret_id.is_empty() && self.secret_key.is_some()
    }
}
