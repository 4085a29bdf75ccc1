//! On-disk model of an iamconfig file.
//!
//! The file is YAML with kebab-case keys, split into a `user` section for
//! identity and a `server` section for transport. Credential values
//! deserialize into [`SecretString`] so they never show up in `Debug` output.

use std::path::PathBuf;

use secrecy::SecretString;
use serde::Deserialize;

/// Identity information: who the client is when talking to the IAM server.
///
/// At most one authentication method may be populated. Client certificates
/// can be combined with any of them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthInfo {
    /// Path of the file this section was loaded from. Not part of the YAML.
    #[serde(skip)]
    pub location_of_origin: Option<PathBuf>,

    /// Path to a client certificate file for TLS.
    #[serde(rename = "client-certificate")]
    pub client_certificate: Option<PathBuf>,
    /// Base64-encoded PEM client certificate. Overrides `client-certificate`.
    #[serde(rename = "client-certificate-data")]
    pub client_certificate_data: Option<String>,
    /// Path to a client key file for TLS.
    #[serde(rename = "client-key")]
    pub client_key: Option<PathBuf>,
    /// Base64-encoded PEM client key. Overrides `client-key`.
    #[serde(rename = "client-key-data")]
    pub client_key_data: Option<String>,

    /// Bearer token for authentication to the IAM server.
    pub token: Option<SecretString>,

    /// Username for basic authentication.
    #[serde(default)]
    pub username: String,
    /// Password for basic authentication.
    pub password: Option<SecretString>,

    /// Secret ID for signed secret-key authentication.
    #[serde(rename = "secret-id", default)]
    pub secret_id: String,
    /// Secret key for signed secret-key authentication.
    #[serde(rename = "secret-key")]
    pub secret_key: Option<SecretString>,
}

/// How to reach an IAM API server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Server {
    /// Path of the file this section was loaded from. Not part of the YAML.
    #[serde(skip)]
    pub location_of_origin: Option<PathBuf>,

    /// Server address: a URL, a hostname, or a `host:port` pair.
    #[serde(default)]
    pub address: String,
    /// Request timeout, a positive integer in seconds or with a unit suffix
    /// such as `30s`, `2m`, or `1h`.
    pub timeout: Option<String>,
    /// Maximum number of retries for transient failures.
    #[serde(rename = "max-retries")]
    pub max_retries: Option<u32>,
    /// Delay between retries, same format as `timeout`.
    #[serde(rename = "retry-interval")]
    pub retry_interval: Option<String>,

    /// Expected server name when verifying the server certificate. When
    /// empty, the hostname used to contact the server is checked instead.
    #[serde(rename = "tls-server-name")]
    pub tls_server_name: Option<String>,
    /// Skip verification of the server certificate. Makes HTTPS insecure.
    #[serde(rename = "insecure-skip-tls-verify", default)]
    pub insecure_skip_tls_verify: bool,
    /// Path to a certificate authority bundle.
    #[serde(rename = "certificate-authority")]
    pub certificate_authority: Option<PathBuf>,
    /// Base64-encoded PEM certificate authority bundle. Overrides
    /// `certificate-authority`.
    #[serde(rename = "certificate-authority-data")]
    pub certificate_authority_data: Option<String>,
}

impl Server {
    /// Whether nothing at all was configured for this server.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A complete iamconfig file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Schema version of the file itself.
    #[serde(rename = "apiVersion")]
    pub api_version: Option<String>,
    /// Identity section.
    pub user: AuthInfo,
    /// Transport section.
    pub server: Server,
}
