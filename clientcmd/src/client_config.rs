//! Turning a loaded iamconfig into a REST client configuration.

use std::time::Duration;

use iam_rest::{Config, TlsClientConfig};
use url::Url;

use crate::api::ConfigFile;
use crate::helpers::parse_timeout;
use crate::loader::{load, load_from_file};
use crate::validation::{confirm_usable, ClientCmdError};

/// Build a complete [`Config`] from a loaded iamconfig.
///
/// The configuration is validated first, so the returned config is usable
/// as-is once a group version has been picked.
///
/// # Errors
///
/// Returns a validation error when the file is empty or inconsistent, or
/// [`ClientCmdError::InvalidTimeout`] when a duration field fails to parse.
pub fn client_config(config: &ConfigFile) -> Result<Config, ClientCmdError> {
    confirm_usable(config)?;

    let user = &config.user;
    let server = &config.server;

    let mut client_config = Config::new(normalized_host(&server.address));
    client_config.username = user.username.clone();
    client_config.password = user.password.clone();
    client_config.secret_id = user.secret_id.clone();
    client_config.secret_key = user.secret_key.clone();
    client_config.bearer_token = user.token.clone();

    client_config.tls = TlsClientConfig {
        insecure: server.insecure_skip_tls_verify,
        ca_file: server.certificate_authority.clone(),
        ca_data: data_bytes(server.certificate_authority_data.as_deref()),
        cert_file: user.client_certificate.clone(),
        cert_data: data_bytes(user.client_certificate_data.as_deref()),
        key_file: user.client_key.clone(),
        key_data: data_bytes(user.client_key_data.as_deref()),
    };

    if let Some(timeout) = &server.timeout {
        client_config.timeout = Some(parse_timeout(timeout)?);
    }
    if let Some(max_retries) = server.max_retries {
        client_config.max_retries = max_retries;
    }
    if let Some(interval) = &server.retry_interval {
        client_config.retry_interval = parse_timeout(interval)?;
    } else {
        client_config.retry_interval = Duration::from_secs(1);
    }

    Ok(client_config)
}

/// Build a [`Config`] straight from iamconfig bytes.
///
/// For programmatic access this is what you want most of the time.
///
/// # Errors
///
/// Returns any loading or validation error from the underlying steps.
pub fn rest_config_from_iamconfig(data: &[u8]) -> Result<Config, ClientCmdError> {
    client_config(&load(data)?)
}

/// Build a [`Config`] from an iamconfig path and an optional server URL
/// override, the way command line tools pass them in.
///
/// A non-empty `server_url` replaces the address found in the file.
///
/// # Errors
///
/// Returns any loading or validation error from the underlying steps.
pub fn build_config_from_flags(
    server_url: &str,
    iamconfig_path: impl AsRef<std::path::Path>,
) -> Result<Config, ClientCmdError> {
    let mut config = load_from_file(iamconfig_path)?;

    if !server_url.is_empty() {
        config.server.address = server_url.to_string();
    }

    client_config(&config)
}

// Addresses that are real URLs with a path keep the path but lose any query
// or fragment. Bare hosts pass through untouched.
fn normalized_host(address: &str) -> String {
    match Url::parse(address) {
        Ok(mut url)
            if (url.scheme() == "http" || url.scheme() == "https") && url.path().len() > 1 =>
        {
            url.set_query(None);
            url.set_fragment(None);
            url.to_string()
        }
        _ => address.to_string(),
    }
}

fn data_bytes(data: Option<&str>) -> Vec<u8> {
    data.map(|d| d.as_bytes().to_vec()).unwrap_or_default()
}
