//! Validation of loaded iamconfig files.
//!
//! Validation does not stop at the first problem: every issue found in the
//! `user` and `server` sections is collected so a misconfigured file can be
//! fixed in one pass.

use secrecy::SecretString;
use thiserror::Error;

use crate::api::{AuthInfo, ConfigFile, Server};

/// Errors produced while loading or validating client configuration.
#[derive(Debug, Error)]
pub enum ClientCmdError {
    /// The file contained no usable configuration at all.
    #[error("no configuration has been provided, try setting IAM_SERVER_ADDRESS environment variable")]
    EmptyConfig,

    /// The configuration is present but invalid. Carries every problem found.
    #[error("invalid configuration: {}", .0.join(", "))]
    InvalidConfiguration(Vec<String>),

    /// A timeout string could not be parsed.
    #[error(
        "invalid timeout value {0:?}: must be a single integer in seconds, \
         or an integer followed by a corresponding time unit (e.g. 1s | 2m | 3h)"
    )]
    InvalidTimeout(String),

    /// The file was not valid YAML.
    #[error("failed to parse iamconfig")]
    Yaml(#[from] serde_yaml::Error),

    /// The file could not be read.
    #[error("failed to read iamconfig")]
    Io(#[from] std::io::Error),

    /// Building the REST client configuration failed.
    #[error(transparent)]
    Rest(#[from] iam_rest::RestError),
}

/// Check that a configuration can actually be turned into a client.
///
/// An entirely empty `server` section yields [`ClientCmdError::EmptyConfig`];
/// any other problems are aggregated into
/// [`ClientCmdError::InvalidConfiguration`].
///
/// # Errors
///
/// Returns an error when the configuration is empty or invalid.
pub fn confirm_usable(config: &ConfigFile) -> Result<(), ClientCmdError> {
    let mut problems = validate_auth_info(&config.user);

    if config.server.is_empty() {
        if problems.is_empty() {
            return Err(ClientCmdError::EmptyConfig);
        }
        problems.push("no server defined".to_string());
    } else {
        problems.extend(validate_server(&config.server));
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(ClientCmdError::InvalidConfiguration(problems))
    }
}

fn is_set(secret: &Option<SecretString>) -> bool {
    secret.is_some()
}

/// Collect conflicts and errors in the `user` section.
#[must_use]
pub fn validate_auth_info(auth_info: &AuthInfo) -> Vec<String> {
    let mut problems = Vec::new();

    let mut methods = Vec::new();
    if is_set(&auth_info.token) {
        methods.push("token");
    }
    if !auth_info.username.is_empty() || is_set(&auth_info.password) {
        methods.push("basicAuth");
    }
    if !auth_info.secret_id.is_empty() || is_set(&auth_info.secret_key) {
        methods.push("secretAuth");
    }
    if methods.len() > 1 {
        problems.push(format!(
            "more than one authentication method found; found {methods:?}, only one is allowed"
        ));
    }

    let has_cert = auth_info.client_certificate.is_some() || auth_info.client_certificate_data.is_some();
    if !has_cert {
        return problems;
    }

    if auth_info.client_certificate.is_some() && auth_info.client_certificate_data.is_some() {
        problems.push(
            "client-certificate-data and client-certificate are both specified; \
             client-certificate-data will override"
                .to_string(),
        );
    }
    if auth_info.client_key.is_some() && auth_info.client_key_data.is_some() {
        problems.push(
            "client-key-data and client-key are both specified; client-key-data will override"
                .to_string(),
        );
    }
    if auth_info.client_key.is_none() && auth_info.client_key_data.is_none() {
        problems.push(
            "client-key-data or client-key must be specified to use the client certificate \
             authentication method"
                .to_string(),
        );
    }

    if let Some(path) = &auth_info.client_certificate {
        if let Err(err) = std::fs::metadata(path) {
            problems.push(format!(
                "unable to read client-certificate {} due to {err}",
                path.display()
            ));
        }
    }
    if let Some(path) = &auth_info.client_key {
        if let Err(err) = std::fs::metadata(path) {
            problems.push(format!(
                "unable to read client-key {} due to {err}",
                path.display()
            ));
        }
    }

    problems
}

/// Collect conflicts and errors in the `server` section.
#[must_use]
pub fn validate_server(server: &Server) -> Vec<String> {
    let mut problems = Vec::new();

    if server.is_empty() {
        return problems;
    }

    if server.certificate_authority.is_some() && server.certificate_authority_data.is_some() {
        problems.push(
            "certificate-authority-data and certificate-authority are both specified; \
             certificate-authority-data will override"
                .to_string(),
        );
    }
    if let Some(path) = &server.certificate_authority {
        if let Err(err) = std::fs::metadata(path) {
            problems.push(format!(
                "unable to read certificate-authority {} due to {err}",
                path.display()
            ));
        }
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_flagged() {
        let err = confirm_usable(&ConfigFile::default()).unwrap_err();
        assert!(matches!(err, ClientCmdError::EmptyConfig));
    }

    #[test]
    fn test_single_auth_method_passes() {
        let config: ConfigFile = serde_yaml::from_str(
            "user:\n  token: abc\nserver:\n  address: https://127.0.0.1:8443\n",
        )
        .unwrap();
        confirm_usable(&config).unwrap();
    }

    #[test]
    fn test_multiple_auth_methods_are_rejected() {
        let config: ConfigFile = serde_yaml::from_str(
            "user:\n  token: abc\n  username: admin\nserver:\n  address: https://127.0.0.1:8443\n",
        )
        .unwrap();
        let err = confirm_usable(&config).unwrap_err();
        match err {
            ClientCmdError::InvalidConfiguration(problems) => {
                assert_eq!(problems.len(), 1);
                assert!(problems[0].contains("more than one authentication method"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_cert_without_key_is_rejected() {
        let config: ConfigFile = serde_yaml::from_str(
            "user:\n  client-certificate-data: aGVsbG8=\nserver:\n  address: https://127.0.0.1:8443\n",
        )
        .unwrap();
        let err = confirm_usable(&config).unwrap_err();
        match err {
            ClientCmdError::InvalidConfiguration(problems) => {
                assert!(problems.iter().any(|p| p.contains("client-key")));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_all_problems_are_collected() {
        let config: ConfigFile = serde_yaml::from_str(concat!(
            "user:\n",
            "  token: abc\n",
            "  username: admin\n",
            "server:\n",
            "  certificate-authority: /nonexistent/ca.pem\n",
            "  certificate-authority-data: aGVsbG8=\n",
        ))
        .unwrap();
        let err = confirm_usable(&config).unwrap_err();
        match err {
            ClientCmdError::InvalidConfiguration(problems) => {
                assert!(problems.len() >= 3, "got {problems:?}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unreadable_ca_file_is_reported() {
        let server = Server {
            certificate_authority: Some("/definitely/not/here.pem".into()),
            ..Default::default()
        };
        let problems = validate_server(&server);
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("unable to read certificate-authority"));
    }
}
