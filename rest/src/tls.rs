//! TLS configuration for the REST client.
//!
//! Certificate material can be given either as file paths or as inline
//! base64-encoded PEM data; inline data takes precedence over the
//! corresponding file.

use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::ClientBuilder;

use crate::error::{RestError, RestResult};

/// Settings to enable transport layer security.
#[derive(Debug, Clone, Default)]
pub struct TlsClientConfig {
    /// Skip verification of the server certificate. For testing only.
    pub insecure: bool,

    /// Path to a PEM-encoded root certificate bundle for the server.
    pub ca_file: Option<PathBuf>,
    /// Path to a PEM-encoded client certificate.
    pub cert_file: Option<PathBuf>,
    /// Path to a PEM-encoded client key.
    pub key_file: Option<PathBuf>,

    /// Base64-encoded PEM root certificates. Takes precedence over `ca_file`.
    pub ca_data: Vec<u8>,
    /// Base64-encoded PEM client certificate. Takes precedence over `cert_file`.
    pub cert_data: Vec<u8>,
    /// Base64-encoded PEM client key. Takes precedence over `key_file`.
    pub key_data: Vec<u8>,
}

impl TlsClientConfig {
    /// Whether a certificate authority is configured.
    #[must_use]
    pub fn has_ca(&self) -> bool {
        !self.ca_data.is_empty() || self.ca_file.is_some()
    }

    /// Whether client certificate authentication is configured.
    #[must_use]
    pub fn has_cert_auth(&self) -> bool {
        (!self.cert_data.is_empty() || self.cert_file.is_some())
            && (!self.key_data.is_empty() || self.key_file.is_some())
    }

    /// Whether any TLS settings are present at all.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.insecure || self.has_ca() || self.has_cert_auth()
    }

    /// Resolve the configured material into PEM bytes.
    fn load(&self) -> RestResult<TlsMaterial> {
        Ok(TlsMaterial {
            ca: data_from_slice_or_file(&self.ca_data, self.ca_file.as_deref())?,
            cert: data_from_slice_or_file(&self.cert_data, self.cert_file.as_deref())?,
            key: data_from_slice_or_file(&self.key_data, self.key_file.as_deref())?,
        })
    }
}

/// Resolved PEM bytes for each configured piece of TLS material.
struct TlsMaterial {
    ca: Option<Vec<u8>>,
    cert: Option<Vec<u8>>,
    key: Option<Vec<u8>>,
}

/// Returns PEM bytes from the inline data (base64-decoded) if non-empty,
/// otherwise from the file, otherwise `None`.
fn data_from_slice_or_file(data: &[u8], file: Option<&Path>) -> RestResult<Option<Vec<u8>>> {
    if !data.is_empty() {
        let decoded = STANDARD
            .decode(data)
            .map_err(|e| RestError::invalid_config(format!("invalid base64 PEM data: {e}")))?;
        return Ok(Some(decoded));
    }

    match file {
        Some(path) => Ok(Some(std::fs::read(path)?)),
        None => Ok(None),
    }
}

/// Apply the TLS configuration to a reqwest client builder.
///
/// TLS 1.0/1.1 are rejected; the minimum accepted protocol version is 1.2.
///
/// # Errors
///
/// Returns `RestError::InvalidConfig` if a root CA is combined with
/// `insecure`, or if the certificate material cannot be parsed.
pub(crate) fn apply_tls(
    builder: ClientBuilder,
    tls: &TlsClientConfig,
) -> RestResult<ClientBuilder> {
    if tls.has_ca() && tls.insecure {
        return Err(RestError::invalid_config(
            "specifying a root certificates file with the insecure flag is not allowed",
        ));
    }

    let mut builder = builder
        .use_rustls_tls()
        .min_tls_version(reqwest::tls::Version::TLS_1_2);

    if !tls.is_configured() {
        return Ok(builder);
    }

    if tls.insecure {
        builder = builder.danger_accept_invalid_certs(true);
    }

    let material = tls.load()?;

    if let Some(ca) = material.ca {
        builder = builder.add_root_certificate(reqwest::Certificate::from_pem(&ca)?);
    }

    if let (Some(cert), Some(key)) = (material.cert, material.key) {
        let mut pem = key;
        pem.extend_from_slice(&cert);
        builder = builder.identity(reqwest::Identity::from_pem(&pem)?);
    }

    Ok(builder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_unconfigured() {
        let tls = TlsClientConfig::default();
        assert!(!tls.is_configured());
        assert!(!tls.has_ca());
        assert!(!tls.has_cert_auth());
    }

    #[test]
    fn test_has_cert_auth_requires_both_halves() {
        let tls = TlsClientConfig {
            cert_file: Some(PathBuf::from("/etc/iam/client.crt")),
            ..Default::default()
        };
        assert!(!tls.has_cert_auth());

        let tls = TlsClientConfig {
            cert_file: Some(PathBuf::from("/etc/iam/client.crt")),
            key_file: Some(PathBuf::from("/etc/iam/client.key")),
            ..Default::default()
        };
        assert!(tls.has_cert_auth());
    }

    #[test]
    fn test_inline_data_takes_precedence() {
        let pem = b"-----BEGIN CERTIFICATE-----\n-----END CERTIFICATE-----\n";
        let encoded = STANDARD.encode(pem);

        let resolved = data_from_slice_or_file(encoded.as_bytes(), Some(Path::new("/nonexistent")))
            .unwrap()
            .unwrap();
        assert_eq!(resolved, pem);
    }

    #[test]
    fn test_invalid_base64_data_rejected() {
        let err = data_from_slice_or_file(b"not base64!!!", None).unwrap_err();
        assert!(matches!(err, RestError::InvalidConfig(_)));
    }

    #[test]
    fn test_file_fallback() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"pem bytes").unwrap();

        let resolved = data_from_slice_or_file(&[], Some(file.path()))
            .unwrap()
            .unwrap();
        assert_eq!(resolved, b"pem bytes");
    }

    #[test]
    fn test_ca_with_insecure_rejected() {
        let tls = TlsClientConfig {
            insecure: true,
            ca_file: Some(PathBuf::from("/etc/iam/ca.crt")),
            ..Default::default()
        };

        let err = apply_tls(ClientBuilder::new(), &tls).unwrap_err();
        assert!(matches!(err, RestError::InvalidConfig(_)));
    }
}
