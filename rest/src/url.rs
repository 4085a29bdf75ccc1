//! Server URL normalization.

use url::Url;

use crate::error::{RestError, RestResult};
use crate::scheme::GroupVersion;

/// Converts a host, `host:port`, or URL string into the base server URL and
/// the versioned API path used with a client at a given API version.
///
/// An empty or non-URL host falls back to `http://localhost:8080`
/// (`https://localhost:8443` when `default_tls` is set).
///
/// # Errors
///
/// Returns `RestError::InvalidConfig` if the host cannot be turned into a
/// usable URL.
pub fn default_server_url(
    host: &str,
    api_path: &str,
    group_version: &GroupVersion,
    default_tls: bool,
) -> RestResult<(Url, String)> {
    let base = parse_host(host, default_tls)?;
    let versioned_api_path = join_path(&["/", api_path, &group_version.version]);

    Ok((base, versioned_api_path))
}

fn parse_host(host: &str, default_tls: bool) -> RestResult<Url> {
    if let Ok(url) = Url::parse(host) {
        // Url::parse accepts "host:port" with the host as the scheme, so only
        // take the parse at face value for real http(s) URLs.
        if matches!(url.scheme(), "http" | "https") && url.has_host() {
            return Ok(url);
        }
    }

    let scheme = if default_tls { "https" } else { "http" };

    let candidate = if host.is_empty() {
        let port = if default_tls { 8443 } else { 8080 };
        format!("{scheme}://localhost:{port}")
    } else {
        format!("{scheme}://{host}")
    };

    let url = Url::parse(&candidate)
        .map_err(|_| RestError::invalid_config(format!("host must be a URL or a host:port pair: {host:?}")))?;

    if url.path() != "" && url.path() != "/" {
        return Err(RestError::invalid_config(format!(
            "host must be a URL or a host:port pair: {host:?}"
        )));
    }

    Ok(url)
}

/// Joins path segments with `/`, skipping empty ones, and collapses
/// duplicate separators.
pub(crate) fn join_path(segments: &[&str]) -> String {
    let mut joined = String::from("/");

    for segment in segments {
        for part in segment.split('/').filter(|p| !p.is_empty()) {
            if !joined.ends_with('/') {
                joined.push('/');
            }
            joined.push_str(part);
        }
    }

    joined
}
