//! Chained request builder.
//!
//! [`RequestBuilder`] allows building up a request to the server in a chained
//! fashion. Any errors are stored until the request is sent, so callers only
//! have to check once.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::auth;
use crate::client::RestClient;
use crate::error::{RestError, RestResult};
use crate::url::join_path;

/// Names that cannot be used as path segments.
const NAME_MAY_NOT_BE: [&str; 2] = [".", ".."];

/// Substrings that cannot appear in names used as path segments.
const NAME_MAY_NOT_CONTAIN: [&str; 2] = ["/", "%"];

/// Validates that a name can be safely encoded as a path segment.
///
/// Returns one message per violation; an empty vector means the name is
/// valid.
#[must_use]
pub fn is_valid_path_segment_name(name: &str) -> Vec<String> {
    for illegal in NAME_MAY_NOT_BE {
        if name == illegal {
            return vec![format!("may not be '{illegal}'")];
        }
    }

    NAME_MAY_NOT_CONTAIN
        .iter()
        .filter(|illegal| name.contains(*illegal))
        .map(|illegal| format!("may not contain '{illegal}'"))
        .collect()
}

/// A request to the server, built up in a chained fashion.
pub struct RequestBuilder<'a> {
    client: &'a RestClient,

    verb: Method,
    path_prefix: String,
    subpath: String,
    resource: String,
    resource_name: String,
    subresource: String,
    params: Vec<(String, String)>,
    headers: HeaderMap,
    timeout: Option<Duration>,
    body: Option<Vec<u8>>,

    /// First error encountered while building; poisons the request.
    err: Option<RestError>,
}

impl<'a> RequestBuilder<'a> {
    /// Create a request builder rooted at the client's versioned API path.
    ///
    /// Authentication headers are attached here, from whichever credential
    /// set the client configuration populates; configuring more than one is
    /// an error surfaced when the request is sent.
    pub(crate) fn new(client: &'a RestClient, verb: Method) -> Self {
        let path_prefix = join_path(&[client.base.path(), &client.versioned_api_path]);

        let mut request = Self {
            client,
            verb,
            path_prefix,
            subpath: String::new(),
            resource: String::new(),
            resource_name: String::new(),
            subresource: String::new(),
            params: Vec::new(),
            headers: HeaderMap::new(),
            timeout: None,
            body: None,
            err: None,
        };

        let content = &client.content;

        let configured = [
            content.has_basic_auth(),
            content.has_token_auth(),
            content.has_key_auth(),
        ]
        .iter()
        .filter(|m| **m)
        .count();

        if configured > 1 {
            request.err = Some(RestError::MultipleAuthMethods);
            return request;
        }

        if content.has_token_auth() {
            match request.bearer_token() {
                Ok(token) => request.set_authorization(&format!("Bearer {token}")),
                Err(e) => request.err = Some(e),
            }
        } else if content.has_key_auth() {
            let key = content
                .secret_key
                .as_ref()
                .map(|k| k.expose_secret().to_string())
                .unwrap_or_default();
            match auth::sign(&content.secret_id, &key, &client.group) {
                Ok(token) => request.set_authorization(&format!("Bearer {token}")),
                Err(e) => request.err = Some(e),
            }
        } else if content.has_basic_auth() {
            let password = content
                .password
                .as_ref()
                .map(|p| p.expose_secret().to_string())
                .unwrap_or_default();
            let encoded = auth::basic_auth(&content.username, &password);
            request.set_authorization(&format!("Basic {encoded}"));
        }

        let accept = if content.accept_content_types.is_empty() {
            format!("{}, */*", content.content_type)
        } else {
            content.accept_content_types.clone()
        };
        match HeaderValue::from_str(&accept) {
            Ok(value) => {
                request.headers.insert(ACCEPT, value);
            }
            Err(_) if request.err.is_none() => {
                request.err = Some(RestError::invalid_request(format!(
                    "invalid accept content types {accept:?}"
                )));
            }
            Err(_) => {}
        }

        request
    }

    /// Resolve the bearer token, preferring the token file's contents.
    fn bearer_token(&self) -> RestResult<String> {
        if let Some(path) = &self.client.content.bearer_token_file {
            let token = std::fs::read_to_string(path)?;
            return Ok(token.trim().to_string());
        }

        Ok(self
            .client
            .content
            .bearer_token
            .as_ref()
            .map(|t| t.expose_secret().to_string())
            .unwrap_or_default())
    }

    fn set_authorization(&mut self, value: &str) {
        match HeaderValue::from_str(value) {
            Ok(mut v) => {
                v.set_sensitive(true);
                self.headers.insert(AUTHORIZATION, v);
            }
            Err(e) => self.err = Some(RestError::invalid_request(e.to_string())),
        }
    }

    /// Set the resource to access (`<resource>/<name>`).
    #[must_use]
    pub fn resource(mut self, resource: &str) -> Self {
        if self.err.is_some() {
            return self;
        }

        if !self.resource.is_empty() {
            self.err = Some(RestError::invalid_request(format!(
                "resource already set to {:?}, cannot change to {resource:?}",
                self.resource
            )));
            return self;
        }

        let msgs = is_valid_path_segment_name(resource);
        if !msgs.is_empty() {
            self.err = Some(RestError::invalid_request(format!(
                "invalid resource {resource:?}: {msgs:?}"
            )));
            return self;
        }

        self.resource = resource.to_string();
        self
    }

    /// Set the name of the resource to access.
    #[must_use]
    pub fn name(mut self, resource_name: &str) -> Self {
        if self.err.is_some() {
            return self;
        }

        if resource_name.is_empty() {
            self.err = Some(RestError::invalid_request("resource name may not be empty"));
            return self;
        }

        if !self.resource_name.is_empty() {
            self.err = Some(RestError::invalid_request(format!(
                "resource name already set to {:?}, cannot change to {resource_name:?}",
                self.resource_name
            )));
            return self;
        }

        let msgs = is_valid_path_segment_name(resource_name);
        if !msgs.is_empty() {
            self.err = Some(RestError::invalid_request(format!(
                "invalid resource name {resource_name:?}: {msgs:?}"
            )));
            return self;
        }

        self.resource_name = resource_name.to_string();
        self
    }

    /// Set a sub-resource path placed after the resource name.
    #[must_use]
    pub fn sub_resource(mut self, subresources: &[&str]) -> Self {
        if self.err.is_some() {
            return self;
        }

        if !self.subresource.is_empty() {
            self.err = Some(RestError::invalid_request(format!(
                "subresource already set to {:?}",
                self.subresource
            )));
            return self;
        }

        for s in subresources {
            let msgs = is_valid_path_segment_name(s);
            if !msgs.is_empty() {
                self.err = Some(RestError::invalid_request(format!(
                    "invalid subresource {s:?}: {msgs:?}"
                )));
                return self;
            }
        }

        self.subresource = subresources.join("/");
        self
    }

    /// Add segments to the beginning of the request path, before the
    /// resource section.
    #[must_use]
    pub fn prefix(mut self, segments: &[&str]) -> Self {
        if self.err.is_some() {
            return self;
        }

        let mut parts = vec![self.path_prefix.as_str()];
        parts.extend_from_slice(segments);
        self.path_prefix = join_path(&parts);
        self
    }

    /// Append segments to the end of the request path.
    #[must_use]
    pub fn suffix(mut self, segments: &[&str]) -> Self {
        if self.err.is_some() {
            return self;
        }

        let mut parts = vec![self.subpath.as_str()];
        parts.extend_from_slice(segments);
        self.subpath = join_path(&parts).trim_start_matches('/').to_string();
        self
    }

    /// Add a query parameter.
    #[must_use]
    pub fn param(mut self, name: &str, value: &str) -> Self {
        if self.err.is_some() {
            return self;
        }

        self.params.push((name.to_string(), value.to_string()));
        self
    }

    /// Serialize an options object into query parameters.
    ///
    /// Fields serialized as empty/absent are omitted. Parameters are
    /// additive with those set through [`Self::param`].
    #[must_use]
    pub fn versioned_params<T: Serialize>(mut self, params: &T) -> Self {
        if self.err.is_some() {
            return self;
        }

        match serde_urlencoded::to_string(params) {
            Ok(encoded) => {
                for (k, v) in url::form_urlencoded::parse(encoded.as_bytes()) {
                    self.params.push((k.into_owned(), v.into_owned()));
                }
            }
            Err(e) => self.err = Some(RestError::invalid_request(e.to_string())),
        }

        self
    }

    /// Set a header, replacing any existing values for the same name.
    #[must_use]
    pub fn header(mut self, key: &str, value: &str) -> Self {
        if self.err.is_some() {
            return self;
        }

        match (HeaderName::try_from(key), HeaderValue::from_str(value)) {
            (Ok(name), Ok(value)) => {
                self.headers.insert(name, value);
            }
            _ => {
                self.err = Some(RestError::invalid_request(format!("invalid header {key:?}")));
            }
        }

        self
    }

    /// Use the given duration as an overall timeout for this request.
    /// Also passed to the server as a `timeout` query parameter.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        if self.err.is_some() {
            return self;
        }

        if !timeout.is_zero() {
            self.timeout = Some(timeout);
        }
        self
    }

    /// JSON-encode the given object as the request body.
    #[must_use]
    pub fn body<T: Serialize>(mut self, body: &T) -> Self {
        if self.err.is_some() {
            return self;
        }

        match serde_json::to_vec(body) {
            Ok(encoded) => {
                let content_type = self.client.content.content_type.clone();
                self.body = Some(encoded);
                self = self.header(CONTENT_TYPE.as_str(), &content_type);
            }
            Err(e) => self.err = Some(RestError::Serialization(e)),
        }

        self
    }

    /// The URL the request will be sent to.
    #[must_use]
    pub fn url(&self) -> Url {
        let mut path_parts = vec![self.path_prefix.as_str()];

        let resource = self.resource.to_lowercase();
        if !resource.is_empty() {
            path_parts.push(&resource);
        }
        if !self.resource_name.is_empty() {
            path_parts.push(&self.resource_name);
        }
        if !self.subresource.is_empty() {
            path_parts.push(&self.subresource);
        }
        if !self.subpath.is_empty() {
            path_parts.push(&self.subpath);
        }

        let mut url = self.client.base.clone();
        url.set_path(&join_path(&path_parts));

        if !self.params.is_empty() || self.timeout.is_some() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in &self.params {
                pairs.append_pair(k, v);
            }
            if let Some(timeout) = self.timeout {
                pairs.append_pair("timeout", &timeout_param(timeout));
            }
        }

        url
    }

    /// Execute the request, retrying transient failures per the client's
    /// retry policy.
    ///
    /// # Errors
    ///
    /// Returns any error stored while building, transport errors, or the
    /// classified API error for non-2xx responses.
    #[tracing::instrument(skip(self), fields(verb = %self.verb))]
    pub async fn send(self) -> RestResult<RestResponse> {
        if let Some(err) = self.err {
            return Err(err);
        }

        let url = self.url();
        let Self {
            client,
            verb,
            headers,
            timeout,
            body,
            ..
        } = self;

        debug!(%url, "sending request");

        client
            .retry
            .clone()
            .execute(|| {
                let mut request = client
                    .http
                    .request(verb.clone(), url.clone())
                    .headers(headers.clone());

                if let Some(t) = timeout {
                    request = request.timeout(t);
                }
                if let Some(b) = &body {
                    request = request.body(b.clone());
                }

                dispatch(request, url.path().to_string())
            })
            .await
    }
}

/// Renders a timeout for the `timeout` query parameter. Whole seconds render
/// as `Ns`; anything finer renders as `Nms` so a sub-second timeout does not
/// collapse to `0s`.
fn timeout_param(timeout: Duration) -> String {
    if timeout.subsec_nanos() == 0 {
        format!("{}s", timeout.as_secs())
    } else {
        format!("{}ms", timeout.as_millis())
    }
}

/// Sends a prepared request and classifies the response status.
async fn dispatch(request: reqwest::RequestBuilder, path: String) -> RestResult<RestResponse> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.bytes().await?.to_vec();

    match status.as_u16() {
        401 => Err(RestError::auth_failed(text_of(&body))),
        403 => Err(RestError::PermissionDenied(path)),
        404 => Err(RestError::not_found(path)),
        429 => Err(RestError::RateLimited),
        s if s >= 500 => Err(RestError::ServerError {
            status: s,
            message: text_of(&body),
        }),
        _ if !status.is_success() => Err(RestError::Api {
            status: status.as_u16(),
            message: text_of(&body),
        }),
        _ => Ok(RestResponse { body }),
    }
}

fn text_of(body: &[u8]) -> String {
    String::from_utf8_lossy(body).into_owned()
}

/// A successful response body, ready for decoding.
#[derive(Debug)]
pub struct RestResponse {
    body: Vec<u8>,
}

impl RestResponse {
    /// The raw response body.
    #[must_use]
    pub fn raw(&self) -> &[u8] {
        &self.body
    }

    /// Decode the response body as JSON into the requested type.
    ///
    /// # Errors
    ///
    /// Returns `RestError::Serialization` if the body is not valid JSON for
    /// the target type.
    pub fn decode<T: DeserializeOwned>(&self) -> RestResult<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}
