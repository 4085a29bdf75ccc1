//! Generic REST client framework for the IAM API.
//!
//! This crate provides the transport layer shared by all typed IAM clients:
//! - Client configuration with credential redaction
//! - TLS setup (CA bundles, client certificates, insecure mode)
//! - A chained request builder with deferred error handling
//! - Pluggable authentication (basic, bearer token, signed secret key)
//! - Bounded retry of transient failures
//! - User-Agent construction

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod retry;
pub mod scheme;
pub mod tls;
pub mod url;
pub mod version;

mod auth;

pub use client::RestClient;
pub use config::{Config, ContentConfig};
pub use error::{RestError, RestResult};
pub use request::{RequestBuilder, RestResponse};
pub use retry::RetryPolicy;
pub use scheme::GroupVersion;
pub use tls::TlsClientConfig;
pub use version::default_user_agent;
