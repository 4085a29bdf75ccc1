//! Client configuration loading for the IAM SDK.
//!
//! Reads `iamconfig` YAML files, the way command line tools and services
//! locate them, validates their contents, and turns them into an
//! [`iam_rest::Config`] ready to hand to a clientset.
//!
//! ```no_run
//! let config = iam_clientcmd::build_config_from_flags("", "/etc/iam/config")?;
//! # Ok::<(), iam_clientcmd::ClientCmdError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod client_config;
pub mod helpers;
pub mod loader;
pub mod validation;

pub use api::{AuthInfo, ConfigFile, Server};
pub use client_config::{build_config_from_flags, client_config, rest_config_from_iamconfig};
pub use helpers::parse_timeout;
pub use loader::{load, load_from_file, recommended_home_file};
pub use validation::{confirm_usable, ClientCmdError};
