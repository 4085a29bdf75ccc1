//! Loading iamconfig files from bytes, files, and well-known locations.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::api::ConfigFile;
use crate::validation::ClientCmdError;

/// Command-line flag conventionally used to point at an iamconfig file.
pub const RECOMMENDED_CONFIG_PATH_FLAG: &str = "iamconfig";
/// Environment variable conventionally used to point at an iamconfig file.
pub const RECOMMENDED_CONFIG_PATH_ENV_VAR: &str = "IAMCONFIG";
/// Directory under the user's home where client configuration lives.
pub const RECOMMENDED_HOME_DIR: &str = ".iam";
/// Default configuration file name inside [`RECOMMENDED_HOME_DIR`].
pub const RECOMMENDED_FILE_NAME: &str = "config";

/// The default iamconfig path, `$HOME/.iam/config`, when a home directory
/// can be determined.
#[must_use]
pub fn recommended_home_file() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(|home| {
            PathBuf::from(home)
                .join(RECOMMENDED_HOME_DIR)
                .join(RECOMMENDED_FILE_NAME)
        })
}

/// Deserialize iamconfig bytes without assuming the source is a file.
///
/// Empty input yields the default configuration rather than an error, so a
/// freshly touched config file behaves like no file at all.
///
/// # Errors
///
/// Returns [`ClientCmdError::Yaml`] when the bytes are not a valid config.
pub fn load(data: &[u8]) -> Result<ConfigFile, ClientCmdError> {
    if data.is_empty() {
        return Ok(ConfigFile::default());
    }

    Ok(serde_yaml::from_slice(data)?)
}

/// Load an iamconfig file from disk.
///
/// # Errors
///
/// Returns [`ClientCmdError::Io`] when the file cannot be read and
/// [`ClientCmdError::Yaml`] when it cannot be parsed.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<ConfigFile, ClientCmdError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading iamconfig");

    let data = std::fs::read(path)?;
    let mut config = load(&data)?;

    config.user.location_of_origin = Some(path.to_path_buf());
    config.server.location_of_origin = Some(path.to_path_buf());

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_empty_bytes_yield_default() {
        let config = load(b"").unwrap();
        assert!(config.server.is_empty());
        assert!(config.user.username.is_empty());
    }

    #[test]
    fn test_load_from_file_records_origin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "server:\n  address: https://iam.example.com\n").unwrap();

        let config = load_from_file(file.path()).unwrap();
        assert_eq!(config.server.address, "https://iam.example.com");
        assert_eq!(config.server.location_of_origin.as_deref(), Some(file.path()));
        assert_eq!(config.user.location_of_origin.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = load_from_file("/definitely/not/here").unwrap_err();
        assert!(matches!(err, ClientCmdError::Io(_)));
    }

    #[test]
    fn test_malformed_yaml_is_rejected() {
        let err = load(b"server: [not a map").unwrap_err();
        assert!(matches!(err, ClientCmdError::Yaml(_)));
    }
}
