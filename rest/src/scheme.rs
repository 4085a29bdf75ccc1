//! API group and version identification.

use std::fmt;

/// An API group/version pair, e.g. `iam.api/v1`.
///
/// The group selects which IAM service the client talks to and the version
/// selects the path segment under which its resources are mounted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupVersion {
    /// API group, e.g. `iam.api` or `iam.authz`
    pub group: String,
    /// API version, e.g. `v1`
    pub version: String,
}

impl GroupVersion {
    /// Create a new group/version pair.
    #[must_use]
    pub fn new(group: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for GroupVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.group.is_empty() {
            write!(f, "{}", self.version)
        } else {
            write!(f, "{}/{}", self.group, self.version)
        }
    }
}
