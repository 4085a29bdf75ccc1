//! User-Agent string construction.
//!
//! The default User-Agent identifies the calling binary, the SDK version,
//! the platform, and the build commit:
//! `command/version (os/arch) iam/commit`.

use std::path::Path;

/// Build commit injected at compile time, if the build system sets it.
const BUILD_COMMIT: Option<&str> = option_env!("IAM_SDK_BUILD_COMMIT");

/// Returns sufficient significant figures of the build commit hash.
fn adjust_commit(c: &str) -> &str {
    if c.is_empty() {
        return "unknown";
    }

    if c.len() > 7 {
        return &c[..7];
    }

    c
}

/// Strips the pre-release tag from a version in `major.minor.patch-tag` form.
fn adjust_version(v: &str) -> &str {
    if v.is_empty() {
        return "unknown";
    }

    v.split('-').next().unwrap_or("unknown")
}

/// Returns the last component of an OS-specific command path.
fn adjust_command(p: &str) -> String {
    if p.is_empty() {
        return "unknown".to_string();
    }

    Path::new(p)
        .file_name()
        .map_or_else(|| "unknown".to_string(), |n| n.to_string_lossy().into_owned())
}

/// Builds a User-Agent string from the given parts.
fn build_user_agent(command: &str, version: &str, os: &str, arch: &str, commit: &str) -> String {
    format!("{command}/{version} ({os}/{arch}) iam/{commit}")
}

/// Returns a User-Agent string describing the running binary and this SDK.
#[must_use]
pub fn default_user_agent() -> String {
    let command = std::env::args().next().unwrap_or_default();

    build_user_agent(
        &adjust_command(&command),
        adjust_version(env!("CARGO_PKG_VERSION")),
        std::env::consts::OS,
        std::env::consts::ARCH,
        adjust_commit(BUILD_COMMIT.unwrap_or_default()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_commit() {
        assert_eq!(adjust_commit(""), "unknown");
        assert_eq!(adjust_commit("abc12"), "abc12");
        assert_eq!(adjust_commit("0123456789abcdef"), "0123456");
    }

    #[test]
    fn test_adjust_version() {
        assert_eq!(adjust_version(""), "unknown");
        assert_eq!(adjust_version("0.1.0"), "0.1.0");
        assert_eq!(adjust_version("1.2.3-alpha.1"), "1.2.3");
    }

    #[test]
    fn test_adjust_command() {
        assert_eq!(adjust_command(""), "unknown");
        assert_eq!(adjust_command("iamctl"), "iamctl");
        assert_eq!(adjust_command("/usr/local/bin/iamctl"), "iamctl");
    }

    #[test]
    fn test_build_user_agent() {
        let ua = build_user_agent("iamctl", "0.1.0", "linux", "x86_64", "abc1234");
        assert_eq!(ua, "iamctl/0.1.0 (linux/x86_64) iam/abc1234");
    }

    #[test]
    fn test_default_user_agent_shape() {
        let ua = default_user_agent();
        assert!(ua.contains(std::env::consts::OS));
        assert!(ua.contains("iam/"));
    }
}
