//! Small parsing helpers shared by the loader and flag plumbing.

use std::time::Duration;

use crate::validation::ClientCmdError;

/// Parse a timeout string into a [`Duration`].
///
/// Accepts a bare non-negative integer, interpreted as seconds, or an
/// integer followed by a unit: `ms`, `s`, `m`, or `h`.
///
/// # Errors
///
/// Returns [`ClientCmdError::InvalidTimeout`] for anything else, including
/// negative or non-numeric values.
pub fn parse_timeout(duration: &str) -> Result<Duration, ClientCmdError> {
    if let Ok(seconds) = duration.parse::<u64>() {
        return Ok(Duration::from_secs(seconds));
    }

    let (value, unit) = match duration {
        d if d.ends_with("ms") => (&d[..d.len() - 2], 1),
        d if d.ends_with('s') => (&d[..d.len() - 1], 1_000),
        d if d.ends_with('m') => (&d[..d.len() - 1], 60_000),
        d if d.ends_with('h') => (&d[..d.len() - 1], 3_600_000),
        _ => return Err(ClientCmdError::InvalidTimeout(duration.to_string())),
    };

    value
        .parse::<u64>()
        .map(|n| Duration::from_millis(n * unit))
        .map_err(|_| ClientCmdError::InvalidTimeout(duration.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_integer_is_seconds() {
        assert_eq!(parse_timeout("30").unwrap(), Duration::from_secs(30));
        assert_eq!(parse_timeout("0").unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_unit_suffixes() {
        assert_eq!(parse_timeout("500ms").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_timeout("1s").unwrap(), Duration::from_secs(1));
        assert_eq!(parse_timeout("2m").unwrap(), Duration::from_secs(120));
        assert_eq!(parse_timeout("3h").unwrap(), Duration::from_secs(10_800));
    }

    #[test]
    fn test_invalid_values() {
        assert!(parse_timeout("").is_err());
        assert!(parse_timeout("-1").is_err());
        assert!(parse_timeout("abc").is_err());
        assert!(parse_timeout("10d").is_err());
    }
}
