//! Parsing of user-entered values before they reach the calculator.

use crate::clock::{Duration, TimeOfDay};
use crate::error::Result;

/// Parse a custom target time. Only well-formed `HH:MM` values are accepted.
pub fn parse_target(input: &str) -> Result<TimeOfDay> {
    TimeOfDay::parse(input)
}

/// Parse a custom run duration written as `H:MM`.
///
/// Blank input yields `fallback`. Only the first two `:`-separated fields
/// are read, so `H:MM:SS` drops the seconds. Components that are not
/// integers count as zero, and a lone number is read as hours. If nothing
/// parses at all the fallback is used.
pub fn parse_run_time(input: &str, fallback: Duration) -> Duration {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return fallback;
    }

    let mut parts = trimmed.split(':');
    let hours = parts.next().and_then(|s| s.trim().parse::<u32>().ok());
    let minutes = parts.next().and_then(|s| s.trim().parse::<u32>().ok());

    if hours.is_none() && minutes.is_none() {
        tracing::warn!(
            input = trimmed,
            fallback = fallback.minutes(),
            "Unrecognised run time, using default"
        );
        return fallback;
    }

    Duration::from_hm(hours.unwrap_or(0), minutes.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: Duration = Duration::ZERO;

    fn fallback() -> Duration {
        Duration::from_minutes(230)
    }

    #[test]
    fn test_parse_target_strict() {
        assert_eq!(parse_target("17:00").unwrap().minutes(), 1020);
        assert!(parse_target("5pm").is_err());
        assert!(parse_target("").is_err());
    }

    #[test]
    fn test_parse_run_time_hm() {
        assert_eq!(parse_run_time("3:22", fallback()).minutes(), 202);
        assert_eq!(parse_run_time("0:45", fallback()).minutes(), 45);
    }

    #[test]
    fn test_parse_run_time_ignores_seconds() {
        assert_eq!(parse_run_time("1:30:45", fallback()).minutes(), 90);
        assert_eq!(parse_run_time("0:05:00", fallback()).minutes(), 5);
    }

    #[test]
    fn test_parse_run_time_blank_uses_fallback() {
        assert_eq!(parse_run_time("", fallback()), fallback());
        assert_eq!(parse_run_time("   ", fallback()), fallback());
    }

    #[test]
    fn test_parse_run_time_partial_components() {
        assert_eq!(parse_run_time("2:xx", fallback()).minutes(), 120);
        assert_eq!(parse_run_time("xx:30", fallback()).minutes(), 30);
        assert_eq!(parse_run_time("3", DEFAULT).minutes(), 180);
    }

    #[test]
    fn test_parse_run_time_garbage_uses_fallback() {
        assert_eq!(parse_run_time("soon", fallback()), fallback());
        assert_eq!(parse_run_time("a:b", fallback()), fallback());
    }
}
