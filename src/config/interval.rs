// src/config/interval.rs

use std::fmt;
use std::time::Duration;

/// Suffix marking an interval given in milliseconds.
const MILLIS_SUFFIX: &str = "ms";

/// Default delay between runs, in milliseconds.
pub const DEFAULT_INTERVAL: u64 = 1000;

/// Delay between the end of one run and the start of the next.
///
/// Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Interval(Duration);

impl Interval {
    /// Parse a raw `--interval` argument.
    ///
    /// - `"<n>ms"`: `n` milliseconds.
    /// - `"<n>"`: `n` whole seconds.
    ///
    /// `n` must be a non-zero unsigned integer.
    pub fn parse(raw: &str) -> Result<Self, String> {
        let raw = raw.trim();

        let millis = match raw.strip_suffix(MILLIS_SUFFIX) {
            Some(prefix) => parse_count(prefix, raw)?,
            None => parse_count(raw, raw)?
                .checked_mul(1000)
                .ok_or_else(|| format!("interval {raw:?} is too large"))?,
        };

        Self::from_millis(millis)
    }

    /// Build an interval from a millisecond count, rejecting zero.
    pub fn from_millis(millis: u64) -> Result<Self, String> {
        if millis == 0 {
            return Err("interval must be greater than zero".to_string());
        }
        Ok(Self(Duration::from_millis(millis)))
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }

    pub fn as_millis(&self) -> u64 {
        // Constructed from a u64 millisecond count, so this cannot truncate.
        self.0.as_millis() as u64
    }
}

fn parse_count(digits: &str, raw: &str) -> Result<u64, String> {
    digits.parse::<u64>().map_err(|_| {
        format!("invalid interval {raw:?} (expected e.g. \"2\" for seconds or \"500ms\")")
    })
}

impl Default for Interval {
    fn default() -> Self {
        Self(Duration::from_millis(DEFAULT_INTERVAL))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.as_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_integer_is_seconds() {
        assert_eq!(Interval::parse("3").unwrap().as_millis(), 3000);
    }

    #[test]
    fn ms_suffix_is_milliseconds() {
        assert_eq!(Interval::parse("250ms").unwrap().as_millis(), 250);
    }

    #[test]
    fn zero_is_rejected() {
        assert!(Interval::parse("0").is_err());
        assert!(Interval::parse("0ms").is_err());
    }

    #[test]
    fn malformed_values_are_rejected() {
        for raw in ["", "ms", "s", "-1", "1.5", "10s", "ten", "5 ms"] {
            assert!(Interval::parse(raw).is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn overflowing_seconds_are_rejected() {
        let raw = u64::MAX.to_string();
        assert!(Interval::parse(&raw).is_err());
    }

    #[test]
    fn default_is_one_second() {
        assert_eq!(Interval::default().as_duration(), Duration::from_secs(1));
    }

    #[test]
    fn displays_as_milliseconds() {
        assert_eq!(Interval::parse("2").unwrap().to_string(), "2000ms");
    }
}
