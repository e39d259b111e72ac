//! Age filters for `--older` / `--newer`
//!
//! Ages are written as a count followed by a unit: `6m` (months), `3d`
//! (days) or `12h` (hours). A month is always 30 days.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use regex::Regex;

static AGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)\s*([mdh])\s*$").expect("AGE_PATTERN regex is invalid")
});

const SECS_PER_HOUR: u64 = 60 * 60;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;
const SECS_PER_MONTH: u64 = 30 * SECS_PER_DAY;

/// Unit of an age filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeUnit {
    Months,
    Days,
    Hours,
}

impl AgeUnit {
    fn seconds(self) -> u64 {
        match self {
            AgeUnit::Months => SECS_PER_MONTH,
            AgeUnit::Days => SECS_PER_DAY,
            AgeUnit::Hours => SECS_PER_HOUR,
        }
    }

    fn suffix(self) -> char {
        match self {
            AgeUnit::Months => 'm',
            AgeUnit::Days => 'd',
            AgeUnit::Hours => 'h',
        }
    }
}

/// A parsed age such as `3d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeSpec {
    pub count: u64,
    pub unit: AgeUnit,
}

/// Returned when an age string does not look like `<N>[m|d|h]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeParseError(String);

impl fmt::Display for AgeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid age '{}' (expected a number followed by m, d or h)",
            self.0
        )
    }
}

impl std::error::Error for AgeParseError {}

impl FromStr for AgeSpec {
    type Err = AgeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = AGE_PATTERN
            .captures(s)
            .ok_or_else(|| AgeParseError(s.to_string()))?;
        let count: u64 = caps[1].parse().map_err(|_| AgeParseError(s.to_string()))?;
        let unit = match &caps[2] {
            "m" => AgeUnit::Months,
            "d" => AgeUnit::Days,
            _ => AgeUnit::Hours,
        };
        Ok(Self { count, unit })
    }
}

impl fmt::Display for AgeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.count, self.unit.suffix())
    }
}

impl AgeSpec {
    /// Length of this age. Saturates instead of overflowing on absurd counts.
    pub fn as_duration(&self) -> Duration {
        Duration::from_secs(self.count.saturating_mul(self.unit.seconds()))
    }

    /// The absolute point in time `now - self`, clamped to the epoch.
    pub fn boundary(&self, now: SystemTime) -> SystemTime {
        // checked_sub may go below the epoch on unix
        now.checked_sub(self.as_duration())
            .map_or(UNIX_EPOCH, |t| t.max(UNIX_EPOCH))
    }
}

/// Resolve an optional age flag into a time bound.
///
/// A malformed value is not fatal: it is logged and treated as if the flag
/// had not been given, leaving that side of the window open.
pub fn resolve_bound(flag: &str, value: Option<&str>, now: SystemTime) -> Option<SystemTime> {
    let value = value?;
    match value.parse::<AgeSpec>() {
        Ok(age) => {
            log::debug!("--{flag} {age} resolves to {:?}", age.boundary(now));
            Some(age.boundary(now))
        }
        Err(e) => {
            log::warn!("ignoring --{flag}: {e}");
            None
        }
    }
}
