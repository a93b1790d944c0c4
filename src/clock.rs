//! Wall-clock value types.
//!
//! A [`TimeOfDay`] is a minute count since local midnight, always reduced
//! into `[0, 1440)`. A [`Duration`] is a non-negative number of minutes.

use crate::error::{DelayError, Result};
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MINUTES_PER_HOUR: i64 = 60;
pub const MINUTES_PER_DAY: i64 = 24 * MINUTES_PER_HOUR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Builds a time of day from any minute offset, wrapping around midnight.
    pub fn from_minutes(minutes: i64) -> Self {
        Self(minutes.rem_euclid(MINUTES_PER_DAY) as u16)
    }

    pub fn from_hm(hours: u32, minutes: u32) -> Self {
        Self::from_minutes(i64::from(hours) * MINUTES_PER_HOUR + i64::from(minutes))
    }

    pub fn from_time<T: Timelike>(time: &T) -> Self {
        Self::from_hm(time.hour(), time.minute())
    }

    /// Strict `HH:MM` parse, 00:00 through 23:59.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DelayError::InvalidTime {
                input: input.to_string(),
                reason: "expected HH:MM".to_string(),
            });
        }
        NaiveTime::parse_from_str(trimmed, "%H:%M")
            .map(|t| Self::from_time(&t))
            .map_err(|e| DelayError::InvalidTime {
                input: input.to_string(),
                reason: e.to_string(),
            })
    }

    pub fn minutes(self) -> i64 {
        i64::from(self.0)
    }

    pub fn hour(self) -> u32 {
        u32::from(self.0) / 60
    }

    pub fn minute(self) -> u32 {
        u32::from(self.0) % 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = DelayError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Duration(u32);

impl Duration {
    pub const ZERO: Duration = Duration(0);

    pub fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    pub fn from_hm(hours: u32, minutes: u32) -> Self {
        Self(hours.saturating_mul(60).saturating_add(minutes))
    }

    pub fn minutes(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::format_duration(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minutes_wraps() {
        assert_eq!(TimeOfDay::from_minutes(1440).minutes(), 0);
        assert_eq!(TimeOfDay::from_minutes(1822).minutes(), 382);
        assert_eq!(TimeOfDay::from_minutes(-60).minutes(), 1380);
    }

    #[test]
    fn test_parse_valid() {
        let t = TimeOfDay::parse("07:05").unwrap();
        assert_eq!(t.minutes(), 425);
        assert_eq!(t.hour(), 7);
        assert_eq!(t.minute(), 5);
        assert_eq!(TimeOfDay::parse(" 23:59 ").unwrap().minutes(), 1439);
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(TimeOfDay::parse("24:00").is_err());
        assert!(TimeOfDay::parse("12:60").is_err());
        assert!(TimeOfDay::parse("7am").is_err());
        assert!(TimeOfDay::parse("").is_err());
    }

    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(TimeOfDay::from_hm(6, 0).to_string(), "06:00");
        assert_eq!(TimeOfDay::MIDNIGHT.to_string(), "00:00");
    }

    #[test]
    fn test_duration_from_hm() {
        assert_eq!(Duration::from_hm(3, 50).minutes(), 230);
        assert_eq!(Duration::from_hm(2, 20).to_string(), "2 hr 20 min");
    }
}
