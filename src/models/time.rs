//! Wall-clock time primitives.
//!
//! # Time Model
//! Times are local wall-clock times of day with minute resolution.
//! There is no date, no timezone and no seconds. A [`TimeRange`] is
//! shared by class meetings, exams and the caller's accepted window.
//!
//! # Overlap
//! Ranges are compared as half-open intervals `[start, end)`: a range
//! ending exactly when another starts does not overlap it, so
//! back-to-back meetings never conflict.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A time of day (`HH:MM`).
///
/// Ordering is chronological within the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Midnight (`00:00`).
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// Last representable minute of the day (`23:59`).
    pub const END_OF_DAY: Self = Self {
        hour: 23,
        minute: 59,
    };

    /// Creates a time of day.
    ///
    /// Fails if `hour > 23` or `minute > 59`.
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(Error::InvalidTime(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self { hour, minute })
    }

    /// Hour component (0-23).
    #[inline]
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute component (0-59).
    #[inline]
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since midnight.
    #[inline]
    pub fn minutes_since_midnight(&self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let invalid = || Error::InvalidTime(text.to_string());

        let (hour, minute) = text.split_once(':').ok_or_else(invalid)?;
        let hour: u8 = hour.trim().parse().map_err(|_| invalid())?;
        let minute: u8 = minute.trim().parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

/// A span of wall-clock time within one day.
///
/// `start <= end` is expected but not enforced; catalog validation
/// reports inverted ranges (see [`crate::validation`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeRange {
    /// Range start (inclusive).
    pub start: TimeOfDay,
    /// Range end (exclusive).
    pub end: TimeOfDay,
}

impl TimeRange {
    /// Creates a new range.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// The whole day, `00:00-23:59`.
    pub fn whole_day() -> Self {
        Self::new(TimeOfDay::MIDNIGHT, TimeOfDay::END_OF_DAY)
    }

    /// Length of the range in minutes (0 for inverted ranges).
    pub fn duration_minutes(&self) -> u16 {
        self.end
            .minutes_since_midnight()
            .saturating_sub(self.start.minutes_since_midnight())
    }

    /// Whether `start` is after `end`.
    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// Whether two ranges overlap.
    ///
    /// Touching boundaries (one ends exactly when the other starts)
    /// do not count as overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.end <= other.start || self.start >= other.end)
    }

    /// Whether `other` lies entirely within this range (bounds inclusive).
    pub fn contains(&self, other: &Self) -> bool {
        other.start.minutes_since_midnight() >= self.start.minutes_since_midnight()
            && other.end.minutes_since_midnight() <= self.end.minutes_since_midnight()
    }
}

/// Whether two time ranges overlap. See [`TimeRange::overlaps`].
#[inline]
pub fn times_overlap(a: &TimeRange, b: &TimeRange) -> bool {
    a.overlaps(b)
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for TimeRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let invalid = || Error::InvalidTimeRange(text.to_string());

        let (start, end) = text.split_once('-').ok_or_else(invalid)?;
        let start: TimeOfDay = start.parse().map_err(|_| invalid())?;
        let end: TimeOfDay = end.parse().map_err(|_| invalid())?;
        Ok(Self::new(start, end))
    }
}

impl TryFrom<String> for TimeRange {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TimeRange> for String {
    fn from(value: TimeRange) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn range(s: &str) -> TimeRange {
        s.parse().unwrap()
    }

    #[test]
    fn test_time_of_day() {
        let t = TimeOfDay::new(9, 30).unwrap();
        assert_eq!(t.hour(), 9);
        assert_eq!(t.minute(), 30);
        assert_eq!(t.minutes_since_midnight(), 570);
        assert_eq!(t.to_string(), "09:30");
    }

    #[test]
    fn test_time_of_day_bounds() {
        assert!(TimeOfDay::new(23, 59).is_ok());
        assert!(TimeOfDay::new(24, 0).is_err());
        assert!(TimeOfDay::new(12, 60).is_err());
    }

    #[test]
    fn test_parse_time_of_day() {
        assert_eq!("7:05".parse::<TimeOfDay>().unwrap(), TimeOfDay::new(7, 5).unwrap());
        assert_eq!(" 16:30 ".parse::<TimeOfDay>().unwrap().to_string(), "16:30");
        assert!(matches!("1630".parse::<TimeOfDay>(), Err(Error::InvalidTime(_))));
        assert!("25:00".parse::<TimeOfDay>().is_err());
        assert!("ab:cd".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_parse_time_range() {
        let r = range("09:00-10:30");
        assert_eq!(r.start, TimeOfDay::new(9, 0).unwrap());
        assert_eq!(r.end, TimeOfDay::new(10, 30).unwrap());
        assert_eq!(r.duration_minutes(), 90);
        assert_eq!(r.to_string(), "09:00-10:30");
        assert!(matches!(
            "09:00".parse::<TimeRange>(),
            Err(Error::InvalidTimeRange(_))
        ));
    }

    #[test]
    fn test_back_to_back_does_not_overlap() {
        let a = range("09:00-10:00");
        let b = range("10:00-11:00");
        assert!(!times_overlap(&a, &b));
        assert!(!times_overlap(&b, &a));
    }

    #[test]
    fn test_one_minute_overlap() {
        let a = range("09:00-10:01");
        let b = range("10:00-11:00");
        assert!(times_overlap(&a, &b));
        assert!(times_overlap(&b, &a));
    }

    #[test]
    fn test_overlap_same_hour_minutes() {
        // Same hour on both boundaries, decided by minutes alone
        assert!(times_overlap(&range("10:15-10:45"), &range("10:30-11:00")));
        assert!(!times_overlap(&range("10:15-10:30"), &range("10:30-11:00")));
        assert!(times_overlap(&range("08:00-12:00"), &range("09:00-10:00"))); // nested
        assert!(!times_overlap(&range("13:00-14:00"), &range("09:00-10:00")));
    }

    #[test]
    fn test_overlap_symmetric_random() {
        let mut rng = rand::rng();
        for _ in 0..500 {
            let mut pick = || {
                let a = TimeOfDay::new(rng.random_range(0..24), rng.random_range(0..60)).unwrap();
                let b = TimeOfDay::new(rng.random_range(0..24), rng.random_range(0..60)).unwrap();
                TimeRange::new(a.min(b), a.max(b))
            };
            let x = pick();
            let y = pick();
            assert_eq!(times_overlap(&x, &y), times_overlap(&y, &x), "{x} vs {y}");
        }
    }

    #[test]
    fn test_contains() {
        let window = range("09:00-16:30");
        assert!(window.contains(&range("09:00-16:30")));
        assert!(window.contains(&range("10:00-11:00")));
        assert!(!window.contains(&range("08:59-10:00")));
        assert!(!window.contains(&range("15:00-16:31")));
    }

    #[test]
    fn test_inverted() {
        assert!(range("11:00-10:00").is_inverted());
        assert!(!range("10:00-10:00").is_inverted());
        assert_eq!(range("11:00-10:00").duration_minutes(), 0);
    }

    #[test]
    fn test_serde_as_text() {
        let r = range("09:00-16:30");
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, "\"09:00-16:30\"");
        let back: TimeRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
        assert!(serde_json::from_str::<TimeRange>("\"9-5\"").is_err());
    }
}
