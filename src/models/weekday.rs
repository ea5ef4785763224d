//! Weekdays and compact weekday sets.
//!
//! Only the five teaching days Monday-Friday exist. A [`WeekdaySet`]
//! is a 5-bit mask, so membership, union and intersection are O(1).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A teaching day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All weekdays in calendar order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Position within the week (Monday = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    fn bit(self) -> u8 {
        1 << self.index()
    }

    /// Three-letter English abbreviation.
    pub fn short_name(self) -> &'static str {
        match self {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Weekday {
    type Err = Error;

    /// Recognizes English names, their 3-letter abbreviations and the
    /// catalog abbreviations `lun mar mie jue vie`. Case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim().to_lowercase();
        let day = match token.as_str() {
            "mon" | "monday" | "lun" => Weekday::Monday,
            "tue" | "tuesday" | "mar" => Weekday::Tuesday,
            "wed" | "wednesday" | "mie" | "mié" => Weekday::Wednesday,
            "thu" | "thursday" | "jue" => Weekday::Thursday,
            "fri" | "friday" | "vie" => Weekday::Friday,
            _ => return Err(Error::UnknownWeekday(s.trim().to_string())),
        };
        Ok(day)
    }
}

/// An immutable set of weekdays.
///
/// Serializes as its text form (`Mon-Wed`), so only the five weekdays
/// can ever be decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WeekdaySet {
    bits: u8,
}

impl WeekdaySet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// Creates a set from a list of days. Duplicates collapse.
    pub fn from_days(days: &[Weekday]) -> Self {
        Self {
            bits: days.iter().fold(0, |acc, d| acc | d.bit()),
        }
    }

    /// Whether `day` is in the set.
    #[inline]
    pub fn contains(&self, day: Weekday) -> bool {
        self.bits & day.bit() != 0
    }

    /// Days present in either set.
    #[inline]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Days present in both sets.
    #[inline]
    pub fn intersection(&self, other: &Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Number of days in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Days in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        Weekday::ALL.into_iter().filter(|d| self.contains(*d))
    }
}

/// Whether `day` is active in `set`.
#[inline]
pub fn active(set: &WeekdaySet, day: Weekday) -> bool {
    set.contains(day)
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().fold(0, |acc, d| acc | d.bit()),
        }
    }
}

impl fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(Weekday::short_name).collect();
        f.write_str(&names.join("-"))
    }
}

impl FromStr for WeekdaySet {
    type Err = Error;

    /// Parses tokens separated by `-`, `,` or whitespace, e.g. `lun-mie`
    /// or `Mon, Wed`.
    fn from_str(s: &str) -> Result<Self> {
        s.split(|c: char| c == '-' || c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(str::parse::<Weekday>)
            .collect()
    }
}

impl TryFrom<String> for WeekdaySet {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<WeekdaySet> for String {
    fn from(value: WeekdaySet) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership() {
        let set = WeekdaySet::from_days(&[Weekday::Monday, Weekday::Wednesday]);
        assert!(active(&set, Weekday::Monday));
        assert!(active(&set, Weekday::Wednesday));
        assert!(!active(&set, Weekday::Tuesday));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_duplicates_collapse() {
        let set = WeekdaySet::from_days(&[Weekday::Friday, Weekday::Friday]);
        assert_eq!(set.len(), 1);
        assert_eq!(set, WeekdaySet::from_days(&[Weekday::Friday]));
    }

    #[test]
    fn test_order_independent() {
        let a = WeekdaySet::from_days(&[Weekday::Thursday, Weekday::Monday]);
        let b = WeekdaySet::from_days(&[Weekday::Monday, Weekday::Thursday]);
        assert_eq!(a, b);
        assert_eq!(
            a.iter().collect::<Vec<_>>(),
            vec![Weekday::Monday, Weekday::Thursday]
        );
    }

    #[test]
    fn test_union_intersection() {
        let a = WeekdaySet::from_days(&[Weekday::Monday, Weekday::Tuesday]);
        let b = WeekdaySet::from_days(&[Weekday::Tuesday, Weekday::Friday]);
        assert_eq!(a.union(&b).len(), 3);
        assert_eq!(
            a.intersection(&b),
            WeekdaySet::from_days(&[Weekday::Tuesday])
        );
        assert!(a
            .intersection(&WeekdaySet::from_days(&[Weekday::Friday]))
            .is_empty());
    }

    #[test]
    fn test_parse_tokens() {
        let set: WeekdaySet = "lun-mie".parse().unwrap();
        assert_eq!(set, WeekdaySet::from_days(&[Weekday::Monday, Weekday::Wednesday]));

        let set: WeekdaySet = "Tue, Thursday".parse().unwrap();
        assert_eq!(set.to_string(), "Tue-Thu");

        assert!(matches!(
            "mon-sat".parse::<WeekdaySet>(),
            Err(Error::UnknownWeekday(t)) if t == "sat"
        ));
    }

    #[test]
    fn test_empty_set() {
        let set: WeekdaySet = "".parse().unwrap();
        assert!(set.is_empty());
        assert_eq!(set.to_string(), "");
        assert_eq!(WeekdaySet::default(), WeekdaySet::EMPTY);
    }

    #[test]
    fn test_serde_as_text() {
        let set = WeekdaySet::from_days(&[Weekday::Monday, Weekday::Friday]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "\"Mon-Fri\"");
        assert_eq!(serde_json::from_str::<WeekdaySet>(&json).unwrap(), set);
        assert_eq!(serde_json::from_str::<WeekdaySet>("\"\"").unwrap(), WeekdaySet::EMPTY);
    }

    #[test]
    fn test_deserialize_rejects_raw_bits() {
        // Bits above Friday must never be decodable
        assert!(serde_json::from_str::<WeekdaySet>(r#"{"bits":224}"#).is_err());
        assert!(serde_json::from_str::<WeekdaySet>("224").is_err());
        assert!(serde_json::from_str::<WeekdaySet>("\"Mon-Sat\"").is_err());
    }

    #[test]
    fn test_len_matches_iter_after_decode() {
        let set: WeekdaySet = serde_json::from_str("\"lun-mie-vie\"").unwrap();
        assert_eq!(set.iter().count(), set.len());
        assert_eq!(set.len(), 3);
    }
}
