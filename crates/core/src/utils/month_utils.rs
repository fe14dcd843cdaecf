use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{Error, ValidationError};

/// A validated calendar month, serialized as "YYYY-MM".
///
/// Budgets are keyed by month and transaction queries are scoped to one, so
/// the month travels as a proper value instead of a raw string prefix. Date
/// filtering always goes through [`MonthKey::first_day`] / [`MonthKey::last_day`]
/// range comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| MonthKey { year, month })
    }

    /// The month containing today's date (UTC).
    pub fn current() -> Self {
        let today = Utc::now().date_naive();
        MonthKey {
            year: today.year(),
            month: today.month(),
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        MonthKey {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First calendar day of the month.
    pub fn first_day(&self) -> NaiveDate {
        // Both components were validated on construction.
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or(NaiveDate::MIN)
    }

    /// Last calendar day of the month.
    pub fn last_day(&self) -> NaiveDate {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// True when `date` falls within this month (inclusive on both ends).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_day() && date <= self.last_day()
    }

    /// The month immediately before this one.
    pub fn pred(&self) -> Self {
        if self.month == 1 {
            MonthKey {
                year: self.year - 1,
                month: 12,
            }
        } else {
            MonthKey {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The most recent `count` months, newest first, starting from this one.
    /// Used by clients to populate month pickers.
    pub fn recent(&self, count: usize) -> Vec<MonthKey> {
        let mut months = Vec::with_capacity(count);
        let mut current = *self;
        for _ in 0..count {
            months.push(current);
            current = current.pred();
        }
        months
    }

    /// Human-readable label, e.g. "January 2026".
    pub fn display_name(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid =
            || ValidationError::InvalidInput(format!("invalid month key '{}', expected YYYY-MM", s));

        // "YYYY-MM", zero-padded. Reject loose forms like "2024-5" up front;
        // chrono would accept them.
        if s.len() != 7 || s.as_bytes()[4] != b'-' {
            return Err(invalid().into());
        }

        let year: i32 = s[..4].parse().map_err(|_| invalid())?;
        let month: u32 = s[5..].parse().map_err(|_| invalid())?;

        MonthKey::new(year, month).ok_or_else(|| invalid().into())
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_month_keys() {
        let key: MonthKey = "2024-01".parse().unwrap();
        assert_eq!(key.year(), 2024);
        assert_eq!(key.month(), 1);
        assert_eq!(key.to_string(), "2024-01");
    }

    #[test]
    fn rejects_malformed_month_keys() {
        assert!("garbage".parse::<MonthKey>().is_err());
        assert!("2024-13".parse::<MonthKey>().is_err());
        assert!("2024-00".parse::<MonthKey>().is_err());
        assert!("2024-5".parse::<MonthKey>().is_err());
        assert!("2024/05".parse::<MonthKey>().is_err());
        assert!("".parse::<MonthKey>().is_err());
    }

    #[test]
    fn month_bounds_are_inclusive() {
        let key: MonthKey = "2024-02".parse().unwrap();
        assert_eq!(key.first_day(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        // 2024 is a leap year.
        assert_eq!(key.last_day(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert!(key.contains(key.first_day()));
        assert!(key.contains(key.last_day()));
        assert!(!key.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
        assert!(!key.contains(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()));
    }

    #[test]
    fn december_rolls_over_to_january() {
        let key: MonthKey = "2023-12".parse().unwrap();
        assert_eq!(key.last_day(), NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
        assert_eq!(key.pred().to_string(), "2023-11");

        let january: MonthKey = "2024-01".parse().unwrap();
        assert_eq!(january.pred().to_string(), "2023-12");
    }

    #[test]
    fn recent_lists_months_newest_first() {
        let key: MonthKey = "2024-02".parse().unwrap();
        let months: Vec<String> = key.recent(4).iter().map(|m| m.to_string()).collect();
        assert_eq!(months, vec!["2024-02", "2024-01", "2023-12", "2023-11"]);
    }

    #[test]
    fn display_name_is_month_and_year() {
        let key: MonthKey = "2026-01".parse().unwrap();
        assert_eq!(key.display_name(), "January 2026");
    }

    #[test]
    fn serializes_as_plain_string() {
        let key: MonthKey = "2024-07".parse().unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"2024-07\"");
        let back: MonthKey = serde_json::from_str("\"2024-07\"").unwrap();
        assert_eq!(back, key);
    }
}
