//! Income domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How often an income entry recurs. Stored and serialized in kebab-case
/// ("one-time", "bi-weekly", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    OneTime,
    Weekly,
    BiWeekly,
    Monthly,
    Yearly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::OneTime => "one-time",
            Frequency::Weekly => "weekly",
            Frequency::BiWeekly => "bi-weekly",
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
        }
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "one-time" => Ok(Frequency::OneTime),
            "weekly" => Ok(Frequency::Weekly),
            "bi-weekly" => Ok(Frequency::BiWeekly),
            "monthly" => Ok(Frequency::Monthly),
            "yearly" => Ok(Frequency::Yearly),
            other => Err(format!("unknown income frequency '{other}'")),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single recorded income entry, owned by exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    pub id: String,
    pub user_id: String,
    pub source: String,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub frequency: Frequency,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for recording a new income entry.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewIncome {
    pub source: String,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    #[serde(default = "default_frequency")]
    pub frequency: Frequency,
}

/// Full-record edit of an existing income entry. The id may be omitted from
/// the payload when the caller supplies it out of band (e.g. a URL path).
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct IncomeUpdate {
    #[serde(default)]
    pub id: String,
    pub source: String,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub frequency: Frequency,
}

fn default_frequency() -> Frequency {
    Frequency::OneTime
}
