//! Expense domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single recorded expense, owned by exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub user_id: String,
    pub category: String,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for recording a new expense. The owner comes from the session,
/// never from the payload; id and timestamps are assigned on insert.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub category: String,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
}

/// Full-record edit of an existing expense. The id may be omitted from the
/// payload when the caller supplies it out of band (e.g. a URL path).
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseUpdate {
    #[serde(default)]
    pub id: String,
    pub category: String,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
}
