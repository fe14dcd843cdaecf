//! Database models for expenses.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use centime_core::expenses::Expense;

/// Database model for expenses. Amounts are stored as TEXT to keep exact
/// decimal values; SQLite REAL would drift.
#[derive(
    Queryable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::expenses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDB {
    pub id: String,
    pub user_id: String,
    pub category: String,
    pub description: String,
    pub amount: String,
    pub date: NaiveDate,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for inserting an expense row.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::expenses)]
#[serde(rename_all = "camelCase")]
pub struct NewExpenseDB {
    pub id: String,
    pub user_id: String,
    pub category: String,
    pub description: String,
    pub amount: String,
    pub date: NaiveDate,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// Conversion to the domain model
impl From<ExpenseDB> for Expense {
    fn from(db: ExpenseDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            category: db.category,
            description: db.description,
            amount: Decimal::from_str(&db.amount).unwrap_or_default(),
            date: db.date,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
