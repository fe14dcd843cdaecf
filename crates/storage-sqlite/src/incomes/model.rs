//! Database models for income entries.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use centime_core::incomes::{Frequency, Income};

/// Database model for income entries. Amounts are TEXT for exactness and
/// frequency is stored in its kebab-case string form.
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
#[diesel(table_name = crate::schema::incomes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct IncomeDB {
    pub id: String,
    pub user_id: String,
    pub source: String,
    pub description: String,
    pub amount: String,
    pub date: NaiveDate,
    pub frequency: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for inserting an income row.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::incomes)]
#[serde(rename_all = "camelCase")]
pub struct NewIncomeDB {
    pub id: String,
    pub user_id: String,
    pub source: String,
    pub description: String,
    pub amount: String,
    pub date: NaiveDate,
    pub frequency: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// Conversion to the domain model
impl From<IncomeDB> for Income {
    fn from(db: IncomeDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            source: db.source,
            description: db.description,
            amount: Decimal::from_str(&db.amount).unwrap_or_default(),
            date: db.date,
            frequency: Frequency::from_str(&db.frequency).unwrap_or(Frequency::OneTime),
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
