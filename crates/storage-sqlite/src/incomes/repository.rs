use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use centime_core::incomes::{Income, IncomeRepositoryTrait, IncomeUpdate, NewIncome};
use centime_core::Result;

use super::model::{IncomeDB, NewIncomeDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::incomes;
use crate::schema::incomes::dsl::*;

pub struct IncomeRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl IncomeRepository {
    pub fn new(
        pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        IncomeRepository { pool, writer }
    }
}

#[async_trait]
impl IncomeRepositoryTrait for IncomeRepository {
    fn get_income(&self, owner_id: &str, income_id: &str) -> Result<Income> {
        let mut conn = get_connection(&self.pool)?;
        let income_db = incomes
            .filter(user_id.eq(owner_id))
            .filter(id.eq(income_id))
            .first::<IncomeDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Income::from(income_db))
    }

    fn list_for_user(&self, owner_id: &str) -> Result<Vec<Income>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = incomes
            .filter(user_id.eq(owner_id))
            .order(date.desc())
            .then_order_by(created_at.desc())
            .load::<IncomeDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Income::from).collect())
    }

    fn list_by_source(&self, owner_id: &str, for_source: &str) -> Result<Vec<Income>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = incomes
            .filter(user_id.eq(owner_id))
            .filter(source.eq(for_source))
            .order(date.desc())
            .then_order_by(created_at.desc())
            .load::<IncomeDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Income::from).collect())
    }

    fn list_by_date_range(
        &self,
        owner_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Income>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = incomes
            .filter(user_id.eq(owner_id))
            .filter(date.ge(start))
            .filter(date.le(end))
            .order(date.desc())
            .then_order_by(created_at.desc())
            .load::<IncomeDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Income::from).collect())
    }

    async fn insert_new_income(&self, owner_id: &str, new_income: NewIncome) -> Result<Income> {
        let owner = owner_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Income> {
                let now = Utc::now().naive_utc();
                let new_income_db = NewIncomeDB {
                    id: Uuid::new_v4().to_string(),
                    user_id: owner,
                    source: new_income.source,
                    description: new_income.description,
                    amount: new_income.amount.to_string(),
                    date: new_income.date,
                    frequency: new_income.frequency.to_string(),
                    created_at: now,
                    updated_at: now,
                };

                let result_db = diesel::insert_into(incomes::table)
                    .values(&new_income_db)
                    .returning(IncomeDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Income::from(result_db))
            })
            .await
    }

    async fn update_income(&self, owner_id: &str, update: IncomeUpdate) -> Result<Income> {
        let owner = owner_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Income> {
                let existing = incomes
                    .filter(user_id.eq(&owner))
                    .filter(id.eq(&update.id))
                    .first::<IncomeDB>(conn)
                    .map_err(StorageError::from)?;

                let changes = IncomeDB {
                    id: existing.id,
                    user_id: existing.user_id,
                    source: update.source,
                    description: update.description,
                    amount: update.amount.to_string(),
                    date: update.date,
                    frequency: update.frequency.to_string(),
                    created_at: existing.created_at,
                    updated_at: Utc::now().naive_utc(),
                };

                diesel::update(incomes.find(&changes.id))
                    .set(&changes)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                let result_db = incomes
                    .find(&changes.id)
                    .first::<IncomeDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Income::from(result_db))
            })
            .await
    }

    async fn delete_income(&self, owner_id: &str, income_id: &str) -> Result<usize> {
        let owner = owner_id.to_string();
        let target = income_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(
                    diesel::delete(incomes.filter(user_id.eq(owner)).filter(id.eq(target)))
                        .execute(conn)
                        .map_err(StorageError::from)?,
                )
            })
            .await
    }
}
