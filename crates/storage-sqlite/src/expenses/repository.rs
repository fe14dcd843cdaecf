use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use centime_core::expenses::{Expense, ExpenseRepositoryTrait, ExpenseUpdate, NewExpense};
use centime_core::Result;

use super::model::{ExpenseDB, NewExpenseDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::expenses;
use crate::schema::expenses::dsl::*;

pub struct ExpenseRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl ExpenseRepository {
    pub fn new(
        pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        ExpenseRepository { pool, writer }
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for ExpenseRepository {
    fn get_expense(&self, owner_id: &str, expense_id: &str) -> Result<Expense> {
        let mut conn = get_connection(&self.pool)?;
        let expense_db = expenses
            .filter(user_id.eq(owner_id))
            .filter(id.eq(expense_id))
            .first::<ExpenseDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Expense::from(expense_db))
    }

    fn list_for_user(&self, owner_id: &str) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = expenses
            .filter(user_id.eq(owner_id))
            .order(date.desc())
            .then_order_by(created_at.desc())
            .load::<ExpenseDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Expense::from).collect())
    }

    fn list_by_category(&self, owner_id: &str, for_category: &str) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = expenses
            .filter(user_id.eq(owner_id))
            .filter(category.eq(for_category))
            .order(date.desc())
            .then_order_by(created_at.desc())
            .load::<ExpenseDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Expense::from).collect())
    }

    fn list_by_date_range(
        &self,
        owner_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = expenses
            .filter(user_id.eq(owner_id))
            .filter(date.ge(start))
            .filter(date.le(end))
            .order(date.desc())
            .then_order_by(created_at.desc())
            .load::<ExpenseDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Expense::from).collect())
    }

    async fn insert_new_expense(&self, owner_id: &str, new_expense: NewExpense) -> Result<Expense> {
        let owner = owner_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Expense> {
                let now = Utc::now().naive_utc();
                let new_expense_db = NewExpenseDB {
                    id: Uuid::new_v4().to_string(),
                    user_id: owner,
                    category: new_expense.category,
                    description: new_expense.description,
                    amount: new_expense.amount.to_string(),
                    date: new_expense.date,
                    created_at: now,
                    updated_at: now,
                };

                let result_db = diesel::insert_into(expenses::table)
                    .values(&new_expense_db)
                    .returning(ExpenseDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Expense::from(result_db))
            })
            .await
    }

    async fn update_expense(&self, owner_id: &str, update: ExpenseUpdate) -> Result<Expense> {
        let owner = owner_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Expense> {
                // Scoping the lookup to the owner turns someone else's id
                // into NotFound rather than leaking the row.
                let existing = expenses
                    .filter(user_id.eq(&owner))
                    .filter(id.eq(&update.id))
                    .first::<ExpenseDB>(conn)
                    .map_err(StorageError::from)?;

                let changes = ExpenseDB {
                    id: existing.id,
                    user_id: existing.user_id,
                    category: update.category,
                    description: update.description,
                    amount: update.amount.to_string(),
                    date: update.date,
                    created_at: existing.created_at,
                    updated_at: Utc::now().naive_utc(),
                };

                diesel::update(expenses.find(&changes.id))
                    .set(&changes)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                let result_db = expenses
                    .find(&changes.id)
                    .first::<ExpenseDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Expense::from(result_db))
            })
            .await
    }

    async fn delete_expense(&self, owner_id: &str, expense_id: &str) -> Result<usize> {
        let owner = owner_id.to_string();
        let target = expense_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(
                    diesel::delete(expenses.filter(user_id.eq(owner)).filter(id.eq(target)))
                        .execute(conn)
                        .map_err(StorageError::from)?,
                )
            })
            .await
    }
}
