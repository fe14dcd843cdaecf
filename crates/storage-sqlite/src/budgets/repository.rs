use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use centime_core::budgets::{Budget, BudgetInput, BudgetRepositoryTrait};
use centime_core::utils::MonthKey;
use centime_core::Result;

use super::model::BudgetDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::budgets;
use crate::schema::budgets::dsl::*;

pub struct BudgetRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl BudgetRepository {
    pub fn new(
        pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        BudgetRepository { pool, writer }
    }
}

fn encode_category_budgets(input: &BudgetInput) -> String {
    serde_json::to_string(&input.category_budgets).unwrap_or_else(|_| "{}".to_string())
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    fn find_by_month(&self, owner_id: &str, for_month: MonthKey) -> Result<Option<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        let budget_db = budgets
            .filter(user_id.eq(owner_id))
            .filter(month.eq(for_month.to_string()))
            .first::<BudgetDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(budget_db.map(Budget::from))
    }

    fn list_for_user(&self, owner_id: &str) -> Result<Vec<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        // "YYYY-MM" strings sort chronologically, so text order is month order.
        let rows = budgets
            .filter(user_id.eq(owner_id))
            .order(month.desc())
            .load::<BudgetDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Budget::from).collect())
    }

    async fn upsert_budget(
        &self,
        owner_id: &str,
        for_month: MonthKey,
        input: BudgetInput,
    ) -> Result<Budget> {
        let owner = owner_id.to_string();
        let month_str = for_month.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Budget> {
                let now = Utc::now().naive_utc();
                let existing = budgets
                    .filter(user_id.eq(&owner))
                    .filter(month.eq(&month_str))
                    .first::<BudgetDB>(conn)
                    .optional()
                    .map_err(StorageError::from)?;

                let budget_db = match existing {
                    Some(current) => BudgetDB {
                        id: current.id,
                        user_id: current.user_id,
                        month: current.month,
                        total_budget: input.total_budget.to_string(),
                        category_budgets: encode_category_budgets(&input),
                        mode: input.mode.to_string(),
                        created_at: current.created_at,
                        updated_at: now,
                    },
                    None => BudgetDB {
                        id: Uuid::new_v4().to_string(),
                        user_id: owner,
                        month: month_str,
                        total_budget: input.total_budget.to_string(),
                        category_budgets: encode_category_budgets(&input),
                        mode: input.mode.to_string(),
                        created_at: now,
                        updated_at: now,
                    },
                };

                let result_db = diesel::insert_into(budgets::table)
                    .values(&budget_db)
                    .on_conflict(budgets::id)
                    .do_update()
                    .set(&budget_db)
                    .returning(BudgetDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Budget::from(result_db))
            })
            .await
    }

    async fn delete_budget(&self, owner_id: &str, for_month: MonthKey) -> Result<usize> {
        let owner = owner_id.to_string();
        let month_str = for_month.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    budgets
                        .filter(user_id.eq(owner))
                        .filter(month.eq(month_str)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}
