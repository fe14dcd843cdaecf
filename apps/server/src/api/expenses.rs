use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use centime_core::expenses::{Expense, ExpenseUpdate, NewExpense};
use centime_core::spending::SpendingOverview;
use centime_core::utils::MonthKey;
use chrono::NaiveDate;

use crate::auth::CurrentUser;
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExpenseListQuery {
    category: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

/// Lists the user's expenses, newest first. Accepts either a category
/// filter or a startDate/endDate pair, not both.
async fn list_expenses(
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    State(state): State<Arc<AppState>>,
    Query(query): Query<ExpenseListQuery>,
) -> ApiResult<Json<Vec<Expense>>> {
    let expenses = match (query.category, query.start_date, query.end_date) {
        (Some(category), None, None) => state
            .expense_service
            .get_expenses_by_category(&user_id, &category)?,
        (None, Some(start), Some(end)) => state
            .expense_service
            .get_expenses_by_date_range(&user_id, start, end)?,
        (None, None, None) => state.expense_service.get_expenses(&user_id)?,
        _ => {
            return Err(ApiError::BadRequest(
                "Filter by either category or startDate and endDate".to_string(),
            ))
        }
    };
    Ok(Json(expenses))
}

async fn get_expense(
    Path(id): Path<String>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Expense>> {
    let expense = state.expense_service.get_expense(&user_id, &id)?;
    Ok(Json(expense))
}

async fn create_expense(
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewExpense>,
) -> ApiResult<Json<Expense>> {
    let expense = state.expense_service.create_expense(&user_id, payload).await?;
    Ok(Json(expense))
}

async fn update_expense(
    Path(id): Path<String>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    State(state): State<Arc<AppState>>,
    Json(mut payload): Json<ExpenseUpdate>,
) -> ApiResult<Json<Expense>> {
    // The path wins over whatever id the body carries.
    payload.id = id;
    let expense = state.expense_service.update_expense(&user_id, payload).await?;
    Ok(Json(expense))
}

async fn delete_expense(
    Path(id): Path<String>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.expense_service.delete_expense(&user_id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Month-wide spend grouped by category, budgeted or not.
async fn spending_overview(
    Path(month): Path<MonthKey>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<SpendingOverview>> {
    let overview = state.spending_service.get_overview(&user_id, month)?;
    Ok(Json(overview))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route("/expenses/overview/{month}", get(spending_overview))
        .route(
            "/expenses/{id}",
            get(get_expense).put(update_expense).delete(delete_expense),
        )
}
