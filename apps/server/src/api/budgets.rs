use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use centime_core::budgets::{Budget, BudgetInput, BudgetSummary};
use centime_core::utils::MonthKey;

use crate::auth::CurrentUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn list_budgets(
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Budget>>> {
    let budgets = state.budget_service.get_budgets(&user_id)?;
    Ok(Json(budgets))
}

async fn get_budget(
    Path(month): Path<MonthKey>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Budget>> {
    let budget = state.budget_service.get_budget(&user_id, month)?;
    Ok(Json(budget))
}

/// Creates or replaces the month's budget. PUT twice and the second payload
/// wins; the record keeps its id.
async fn set_budget(
    Path(month): Path<MonthKey>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BudgetInput>,
) -> ApiResult<Json<Budget>> {
    let budget = state.budget_service.set_budget(&user_id, month, payload).await?;
    Ok(Json(budget))
}

async fn delete_budget(
    Path(month): Path<MonthKey>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.budget_service.delete_budget(&user_id, month).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Spend-vs-budget for the month. 404 when no budget is set; use the
/// spending overview for budget-free months.
async fn get_budget_summary(
    Path(month): Path<MonthKey>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<BudgetSummary>> {
    let summary = state.budget_service.get_budget_summary(&user_id, month)?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/budgets", get(list_budgets))
        .route(
            "/budgets/{month}",
            get(get_budget).put(set_budget).delete(delete_budget),
        )
        .route("/budgets/{month}/summary", get(get_budget_summary))
}
