use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use centime_core::incomes::{Income, IncomeUpdate, NewIncome};
use chrono::NaiveDate;

use crate::auth::CurrentUser;
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct IncomeListQuery {
    source: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

/// Lists the user's income entries, newest first. Accepts either a source
/// filter or a startDate/endDate pair, not both.
async fn list_incomes(
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    State(state): State<Arc<AppState>>,
    Query(query): Query<IncomeListQuery>,
) -> ApiResult<Json<Vec<Income>>> {
    let incomes = match (query.source, query.start_date, query.end_date) {
        (Some(source), None, None) => state
            .income_service
            .get_incomes_by_source(&user_id, &source)?,
        (None, Some(start), Some(end)) => state
            .income_service
            .get_incomes_by_date_range(&user_id, start, end)?,
        (None, None, None) => state.income_service.get_incomes(&user_id)?,
        _ => {
            return Err(ApiError::BadRequest(
                "Filter by either source or startDate and endDate".to_string(),
            ))
        }
    };
    Ok(Json(incomes))
}

async fn get_income(
    Path(id): Path<String>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Income>> {
    let income = state.income_service.get_income(&user_id, &id)?;
    Ok(Json(income))
}

async fn create_income(
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewIncome>,
) -> ApiResult<Json<Income>> {
    let income = state.income_service.create_income(&user_id, payload).await?;
    Ok(Json(income))
}

async fn update_income(
    Path(id): Path<String>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    State(state): State<Arc<AppState>>,
    Json(mut payload): Json<IncomeUpdate>,
) -> ApiResult<Json<Income>> {
    // The path wins over whatever id the body carries.
    payload.id = id;
    let income = state.income_service.update_income(&user_id, payload).await?;
    Ok(Json(income))
}

async fn delete_income(
    Path(id): Path<String>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.income_service.delete_income(&user_id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/incomes", get(list_incomes).post(create_income))
        .route(
            "/incomes/{id}",
            get(get_income).put(update_income).delete(delete_income),
        )
}
