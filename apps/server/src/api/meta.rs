use std::sync::Arc;

use axum::{routing::get, Json, Router};
use centime_core::constants::{DEFAULT_EXPENSE_CATEGORIES, DEFAULT_INCOME_SOURCES};

use crate::main_lib::AppState;

/// Suggested labels for the entry forms. Free-form values are still
/// accepted everywhere; these are only defaults.
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryOptions {
    expense_categories: Vec<&'static str>,
    income_sources: Vec<&'static str>,
}

async fn get_category_options() -> Json<CategoryOptions> {
    Json(CategoryOptions {
        expense_categories: DEFAULT_EXPENSE_CATEGORIES.to_vec(),
        income_sources: DEFAULT_INCOME_SOURCES.to_vec(),
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/meta/categories", get(get_category_options))
}
