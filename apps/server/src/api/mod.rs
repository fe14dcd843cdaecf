use std::sync::Arc;

use axum::{http::HeaderValue, middleware, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::warn;

use crate::auth::require_jwt;
use crate::config::Config;
use crate::main_lib::AppState;

pub mod auth;
pub mod budgets;
pub mod expenses;
pub mod health;
pub mod incomes;
pub mod meta;

/// Assembles the full application router: `/api/v1/...` plus the middleware
/// stack. Everything except the health probes and the signup/login routes
/// sits behind the bearer-token check.
pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = cors_layer(&config.cors_allow);

    let public = Router::new()
        .merge(health::router())
        .merge(auth::public_router());

    let protected = Router::new()
        .merge(auth::protected_router())
        .merge(expenses::router())
        .merge(incomes::router())
        .merge(budgets::router())
        .merge(meta::router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_jwt));

    Router::new()
        .nest("/api/v1", public.merge(protected))
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}

/// `*` anywhere in the list opens the API to any origin; otherwise the list
/// is taken as exact origins. Entries that are not valid header values are
/// skipped with a warning instead of failing startup.
fn cors_layer(allow: &[String]) -> CorsLayer {
    if allow.iter().any(|o| o == "*") {
        return CorsLayer::new().allow_origin(Any);
    }
    let origins: Vec<HeaderValue> = allow
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(origin) => Some(origin),
            Err(_) => {
                warn!("Skipping invalid CORS origin {o:?}");
                None
            }
        })
        .collect();
    CorsLayer::new().allow_origin(origins)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_cors_origin_is_skipped() {
        // A header value with a newline can never parse; startup must not panic.
        cors_layer(&[
            "http://localhost:3000".to_string(),
            "http://bad\norigin".to_string(),
        ]);
    }

    #[test]
    fn test_wildcard_allows_any_origin() {
        cors_layer(&["*".to_string(), "http://localhost:3000".to_string()]);
    }
}
