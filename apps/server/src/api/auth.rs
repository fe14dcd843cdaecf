use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use centime_core::users::{Credentials, SignUp, UserProfile};

use crate::auth::CurrentUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

/// Token envelope returned by signup and login.
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionResponse {
    access_token: String,
    token_type: &'static str,
    expires_in: u64,
    profile: UserProfile,
}

impl SessionResponse {
    fn new(state: &AppState, profile: UserProfile) -> ApiResult<Self> {
        let access_token = state.auth.issue_token(&profile.id)?;
        Ok(SessionResponse {
            access_token,
            token_type: "Bearer",
            expires_in: state.auth.expires_in().as_secs(),
            profile,
        })
    }
}

async fn sign_up(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SignUp>,
) -> ApiResult<(StatusCode, Json<SessionResponse>)> {
    let profile = state.auth_service.sign_up(payload).await?;
    let session = SessionResponse::new(&state, profile)?;
    Ok((StatusCode::CREATED, Json(session)))
}

async fn sign_in(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Credentials>,
) -> ApiResult<Json<SessionResponse>> {
    let profile = state.auth_service.sign_in(payload).await?;
    let session = SessionResponse::new(&state, profile)?;
    Ok(Json(session))
}

/// Clears the session context. The token itself stays valid until it
/// expires; clients are expected to drop it.
async fn sign_out(State(state): State<Arc<AppState>>) -> ApiResult<StatusCode> {
    state.auth_service.sign_out();
    Ok(StatusCode::NO_CONTENT)
}

async fn get_profile(
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<UserProfile>> {
    let profile = state.auth_service.get_profile(&user_id)?;
    Ok(Json(profile))
}

pub fn public_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/signup", post(sign_up))
        .route("/auth/login", post(sign_in))
}

pub fn protected_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/logout", post(sign_out))
        .route("/auth/me", get(get_profile))
}
