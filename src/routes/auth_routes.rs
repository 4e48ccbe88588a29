use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{LoginRequest, MeResponse, SessionResponse, SignupRequest};
use crate::middleware::auth::{bearer_token, AuthUser};
use crate::middleware::rate_limit::client_ip;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
}

async fn signup(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    let ip = client_ip(&headers);
    let controller = AuthController::new(state.pool.clone(), state.config.clone());
    let response = controller.signup(&ip, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let ip = client_ip(&headers);
    let controller = AuthController::new(state.pool.clone(), state.config.clone());
    let response = controller.login(&ip, request).await?;
    Ok(Json(response))
}

async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = AuthController::new(state.pool.clone(), state.config.clone());
    controller.logout(bearer_token(&headers)).await?;
    Ok(Json(json!({ "ok": true })))
}

async fn me(State(state): State<AppState>, user: AuthUser) -> Result<Json<MeResponse>, AppError> {
    let controller = AuthController::new(state.pool.clone(), state.config.clone());
    Ok(Json(controller.me(&user)))
}
