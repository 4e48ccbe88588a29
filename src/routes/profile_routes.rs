use axum::{
    extract::State,
    routing::get,
    Json, Router,
};

use crate::controllers::profile_controller::ProfileController;
use crate::dto::profile_dto::{
    AccountResponse, PatchAccountRequest, PatchProfileRequest, ProfileResponse,
};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_profile_router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile).patch(patch_profile))
        .route("/account", get(get_account).patch(patch_account))
}

async fn get_profile(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<ProfileResponse>, AppError> {
    let controller = ProfileController::new(state.pool.clone());
    let response = controller.get_profile(user.id, user.email).await?;
    Ok(Json(response))
}

async fn patch_profile(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<PatchProfileRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    let controller = ProfileController::new(state.pool.clone());
    let response = controller.patch_profile(user.id, user.email, request).await?;
    Ok(Json(response))
}

async fn get_account(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<AccountResponse>, AppError> {
    let controller = ProfileController::new(state.pool.clone());
    let response = controller.get_account(user.id).await?;
    Ok(Json(response))
}

async fn patch_account(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<PatchAccountRequest>,
) -> Result<Json<AccountResponse>, AppError> {
    let controller = ProfileController::new(state.pool.clone());
    let response = controller.patch_account(user.id, request).await?;
    Ok(Json(response))
}
