use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::driver_controller::DriverController;
use crate::dto::auth_dto::ApiResponse;
use crate::dto::driver_dto::{CreateDriverRequest, DriverResponse, RenameDriverRequest};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_driver_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_drivers).post(create_driver))
        .route("/:id", patch(rename_driver).delete(delete_driver))
}

async fn create_driver(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<CreateDriverRequest>,
) -> Result<(StatusCode, Json<ApiResponse<DriverResponse>>), AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.create(user.id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_drivers(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<DriverResponse>>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.list(user.id).await?;
    Ok(Json(response))
}

async fn rename_driver(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<RenameDriverRequest>,
) -> Result<Json<DriverResponse>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.rename(id, user.id, request).await?;
    Ok(Json(response))
}

async fn delete_driver(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    controller.delete(id, user.id).await?;
    Ok(Json(serde_json::json!({ "ok": true })))
}
