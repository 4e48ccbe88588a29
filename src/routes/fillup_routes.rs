use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::fillup_controller::FillUpController;
use crate::dto::fillup_dto::{
    CreateFillUpRequest, FillUpListQuery, FillUpResponse, UpdateFillUpRequest,
};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_fillup_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_fill_ups).post(create_fill_up))
        .route("/:id", patch(update_fill_up).delete(delete_fill_up))
}

async fn list_fill_ups(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<FillUpListQuery>,
) -> Result<Json<Vec<FillUpResponse>>, AppError> {
    let controller = FillUpController::new(state.pool.clone());
    let response = controller.list(user.id, query.vehicle_id).await?;
    Ok(Json(response))
}

async fn create_fill_up(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<CreateFillUpRequest>,
) -> Result<(StatusCode, Json<FillUpResponse>), AppError> {
    let controller = FillUpController::new(state.pool.clone());
    let response = controller.create(user.id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_fill_up(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateFillUpRequest>,
) -> Result<Json<FillUpResponse>, AppError> {
    let controller = FillUpController::new(state.pool.clone());
    let response = controller.update(id, user.id, request).await?;
    Ok(Json(response))
}

async fn delete_fill_up(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = FillUpController::new(state.pool.clone());
    controller.delete(id, user.id).await?;
    Ok(Json(serde_json::json!({ "ok": true })))
}
