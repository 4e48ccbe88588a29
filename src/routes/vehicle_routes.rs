use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::auth_dto::ApiResponse;
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles).post(create_vehicle))
        .route("/:id", delete(delete_vehicle).patch(update_vehicle))
}

async fn create_vehicle(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<VehicleResponse>>), AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.create(user.id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_vehicles(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list(user.id).await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.update(id, user.id, request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    controller.delete(id, user.id).await?;
    Ok(Json(serde_json::json!({ "ok": true })))
}
