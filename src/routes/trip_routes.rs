use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::trip_controller::TripController;
use crate::dto::trip_dto::{CreateTripRequest, TripListQuery, TripResponse, UpdateTripRequest};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_trip_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_trips).post(create_trip))
        .route("/:id", patch(update_trip).delete(delete_trip))
}

async fn list_trips(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<TripListQuery>,
) -> Result<Json<Vec<TripResponse>>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.list(user.id, query.vehicle_id).await?;
    Ok(Json(response))
}

async fn create_trip(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<CreateTripRequest>,
) -> Result<(StatusCode, Json<TripResponse>), AppError> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.create(user.id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_trip(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTripRequest>,
) -> Result<Json<TripResponse>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.update(id, user.id, request).await?;
    Ok(Json(response))
}

async fn delete_trip(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = TripController::new(state.pool.clone());
    controller.delete(id, user.id).await?;
    Ok(Json(serde_json::json!({ "ok": true })))
}
