use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::report_controller::ReportController;
use crate::dto::report_dto::{ConsumptionReportResponse, MonthlyReportResponse, ReportQuery};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_report_router() -> Router<AppState> {
    Router::new()
        .route("/consumption", get(consumption_report))
        .route("/monthly", get(monthly_report))
}

async fn consumption_report(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<ReportQuery>,
) -> Result<Json<ConsumptionReportResponse>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let response = controller.consumption(user.id, query.vehicle_id).await?;
    Ok(Json(response))
}

async fn monthly_report(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<ReportQuery>,
) -> Result<Json<MonthlyReportResponse>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let response = controller.monthly(user.id, query.vehicle_id).await?;
    Ok(Json(response))
}
