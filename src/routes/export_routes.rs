use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::controllers::export_controller::{ExportController, ExportKind};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_export_router() -> Router<AppState> {
    Router::new().route("/csv", get(export_csv))
}

#[derive(Debug, Deserialize)]
struct ExportQuery {
    vehicle_id: Uuid,
    /// fillups (por defecto) o trips
    kind: Option<String>,
}

async fn export_csv(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<ExportQuery>,
) -> Result<Response, AppError> {
    let kind = match query.kind.as_deref() {
        None => ExportKind::FillUps,
        Some(raw) => ExportKind::from_str(raw)
            .ok_or_else(|| AppError::BadRequest("kind must be fillups or trips".to_string()))?,
    };

    let controller = ExportController::new(state.pool.clone());
    let export = controller.csv(user.id, query.vehicle_id, kind).await?;

    let headers = [
        (
            header::CONTENT_TYPE,
            "text/csv; charset=utf-8".to_string(),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", export.filename),
        ),
        (
            header::CACHE_CONTROL,
            "private, max-age=0, no-store".to_string(),
        ),
    ];

    Ok((headers, export.body).into_response())
}
