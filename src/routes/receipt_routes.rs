use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::controllers::receipt_controller::ReceiptController;
use crate::dto::receipt_dto::ReceiptResponse;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_uuid;

/// Margen por encima del tamaño máximo de recibo para el overhead multipart
const UPLOAD_BODY_LIMIT: usize = 8 * 1024 * 1024;

pub fn create_receipt_router() -> Router<AppState> {
    Router::new()
        .route("/upload", post(upload_receipt))
        .route("/:id", get(download_receipt))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
}

async fn upload_receipt(
    State(state): State<AppState>,
    user: AuthUser,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ReceiptResponse>), AppError> {
    let mut fill_up_id: Option<Uuid> = None;
    let mut bytes: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid multipart body: {}", e)))?
    {
        let name = field.name().map(|n| n.to_string());
        match name.as_deref() {
            Some("fill_up_id") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("invalid multipart body: {}", e)))?;
                let id = validate_uuid(text.trim())
                    .map_err(|_| AppError::BadRequest("fill_up_id invalid".to_string()))?;
                fill_up_id = Some(id);
            }
            Some("file") => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("invalid multipart body: {}", e)))?;
                bytes = Some(data.to_vec());
            }
            _ => {}
        }
    }

    let fill_up_id =
        fill_up_id.ok_or_else(|| AppError::BadRequest("fill_up_id is required".to_string()))?;
    let bytes = bytes.ok_or_else(|| AppError::BadRequest("file is required".to_string()))?;

    let controller = ReceiptController::new(state.pool.clone(), state.config.clone());
    let response = controller.upload(user.id, fill_up_id, bytes).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[derive(Debug, Deserialize)]
struct DownloadQuery {
    inline: Option<String>,
}

async fn download_receipt(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Query(query): Query<DownloadQuery>,
) -> Result<Response, AppError> {
    let controller = ReceiptController::new(state.pool.clone(), state.config.clone());
    let (receipt, bytes) = controller.download(user.id, id).await?;

    let basename = receipt
        .storage_key
        .rsplit('/')
        .next()
        .unwrap_or(receipt.storage_key.as_str())
        .to_string();
    let disposition = if query.inline.as_deref() == Some("1") {
        "inline"
    } else {
        "attachment"
    };

    let headers = [
        (header::CONTENT_TYPE, receipt.content_type.clone()),
        (
            header::CONTENT_DISPOSITION,
            format!("{}; filename=\"{}\"", disposition, basename),
        ),
        (
            header::CACHE_CONTROL,
            "private, max-age=0, no-store".to_string(),
        ),
    ];

    Ok((headers, bytes).into_response())
}
