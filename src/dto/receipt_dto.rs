//! DTOs de recibos

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::receipt::Receipt;

/// Response de recibo tras el upload
#[derive(Debug, Serialize)]
pub struct ReceiptResponse {
    pub id: Uuid,
    pub fill_up_id: Uuid,
    pub storage_key: String,
    pub content_type: String,
    pub sha256: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Receipt> for ReceiptResponse {
    fn from(receipt: Receipt) -> Self {
        Self {
            id: receipt.id,
            fill_up_id: receipt.fill_up_id,
            storage_key: receipt.storage_key,
            content_type: receipt.content_type,
            sha256: receipt.sha256,
            created_at: receipt.created_at,
        }
    }
}
