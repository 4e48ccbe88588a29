//! Modelo de Receipt (recibo adjunto a un repostaje)
//!
//! storage_key apunta al objeto en disco bajo el directorio de recibos.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Receipt {
    pub id: Uuid,
    pub fill_up_id: Uuid,
    pub storage_key: String,
    pub content_type: String,
    pub sha256: Option<String>,
    pub created_at: DateTime<Utc>,
}
