//! Modelo de Session
//!
//! Sesiones con token opaco: en la base de datos solo se guarda el hash
//! SHA-256 del token; el token crudo viaja únicamente en el header.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
