//! Repositorio de recibos

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::receipt::Receipt;
use crate::utils::errors::AppError;

pub struct ReceiptRepository {
    pool: PgPool,
}

impl ReceiptRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        fill_up_id: Uuid,
        storage_key: String,
        content_type: String,
        sha256: Option<String>,
    ) -> Result<Receipt, AppError> {
        let receipt = sqlx::query_as::<_, Receipt>(
            r#"
            INSERT INTO receipts (id, fill_up_id, storage_key, content_type, sha256, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(fill_up_id)
        .bind(storage_key)
        .bind(content_type)
        .bind(sha256)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(receipt)
    }

    pub async fn list_by_fill_up(&self, fill_up_id: Uuid) -> Result<Vec<Receipt>, AppError> {
        let receipts = sqlx::query_as::<_, Receipt>(
            "SELECT * FROM receipts WHERE fill_up_id = $1 ORDER BY created_at DESC",
        )
        .bind(fill_up_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(receipts)
    }

    /// Buscar un recibo cuya cadena recibo -> repostaje -> vehículo
    /// pertenece al usuario
    pub async fn find_owned(&self, id: Uuid, user_id: Uuid) -> Result<Option<Receipt>, AppError> {
        let receipt = sqlx::query_as::<_, Receipt>(
            r#"
            SELECT r.* FROM receipts r
            JOIN fill_ups f ON f.id = r.fill_up_id
            JOIN vehicles v ON v.id = f.vehicle_id
            WHERE r.id = $1 AND v.user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(receipt)
    }
}
