//! Controller de recibos
//!
//! Upload multipart validado por magic bytes y descarga de los bytes
//! originales. El fichero vive en disco; la base de datos solo guarda
//! la storage_key y el checksum.

use sqlx::PgPool;
use uuid::Uuid;

use crate::config::environment::EnvironmentConfig;
use crate::dto::receipt_dto::ReceiptResponse;
use crate::models::receipt::Receipt;
use crate::repositories::fillup_repository::FillUpRepository;
use crate::repositories::receipt_repository::ReceiptRepository;
use crate::services::receipt_storage_service::{read_receipt, store_receipt};
use crate::utils::errors::AppError;

pub struct ReceiptController {
    receipts: ReceiptRepository,
    fill_ups: FillUpRepository,
    config: EnvironmentConfig,
}

impl ReceiptController {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            receipts: ReceiptRepository::new(pool.clone()),
            fill_ups: FillUpRepository::new(pool),
            config,
        }
    }

    pub async fn upload(
        &self,
        user_id: Uuid,
        fill_up_id: Uuid,
        bytes: Vec<u8>,
    ) -> Result<ReceiptResponse, AppError> {
        self.fill_ups
            .find_owned(fill_up_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Fill-up not found".to_string()))?;

        if bytes.is_empty() {
            return Err(AppError::BadRequest("file is required".to_string()));
        }
        if bytes.len() > self.config.max_receipt_bytes {
            return Err(AppError::BadRequest("file too large".to_string()));
        }

        let stored = store_receipt(&self.config.receipts_dir, &bytes).await?;

        let receipt = self
            .receipts
            .create(
                fill_up_id,
                stored.storage_key,
                stored.content_type.to_string(),
                Some(stored.sha256),
            )
            .await?;

        Ok(receipt.into())
    }

    /// Devuelve el recibo y sus bytes para servirlos con el content-type
    /// almacenado
    pub async fn download(&self, user_id: Uuid, id: Uuid) -> Result<(Receipt, Vec<u8>), AppError> {
        let receipt = self
            .receipts
            .find_owned(id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Receipt not found".to_string()))?;

        let bytes = read_receipt(&self.config.receipts_dir, &receipt.storage_key)
            .await?
            .ok_or_else(|| AppError::NotFound("File missing".to_string()))?;

        Ok((receipt, bytes))
    }
}
