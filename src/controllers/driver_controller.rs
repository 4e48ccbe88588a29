//! Controller de conductores

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::auth_dto::ApiResponse;
use crate::dto::driver_dto::{CreateDriverRequest, DriverResponse, RenameDriverRequest};
use crate::repositories::driver_repository::DriverRepository;
use crate::utils::errors::AppError;

pub struct DriverController {
    repository: DriverRepository,
}

impl DriverController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DriverRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        request: CreateDriverRequest,
    ) -> Result<ApiResponse<DriverResponse>, AppError> {
        request.validate()?;

        let name = request.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("Name is required".to_string()));
        }

        let driver = self.repository.create(user_id, name).await?;

        Ok(ApiResponse::success_with_message(
            driver.into(),
            "Conductor registrado exitosamente".to_string(),
        ))
    }

    pub async fn list(&self, user_id: Uuid) -> Result<Vec<DriverResponse>, AppError> {
        let drivers = self.repository.list_by_user(user_id).await?;
        Ok(drivers.into_iter().map(DriverResponse::from).collect())
    }

    pub async fn rename(
        &self,
        id: Uuid,
        user_id: Uuid,
        request: RenameDriverRequest,
    ) -> Result<DriverResponse, AppError> {
        request.validate()?;

        let name = request.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("Name is required".to_string()));
        }

        let driver = self.repository.rename(id, user_id, name).await?;
        Ok(driver.into())
    }

    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id, user_id).await
    }
}
