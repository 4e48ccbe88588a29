//! Controller de vehículos

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::auth_dto::ApiResponse;
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse};
use crate::models::vehicle::{FuelType, UnitSystem};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let name = request.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("Name is required".to_string()));
        }

        FuelType::from_str(&request.fuel_type)
            .ok_or_else(|| AppError::BadRequest("fuel_type invalid".to_string()))?;

        let unit_system = request.unit_system.unwrap_or_else(|| "METRIC".to_string());
        UnitSystem::from_str(&unit_system)
            .ok_or_else(|| AppError::BadRequest("unit_system invalid".to_string()))?;

        let vehicle = self
            .repository
            .create(user_id, name, request.fuel_type, unit_system)
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo registrado exitosamente".to_string(),
        ))
    }

    pub async fn list(&self, user_id: Uuid) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.repository.list_by_user(user_id).await?;
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let name = match request.name {
            Some(raw) => {
                let trimmed = raw.trim().to_string();
                if trimmed.is_empty() {
                    return Err(AppError::BadRequest("Name is required".to_string()));
                }
                Some(trimmed)
            }
            None => None,
        };

        if let Some(fuel_type) = &request.fuel_type {
            FuelType::from_str(fuel_type)
                .ok_or_else(|| AppError::BadRequest("fuel_type invalid".to_string()))?;
        }
        if let Some(unit_system) = &request.unit_system {
            UnitSystem::from_str(unit_system)
                .ok_or_else(|| AppError::BadRequest("unit_system invalid".to_string()))?;
        }

        let vehicle = self
            .repository
            .update(id, user_id, name, request.fuel_type, request.unit_system)
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id, user_id).await
    }
}
