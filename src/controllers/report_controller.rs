//! Controller de informes
//!
//! Los informes son funciones puras sobre el historial de repostajes del
//! vehículo: aquí solo se resuelve la propiedad, se carga el snapshot y
//! se delega en services.

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::report_dto::{ConsumptionReportResponse, MonthlyReportResponse};
use crate::repositories::fillup_repository::FillUpRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::consumption_service::{compute_full_tank_consumption, FillUpSample};
use crate::services::report_service::aggregate_monthly;
use crate::utils::errors::AppError;

pub struct ReportController {
    fill_ups: FillUpRepository,
    vehicles: VehicleRepository,
}

impl ReportController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            fill_ups: FillUpRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn consumption(
        &self,
        user_id: Uuid,
        vehicle_id: Uuid,
    ) -> Result<ConsumptionReportResponse, AppError> {
        self.vehicles
            .find_owned(vehicle_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let fill_ups = self.fill_ups.list_by_vehicle_asc(vehicle_id).await?;
        let samples: Vec<FillUpSample> = fill_ups.iter().map(FillUpSample::from).collect();

        Ok(ConsumptionReportResponse {
            intervals: compute_full_tank_consumption(&samples),
        })
    }

    pub async fn monthly(
        &self,
        user_id: Uuid,
        vehicle_id: Uuid,
    ) -> Result<MonthlyReportResponse, AppError> {
        self.vehicles
            .find_owned(vehicle_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let fill_ups = self.fill_ups.list_by_vehicle_asc(vehicle_id).await?;

        Ok(MonthlyReportResponse {
            months: aggregate_monthly(&fill_ups),
        })
    }
}
