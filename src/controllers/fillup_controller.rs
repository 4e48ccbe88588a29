//! Controller de repostajes
//!
//! Todas las operaciones verifican primero que el vehículo o el repostaje
//! pertenecen al usuario autenticado.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::fillup_dto::{CreateFillUpRequest, FillUpResponse, UpdateFillUpRequest};
use crate::repositories::fillup_repository::FillUpRepository;
use crate::repositories::receipt_repository::ReceiptRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{normalize_trimmed, validate_datetime};

const MAX_STATION_NAME_LEN: usize = 128;
const MAX_NOTES_LEN: usize = 1024;

pub struct FillUpController {
    fill_ups: FillUpRepository,
    vehicles: VehicleRepository,
    receipts: ReceiptRepository,
}

impl FillUpController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            fill_ups: FillUpRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            receipts: ReceiptRepository::new(pool),
        }
    }

    pub async fn list(&self, user_id: Uuid, vehicle_id: Uuid) -> Result<Vec<FillUpResponse>, AppError> {
        self.vehicles
            .find_owned(vehicle_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let fill_ups = self.fill_ups.list_by_vehicle_desc(vehicle_id).await?;

        let mut responses = Vec::with_capacity(fill_ups.len());
        for fill_up in fill_ups {
            let receipts = self.receipts.list_by_fill_up(fill_up.id).await?;
            responses.push(FillUpResponse::from_fill_up(fill_up, receipts));
        }

        Ok(responses)
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        request: CreateFillUpRequest,
    ) -> Result<FillUpResponse, AppError> {
        request.validate()?;

        self.vehicles
            .find_owned(request.vehicle_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let occurred_at = validate_datetime(&request.occurred_at)
            .map_err(|_| AppError::BadRequest("occurred_at must be an RFC3339 date".to_string()))?;

        let odometer = round_positive(request.odometer)
            .ok_or_else(|| AppError::BadRequest("odometer invalid".to_string()))?;

        if !request.fuel_amount.is_finite() || request.fuel_amount <= 0.0 {
            return Err(AppError::BadRequest("fuel_amount invalid".to_string()));
        }

        let total_cost = round_cost(request.total_cost)
            .ok_or_else(|| AppError::BadRequest("total_cost invalid".to_string()))?;

        let currency = request
            .currency
            .map(|c| c.trim().to_uppercase())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| "EUR".to_string());

        let station_name = normalize_trimmed(request.station_name.as_deref(), MAX_STATION_NAME_LEN)
            .map_err(|_| AppError::BadRequest("station_name too long".to_string()))?;
        let notes = normalize_trimmed(request.notes.as_deref(), MAX_NOTES_LEN)
            .map_err(|_| AppError::BadRequest("notes too long".to_string()))?;

        let fill_up = self
            .fill_ups
            .create(
                request.vehicle_id,
                occurred_at,
                odometer,
                request.fuel_amount,
                total_cost,
                currency,
                request.is_full_tank.unwrap_or(true),
                station_name,
                notes,
            )
            .await?;

        Ok(FillUpResponse::from_fill_up(fill_up, Vec::new()))
    }

    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        request: UpdateFillUpRequest,
    ) -> Result<FillUpResponse, AppError> {
        request.validate()?;

        let current = self
            .fill_ups
            .find_owned(id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Fill-up not found".to_string()))?;

        let occurred_at = match request.occurred_at {
            Some(raw) => validate_datetime(&raw)
                .map_err(|_| AppError::BadRequest("occurred_at invalid".to_string()))?,
            None => current.occurred_at,
        };

        let odometer = match request.odometer {
            Some(raw) => round_positive(raw)
                .ok_or_else(|| AppError::BadRequest("odometer invalid".to_string()))?,
            None => current.odometer,
        };

        let fuel_amount = match request.fuel_amount {
            Some(raw) => {
                if !raw.is_finite() || raw <= 0.0 {
                    return Err(AppError::BadRequest("fuel_amount invalid".to_string()));
                }
                raw
            }
            None => current.fuel_amount,
        };

        let total_cost = match request.total_cost {
            Some(raw) => round_cost(raw)
                .ok_or_else(|| AppError::BadRequest("total_cost invalid".to_string()))?,
            None => current.total_cost,
        };

        let currency = match request.currency {
            Some(raw) => raw.trim().to_uppercase(),
            None => current.currency,
        };

        // String vacío limpia el campo; ausente lo deja igual
        let station_name = match request.station_name {
            Some(raw) => normalize_trimmed(Some(&raw), MAX_STATION_NAME_LEN)
                .map_err(|_| AppError::BadRequest("station_name too long".to_string()))?,
            None => current.station_name,
        };
        let notes = match request.notes {
            Some(raw) => normalize_trimmed(Some(&raw), MAX_NOTES_LEN)
                .map_err(|_| AppError::BadRequest("notes too long".to_string()))?,
            None => current.notes,
        };

        let fill_up = self
            .fill_ups
            .update(
                id,
                occurred_at,
                odometer,
                fuel_amount,
                total_cost,
                currency,
                request.is_full_tank.unwrap_or(current.is_full_tank),
                station_name,
                notes,
            )
            .await?;

        let receipts = self.receipts.list_by_fill_up(fill_up.id).await?;
        Ok(FillUpResponse::from_fill_up(fill_up, receipts))
    }

    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        self.fill_ups
            .find_owned(id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Fill-up not found".to_string()))?;

        self.fill_ups.delete(id).await
    }
}

fn round_positive(value: f64) -> Option<i32> {
    if !value.is_finite() || value <= 0.0 {
        return None;
    }
    let rounded = value.round();
    if rounded <= 0.0 || rounded > f64::from(i32::MAX) {
        return None;
    }
    Some(rounded as i32)
}

fn round_cost(value: f64) -> Option<i64> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some(value.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_positive() {
        assert_eq!(round_positive(1200.4), Some(1200));
        assert_eq!(round_positive(1200.5), Some(1201));
        assert_eq!(round_positive(0.0), None);
        assert_eq!(round_positive(-5.0), None);
        assert_eq!(round_positive(f64::NAN), None);
    }

    #[test]
    fn test_round_cost_allows_zero() {
        assert_eq!(round_cost(0.0), Some(0));
        assert_eq!(round_cost(6849.6), Some(6850));
        assert_eq!(round_cost(-1.0), None);
    }
}
