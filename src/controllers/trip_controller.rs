//! Controller de viajes
//!
//! La distancia siempre se deriva en servidor a partir de los odómetros;
//! el cliente nunca la envía.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::trip_dto::{CreateTripRequest, TripResponse, UpdateTripRequest};
use crate::repositories::driver_repository::DriverRepository;
use crate::repositories::trip_repository::TripRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{normalize_trimmed, validate_datetime};

const MAX_NOTES_LEN: usize = 1024;

pub struct TripController {
    trips: TripRepository,
    vehicles: VehicleRepository,
    drivers: DriverRepository,
}

impl TripController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            trips: TripRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            drivers: DriverRepository::new(pool),
        }
    }

    pub async fn list(&self, user_id: Uuid, vehicle_id: Uuid) -> Result<Vec<TripResponse>, AppError> {
        self.vehicles
            .find_owned(vehicle_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let trips = self.trips.list_by_vehicle(vehicle_id).await?;
        Ok(trips.into_iter().map(TripResponse::from).collect())
    }

    pub async fn create(&self, user_id: Uuid, request: CreateTripRequest) -> Result<TripResponse, AppError> {
        request.validate()?;

        self.vehicles
            .find_owned(request.vehicle_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let driver = self
            .drivers
            .find_owned(request.driver_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Driver not found".to_string()))?;

        let started_at = validate_datetime(&request.started_at)
            .map_err(|_| AppError::BadRequest("started_at invalid".to_string()))?;
        let ended_at = validate_datetime(&request.ended_at)
            .map_err(|_| AppError::BadRequest("ended_at invalid".to_string()))?;

        let (odometer_start, odometer_end) =
            validate_trip_geometry(started_at, ended_at, request.odometer_start, request.odometer_end)?;
        let distance = odometer_end - odometer_start;

        let notes = normalize_trimmed(request.notes.as_deref(), MAX_NOTES_LEN)
            .map_err(|_| AppError::BadRequest("notes too long".to_string()))?;

        let trip = self
            .trips
            .create(
                request.vehicle_id,
                request.driver_id,
                started_at,
                ended_at,
                odometer_start,
                odometer_end,
                distance,
                notes,
            )
            .await?;

        Ok(TripResponse::from_trip(trip, driver.name))
    }

    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        request: UpdateTripRequest,
    ) -> Result<TripResponse, AppError> {
        request.validate()?;

        let current = self
            .trips
            .find_owned(id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trip not found".to_string()))?;

        let driver_id = request.driver_id.unwrap_or(current.driver_id);
        let driver = self
            .drivers
            .find_owned(driver_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Driver not found".to_string()))?;

        let started_at = match request.started_at {
            Some(raw) => validate_datetime(&raw)
                .map_err(|_| AppError::BadRequest("started_at invalid".to_string()))?,
            None => current.started_at,
        };
        let ended_at = match request.ended_at {
            Some(raw) => validate_datetime(&raw)
                .map_err(|_| AppError::BadRequest("ended_at invalid".to_string()))?,
            None => current.ended_at,
        };

        let odometer_start = request.odometer_start.unwrap_or(f64::from(current.odometer_start));
        let odometer_end = request.odometer_end.unwrap_or(f64::from(current.odometer_end));

        let (odometer_start, odometer_end) =
            validate_trip_geometry(started_at, ended_at, odometer_start, odometer_end)?;
        let distance = odometer_end - odometer_start;

        let notes = match request.notes {
            Some(raw) => normalize_trimmed(Some(&raw), MAX_NOTES_LEN)
                .map_err(|_| AppError::BadRequest("notes too long".to_string()))?,
            None => current.notes,
        };

        let trip = self
            .trips
            .update(
                id,
                driver_id,
                started_at,
                ended_at,
                odometer_start,
                odometer_end,
                distance,
                notes,
            )
            .await?;

        Ok(TripResponse::from_trip(trip, driver.name))
    }

    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        self.trips
            .find_owned(id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trip not found".to_string()))?;

        self.trips.delete(id).await
    }
}

/// Validar fechas y odómetros de un viaje; devuelve los odómetros redondeados
fn validate_trip_geometry(
    started_at: DateTime<Utc>,
    ended_at: DateTime<Utc>,
    odometer_start: f64,
    odometer_end: f64,
) -> Result<(i32, i32), AppError> {
    if ended_at <= started_at {
        return Err(AppError::BadRequest("ended_at must be after started_at".to_string()));
    }

    let start = round_odometer(odometer_start)
        .ok_or_else(|| AppError::BadRequest("odometer_start invalid".to_string()))?;
    let end = round_odometer(odometer_end)
        .ok_or_else(|| AppError::BadRequest("odometer_end invalid".to_string()))?;

    if end <= start {
        return Err(AppError::BadRequest(
            "odometer_end must be greater than odometer_start".to_string(),
        ));
    }

    Ok((start, end))
}

fn round_odometer(value: f64) -> Option<i32> {
    if !value.is_finite() || value <= 0.0 {
        return None;
    }
    let rounded = value.round();
    if rounded <= 0.0 || rounded > f64::from(i32::MAX) {
        return None;
    }
    Some(rounded as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_trip_geometry_happy_path() {
        let start = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        let (s, e) = validate_trip_geometry(start, end, 1000.2, 1080.7).unwrap();
        assert_eq!((s, e), (1000, 1081));
    }

    #[test]
    fn test_trip_must_end_after_start() {
        let start = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        assert!(validate_trip_geometry(start, start, 1000.0, 1100.0).is_err());
    }

    #[test]
    fn test_odometer_must_advance() {
        let start = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        assert!(validate_trip_geometry(start, end, 1100.0, 1100.0).is_err());
        assert!(validate_trip_geometry(start, end, 1100.0, 1000.0).is_err());
        assert!(validate_trip_geometry(start, end, -5.0, 1000.0).is_err());
    }
}
