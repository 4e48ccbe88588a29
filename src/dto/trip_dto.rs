//! DTOs de viajes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::trip::{Trip, TripWithDriver};

/// Request para registrar un viaje
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTripRequest {
    pub vehicle_id: Uuid,

    pub driver_id: Uuid,

    /// RFC3339
    pub started_at: String,

    /// RFC3339, posterior a started_at
    pub ended_at: String,

    pub odometer_start: f64,

    pub odometer_end: f64,

    #[validate(length(max = 1024))]
    pub notes: Option<String>,
}

/// Request para modificar un viaje
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTripRequest {
    pub driver_id: Option<Uuid>,

    pub started_at: Option<String>,

    pub ended_at: Option<String>,

    pub odometer_start: Option<f64>,

    pub odometer_end: Option<f64>,

    #[validate(length(max = 1024))]
    pub notes: Option<String>,
}

/// Conductor resumido dentro del viaje
#[derive(Debug, Serialize)]
pub struct TripDriver {
    pub id: Uuid,
    pub name: String,
}

/// Response de viaje
#[derive(Debug, Serialize)]
pub struct TripResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub driver: TripDriver,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub odometer_start: i32,
    pub odometer_end: i32,
    /// Derivada: odometer_end - odometer_start
    pub distance: i32,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<TripWithDriver> for TripResponse {
    fn from(trip: TripWithDriver) -> Self {
        Self {
            id: trip.id,
            vehicle_id: trip.vehicle_id,
            driver: TripDriver {
                id: trip.driver_id,
                name: trip.driver_name,
            },
            started_at: trip.started_at,
            ended_at: trip.ended_at,
            odometer_start: trip.odometer_start,
            odometer_end: trip.odometer_end,
            distance: trip.distance,
            notes: trip.notes,
            created_at: trip.created_at,
        }
    }
}

impl TripResponse {
    pub fn from_trip(trip: Trip, driver_name: String) -> Self {
        Self {
            id: trip.id,
            vehicle_id: trip.vehicle_id,
            driver: TripDriver {
                id: trip.driver_id,
                name: driver_name,
            },
            started_at: trip.started_at,
            ended_at: trip.ended_at,
            odometer_start: trip.odometer_start,
            odometer_end: trip.odometer_end,
            distance: trip.distance,
            notes: trip.notes,
            created_at: trip.created_at,
        }
    }
}

/// Query de listado por vehículo
#[derive(Debug, Deserialize)]
pub struct TripListQuery {
    pub vehicle_id: Uuid,
}
