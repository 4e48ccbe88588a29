//! Modelo de Trip (viaje)
//!
//! distance es derivada en servidor: odometer_end - odometer_start.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Trip {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub driver_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub odometer_start: i32,
    pub odometer_end: i32,
    pub distance: i32,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Trip con el nombre del conductor resuelto (JOIN con drivers)
#[derive(Debug, Clone, FromRow)]
pub struct TripWithDriver {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub driver_id: Uuid,
    pub driver_name: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub odometer_start: i32,
    pub odometer_end: i32,
    pub distance: i32,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
