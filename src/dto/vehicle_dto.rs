//! DTOs de vehículos

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::Vehicle;

/// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 64))]
    pub name: String,

    /// GASOLINE | DIESEL | ELECTRIC | HYBRID | OTHER
    pub fuel_type: String,

    /// METRIC | IMPERIAL (por defecto METRIC)
    pub unit_system: Option<String>,
}

/// Request para actualizar un vehículo existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 64))]
    pub name: Option<String>,

    pub fuel_type: Option<String>,

    pub unit_system: Option<String>,
}

/// Response de vehículo para la API
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub name: String,
    pub fuel_type: String,
    pub unit_system: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            fuel_type: vehicle.fuel_type,
            unit_system: vehicle.unit_system,
            created_at: vehicle.created_at,
            updated_at: vehicle.updated_at,
        }
    }
}
