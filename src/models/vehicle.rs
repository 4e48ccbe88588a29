//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y los enums de dominio asociados.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Tipo de combustible del vehículo
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FuelType {
    Gasoline,
    Diesel,
    Electric,
    Hybrid,
    Other,
}

impl FuelType {
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "GASOLINE" => Some(FuelType::Gasoline),
            "DIESEL" => Some(FuelType::Diesel),
            "ELECTRIC" => Some(FuelType::Electric),
            "HYBRID" => Some(FuelType::Hybrid),
            "OTHER" => Some(FuelType::Other),
            _ => None,
        }
    }
}

/// Sistema de unidades del vehículo (km/L o mi/gal).
/// La consistencia de unidades es responsabilidad del usuario; el motor
/// de consumo no convierte.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum UnitSystem {
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "METRIC" => Some(UnitSystem::Metric),
            "IMPERIAL" => Some(UnitSystem::Imperial),
            _ => None,
        }
    }
}

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub fuel_type: String,
    pub unit_system: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
