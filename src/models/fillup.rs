//! Modelo de FillUp (repostaje)
//!
//! Un repostaje registra odómetro, litros y coste en céntimos. El flag
//! is_full_tank marca los eventos de depósito lleno que delimitan los
//! intervalos del cálculo de consumo.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FillUp {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub odometer: i32,
    pub fuel_amount: f64,
    /// Céntimos (unidad menor de la moneda), nunca decimales
    pub total_cost: i64,
    pub currency: String,
    pub is_full_tank: bool,
    pub station_name: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
