//! DTOs de repostajes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::fillup::FillUp;
use crate::models::receipt::Receipt;

/// Request para registrar un repostaje
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFillUpRequest {
    pub vehicle_id: Uuid,

    /// RFC3339; se valida en el controller
    pub occurred_at: String,

    pub odometer: f64,

    pub fuel_amount: f64,

    /// Céntimos; se redondea a entero
    pub total_cost: f64,

    /// Por defecto EUR; se normaliza a mayúsculas
    pub currency: Option<String>,

    /// Por defecto true
    pub is_full_tank: Option<bool>,

    #[validate(length(max = 128))]
    pub station_name: Option<String>,

    #[validate(length(max = 1024))]
    pub notes: Option<String>,
}

/// Request para modificar un repostaje; los campos ausentes no cambian.
/// station_name/notes con string vacío pasan a NULL.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateFillUpRequest {
    pub occurred_at: Option<String>,

    pub odometer: Option<f64>,

    pub fuel_amount: Option<f64>,

    pub total_cost: Option<f64>,

    pub currency: Option<String>,

    pub is_full_tank: Option<bool>,

    #[validate(length(max = 128))]
    pub station_name: Option<String>,

    #[validate(length(max = 1024))]
    pub notes: Option<String>,
}

/// Recibo resumido dentro del listado de repostajes
#[derive(Debug, Serialize)]
pub struct ReceiptSummary {
    pub id: Uuid,
    pub storage_key: String,
    pub content_type: String,
    pub created_at: DateTime<Utc>,
}

impl From<Receipt> for ReceiptSummary {
    fn from(receipt: Receipt) -> Self {
        Self {
            id: receipt.id,
            storage_key: receipt.storage_key,
            content_type: receipt.content_type,
            created_at: receipt.created_at,
        }
    }
}

/// Response de repostaje con sus recibos
#[derive(Debug, Serialize)]
pub struct FillUpResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub odometer: i32,
    pub fuel_amount: f64,
    pub total_cost: i64,
    pub currency: String,
    pub is_full_tank: bool,
    pub station_name: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub receipts: Vec<ReceiptSummary>,
}

impl FillUpResponse {
    pub fn from_fill_up(fill_up: FillUp, receipts: Vec<Receipt>) -> Self {
        Self {
            id: fill_up.id,
            vehicle_id: fill_up.vehicle_id,
            occurred_at: fill_up.occurred_at,
            odometer: fill_up.odometer,
            fuel_amount: fill_up.fuel_amount,
            total_cost: fill_up.total_cost,
            currency: fill_up.currency,
            is_full_tank: fill_up.is_full_tank,
            station_name: fill_up.station_name,
            notes: fill_up.notes,
            created_at: fill_up.created_at,
            receipts: receipts.into_iter().map(ReceiptSummary::from).collect(),
        }
    }
}

/// Query de listado por vehículo
#[derive(Debug, Deserialize)]
pub struct FillUpListQuery {
    pub vehicle_id: Uuid,
}
