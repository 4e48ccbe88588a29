//! DTOs de informes

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::services::consumption_service::ConsumptionInterval;
use crate::services::report_service::MonthlyBucket;

/// Query común de informes: un vehículo del usuario
#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    pub vehicle_id: Uuid,
}

/// Respuesta del informe de consumo (método de depósito lleno)
#[derive(Debug, Serialize)]
pub struct ConsumptionReportResponse {
    pub intervals: Vec<ConsumptionInterval>,
}

/// Respuesta del informe mensual
#[derive(Debug, Serialize)]
pub struct MonthlyReportResponse {
    pub months: Vec<MonthlyBucket>,
}
