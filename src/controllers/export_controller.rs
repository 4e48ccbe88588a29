//! Controller de exports CSV
//!
//! Genera el CSV completo en memoria; la paginación queda en manos del
//! tamaño del historial del vehículo.

use lazy_static::lazy_static;
use regex::Regex;
use sqlx::PgPool;
use uuid::Uuid;

use crate::repositories::fillup_repository::FillUpRepository;
use crate::repositories::trip_repository::TripRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::csv_service::to_csv;
use crate::utils::errors::AppError;

lazy_static! {
    static ref FILENAME_UNSAFE: Regex = Regex::new(r"[^a-zA-Z0-9-_]+").unwrap();
}

/// Tipo de export solicitado
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExportKind {
    FillUps,
    Trips,
}

impl ExportKind {
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "fillups" => Some(ExportKind::FillUps),
            "trips" => Some(ExportKind::Trips),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            ExportKind::FillUps => "fillups",
            ExportKind::Trips => "trips",
        }
    }
}

/// CSV listo para servir como attachment
#[derive(Debug)]
pub struct CsvExport {
    pub filename: String,
    pub body: String,
}

pub struct ExportController {
    vehicles: VehicleRepository,
    fill_ups: FillUpRepository,
    trips: TripRepository,
}

impl ExportController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            vehicles: VehicleRepository::new(pool.clone()),
            fill_ups: FillUpRepository::new(pool.clone()),
            trips: TripRepository::new(pool),
        }
    }

    pub async fn csv(
        &self,
        user_id: Uuid,
        vehicle_id: Uuid,
        kind: ExportKind,
    ) -> Result<CsvExport, AppError> {
        let vehicle = self
            .vehicles
            .find_owned(vehicle_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let filename = format!(
            "fleetfuel-{}-{}.csv",
            kind.as_str(),
            FILENAME_UNSAFE.replace_all(&vehicle.name, "_")
        );

        let rows = match kind {
            ExportKind::FillUps => self.fill_up_rows(vehicle_id).await?,
            ExportKind::Trips => self.trip_rows(vehicle_id).await?,
        };

        Ok(CsvExport {
            filename,
            body: to_csv(&rows),
        })
    }

    async fn fill_up_rows(&self, vehicle_id: Uuid) -> Result<Vec<Vec<String>>, AppError> {
        let fill_ups = self.fill_ups.list_by_vehicle_asc(vehicle_id).await?;

        let mut rows = vec![vec![
            "occurredAt".to_string(),
            "odometer".to_string(),
            "fuelAmount".to_string(),
            "totalCostCents".to_string(),
            "currency".to_string(),
            "isFullTank".to_string(),
            "stationName".to_string(),
            "notes".to_string(),
        ]];

        for f in fill_ups {
            rows.push(vec![
                f.occurred_at.to_rfc3339(),
                f.odometer.to_string(),
                f.fuel_amount.to_string(),
                f.total_cost.to_string(),
                f.currency,
                if f.is_full_tank { "true".to_string() } else { "false".to_string() },
                f.station_name.unwrap_or_default(),
                f.notes.unwrap_or_default(),
            ]);
        }

        Ok(rows)
    }

    async fn trip_rows(&self, vehicle_id: Uuid) -> Result<Vec<Vec<String>>, AppError> {
        let trips = self.trips.list_by_vehicle_asc(vehicle_id).await?;

        let mut rows = vec![vec![
            "startedAt".to_string(),
            "endedAt".to_string(),
            "driver".to_string(),
            "odometerStart".to_string(),
            "odometerEnd".to_string(),
            "distanceKm".to_string(),
            "notes".to_string(),
        ]];

        for t in trips {
            rows.push(vec![
                t.started_at.to_rfc3339(),
                t.ended_at.to_rfc3339(),
                t.driver_name,
                t.odometer_start.to_string(),
                t.odometer_end.to_string(),
                t.distance.to_string(),
                t.notes.unwrap_or_default(),
            ]);
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_kind_parsing() {
        assert_eq!(ExportKind::from_str("fillups"), Some(ExportKind::FillUps));
        assert_eq!(ExportKind::from_str("trips"), Some(ExportKind::Trips));
        assert_eq!(ExportKind::from_str("receipts"), None);
    }

    #[test]
    fn test_filename_sanitization() {
        let sanitized = FILENAME_UNSAFE.replace_all("Furgoneta #2 (diesel)", "_");
        assert_eq!(sanitized, "Furgoneta_2_diesel_");
    }
}
