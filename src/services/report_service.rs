//! Agregación mensual de repostajes
//!
//! Agrupa litros y gasto por mes natural (UTC) para el informe mensual.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::Serialize;

use crate::models::fillup::FillUp;

/// Totales de un mes natural para un vehículo
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyBucket {
    /// Clave YYYY-MM (UTC); el orden lexicográfico es el cronológico
    pub month: String,
    pub fuel_amount: f64,
    /// Céntimos
    pub total_cost: i64,
    pub currency: String,
}

/// Agrupar repostajes por mes natural UTC.
///
/// Meses con monedas mezcladas no se reconcilian: gana la moneda del
/// primer repostaje visto para ese mes (limitación conocida).
pub fn aggregate_monthly(fill_ups: &[FillUp]) -> Vec<MonthlyBucket> {
    let mut buckets: BTreeMap<String, MonthlyBucket> = BTreeMap::new();

    for f in fill_ups {
        let key = format!("{:04}-{:02}", f.occurred_at.year(), f.occurred_at.month());

        let bucket = buckets.entry(key.clone()).or_insert_with(|| MonthlyBucket {
            month: key,
            fuel_amount: 0.0,
            total_cost: 0,
            currency: f.currency.clone(),
        });
        bucket.fuel_amount += f.fuel_amount;
        bucket.total_cost += f.total_cost;
    }

    // BTreeMap ya itera en orden ascendente de clave
    buckets.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn fill_up(month: u32, day: u32, fuel_amount: f64, total_cost: i64, currency: &str) -> FillUp {
        let occurred_at = Utc.with_ymd_and_hms(2026, month, day, 18, 30, 0).unwrap();
        FillUp {
            id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            occurred_at,
            odometer: 1000,
            fuel_amount,
            total_cost,
            currency: currency.to_string(),
            is_full_tank: true,
            station_name: None,
            notes: None,
            created_at: occurred_at,
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate_monthly(&[]).is_empty());
    }

    #[test]
    fn test_two_months_sorted_ascending() {
        // entrada desordenada a propósito
        let fill_ups = vec![
            fill_up(2, 5, 35.0, 6200, "EUR"),
            fill_up(1, 20, 42.5, 7100, "EUR"),
            fill_up(1, 3, 40.0, 6800, "EUR"),
        ];

        let months = aggregate_monthly(&fill_ups);
        assert_eq!(months.len(), 2);

        assert_eq!(months[0].month, "2026-01");
        assert_eq!(months[0].fuel_amount, 82.5);
        assert_eq!(months[0].total_cost, 13900);

        assert_eq!(months[1].month, "2026-02");
        assert_eq!(months[1].fuel_amount, 35.0);
        assert_eq!(months[1].total_cost, 6200);
    }

    #[test]
    fn test_month_key_is_zero_padded() {
        let months = aggregate_monthly(&[fill_up(9, 1, 30.0, 5000, "EUR")]);
        assert_eq!(months[0].month, "2026-09");
    }

    #[test]
    fn test_first_currency_wins_within_a_month() {
        let fill_ups = vec![fill_up(3, 2, 30.0, 5000, "EUR"), fill_up(3, 9, 25.0, 4000, "CHF")];

        let months = aggregate_monthly(&fill_ups);
        assert_eq!(months.len(), 1);
        assert_eq!(months[0].currency, "EUR");
        assert_eq!(months[0].total_cost, 9000);
    }

    #[test]
    fn test_idempotent() {
        let fill_ups = vec![fill_up(1, 3, 40.0, 6800, "EUR"), fill_up(2, 5, 35.0, 6200, "EUR")];
        assert_eq!(aggregate_monthly(&fill_ups), aggregate_monthly(&fill_ups));
    }
}
