//! Cálculo de consumo por el método de depósito lleno
//!
//! Solo los intervalos delimitados por dos repostajes con depósito lleno
//! permiten conocer el consumo real: los repostajes parciales dejan el
//! nivel del depósito indeterminado, así que su combustible se acumula
//! dentro del intervalo en curso.
//!
//! Supuestos:
//! - El odómetro crece monotónicamente dentro del historial de un vehículo
//!   (no se valida aquí; una distancia no positiva descarta el intervalo).
//! - Las unidades son consistentes por vehículo (km/L o mi/gal).

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::fillup::FillUp;

/// Vista mínima de un repostaje para el motor de consumo
#[derive(Debug, Clone)]
pub struct FillUpSample {
    pub occurred_at: DateTime<Utc>,
    pub odometer: f64,
    pub fuel_amount: f64,
    pub is_full_tank: bool,
}

impl From<&FillUp> for FillUpSample {
    fn from(f: &FillUp) -> Self {
        Self {
            occurred_at: f.occurred_at,
            odometer: f.odometer as f64,
            fuel_amount: f.fuel_amount,
            is_full_tank: f.is_full_tank,
        }
    }
}

/// Intervalo de consumo entre dos repostajes de depósito lleno
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsumptionInterval {
    pub distance: f64,
    pub fuel_used: f64,
    /// L/100km o gal/100mi según el vehículo; sin redondear
    pub consumption_per_100: f64,
}

/// Calcular los intervalos de consumo de un vehículo.
///
/// La entrada puede venir en cualquier orden; se ordena de forma estable
/// por occurred_at antes de recorrer. El primer depósito lleno solo
/// siembra el estado: con menos de dos eventos de depósito lleno el
/// resultado es vacío. Distancias no positivas (lecturas de odómetro
/// duplicadas o retrocedidas) se omiten en silencio.
pub fn compute_full_tank_consumption(fill_ups: &[FillUpSample]) -> Vec<ConsumptionInterval> {
    let mut sorted: Vec<&FillUpSample> = fill_ups.iter().collect();
    // sort_by_key es estable: empates de timestamp conservan el orden de entrada
    sorted.sort_by_key(|f| f.occurred_at);

    let mut results = Vec::new();

    let mut last_full: Option<&FillUpSample> = None;
    let mut fuel_since_last_full = 0.0_f64;

    for f in sorted {
        if last_full.is_some() {
            fuel_since_last_full += f.fuel_amount;
        }

        if f.is_full_tank {
            if let Some(prev) = last_full {
                let distance = f.odometer - prev.odometer;
                if distance > 0.0 {
                    let fuel_used = fuel_since_last_full;
                    results.push(ConsumptionInterval {
                        distance,
                        fuel_used,
                        consumption_per_100: (fuel_used / distance) * 100.0,
                    });
                }
            }
            last_full = Some(f);
            fuel_since_last_full = 0.0;
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(day: u32, odometer: f64, fuel_amount: f64, is_full_tank: bool) -> FillUpSample {
        FillUpSample {
            occurred_at: Utc.with_ymd_and_hms(2026, 1, day, 12, 0, 0).unwrap(),
            odometer,
            fuel_amount,
            is_full_tank,
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(compute_full_tank_consumption(&[]).is_empty());
    }

    #[test]
    fn test_fewer_than_two_full_tanks_yields_nothing() {
        let only_partials = vec![sample(1, 1000.0, 20.0, false), sample(5, 1200.0, 25.0, false)];
        assert!(compute_full_tank_consumption(&only_partials).is_empty());

        let single_full = vec![sample(1, 1000.0, 40.0, true), sample(5, 1200.0, 25.0, false)];
        assert!(compute_full_tank_consumption(&single_full).is_empty());
    }

    #[test]
    fn test_two_full_tanks_with_partial_in_between() {
        let fill_ups = vec![
            sample(1, 1000.0, 40.0, true),
            sample(10, 1200.0, 10.0, false),
            sample(20, 1400.0, 35.0, true),
        ];

        let results = compute_full_tank_consumption(&fill_ups);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].distance, 400.0);
        // el combustible del primer depósito lleno no cuenta; 10 + 35 = 45
        assert_eq!(results[0].fuel_used, 45.0);
        assert_eq!(results[0].consumption_per_100, 11.25);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let ordered = vec![
            sample(1, 1000.0, 40.0, true),
            sample(10, 1200.0, 10.0, false),
            sample(20, 1400.0, 35.0, true),
            sample(28, 1800.0, 38.0, true),
        ];
        let mut shuffled = vec![
            sample(28, 1800.0, 38.0, true),
            sample(10, 1200.0, 10.0, false),
            sample(1, 1000.0, 40.0, true),
            sample(20, 1400.0, 35.0, true),
        ];

        let expected = compute_full_tank_consumption(&ordered);
        let actual = compute_full_tank_consumption(&shuffled);
        assert_eq!(expected, actual);
        assert_eq!(expected.len(), 2);

        // idempotencia: la entrada no se muta y repetir la llamada da lo mismo
        let again = compute_full_tank_consumption(&shuffled);
        assert_eq!(actual, again);
        shuffled.sort_by_key(|f| f.occurred_at);
        assert_eq!(shuffled[0].odometer, 1000.0);
    }

    #[test]
    fn test_non_positive_distance_is_skipped() {
        let stale = vec![sample(1, 1000.0, 40.0, true), sample(10, 1000.0, 35.0, true)];
        assert!(compute_full_tank_consumption(&stale).is_empty());

        let decreasing = vec![sample(1, 1000.0, 40.0, true), sample(10, 900.0, 35.0, true)];
        assert!(compute_full_tank_consumption(&decreasing).is_empty());
    }

    #[test]
    fn test_skipped_interval_still_resets_the_window() {
        // El segundo lleno tiene odómetro duplicado: no emite, pero pasa a
        // ser el nuevo límite y el tercero se calcula contra él.
        let fill_ups = vec![
            sample(1, 1000.0, 40.0, true),
            sample(10, 1000.0, 30.0, true),
            sample(20, 1500.0, 50.0, true),
        ];

        let results = compute_full_tank_consumption(&fill_ups);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].distance, 500.0);
        assert_eq!(results[0].fuel_used, 50.0);
        assert_eq!(results[0].consumption_per_100, 10.0);
    }

    #[test]
    fn test_multiple_intervals_in_chronological_order() {
        let fill_ups = vec![
            sample(1, 1000.0, 40.0, true),
            sample(8, 1500.0, 45.0, true),
            sample(15, 2100.0, 48.0, true),
        ];

        let results = compute_full_tank_consumption(&fill_ups);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].distance, 500.0);
        assert_eq!(results[0].fuel_used, 45.0);
        assert_eq!(results[1].distance, 600.0);
        assert_eq!(results[1].fuel_used, 48.0);
        assert_eq!(results[1].consumption_per_100, 8.0);
    }
}
