//! Rate limiting durable
//!
//! Ventanas fijas persistidas en rate_limit_windows: sobreviven reinicios
//! del proceso, a diferencia del limitador en memoria del middleware.
//! El contador se incrementa con un upsert atómico.

use chrono::{DateTime, TimeZone, Utc};
use sqlx::PgPool;

use crate::utils::errors::AppError;

/// Inicio de la ventana fija que contiene now_ms
fn window_start_ms(now_ms: i64, window_ms: i64) -> i64 {
    now_ms - now_ms.rem_euclid(window_ms)
}

pub struct RateLimitRepository {
    pool: PgPool,
}

impl RateLimitRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Registrar un hit para la clave y fallar con 429 si supera el límite.
    /// retry_after_secs apunta al final de la ventana actual (mínimo 1s).
    pub async fn check(&self, key: &str, limit: i64, window_ms: i64) -> Result<(), AppError> {
        let now_ms = Utc::now().timestamp_millis();
        let start_ms = window_start_ms(now_ms, window_ms);
        let window_start: DateTime<Utc> = Utc
            .timestamp_millis_opt(start_ms)
            .single()
            .ok_or_else(|| AppError::Internal("invalid rate limit window".to_string()))?;

        let (count,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO rate_limit_windows (key, window_start, count)
            VALUES ($1, $2, 1)
            ON CONFLICT (key, window_start)
            DO UPDATE SET count = rate_limit_windows.count + 1
            RETURNING count
            "#,
        )
        .bind(key)
        .bind(window_start)
        .fetch_one(&self.pool)
        .await?;

        if i64::from(count) > limit {
            let retry_after_ms = (window_ms - (now_ms - start_ms)).max(0);
            let retry_after_secs = ((retry_after_ms + 999) / 1000).max(1) as u64;
            return Err(AppError::RateLimited { retry_after_secs });
        }

        // Limpieza best-effort: conservar las últimas 6 ventanas por clave
        let keep_after: DateTime<Utc> = Utc
            .timestamp_millis_opt(now_ms - window_ms * 6)
            .single()
            .unwrap_or(window_start);
        if let Err(e) = sqlx::query("DELETE FROM rate_limit_windows WHERE key = $1 AND window_start < $2")
            .bind(key)
            .bind(keep_after)
            .execute(&self.pool)
            .await
        {
            log::debug!("rate limit cleanup failed for '{}': {}", key, e);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_start_floors_to_window() {
        assert_eq!(window_start_ms(60_000, 60_000), 60_000);
        assert_eq!(window_start_ms(60_001, 60_000), 60_000);
        assert_eq!(window_start_ms(119_999, 60_000), 60_000);
        assert_eq!(window_start_ms(120_000, 60_000), 120_000);
    }

    #[test]
    fn test_window_start_is_idempotent_within_window() {
        let a = window_start_ms(1_700_000_123_456, 60_000);
        let b = window_start_ms(1_700_000_150_000, 60_000);
        assert_eq!(a, b);
    }
}
