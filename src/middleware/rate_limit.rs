//! Middleware de Rate Limiting
//!
//! Limitador en memoria por IP para toda la API. Los endpoints de
//! autenticación usan además el limitador durable respaldado por la base
//! de datos (repositories::rate_limit_repository), que sobrevive reinicios.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::config::EnvironmentConfig;

/// Estructura para almacenar información de rate limiting por IP
#[derive(Debug, Clone)]
struct RateLimitInfo {
    requests: u32,
    window_start: Instant,
}

/// Estado global del rate limiting
#[derive(Clone)]
pub struct RateLimitState {
    requests: Arc<RwLock<HashMap<String, RateLimitInfo>>>,
    max_requests: u32,
    window_duration: Duration,
}

/// Errores de rate limiting
#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("Rate limit exceeded")]
    LimitExceeded,
}

impl RateLimitState {
    /// Crear nuevo estado de rate limiting
    pub fn new(config: &EnvironmentConfig) -> Self {
        Self {
            requests: Arc::new(RwLock::new(HashMap::new())),
            max_requests: config.rate_limit_requests,
            window_duration: Duration::from_secs(config.rate_limit_window),
        }
    }

    /// Verificar si una IP ha excedido el límite
    pub async fn check_rate_limit(&self, ip: &str) -> Result<(), RateLimitError> {
        let mut requests = self.requests.write().await;
        let now = Instant::now();

        // Limpiar entradas expiradas
        requests.retain(|_, info| now.duration_since(info.window_start) < self.window_duration);

        let info = requests.entry(ip.to_string()).or_insert(RateLimitInfo {
            requests: 0,
            window_start: now,
        });

        if now.duration_since(info.window_start) >= self.window_duration {
            info.requests = 1;
            info.window_start = now;
            return Ok(());
        }

        if info.requests >= self.max_requests {
            return Err(RateLimitError::LimitExceeded);
        }

        info.requests += 1;
        Ok(())
    }
}

/// IP del cliente, best-effort: primer valor de x-forwarded-for
pub fn client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Middleware de rate limiting para toda la API
pub async fn rate_limit_middleware(
    State(rate_limit_state): State<RateLimitState>,
    request: Request,
    next: Next,
) -> Result<Response, (StatusCode, String)> {
    let ip = client_ip(request.headers());

    if let Err(RateLimitError::LimitExceeded) = rate_limit_state.check_rate_limit(&ip).await {
        return Err((
            StatusCode::TOO_MANY_REQUESTS,
            "Rate limit exceeded. Please try again later.".to_string(),
        ));
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn test_state(max_requests: u32) -> RateLimitState {
        RateLimitState {
            requests: Arc::new(RwLock::new(HashMap::new())),
            max_requests,
            window_duration: Duration::from_secs(60),
        }
    }

    #[tokio::test]
    async fn test_allows_until_limit() {
        let state = test_state(3);
        for _ in 0..3 {
            assert!(state.check_rate_limit("10.0.0.1").await.is_ok());
        }
        assert!(state.check_rate_limit("10.0.0.1").await.is_err());
    }

    #[tokio::test]
    async fn test_limits_are_per_ip() {
        let state = test_state(1);
        assert!(state.check_rate_limit("10.0.0.1").await.is_ok());
        assert!(state.check_rate_limit("10.0.0.2").await.is_ok());
        assert!(state.check_rate_limit("10.0.0.1").await.is_err());
    }

    #[test]
    fn test_client_ip_from_forwarded_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.9, 10.0.0.1"),
        );
        assert_eq!(client_ip(&headers), "203.0.113.9");
    }

    #[test]
    fn test_client_ip_fallback() {
        assert_eq!(client_ip(&HeaderMap::new()), "unknown");
    }
}
