//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;
use std::path::PathBuf;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    // Rate limiting en memoria (toda la API)
    pub rate_limit_requests: u32,
    pub rate_limit_window: u64,
    // Rate limiting durable (ventanas de 60s sobre signup/login)
    pub rate_limit_signup_ip_per_min: i64,
    pub rate_limit_signup_email_per_min: i64,
    pub rate_limit_login_ip_per_min: i64,
    pub rate_limit_login_email_per_min: i64,
    // Almacenamiento de recibos
    pub receipts_dir: PathBuf,
    pub max_receipt_bytes: usize,
}

fn env_number<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env_number("PORT", 3000),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            rate_limit_requests: env_number("RATE_LIMIT_REQUESTS", 120),
            rate_limit_window: env_number("RATE_LIMIT_WINDOW", 60),
            rate_limit_signup_ip_per_min: env_number("RATE_LIMIT_SIGNUP_IP_PER_MIN", 10),
            rate_limit_signup_email_per_min: env_number("RATE_LIMIT_SIGNUP_EMAIL_PER_MIN", 5),
            rate_limit_login_ip_per_min: env_number("RATE_LIMIT_LOGIN_IP_PER_MIN", 20),
            rate_limit_login_email_per_min: env_number("RATE_LIMIT_LOGIN_EMAIL_PER_MIN", 10),
            receipts_dir: env::var("RECEIPTS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/receipts")),
            max_receipt_bytes: env_number("MAX_RECEIPT_BYTES", 5 * 1024 * 1024),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// CORS abierto ("*") o lista de orígenes explícita
    pub fn cors_allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}
