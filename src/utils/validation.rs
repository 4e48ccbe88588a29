//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y normalización de entradas de la API.

use chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::ValidationError;

/// Validar y convertir string a UUID
pub fn validate_uuid(value: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(value).map_err(|_| {
        let mut error = ValidationError::new("uuid");
        error.add_param("value".into(), &value.to_string());
        error
    })
}

/// Validar y convertir string a datetime
pub fn validate_datetime(value: &str) -> Result<DateTime<Utc>, ValidationError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            let mut error = ValidationError::new("datetime");
            error.add_param("value".into(), &value.to_string());
            error.add_param("format".into(), &"RFC3339".to_string());
            error
        })
}

/// Normalizar email: trim + lowercase para la clave de búsqueda.
/// Devuelve (email tal cual se guarda, email_norm para unicidad).
pub fn normalize_email(email: &str) -> (String, String) {
    let trimmed = email.trim().to_string();
    let norm = trimmed.to_lowercase();
    (trimmed, norm)
}

/// Normalizar un string opcional: trim, vacío se convierte en None.
/// Devuelve error si supera la longitud máxima.
pub fn normalize_trimmed(value: Option<&str>, max_len: usize) -> Result<Option<String>, ValidationError> {
    match value {
        None => Ok(None),
        Some(raw) => {
            let s = raw.trim();
            if s.is_empty() {
                return Ok(None);
            }
            if s.chars().count() > max_len {
                let mut error = ValidationError::new("too_long");
                error.add_param("max".into(), &max_len);
                return Err(error);
            }
            Ok(Some(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_uuid() {
        assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_uuid("not-a-uuid").is_err());
    }

    #[test]
    fn test_validate_datetime() {
        let dt = validate_datetime("2026-01-01T10:00:00Z").unwrap();
        assert_eq!(dt.timestamp(), 1767261600);
        assert!(validate_datetime("01/01/2026").is_err());
    }

    #[test]
    fn test_normalize_email() {
        let (email, norm) = normalize_email("  User@Example.COM ");
        assert_eq!(email, "User@Example.COM");
        assert_eq!(norm, "user@example.com");
    }

    #[test]
    fn test_normalize_trimmed() {
        assert_eq!(normalize_trimmed(Some("  hola  "), 16).unwrap(), Some("hola".to_string()));
        assert_eq!(normalize_trimmed(Some("   "), 16).unwrap(), None);
        assert_eq!(normalize_trimmed(None, 16).unwrap(), None);
        assert!(normalize_trimmed(Some("demasiado largo"), 4).is_err());
    }
}
