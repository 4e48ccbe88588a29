//! Hashing y verificación de contraseñas
//!
//! bcrypt con el coste por defecto. La verificación nunca revela detalles:
//! cualquier fallo interno cuenta como credenciales inválidas.

use crate::utils::errors::AppError;

/// Longitud mínima exigida en signup y login
pub const MIN_PASSWORD_LENGTH: usize = 12;

/// Validar la política de contraseñas
pub fn validate_password(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

/// Hashear una contraseña ya validada
pub fn hash_password(password: &str) -> Result<String, AppError> {
    validate_password(password)?;
    bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| AppError::Hash(e.to_string()))
}

/// Verificar una contraseña contra su hash almacenado
pub fn verify_password(hash: &str, password: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_password_rejected() {
        assert!(validate_password("corta").is_err());
        assert!(hash_password("corta").is_err());
    }

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let password = "contrasena-larga-123";
        let hash = bcrypt::hash(password, 4).unwrap();

        assert!(verify_password(&hash, password));
        assert!(!verify_password(&hash, "otra-contrasena-456"));
    }

    #[test]
    fn test_verify_with_garbage_hash_is_false() {
        assert!(!verify_password("no-es-un-hash-bcrypt", "lo-que-sea-123"));
    }
}
