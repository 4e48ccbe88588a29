//! Tokens de sesión opacos
//!
//! El token crudo (32 bytes aleatorios en base64url) solo existe en la
//! respuesta de login/signup y en el header Authorization del cliente.
//! La base de datos guarda únicamente el hash SHA-256 en hex: si la tabla
//! se filtra, los tokens siguen sin ser utilizables.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Vida de una sesión
pub const SESSION_TTL_DAYS: i64 = 30;

/// Par (token crudo para el cliente, hash para la base de datos)
#[derive(Debug, Clone)]
pub struct SessionToken {
    pub raw: String,
    pub hash: String,
}

/// Generar un token de sesión de alta entropía (256 bits)
pub fn create_session_token() -> SessionToken {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);

    let raw = URL_SAFE_NO_PAD.encode(bytes);
    let hash = hash_session_token(&raw);
    SessionToken { raw, hash }
}

/// Hash de búsqueda, rápido y unidireccional
pub fn hash_session_token(raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Expiración de una sesión creada ahora
pub fn session_expiry(now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::days(SESSION_TTL_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_unique() {
        let a = create_session_token();
        let b = create_session_token();
        assert_ne!(a.raw, b.raw);
        assert_ne!(a.hash, b.hash);
    }

    #[test]
    fn test_raw_token_is_base64url() {
        let token = create_session_token();
        // 32 bytes -> 43 caracteres base64url sin padding
        assert_eq!(token.raw.len(), 43);
        assert!(token
            .raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_hash_is_stable_and_hex() {
        let token = create_session_token();
        assert_eq!(token.hash, hash_session_token(&token.raw));
        assert_eq!(token.hash.len(), 64);
        assert!(token.hash.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(token.hash, token.raw);
    }

    #[test]
    fn test_known_hash_value() {
        // sha256("test") en hex
        assert_eq!(
            hash_session_token("test"),
            "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08"
        );
    }

    #[test]
    fn test_session_expiry() {
        let now = Utc::now();
        let expires = session_expiry(now);
        assert_eq!(expires - now, Duration::days(30));
    }
}
