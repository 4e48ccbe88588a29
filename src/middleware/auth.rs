//! Middleware de autenticación
//!
//! Extractor de Axum que resuelve el usuario actual a partir del header
//! Authorization: Bearer <token>. El token crudo se hashea y se busca la
//! sesión vigente; handlers que declaran AuthUser quedan protegidos.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts, http::HeaderMap};
use uuid::Uuid;

use crate::repositories::session_repository::SessionRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::session_service::hash_session_token;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Usuario autenticado de la request actual
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
}

/// Extraer el token crudo del header Authorization
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let auth_header = headers.get("authorization").and_then(|h| h.to_str().ok())?;

    let rest = auth_header.strip_prefix("Bearer ").or_else(|| auth_header.strip_prefix("bearer "))?;
    let token = rest.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

fn unauthenticated() -> AppError {
    AppError::Unauthorized("Unauthenticated".to_string())
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let raw_token = bearer_token(&parts.headers).ok_or_else(unauthenticated)?;
        let token_hash = hash_session_token(&raw_token);

        let session = SessionRepository::new(state.pool.clone())
            .find_valid_by_hash(&token_hash)
            .await?
            .ok_or_else(unauthenticated)?;

        let user = UserRepository::new(state.pool.clone())
            .find_by_id(session.user_id)
            .await?
            .ok_or_else(unauthenticated)?;

        Ok(AuthUser {
            id: user.id,
            email: user.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_extracted() {
        let headers = headers_with_auth("Bearer abc123");
        assert_eq!(bearer_token(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn test_bearer_token_case_insensitive_scheme() {
        let headers = headers_with_auth("bearer abc123");
        assert_eq!(bearer_token(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn test_missing_or_malformed_header() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
        assert_eq!(bearer_token(&headers_with_auth("Basic abc123")), None);
        assert_eq!(bearer_token(&headers_with_auth("Bearer ")), None);
    }
}
