//! DTOs de autenticación y sesiones

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::user::User;

/// Request de registro de usuario
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 12))]
    pub password: String,

    /// PERSONAL o COMPANY
    pub account_type: String,
}

/// Request de login. La validación es deliberadamente laxa: cualquier
/// forma inválida acaba en el mismo 401 genérico.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Subconjunto seguro del usuario (nunca incluye password_hash)
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub email: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
        }
    }
}

/// Respuesta de signup/login: el token crudo viaja solo aquí
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserSummary,
}

/// Respuesta de /auth/me
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: UserSummary,
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
