//! Controller de autenticación
//!
//! Signup y login comparten el mismo esquema anti-abuso: rate limiting
//! durable por IP y por email, y respuestas genéricas que no permiten
//! enumerar cuentas existentes.

use chrono::Utc;
use sqlx::PgPool;
use validator::Validate;

use crate::config::environment::EnvironmentConfig;
use crate::dto::auth_dto::{LoginRequest, MeResponse, SessionResponse, SignupRequest, UserSummary};
use crate::middleware::auth::AuthUser;
use crate::models::user::{AccountType, User};
use crate::repositories::rate_limit_repository::RateLimitRepository;
use crate::repositories::session_repository::SessionRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::password_service::{hash_password, verify_password};
use crate::services::session_service::{create_session_token, hash_session_token, session_expiry};
use crate::utils::errors::AppError;
use crate::utils::validation::normalize_email;

/// Ventana de los límites de autenticación
const AUTH_RATE_WINDOW_MS: i64 = 60_000;

pub struct AuthController {
    users: UserRepository,
    sessions: SessionRepository,
    rate_limits: RateLimitRepository,
    config: EnvironmentConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            sessions: SessionRepository::new(pool.clone()),
            rate_limits: RateLimitRepository::new(pool),
            config,
        }
    }

    pub async fn signup(&self, ip: &str, request: SignupRequest) -> Result<SessionResponse, AppError> {
        self.rate_limits
            .check(
                &format!("signup:ip:{}", ip),
                self.config.rate_limit_signup_ip_per_min,
                AUTH_RATE_WINDOW_MS,
            )
            .await?;

        request.validate()?;

        let account_type = AccountType::from_str(&request.account_type).ok_or_else(|| {
            AppError::BadRequest("account_type must be PERSONAL or COMPANY".to_string())
        })?;

        let (email, email_norm) = normalize_email(&request.email);

        self.rate_limits
            .check(
                &format!("signup:email:{}", email_norm),
                self.config.rate_limit_signup_email_per_min,
                AUTH_RATE_WINDOW_MS,
            )
            .await?;

        let password_hash = hash_password(&request.password)?;

        let user = self
            .users
            .create_with_account(email, email_norm, password_hash, account_type.as_str().to_string())
            .await
            .map_err(|e| match e {
                // Mensaje genérico: no revelar qué emails existen
                AppError::Conflict(_) => AppError::BadRequest("Unable to create account".to_string()),
                other => other,
            })?;

        self.create_session_for(&user).await
    }

    pub async fn login(&self, ip: &str, request: LoginRequest) -> Result<SessionResponse, AppError> {
        self.rate_limits
            .check(
                &format!("login:ip:{}", ip),
                self.config.rate_limit_login_ip_per_min,
                AUTH_RATE_WINDOW_MS,
            )
            .await?;

        // Fallo genérico para cualquier causa
        let fail = || AppError::Unauthorized("Invalid email or password".to_string());

        let (_, email_norm) = normalize_email(&request.email);
        if !email_norm.contains('@') || request.password.is_empty() {
            return Err(fail());
        }

        self.rate_limits
            .check(
                &format!("login:email:{}", email_norm),
                self.config.rate_limit_login_email_per_min,
                AUTH_RATE_WINDOW_MS,
            )
            .await?;

        let user = self.users.find_by_email_norm(&email_norm).await?.ok_or_else(fail)?;

        if !verify_password(&user.password_hash, &request.password) {
            return Err(fail());
        }

        self.create_session_for(&user).await
    }

    /// Invalidación best-effort de la sesión presentada
    pub async fn logout(&self, raw_token: Option<String>) -> Result<(), AppError> {
        if let Some(raw) = raw_token {
            self.sessions.delete_by_hash(&hash_session_token(&raw)).await?;
        }
        Ok(())
    }

    pub fn me(&self, user: &AuthUser) -> MeResponse {
        MeResponse {
            user: UserSummary {
                id: user.id,
                email: user.email.clone(),
            },
        }
    }

    async fn create_session_for(&self, user: &User) -> Result<SessionResponse, AppError> {
        let token = create_session_token();
        let expires_at = session_expiry(Utc::now());

        self.sessions.create(user.id, token.hash, expires_at).await?;

        Ok(SessionResponse {
            token: token.raw,
            expires_at,
            user: UserSummary::from(user),
        })
    }
}
