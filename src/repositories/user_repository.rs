//! Repositorio de usuarios, cuentas y perfiles

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::user::{Account, Profile, User};
use crate::utils::errors::AppError;

pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crear usuario + cuenta en una sola transacción.
    /// Un email duplicado (email_norm UNIQUE) se reporta como Conflict.
    pub async fn create_with_account(
        &self,
        email: String,
        email_norm: String,
        password_hash: String,
        account_type: String,
    ) -> Result<User, AppError> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now();

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, email_norm, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(email)
        .bind(email_norm)
        .bind(password_hash)
        .bind(now)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match e.as_database_error().and_then(|d| d.code()) {
            Some(code) if code == "23505" => {
                AppError::Conflict("email already registered".to_string())
            }
            _ => AppError::Database(e),
        })?;

        sqlx::query(
            r#"
            INSERT INTO accounts (id, user_id, account_type, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user.id)
        .bind(account_type)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(user)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    pub async fn find_by_email_norm(&self, email_norm: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email_norm = $1")
            .bind(email_norm)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    pub async fn find_account(&self, user_id: Uuid) -> Result<Option<Account>, AppError> {
        let account = sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(account)
    }

    pub async fn update_account(
        &self,
        user_id: Uuid,
        account_type: Option<String>,
        name: Option<Option<String>>,
    ) -> Result<Account, AppError> {
        let current = self
            .find_account(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Account not found".to_string()))?;

        let account = sqlx::query_as::<_, Account>(
            r#"
            UPDATE accounts
            SET account_type = $2, name = $3, updated_at = $4
            WHERE user_id = $1
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(account_type.unwrap_or(current.account_type))
        .bind(name.unwrap_or(current.name))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(account)
    }

    /// Obtener el perfil, creándolo con valores por defecto si no existe
    /// (usuarios anteriores a la introducción de profiles).
    pub async fn get_or_create_profile(&self, user_id: Uuid) -> Result<Profile, AppError> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (user_id, theme_preference, updated_at)
            VALUES ($1, 'SYSTEM', $2)
            ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(profile)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        first_name: Option<String>,
        last_name: Option<String>,
        company: Option<String>,
        age: Option<i32>,
        gender: Option<String>,
        phone: Option<String>,
        theme_preference: String,
    ) -> Result<Profile, AppError> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
            SET first_name = $2, last_name = $3, company = $4, age = $5,
                gender = $6, phone = $7, theme_preference = $8, updated_at = $9
            WHERE user_id = $1
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(first_name)
        .bind(last_name)
        .bind(company)
        .bind(age)
        .bind(gender)
        .bind(phone)
        .bind(theme_preference)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(profile)
    }
}
