//! Repositorio de conductores

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::driver::Driver;
use crate::utils::errors::AppError;

pub struct DriverRepository {
    pool: PgPool,
}

impl DriverRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user_id: Uuid, name: String) -> Result<Driver, AppError> {
        let driver = sqlx::query_as::<_, Driver>(
            r#"
            INSERT INTO drivers (id, user_id, name, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(name)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(driver)
    }

    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Driver>, AppError> {
        let drivers = sqlx::query_as::<_, Driver>(
            "SELECT * FROM drivers WHERE user_id = $1 ORDER BY name ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(drivers)
    }

    pub async fn find_owned(&self, id: Uuid, user_id: Uuid) -> Result<Option<Driver>, AppError> {
        let driver =
            sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE id = $1 AND user_id = $2")
                .bind(id)
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(driver)
    }

    pub async fn rename(&self, id: Uuid, user_id: Uuid, name: String) -> Result<Driver, AppError> {
        self.find_owned(id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Driver not found".to_string()))?;

        let driver = sqlx::query_as::<_, Driver>(
            "UPDATE drivers SET name = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(driver)
    }

    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        self.find_owned(id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Driver not found".to_string()))?;

        // Los viajes referencian drivers con ON DELETE RESTRICT:
        // borrar un conductor con viajes es un conflicto, no un cascade.
        sqlx::query("DELETE FROM drivers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match e.as_database_error().and_then(|d| d.code()) {
                Some(code) if code == "23503" => {
                    AppError::Conflict("driver has trips and cannot be deleted".to_string())
                }
                _ => AppError::Database(e),
            })?;

        Ok(())
    }
}
