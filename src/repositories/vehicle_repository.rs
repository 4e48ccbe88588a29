//! Repositorio de vehículos

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        name: String,
        fuel_type: String,
        unit_system: String,
    ) -> Result<Vehicle, AppError> {
        let now = Utc::now();
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, user_id, name, fuel_type, unit_system, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(name)
        .bind(fuel_type)
        .bind(unit_system)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    /// Buscar un vehículo del usuario. Vehículos de otros usuarios
    /// cuentan como inexistentes (404, nunca 403).
    pub async fn find_owned(&self, id: Uuid, user_id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle =
            sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1 AND user_id = $2")
                .bind(id)
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(vehicle)
    }

    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        name: Option<String>,
        fuel_type: Option<String>,
        unit_system: Option<String>,
    ) -> Result<Vehicle, AppError> {
        let current = self
            .find_owned(id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET name = $2, fuel_type = $3, unit_system = $4, updated_at = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(fuel_type.unwrap_or(current.fuel_type))
        .bind(unit_system.unwrap_or(current.unit_system))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        self.find_owned(id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
