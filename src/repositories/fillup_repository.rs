//! Repositorio de repostajes

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::fillup::FillUp;
use crate::utils::errors::AppError;

pub struct FillUpRepository {
    pool: PgPool,
}

impl FillUpRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        vehicle_id: Uuid,
        occurred_at: DateTime<Utc>,
        odometer: i32,
        fuel_amount: f64,
        total_cost: i64,
        currency: String,
        is_full_tank: bool,
        station_name: Option<String>,
        notes: Option<String>,
    ) -> Result<FillUp, AppError> {
        let fill_up = sqlx::query_as::<_, FillUp>(
            r#"
            INSERT INTO fill_ups
                (id, vehicle_id, occurred_at, odometer, fuel_amount, total_cost,
                 currency, is_full_tank, station_name, notes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(occurred_at)
        .bind(odometer)
        .bind(fuel_amount)
        .bind(total_cost)
        .bind(currency)
        .bind(is_full_tank)
        .bind(station_name)
        .bind(notes)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(fill_up)
    }

    /// Listado para la UI: más recientes primero
    pub async fn list_by_vehicle_desc(&self, vehicle_id: Uuid) -> Result<Vec<FillUp>, AppError> {
        let fill_ups = sqlx::query_as::<_, FillUp>(
            "SELECT * FROM fill_ups WHERE vehicle_id = $1 ORDER BY occurred_at DESC",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(fill_ups)
    }

    /// Listado para informes y export: orden cronológico ascendente
    pub async fn list_by_vehicle_asc(&self, vehicle_id: Uuid) -> Result<Vec<FillUp>, AppError> {
        let fill_ups = sqlx::query_as::<_, FillUp>(
            "SELECT * FROM fill_ups WHERE vehicle_id = $1 ORDER BY occurred_at ASC",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(fill_ups)
    }

    /// Buscar un repostaje cuyo vehículo pertenece al usuario
    pub async fn find_owned(&self, id: Uuid, user_id: Uuid) -> Result<Option<FillUp>, AppError> {
        let fill_up = sqlx::query_as::<_, FillUp>(
            r#"
            SELECT f.* FROM fill_ups f
            JOIN vehicles v ON v.id = f.vehicle_id
            WHERE f.id = $1 AND v.user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(fill_up)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        occurred_at: DateTime<Utc>,
        odometer: i32,
        fuel_amount: f64,
        total_cost: i64,
        currency: String,
        is_full_tank: bool,
        station_name: Option<String>,
        notes: Option<String>,
    ) -> Result<FillUp, AppError> {
        let fill_up = sqlx::query_as::<_, FillUp>(
            r#"
            UPDATE fill_ups
            SET occurred_at = $2, odometer = $3, fuel_amount = $4, total_cost = $5,
                currency = $6, is_full_tank = $7, station_name = $8, notes = $9
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(occurred_at)
        .bind(odometer)
        .bind(fuel_amount)
        .bind(total_cost)
        .bind(currency)
        .bind(is_full_tank)
        .bind(station_name)
        .bind(notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(fill_up)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM fill_ups WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
