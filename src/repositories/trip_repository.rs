//! Repositorio de viajes

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::trip::{Trip, TripWithDriver};
use crate::utils::errors::AppError;

pub struct TripRepository {
    pool: PgPool,
}

impl TripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        vehicle_id: Uuid,
        driver_id: Uuid,
        started_at: DateTime<Utc>,
        ended_at: DateTime<Utc>,
        odometer_start: i32,
        odometer_end: i32,
        distance: i32,
        notes: Option<String>,
    ) -> Result<Trip, AppError> {
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            INSERT INTO trips
                (id, vehicle_id, driver_id, started_at, ended_at,
                 odometer_start, odometer_end, distance, notes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(driver_id)
        .bind(started_at)
        .bind(ended_at)
        .bind(odometer_start)
        .bind(odometer_end)
        .bind(distance)
        .bind(notes)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(trip)
    }

    /// Listado con el nombre del conductor, más recientes primero
    pub async fn list_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<TripWithDriver>, AppError> {
        let trips = sqlx::query_as::<_, TripWithDriver>(
            r#"
            SELECT t.id, t.vehicle_id, t.driver_id, d.name AS driver_name,
                   t.started_at, t.ended_at, t.odometer_start, t.odometer_end,
                   t.distance, t.notes, t.created_at
            FROM trips t
            JOIN drivers d ON d.id = t.driver_id
            WHERE t.vehicle_id = $1
            ORDER BY t.started_at DESC
            "#,
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(trips)
    }

    /// Listado cronológico ascendente para el export CSV
    pub async fn list_by_vehicle_asc(&self, vehicle_id: Uuid) -> Result<Vec<TripWithDriver>, AppError> {
        let trips = sqlx::query_as::<_, TripWithDriver>(
            r#"
            SELECT t.id, t.vehicle_id, t.driver_id, d.name AS driver_name,
                   t.started_at, t.ended_at, t.odometer_start, t.odometer_end,
                   t.distance, t.notes, t.created_at
            FROM trips t
            JOIN drivers d ON d.id = t.driver_id
            WHERE t.vehicle_id = $1
            ORDER BY t.started_at ASC
            "#,
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(trips)
    }

    pub async fn find_owned(&self, id: Uuid, user_id: Uuid) -> Result<Option<Trip>, AppError> {
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            SELECT t.* FROM trips t
            JOIN vehicles v ON v.id = t.vehicle_id
            WHERE t.id = $1 AND v.user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(trip)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        driver_id: Uuid,
        started_at: DateTime<Utc>,
        ended_at: DateTime<Utc>,
        odometer_start: i32,
        odometer_end: i32,
        distance: i32,
        notes: Option<String>,
    ) -> Result<Trip, AppError> {
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            UPDATE trips
            SET driver_id = $2, started_at = $3, ended_at = $4,
                odometer_start = $5, odometer_end = $6, distance = $7, notes = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(driver_id)
        .bind(started_at)
        .bind(ended_at)
        .bind(odometer_start)
        .bind(odometer_end)
        .bind(distance)
        .bind(notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(trip)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM trips WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
