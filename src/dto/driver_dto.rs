//! DTOs de conductores

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::driver::Driver;

/// Request para crear un conductor
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDriverRequest {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
}

/// Request para renombrar un conductor
#[derive(Debug, Deserialize, Validate)]
pub struct RenameDriverRequest {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
}

/// Response de conductor
#[derive(Debug, Serialize)]
pub struct DriverResponse {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<Driver> for DriverResponse {
    fn from(driver: Driver) -> Self {
        Self {
            id: driver.id,
            name: driver.name,
            created_at: driver.created_at,
        }
    }
}
