//! DTOs de la API
//!
//! Requests con validación (validator) y responses serializables.
//! Los modelos de base de datos nunca salen directamente por la API.

pub mod auth_dto;
pub mod driver_dto;
pub mod fillup_dto;
pub mod profile_dto;
pub mod receipt_dto;
pub mod report_dto;
pub mod trip_dto;
pub mod vehicle_dto;
