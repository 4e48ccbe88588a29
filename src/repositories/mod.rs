//! Repositorios de acceso a datos
//!
//! Cada repositorio encapsula las queries SQLx de una entidad.
//! Los checks de propiedad (user_id) viven aquí: un recurso de otro
//! usuario se comporta como inexistente.

pub mod driver_repository;
pub mod fillup_repository;
pub mod rate_limit_repository;
pub mod receipt_repository;
pub mod session_repository;
pub mod trip_repository;
pub mod user_repository;
pub mod vehicle_repository;
