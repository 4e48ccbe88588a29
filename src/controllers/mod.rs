//! Controllers de la aplicación
//!
//! Lógica de negocio entre las rutas y los repositorios: validación,
//! checks de propiedad y orquestación de services.

pub mod auth_controller;
pub mod driver_controller;
pub mod export_controller;
pub mod fillup_controller;
pub mod profile_controller;
pub mod receipt_controller;
pub mod report_controller;
pub mod trip_controller;
pub mod vehicle_controller;
