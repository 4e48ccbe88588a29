//! Services module
//!
//! Este módulo contiene la lógica de negocio pura de la aplicación:
//! el motor de consumo, la agregación mensual y los servicios de
//! credenciales, sesiones, CSV y almacenamiento de recibos.

pub mod consumption_service;
pub mod csv_service;
pub mod password_service;
pub mod receipt_storage_service;
pub mod report_service;
pub mod session_service;
