//! Rutas de la API
//!
//! Cada módulo expone un create_*_router(); aquí se componen bajo /api.

pub mod auth_routes;
pub mod driver_routes;
pub mod export_routes;
pub mod fillup_routes;
pub mod profile_routes;
pub mod receipt_routes;
pub mod report_routes;
pub mod trip_routes;
pub mod vehicle_routes;

use axum::Router;

use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_routes::create_auth_router())
        .nest("/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/fillups", fillup_routes::create_fillup_router())
        .nest("/trips", trip_routes::create_trip_router())
        .nest("/drivers", driver_routes::create_driver_router())
        .nest("/receipts", receipt_routes::create_receipt_router())
        .nest("/reports", report_routes::create_report_router())
        .nest("/export", export_routes::create_export_router())
        .merge(profile_routes::create_profile_router())
}
