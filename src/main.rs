mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{routing::get, Json, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use middleware::rate_limit::{rate_limit_middleware, RateLimitState};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("⛽ FleetFuel API - Registro de combustible y viajes");
    info!("==================================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    // CORS según configuración
    let cors = if config.cors_allows_any_origin() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    let rate_limit_state = RateLimitState::new(&config);

    // Crear router de la API
    let app_state = AppState::new(pool, config.clone());

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api", routes::create_api_router())
        .layer(axum::middleware::from_fn_with_state(
            rate_limit_state,
            rate_limit_middleware,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔐 Autenticación:");
    info!("   POST /api/auth/signup - Registro de usuario");
    info!("   POST /api/auth/login - Login");
    info!("   POST /api/auth/logout - Logout");
    info!("   GET  /api/auth/me - Usuario actual");
    info!("🚗 Vehículos:");
    info!("   POST   /api/vehicles - Crear vehículo");
    info!("   GET    /api/vehicles - Listar vehículos");
    info!("   PATCH  /api/vehicles/:id - Actualizar vehículo");
    info!("   DELETE /api/vehicles/:id - Eliminar vehículo");
    info!("⛽ Repostajes:");
    info!("   GET    /api/fillups?vehicle_id=... - Listar repostajes");
    info!("   POST   /api/fillups - Registrar repostaje");
    info!("   PATCH  /api/fillups/:id - Modificar repostaje");
    info!("   DELETE /api/fillups/:id - Eliminar repostaje");
    info!("🧑 Conductores:");
    info!("   GET    /api/drivers - Listar conductores");
    info!("   POST   /api/drivers - Crear conductor");
    info!("   PATCH  /api/drivers/:id - Renombrar conductor");
    info!("   DELETE /api/drivers/:id - Eliminar conductor");
    info!("🛣️  Viajes:");
    info!("   GET    /api/trips?vehicle_id=... - Listar viajes");
    info!("   POST   /api/trips - Registrar viaje");
    info!("   PATCH  /api/trips/:id - Modificar viaje");
    info!("   DELETE /api/trips/:id - Eliminar viaje");
    info!("🧾 Recibos:");
    info!("   POST /api/receipts/upload - Subir recibo (multipart)");
    info!("   GET  /api/receipts/:id - Descargar recibo");
    info!("📊 Informes:");
    info!("   GET /api/reports/consumption?vehicle_id=... - Consumo (depósito lleno)");
    info!("   GET /api/reports/monthly?vehicle_id=... - Totales mensuales");
    info!("   GET /api/export/csv?vehicle_id=...&kind=fillups|trips - Export CSV");
    info!("👤 Perfil:");
    info!("   GET/PATCH /api/profile - Perfil del usuario");
    info!("   GET/PATCH /api/account - Cuenta del usuario");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "fleetfuel-api",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
