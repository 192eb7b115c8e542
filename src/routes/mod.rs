//! Rutas HTTP
//!
//! Cada recurso expone su propio router; aquí se combinan junto con el
//! health check y las capas de CORS y trazas.

pub mod dashboard_routes;
pub mod user_routes;
pub mod vehicle_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Crear el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(user_routes::create_user_router())
        .merge(vehicle_routes::create_vehicle_router())
        .merge(dashboard_routes::create_dashboard_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware())
        .with_state(state)
}

/// Endpoint de salud simple
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "fleet-dashboard",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
