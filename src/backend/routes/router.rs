/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * Every request passes through `TraceLayer`, which emits a span per request
 * with method, path and response status at the `tower_http` target.
 */

use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// ## Auth Routes
///
/// - `POST /signup` - Minimal account creation
/// - `POST /register` - Full registration, returns a 1-day token
/// - `POST /login` - User login, returns a 7-day token
/// - `GET /me` - Current user (requires `Authorization: Bearer`)
///
/// ## Health
///
/// - `GET /health` - Liveness check, always `200 {"status": "ok"}`
///
/// Unknown paths get axum's default empty 404.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/health", get(health));

    configure_api_routes(router)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
