/**
 * API Route Handlers
 *
 * This module mounts the authentication endpoints.
 *
 * # Routes
 *
 * - `POST /signup` - Minimal account creation
 * - `POST /register` - Full registration
 * - `POST /login` - User login
 * - `GET /me` - Get current user info
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_me, login, register, signup};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// `/me` requires a JWT in the `Authorization` header; the others are open.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/signup", post(signup))
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(get_me))
}
