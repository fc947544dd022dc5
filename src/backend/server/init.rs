/**
 * Server Initialization
 *
 * This module handles the setup of the Axum application from an
 * `AppConfig`.
 *
 * # Initialization Process
 *
 * 1. Load the account store
 * 2. Create the token issuer from the JWT secret
 * 3. Create and configure the router
 */

use axum::Router;

use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::store::StoreError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_store;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails only when the configured store cannot be reached at startup.
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, StoreError> {
    tracing::info!("Initializing storefront auth server");

    let store = load_store(&config.store).await?;
    let tokens = TokenIssuer::new(&config.jwt_secret);

    let app = create_router(AppState::new(store, tokens));

    tracing::info!("Router configured");

    Ok(app)
}
