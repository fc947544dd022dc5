/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow handlers to extract the store or the
 * token issuer without needing the entire `AppState`.
 *
 * # Example
 *
 * ```rust,no_run
 * use storefront_auth::backend::auth::SharedUserStore;
 * use axum::extract::State;
 *
 * async fn handler(State(store): State<SharedUserStore>) {
 *     let _ = store.find_by_email("a@x.com").await;
 * }
 * ```
 */

use axum::extract::FromRef;

use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::store::SharedUserStore;

/// Central state container for the Axum application
#[derive(Clone)]
pub struct AppState {
    /// Account persistence, shared by every handler
    pub store: SharedUserStore,

    /// Signs and verifies session tokens
    pub tokens: TokenIssuer,
}

impl AppState {
    pub fn new(store: SharedUserStore, tokens: TokenIssuer) -> Self {
        Self { store, tokens }
    }
}

impl FromRef<AppState> for SharedUserStore {
    fn from_ref(app_state: &AppState) -> SharedUserStore {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for TokenIssuer {
    fn from_ref(app_state: &AppState) -> TokenIssuer {
        app_state.tokens.clone()
    }
}
