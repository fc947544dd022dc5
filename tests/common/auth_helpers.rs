//! Authentication test helpers
//!
//! Provides utilities for spinning up the app over an in-memory store,
//! creating test users, and generating tokens.

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{json, Value};
use storefront_auth::backend::auth::store::{MemoryUserStore, SharedUserStore};
use storefront_auth::backend::auth::TokenIssuer;
use storefront_auth::backend::routes::create_router;
use storefront_auth::backend::server::AppState;

/// Secret every test server signs with
pub const TEST_SECRET: &str = "test-secret";

/// A running app plus handles on its store and signer
pub struct TestApp {
    pub server: TestServer,
    pub store: MemoryUserStore,
    pub tokens: TokenIssuer,
}

/// Build the full router over a fresh in-memory store
pub fn test_app() -> TestApp {
    let store = MemoryUserStore::new();
    let tokens = TokenIssuer::new(TEST_SECRET);
    let shared: SharedUserStore = Arc::new(store.clone());

    let router = create_router(AppState::new(shared, tokens.clone()));
    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp {
        server,
        store,
        tokens,
    }
}

/// Register body with a valid password and a full profile
pub fn register_body(email: &str, password: &str) -> Value {
    json!({
        "email": email,
        "password": password,
        "username": "a",
        "first_name": "Ann",
        "last_name": "Lee",
        "address": "1 Main St",
        "is_vendor": false
    })
}

/// Register a user through the API and return its token
pub async fn register_user(app: &TestApp, email: &str, password: &str) -> String {
    let response = app
        .server
        .post("/register")
        .json(&register_body(email, password))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    body["token"]
        .as_str()
        .expect("register response carries a token")
        .to_string()
}
