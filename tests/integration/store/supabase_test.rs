//! Register and login through the router against a mocked PostgREST table

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use storefront_auth::backend::auth::password::hash_password;
use storefront_auth::backend::auth::store::SupabaseUserStore;
use storefront_auth::backend::auth::TokenIssuer;
use storefront_auth::backend::routes::create_router;
use storefront_auth::backend::server::AppState;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{assert_error_body, register_body, TEST_SECRET};

fn server_for(upstream: &MockServer) -> TestServer {
    let store = SupabaseUserStore::new(&upstream.uri(), "service-key", "user");
    let router = create_router(AppState::new(Arc::new(store), TokenIssuer::new(TEST_SECRET)));
    TestServer::new(router).expect("Failed to start test server")
}

fn row(user_id: &str, email: &str, password_hash: &str) -> Value {
    json!({
        "user_id": user_id,
        "user_name": "a",
        "email": email,
        "user_password": password_hash,
        "is_vendor": false,
        "first_name": "Ann",
        "last_name": null,
        "address": null,
        "paid_user": true,
        "created_at": "2025-01-01T00:00:00+00:00"
    })
}

#[tokio::test]
async fn test_register_through_hosted_store() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/user"))
        .and(query_param("on_conflict", "email"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!([row("u-1", "a@x.com", "$2b$10$x")])),
        )
        .expect(1)
        .mount(&upstream)
        .await;

    let response = server_for(&upstream)
        .post("/register")
        .json(&register_body("a@x.com", "Abc12345!"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["user"]["email"], "a@x.com");
}

#[tokio::test]
async fn test_register_conflict_in_hosted_store() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/user"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
        .mount(&upstream)
        .await;

    let response = server_for(&upstream)
        .post("/register")
        .json(&register_body("a@x.com", "Abc12345!"))
        .await;

    assert_error_body(
        &response,
        StatusCode::BAD_REQUEST,
        "message",
        "User with this email already exists.",
    );
}

#[tokio::test]
async fn test_hosted_store_outage_is_generic() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/user"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&upstream)
        .await;

    let response = server_for(&upstream)
        .post("/register")
        .json(&register_body("a@x.com", "Abc12345!"))
        .await;

    assert_error_body(
        &response,
        StatusCode::INTERNAL_SERVER_ERROR,
        "message",
        "Server error during registration.",
    );
}

#[tokio::test]
async fn test_login_through_hosted_store() {
    let upstream = MockServer::start().await;
    let digest = hash_password("Abc12345!").await.unwrap();
    Mock::given(method("GET"))
        .and(path("/rest/v1/user"))
        .and(query_param("email", "eq.a@x.com"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([row("u-1", "a@x.com", &digest)])),
        )
        .mount(&upstream)
        .await;

    let response = server_for(&upstream)
        .post("/login")
        .json(&json!({ "email": "a@x.com", "password": "Abc12345!" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["user"]["id"], "u-1");
    assert_eq!(body["user"]["paid_user"], true);
    assert_eq!(body["user"]["last_name"], "");
}

#[tokio::test]
async fn test_login_with_null_user_name() {
    let upstream = MockServer::start().await;
    let digest = hash_password("Abc12345!").await.unwrap();
    let mut legacy_row = row("u-2", "old@x.com", &digest);
    legacy_row["user_name"] = Value::Null;
    legacy_row["is_vendor"] = Value::Null;
    Mock::given(method("GET"))
        .and(path("/rest/v1/user"))
        .and(query_param("email", "eq.old@x.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([legacy_row])))
        .mount(&upstream)
        .await;

    let response = server_for(&upstream)
        .post("/login")
        .json(&json!({ "email": "old@x.com", "password": "Abc12345!" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["user"]["username"], "");
    assert_eq!(body["user"]["user_name"], "");
    assert_eq!(body["user"]["is_vendor"], false);
}

#[tokio::test]
async fn test_register_without_email_constraint() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/user"))
        .and(query_param("on_conflict", "email"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": "42P10",
            "details": null,
            "hint": null,
            "message": "there is no unique or exclusion constraint matching the ON CONFLICT specification"
        })))
        .expect(1)
        .mount(&upstream)
        .await;

    let response = server_for(&upstream)
        .post("/register")
        .json(&register_body("a@x.com", "Abc12345!"))
        .await;

    assert_error_body(
        &response,
        StatusCode::INTERNAL_SERVER_ERROR,
        "message",
        "Server error during registration.",
    );
}
