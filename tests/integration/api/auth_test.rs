//! Authentication API integration tests
//!
//! Tests for the signup, register, login and current-user endpoints,
//! driven through the full router over an in-memory store.

use std::future::IntoFuture;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use storefront_auth::backend::auth::UserStore;

use crate::common::{assert_error_body, register_body, register_user, test_app};

const REGISTER_REQUIREMENT: &str =
    "Password must be at least 8 characters long and include 1 letter, 1 number, and 1 symbol.";
const SIGNUP_REQUIREMENT: &str =
    "Password must be 8+ chars, include a number, letter & special character.";

#[tokio::test]
async fn test_register_success() {
    let app = test_app();

    let response = app
        .server
        .post("/register")
        .json(&json!({ "email": "a@x.com", "password": "Abc12345!", "username": "a" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "User registered successfully!");
    assert_eq!(body["user"]["email"], "a@x.com");
    assert_eq!(body["user"]["user_name"], "a");
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("user_password").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = test_app();
    register_user(&app, "a@x.com", "Abc12345!").await;

    let response = app
        .server
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
async fn test_register_weak_passwords() {
    let app = test_app();

    // too short, no digit, no letter, no symbol, symbol outside the register set
    for password in ["Ab1!", "Abcdefg!", "12345678!", "Abc123456", "Abc12345#"] {
        let response = app
            .server
            .post("/register")
            .json(&register_body("a@x.com", password))
            .await;

        assert_error_body(&response, StatusCode::BAD_REQUEST, "message", REGISTER_REQUIREMENT);
    }

    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_register_missing_password() {
    let app = test_app();

    let response = app
        .server
        .post("/register")
        .json(&json!({ "email": "a@x.com", "username": "a" }))
        .await;

    assert_error_body(&response, StatusCode::BAD_REQUEST, "message", REGISTER_REQUIREMENT);
}

#[tokio::test]
async fn test_concurrent_register_single_winner() {
    let app = test_app();

    let first = app
        .server
        .post("/register")
        .json(&register_body("race@x.com", "Abc12345!"));
    let second = app
        .server
        .post("/register")
        .json(&register_body("race@x.com", "Xyz98765!"));

    let (first, second) = tokio::join!(first.into_future(), second.into_future());

    let statuses = [first.status_code(), second.status_code()];
    let winners = statuses.iter().filter(|s| **s == StatusCode::OK).count();
    assert_eq!(winners, 1, "statuses: {:?}", statuses);
    assert!(statuses.contains(&StatusCode::BAD_REQUEST));
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_signup_success() {
    let app = test_app();

    let response = app
        .server
        .post("/signup")
        .json(&json!({
            "user_id": "client-chosen",
            "user_name": "gadget_shop",
            "email": "v@x.com",
            "user_password": "Abc12345#",
            "is_vendor": 1
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.assert_json(&json!({ "message": "User registered successfully." }));

    let stored = app.store.find_by_email("v@x.com").await.unwrap().unwrap();
    assert!(stored.is_vendor);
    assert!(stored.user_id != "client-chosen");
    assert!(stored.password_hash != "Abc12345#");
}

#[tokio::test]
async fn test_signup_weak_password() {
    let app = test_app();

    let response = app
        .server
        .post("/signup")
        .json(&json!({ "user_name": "v", "email": "v@x.com", "user_password": "Abc12345?" }))
        .await;

    assert_error_body(&response, StatusCode::BAD_REQUEST, "error", SIGNUP_REQUIREMENT);
}

#[tokio::test]
async fn test_signup_duplicate_is_server_error() {
    let app = test_app();
    let body = json!({ "user_name": "v", "email": "v@x.com", "user_password": "Abc12345!" });

    app.server.post("/signup").json(&body).await.assert_status(StatusCode::CREATED);
    let response = app.server.post("/signup").json(&body).await;

    assert_error_body(&response, StatusCode::INTERNAL_SERVER_ERROR, "error", "Signup failed.");
}

#[tokio::test]
async fn test_signup_then_login() {
    let app = test_app();

    app.server
        .post("/signup")
        .json(&json!({ "user_name": "v", "email": "v@x.com", "user_password": "Abc12345!" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = app
        .server
        .post("/login")
        .json(&json!({ "email": "v@x.com", "password": "Abc12345!" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["user"]["user_name"], "v");
}

#[tokio::test]
async fn test_login_legacy_payload() {
    let app = test_app();
    register_user(&app, "a@x.com", "Abc12345!").await;

    let response = app
        .server
        .post("/login")
        .json(&json!({ "email": "a@x.com", "password": "Abc12345!" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let user = &body["user"];
    assert_eq!(user["id"], user["user_id"]);
    assert_eq!(user["username"], "a");
    assert_eq!(user["user_name"], "a");
    assert_eq!(user["paid_user"], false);
    assert_eq!(user["first_name"], "Ann");
    assert_eq!(user["address"], "1 Main St");

    let claims = app.tokens.verify(body["token"].as_str().unwrap()).unwrap();
    assert_eq!(claims.email, "a@x.com");
    assert!(!claims.is_vendor);
    assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
}

#[tokio::test]
async fn test_login_wrong_password_matches_unknown_email() {
    let app = test_app();
    register_user(&app, "a@x.com", "Abc12345!").await;

    let wrong_password = app
        .server
        .post("/login")
        .json(&json!({ "email": "a@x.com", "password": "Abc12345?" }))
        .await;
    let unknown_email = app
        .server
        .post("/login")
        .json(&json!({ "email": "b@x.com", "password": "Abc12345!" }))
        .await;

    assert_error_body(&wrong_password, StatusCode::UNAUTHORIZED, "message", "Invalid credentials");
    assert_error_body(&unknown_email, StatusCode::UNAUTHORIZED, "message", "Invalid credentials");
}

#[tokio::test]
async fn test_me_with_registration_token() {
    let app = test_app();
    let token = register_user(&app, "a@x.com", "Abc12345!").await;

    let response = app.server.get("/me").authorization_bearer(token).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["email"], "a@x.com");
    assert_eq!(body["last_name"], "Lee");
}

#[tokio::test]
async fn test_me_rejects_missing_and_forged_tokens() {
    let app = test_app();

    let missing = app.server.get("/me").await;
    assert_error_body(&missing, StatusCode::UNAUTHORIZED, "message", "Invalid or missing token");

    let forged = app.server.get("/me").authorization_bearer("not.a.jwt").await;
    assert_error_body(&forged, StatusCode::UNAUTHORIZED, "message", "Invalid or missing token");
}

#[tokio::test]
async fn test_health() {
    let app = test_app();

    let response = app.server.get("/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok" }));
}
