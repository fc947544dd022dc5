/**
 * Authentication Handler Types
 *
 * This module defines the request and response bodies used by the signup,
 * register and login handlers.
 *
 * Request fields are lenient the way existing clients expect: absent strings
 * deserialize as empty (a missing password then fails the policy with 400),
 * and `is_vendor` is read by truthiness rather than as a strict boolean.
 */

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::backend::auth::handlers::compat::LegacyUser;

/// Read a JSON value as a flag: `true`, non-zero numbers and non-empty
/// strings are set; `false`, `0`, `""`, `null` and absent are not.
pub fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(flag) => flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// Body of `POST /signup`
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct SignupRequest {
    /// Accepted for older clients; identifiers are always assigned server-side
    #[serde(default)]
    pub user_id: Option<Value>,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub email: String,
    /// Plaintext password (hashed before storage)
    #[serde(default)]
    pub user_password: String,
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub is_vendor: bool,
}

/// Body of `POST /register`
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    /// Plaintext password (hashed before storage)
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub is_vendor: bool,
}

/// Body of `POST /login`
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Plain `{ "message": ... }` body
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Profile echoed back by `POST /register`
///
/// Built from the request input and the new identifier, not re-read from
/// the store.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RegisteredUser {
    pub user_id: String,
    pub user_name: String,
    pub email: String,
    pub is_vendor: bool,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
}

/// Body of a successful `POST /register`
#[derive(Serialize, Deserialize, Debug)]
pub struct RegisterResponse {
    /// JWT token (1-day expiration)
    pub token: String,
    pub user: RegisteredUser,
    pub message: String,
}

/// Body of a successful `POST /login`
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub message: String,
    /// JWT token (7-day expiration)
    pub token: String,
    pub user: LegacyUser,
}
