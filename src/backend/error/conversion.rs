/**
 * Error Conversion
 *
 * This module turns a `BackendError` into the HTTP response each endpoint
 * has always produced. The endpoints disagree on the JSON shape, so the
 * error is paired with the `Flow` it came from:
 *
 * | Flow       | Key       | 5xx message                          |
 * |------------|-----------|--------------------------------------|
 * | `Signup`   | `error`   | `Signup failed.`                     |
 * | `Register` | `message` | `Server error during registration.`  |
 * | `Login`    | `message` | `Login failed due to server error.`  |
 * | `Session`  | `message` | `Server error.`                      |
 *
 * ```json
 * { "message": "Invalid credentials" }
 * ```
 */

use axum::response::{IntoResponse, Json, Response};
use serde_json::{Map, Value};

use crate::backend::error::types::BackendError;

/// Endpoint family an error was raised in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Signup,
    Register,
    Login,
    Session,
}

impl Flow {
    /// JSON key the message is reported under
    pub fn body_key(self) -> &'static str {
        match self {
            Self::Signup => "error",
            Self::Register | Self::Login | Self::Session => "message",
        }
    }

    /// Generic message for server-side failures
    pub fn server_error_message(self) -> &'static str {
        match self {
            Self::Signup => "Signup failed.",
            Self::Register => "Server error during registration.",
            Self::Login => "Login failed due to server error.",
            Self::Session => "Server error.",
        }
    }
}

/// A `BackendError` tagged with the flow that produced it
#[derive(Debug)]
pub struct ApiError {
    flow: Flow,
    error: BackendError,
}

impl ApiError {
    pub fn new(flow: Flow, error: impl Into<BackendError>) -> Self {
        Self {
            flow,
            error: error.into(),
        }
    }

    pub fn flow(&self) -> Flow {
        self.flow
    }

    pub fn error(&self) -> &BackendError {
        &self.error
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.error.status_code();

        let message = match self.error.public_message() {
            Some(message) => message,
            None => {
                tracing::error!(flow = ?self.flow, error = %self.error, "request failed");
                self.flow.server_error_message()
            }
        };

        let mut body = Map::new();
        body.insert(
            self.flow.body_key().to_string(),
            Value::String(message.to_string()),
        );

        (status, Json(Value::Object(body))).into_response()
    }
}
