//! Response assertion helpers
//!
//! Error bodies carry exactly one key (`error` for signup, `message`
//! elsewhere); these helpers check both the key and the text.

use axum::http::StatusCode;
use axum_test::TestResponse;
use serde_json::Value;

/// Assert status and a single-key JSON body
pub fn assert_error_body(response: &TestResponse, status: StatusCode, key: &str, message: &str) {
    response.assert_status(status);

    let body: Value = response.json();
    let object = body.as_object().expect("error body is a JSON object");
    assert_eq!(object.len(), 1, "unexpected error body: {}", body);
    assert_eq!(object.get(key).and_then(Value::as_str), Some(message), "body: {}", body);
}
