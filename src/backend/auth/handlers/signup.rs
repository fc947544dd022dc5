/**
 * Signup Handler
 *
 * This module implements the account creation handler for POST /signup.
 *
 * # Registration Process
 *
 * 1. Validate the password against the signup policy
 * 2. Hash password using bcrypt
 * 3. Insert the account (conditional on email and identifier being free)
 * 4. Return a confirmation message
 *
 * # Differences from /register
 *
 * - Symbol set is `!@#$%^&*`
 * - No token is issued
 * - A store-level duplicate is not reported as such; it is a 500 like any
 *   other store failure
 * - Errors use the `error` key instead of `message`
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::{MessageResponse, SignupRequest};
use crate::backend::auth::password::{hash_password, PasswordPolicy};
use crate::backend::auth::store::SharedUserStore;
use crate::backend::auth::users::NewAccount;
use crate::backend::error::{ApiError, BackendError, Flow};

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - `{"error": ...}` if the password fails the signup policy
/// * `500 Internal Server Error` - `{"error": "Signup failed."}` on any hashing
///   or store failure, including an already-registered email
///
/// # Example Request
///
/// ```http
/// POST /signup HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "user_id": "ignored",
///   "user_name": "gadget_shop",
///   "email": "vendor@example.com",
///   "user_password": "Abc12345!",
///   "is_vendor": true
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// { "message": "User registered successfully." }
/// ```
pub async fn signup(
    State(store): State<SharedUserStore>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    tracing::info!("Signup request for user_name: {}, email: {}", request.user_name, request.email);

    create_account(&store, request)
        .await
        .map_err(|e| ApiError::new(Flow::Signup, e))?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully.")),
    ))
}

async fn create_account(store: &SharedUserStore, request: SignupRequest) -> Result<(), BackendError> {
    if !PasswordPolicy::Signup.is_valid(&request.user_password) {
        tracing::warn!("Signup rejected, weak password for {}", request.email);
        return Err(BackendError::WeakPassword(PasswordPolicy::Signup));
    }

    if let Some(client_id) = &request.user_id {
        tracing::debug!("Ignoring client-supplied user_id {}", client_id);
    }

    let password_hash = hash_password(&request.user_password).await?;

    let account = NewAccount {
        user_name: request.user_name,
        email: request.email,
        is_vendor: request.is_vendor,
        ..Default::default()
    }
    .into_account(password_hash);

    let account = store.insert_if_absent(account).await?;
    tracing::info!("User created successfully: {} ({})", account.user_id, account.email);

    Ok(())
}
