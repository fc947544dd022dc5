/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /login.
 *
 * # Authentication Process
 *
 * 1. Look up the first account registered with the email
 * 2. Verify password using bcrypt
 * 3. Generate JWT token valid for seven days
 * 4. Return token and the legacy user payload
 *
 * # Security
 *
 * - Unknown email and wrong password give the same 401 body, and both
 *   cost one bcrypt verification
 * - User passwords are never returned in responses
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::compat::LegacyUser;
use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::backend::auth::password::{verify_against_dummy, verify_password};
use crate::backend::auth::sessions::{TokenIssuer, LOGIN_TOKEN_TTL};
use crate::backend::auth::store::SharedUserStore;
use crate::backend::error::{ApiError, BackendError, Flow};

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - `{"message": "Invalid credentials"}` if the user is
///   not found or the password is incorrect
/// * `500 Internal Server Error` - store, hashing or token failure
///
/// # Example Request
///
/// ```http
/// POST /login HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "a@x.com",
///   "password": "Abc12345!"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "message": "Login successful",
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "user": {
///     "user_id": "0b6f3c1e-...",
///     "id": "0b6f3c1e-...",
///     "email": "a@x.com",
///     "username": "a",
///     "user_name": "a",
///     "is_vendor": false,
///     "paid_user": false,
///     "first_name": "Ann",
///     "last_name": "",
///     "address": ""
///   }
/// }
/// ```
pub async fn login(
    State(store): State<SharedUserStore>,
    State(tokens): State<TokenIssuer>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    tracing::info!("Login attempt for: {}", request.email);

    let response = authenticate(&store, &tokens, request)
        .await
        .map_err(|e| ApiError::new(Flow::Login, e))?;

    Ok(Json(response))
}

async fn authenticate(
    store: &SharedUserStore,
    tokens: &TokenIssuer,
    request: LoginRequest,
) -> Result<LoginResponse, BackendError> {
    let Some(account) = store.find_by_email(&request.email).await? else {
        tracing::warn!("User not found: {}", request.email);
        verify_against_dummy(&request.password).await?;
        return Err(BackendError::InvalidCredentials);
    };

    if !verify_password(&request.password, &account.password_hash).await? {
        tracing::warn!("Invalid password for user: {}", request.email);
        return Err(BackendError::InvalidCredentials);
    }

    let token = tokens.issue(&account, LOGIN_TOKEN_TTL)?;

    tracing::info!("User logged in successfully: {} ({})", account.user_id, account.email);

    Ok(LoginResponse {
        message: "Login successful".to_string(),
        token,
        user: LegacyUser::from(&account),
    })
}
