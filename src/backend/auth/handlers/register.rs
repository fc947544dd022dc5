/**
 * Register Handler
 *
 * This module implements the registration handler for POST /register.
 *
 * # Registration Process
 *
 * 1. Validate the password against the register policy
 * 2. Hash password using bcrypt
 * 3. Insert the account if the email is free (one atomic store call)
 * 4. Generate a JWT token valid for one day
 * 5. Return token and the submitted profile
 *
 * # Security
 *
 * - Passwords are hashed using bcrypt (cost 10) before storage
 * - Passwords are never returned in responses
 * - Concurrent registrations of the same email: at most one succeeds
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{RegisterRequest, RegisterResponse, RegisteredUser};
use crate::backend::auth::password::{hash_password, PasswordPolicy};
use crate::backend::auth::sessions::{TokenIssuer, REGISTRATION_TOKEN_TTL};
use crate::backend::auth::store::{SharedUserStore, StoreError};
use crate::backend::auth::users::NewAccount;
use crate::backend::error::{ApiError, BackendError, Flow};

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - weak password, or email already registered
/// * `500 Internal Server Error` - hashing, store or token failure
///
/// # Example Request
///
/// ```http
/// POST /register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "a@x.com",
///   "password": "Abc12345!",
///   "username": "a",
///   "first_name": "Ann",
///   "last_name": "Lee",
///   "address": "1 Main St",
///   "is_vendor": false
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "user": {
///     "user_id": "0b6f3c1e-8a0e-4c55-9d43-5f3a3f0b2a11",
///     "user_name": "a",
///     "email": "a@x.com",
///     "is_vendor": false,
///     "first_name": "Ann",
///     "last_name": "Lee",
///     "address": "1 Main St"
///   },
///   "message": "User registered successfully!"
/// }
/// ```
pub async fn register(
    State(store): State<SharedUserStore>,
    State(tokens): State<TokenIssuer>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    tracing::info!("Register request for username: {}, email: {}", request.username, request.email);

    let response = register_account(&store, &tokens, request)
        .await
        .map_err(|e| ApiError::new(Flow::Register, e))?;

    Ok(Json(response))
}

async fn register_account(
    store: &SharedUserStore,
    tokens: &TokenIssuer,
    request: RegisterRequest,
) -> Result<RegisterResponse, BackendError> {
    if !PasswordPolicy::Register.is_valid(&request.password) {
        tracing::warn!("Registration rejected, weak password for {}", request.email);
        return Err(BackendError::WeakPassword(PasswordPolicy::Register));
    }

    let password_hash = hash_password(&request.password).await?;

    let account = NewAccount {
        user_name: request.username,
        email: request.email,
        is_vendor: request.is_vendor,
        first_name: request.first_name,
        last_name: request.last_name,
        address: request.address,
    }
    .into_account(password_hash);

    // Echo what was submitted, not what the store returns
    let user = RegisteredUser {
        user_id: account.user_id.clone(),
        user_name: account.user_name.clone(),
        email: account.email.clone(),
        is_vendor: account.is_vendor,
        first_name: account.first_name.clone(),
        last_name: account.last_name.clone(),
        address: account.address.clone(),
    };

    let account = store.insert_if_absent(account).await.map_err(|e| match e {
        StoreError::Duplicate => {
            tracing::warn!("Email already exists: {}", user.email);
            BackendError::DuplicateEmail
        }
        other => other.into(),
    })?;

    let token = tokens.issue(&account, REGISTRATION_TOKEN_TTL)?;

    tracing::info!("User registered successfully: {} ({})", account.user_id, account.email);

    Ok(RegisterResponse {
        token,
        user,
        message: "User registered successfully!".to_string(),
    })
}
