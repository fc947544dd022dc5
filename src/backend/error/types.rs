/**
 * Backend Error Types
 *
 * This module defines the error taxonomy shared by all auth handlers.
 *
 * # Error Categories
 *
 * - Validation (`WeakPassword`) - 400, the client can correct it
 * - Conflict (`DuplicateEmail`) - 400, only raised by `/register`
 * - Authentication (`InvalidCredentials`, `Unauthorized`) - 401, deliberately
 *   non-specific
 * - Lookup (`AccountNotFound`) - 404
 * - Everything else (`Store`, `Hashing`, `Token`) - 500; the cause is logged
 *   and never returned to the caller
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::password::{HashError, PasswordPolicy};
use crate::backend::auth::store::StoreError;

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Password rejected by the named policy
    #[error("password does not satisfy the {0} policy")]
    WeakPassword(PasswordPolicy),

    /// Email already registered (register flow only)
    #[error("an account with this email already exists")]
    DuplicateEmail,

    /// Unknown email or wrong password
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Missing, malformed or expired bearer token
    #[error("missing or invalid bearer token")]
    Unauthorized,

    /// Token subject no longer exists in the store
    #[error("account not found")]
    AccountNotFound,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Hashing(#[from] HashError),

    #[error("token signing failed: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl BackendError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::WeakPassword(_) | Self::DuplicateEmail => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::AccountNotFound => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::Hashing(_) | Self::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to show the client, or `None` for server-side failures
    pub fn public_message(&self) -> Option<&'static str> {
        match self {
            Self::WeakPassword(policy) => Some(policy.requirement()),
            Self::DuplicateEmail => Some("User with this email already exists."),
            Self::InvalidCredentials => Some("Invalid credentials"),
            Self::Unauthorized => Some("Invalid or missing token"),
            Self::AccountNotFound => Some("User not found"),
            Self::Store(_) | Self::Hashing(_) | Self::Token(_) => None,
        }
    }
}
