/**
 * Authentication Extractor
 *
 * This module provides the extractor for routes that require a signed-in
 * user. It reads the JWT from the `Authorization: Bearer <token>` header,
 * verifies it, and hands the claims to the handler.
 */

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::backend::auth::sessions::{Claims, TokenIssuer};
use crate::backend::error::{ApiError, BackendError, Flow};

/// Claims of a verified bearer token
///
/// Rejects with `401 {"message": "Invalid or missing token"}` when the header
/// is absent, not a bearer token, or fails verification (bad signature or
/// expired).
#[derive(Clone, Debug)]
pub struct AuthUser(pub Claims);

impl<S> FromRequestParts<S> for AuthUser
where
    TokenIssuer: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or_else(|| {
            tracing::warn!("Missing or malformed Authorization header");
            ApiError::new(Flow::Session, BackendError::Unauthorized)
        })?;

        let claims = TokenIssuer::from_ref(state).verify(token).map_err(|e| {
            tracing::warn!("Invalid token: {:?}", e);
            ApiError::new(Flow::Session, BackendError::Unauthorized)
        })?;

        Ok(AuthUser(claims))
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
