/**
 * Session Tokens
 *
 * This module handles JWT issuance and validation. A session exists only as
 * a signed token held by the client; nothing is persisted server-side.
 *
 * Tokens are HS256-signed and carry `user_id`, `email` and `is_vendor`
 * alongside the standard `iat` / `exp` timestamps.
 */

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::backend::auth::users::Account;

/// Lifetime of the token returned by `POST /register`
pub const REGISTRATION_TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Lifetime of the token returned by `POST /login`
pub const LOGIN_TOKEN_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Account identifier
    pub user_id: String,
    /// Email
    pub email: String,
    /// Vendor flag
    pub is_vendor: bool,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    fn for_account(account: &Account, issued_at: i64, ttl: Duration) -> Self {
        let ttl = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);
        Self {
            user_id: account.user_id.clone(),
            email: account.email.clone(),
            is_vendor: account.is_vendor,
            iat: issued_at,
            exp: issued_at.saturating_add(ttl),
        }
    }
}

/// Signs and validates session tokens with one shared secret
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenIssuer {
    /// Create an issuer from the HS256 secret
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Create a token for an account, valid for `ttl` from now
    pub fn issue(
        &self,
        account: &Account,
        ttl: Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_at(account, Utc::now().timestamp(), ttl)
    }

    pub(crate) fn issue_at(
        &self,
        account: &Account,
        issued_at: i64,
        ttl: Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims::for_account(account, issued_at, ttl);
        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify signature and expiry, returning the claims
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer").finish_non_exhaustive()
    }
}
