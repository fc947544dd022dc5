//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - bearer token extractor for routes that need a signed-in user
//!
//! # Example
//!
//! ```rust,no_run
//! use storefront_auth::backend::middleware::AuthUser;
//!
//! async fn whoami(AuthUser(claims): AuthUser) -> String {
//!     claims.email
//! }
//! ```

pub mod auth;

pub use auth::AuthUser;
