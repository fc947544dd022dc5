//! Backend Module
//!
//! This module contains all server-side code for the storefront auth
//! service: an Axum HTTP server exposing signup, registration, login and
//! current-user endpoints over a pluggable account store.
//!
//! # Architecture
//!
//! - **`server`** - App creation, application state, store selection
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Accounts, password policies, tokens, handlers
//! - **`middleware`** - Bearer token extraction
//! - **`error`** - Backend error types and their HTTP mapping
//!
//! # Error Handling
//!
//! Handlers return `Result<_, ApiError>`. `ApiError` carries the failing
//! flow, which decides the JSON key (`error` for signup, `message` elsewhere)
//! and the generic text used for 500s. Internal details are logged, never
//! sent to the client.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

pub use error::{ApiError, BackendError, Flow};
pub use server::create_app;
