//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request and response types
//! ├── compat.rs    - Legacy user payload for older clients
//! ├── signup.rs    - Minimal account creation
//! ├── register.rs  - Full registration with token
//! ├── login.rs     - User authentication handler
//! └── me.rs        - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /signup - account creation, no token
//! - **`register`** - POST /register - account creation, 1-day token
//! - **`login`** - POST /login - credential check, 7-day token
//! - **`get_me`** - GET /me - account behind a bearer token
//!
//! # Example
//!
//! ```rust,no_run
//! use storefront_auth::backend::auth::handlers::{signup, register, login, get_me};
//! use storefront_auth::backend::server::state::AppState;
//! use axum::{routing::{get, post}, Router};
//!
//! # fn example(state: AppState) -> Router {
//! Router::new()
//!     .route("/signup", post(signup))
//!     .route("/register", post(register))
//!     .route("/login", post(login))
//!     .route("/me", get(get_me))
//!     .with_state(state)
//! # }
//! ```

/// Request and response types
pub mod types;

/// Duplicate-field user payload
pub mod compat;

/// Signup handler
pub mod signup;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

pub use compat::LegacyUser;
pub use types::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequest, RegisterResponse,
    RegisteredUser, SignupRequest,
};

pub use login::login;
pub use me::get_me;
pub use register::register;
pub use signup::signup;
