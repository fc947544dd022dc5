//! Backend Error Module
//!
//! This module defines the error types raised by the auth handlers and their
//! conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - BackendError taxonomy and status mapping
//! └── conversion.rs - Flow-aware IntoResponse (ApiError)
//! ```
//!
//! Handlers produce a `BackendError`, then tag it with the `Flow` they belong
//! to. `ApiError` picks the JSON key and the generic 5xx message for that
//! flow, logs server-side causes, and never echoes them to the client.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use conversion::{ApiError, Flow};
pub use types::BackendError;
