//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, layers and health check
//! └── api_routes.rs   - Authentication endpoints
//! ```

pub mod router;
pub mod api_routes;

pub use router::create_router;
