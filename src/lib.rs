//! Storefront Auth - Main Library
//!
//! Authentication backend for a multi-vendor storefront: account creation,
//! credential checks and JWT sessions over HTTP.
//!
//! # Module Structure
//!
//! - **`shared`** - Configuration loaded at startup
//! - **`backend`** - Axum server, handlers, stores and error mapping
//!
//! # Usage
//!
//! ```rust,no_run
//! use storefront_auth::backend::server::create_app;
//! use storefront_auth::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::builder().jwt_secret("dev-secret").build()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
