//! Shared Module
//!
//! This module contains types used by both the server binary and the library
//! entry points. Currently that is the application configuration, which is
//! loaded once at startup and handed to the backend.

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, StoreSettings};
