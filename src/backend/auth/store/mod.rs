//! Account Store
//!
//! This module defines the `UserStore` port through which handlers reach the
//! backing store, and its adapters.
//!
//! # Adapters
//!
//! - **`supabase`** - hosted PostgREST endpoint over HTTPS (`reqwest`)
//! - **`postgres`** - direct PostgreSQL connection (`sqlx`)
//! - **`memory`** - process-local map for development and tests
//!
//! # Uniqueness
//!
//! `insert_if_absent` is a single conditional write. Two concurrent inserts
//! with the same email (or identifier) cannot both succeed; the loser gets
//! `StoreError::Duplicate`.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::backend::auth::users::Account;

/// In-memory adapter
pub mod memory;

/// PostgreSQL adapter
pub mod postgres;

/// Supabase REST adapter
pub mod supabase;

pub use memory::MemoryUserStore;
pub use postgres::PostgresUserStore;
pub use supabase::SupabaseUserStore;

/// Store handle shared by all handlers
pub type SharedUserStore = Arc<dyn UserStore>;

/// Errors raised by store adapters
#[derive(Debug, Error)]
pub enum StoreError {
    /// An account with the same email or identifier already exists
    #[error("an account with this email or identifier already exists")]
    Duplicate,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The hosted store answered with a non-success status
    #[error("store returned {status}: {body}")]
    Remote {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Persistence port for account records
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert the account unless its email or identifier is taken
    async fn insert_if_absent(&self, account: Account) -> Result<Account, StoreError>;

    /// First account registered with this email, if any
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError>;

    /// Account with this identifier, if any
    async fn find_by_id(&self, user_id: &str) -> Result<Option<Account>, StoreError>;
}
