/**
 * In-Memory Account Store
 *
 * Keeps accounts in a map guarded by a tokio `RwLock`. The uniqueness check
 * and the insert happen under one write guard. Used when no remote store is
 * configured, and by the test suite.
 */

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{StoreError, UserStore};
use crate::backend::auth::users::Account;

/// Accounts keyed by identifier
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert_if_absent(&self, account: Account) -> Result<Account, StoreError> {
        let mut accounts = self.accounts.write().await;

        let taken = accounts.contains_key(&account.user_id)
            || accounts.values().any(|existing| existing.email == account.email);
        if taken {
            return Err(StoreError::Duplicate);
        }

        accounts.insert(account.user_id.clone(), account.clone());
        Ok(account)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|account| account.email == email).cloned())
    }

    async fn find_by_id(&self, user_id: &str) -> Result<Option<Account>, StoreError> {
        Ok(self.accounts.read().await.get(user_id).cloned())
    }
}
