/**
 * Store Loading
 *
 * This module turns the configured `StoreSettings` into a live `UserStore`.
 *
 * # Selection
 *
 * - Supabase settings win when present (hosted PostgREST table)
 * - Otherwise `DATABASE_URL` selects a direct PostgreSQL connection
 * - With neither, accounts live in process memory and are lost on restart
 */

use std::sync::Arc;

use crate::backend::auth::store::{
    MemoryUserStore, PostgresUserStore, SharedUserStore, StoreError, SupabaseUserStore,
};
use crate::shared::StoreSettings;

/// Build the account store described by `settings`
///
/// # Errors
///
/// Returns an error if the PostgreSQL connection cannot be established.
/// Migration failures are logged by the adapter and do not abort startup.
pub async fn load_store(settings: &StoreSettings) -> Result<SharedUserStore, StoreError> {
    match settings {
        StoreSettings::Supabase {
            url,
            service_key,
            table,
        } => {
            tracing::info!("Using Supabase account store at {} (table {})", url, table);
            Ok(Arc::new(SupabaseUserStore::new(url, service_key.clone(), table)))
        }
        StoreSettings::Postgres { database_url } => {
            let store = PostgresUserStore::connect(database_url).await?;
            Ok(Arc::new(store))
        }
        StoreSettings::Memory => {
            tracing::warn!("No account store configured. Accounts will be kept in memory only.");
            Ok(Arc::new(MemoryUserStore::new()))
        }
    }
}
