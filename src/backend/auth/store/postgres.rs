/**
 * PostgreSQL Account Store
 *
 * Talks to the `user` table directly through an `sqlx` pool. The schema is
 * created by the bundled migrations when the store connects.
 *
 * # Uniqueness
 *
 * `user_id` is the primary key and `email` carries a UNIQUE constraint, so
 * `INSERT ... ON CONFLICT DO NOTHING RETURNING` yields no row when either is
 * taken.
 */

use async_trait::async_trait;
use sqlx::PgPool;

use super::{StoreError, UserStore};
use crate::backend::auth::users::Account;

const ACCOUNT_COLUMNS: &str =
    "user_id, user_name, email, user_password, is_vendor, first_name, last_name, address, paid_user";

/// Account store backed by a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    /// Connect and bring the schema up to date
    ///
    /// Migration failures are logged and the store is returned anyway; the
    /// schema may already be managed elsewhere.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        tracing::info!("Connecting to database...");
        let pool = PgPool::connect(database_url).await?;
        tracing::info!("Database connection pool created successfully");

        match sqlx::migrate!().run(&pool).await {
            Ok(()) => tracing::info!("Database migrations completed successfully"),
            Err(e) => {
                tracing::error!("Failed to run database migrations: {}", e);
                tracing::warn!("Continuing without migrations - database might not be up to date");
            }
        }

        Ok(Self { pool })
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn insert_if_absent(&self, account: Account) -> Result<Account, StoreError> {
        let query = format!(
            r#"
            INSERT INTO "user" (user_id, user_name, email, user_password, is_vendor, first_name, last_name, address)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT DO NOTHING
            RETURNING {ACCOUNT_COLUMNS}
            "#
        );

        sqlx::query_as::<_, Account>(&query)
            .bind(&account.user_id)
            .bind(&account.user_name)
            .bind(&account.email)
            .bind(&account.password_hash)
            .bind(account.is_vendor)
            .bind(&account.first_name)
            .bind(&account.last_name)
            .bind(&account.address)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::Duplicate)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        let query = format!(
            r#"
            SELECT {ACCOUNT_COLUMNS}
            FROM "user"
            WHERE email = $1
            ORDER BY created_at
            LIMIT 1
            "#
        );

        let account = sqlx::query_as::<_, Account>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(account)
    }

    async fn find_by_id(&self, user_id: &str) -> Result<Option<Account>, StoreError> {
        let query = format!(
            r#"
            SELECT {ACCOUNT_COLUMNS}
            FROM "user"
            WHERE user_id = $1
            "#
        );

        let account = sqlx::query_as::<_, Account>(&query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(account)
    }
}
