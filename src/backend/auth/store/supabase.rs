/**
 * Supabase Account Store
 *
 * Reaches the hosted `user` table through its PostgREST interface at
 * `<project>/rest/v1/<table>`, authenticating with the service-role key.
 *
 * # Conditional Insert
 *
 * Inserts are sent with `on_conflict=email` and
 * `Prefer: resolution=ignore-duplicates`, which PostgREST turns into
 * `INSERT ... ON CONFLICT (email) DO NOTHING`. An empty representation means
 * the email was taken. A 409 (primary-key clash on `user_id`) is reported the
 * same way.
 *
 * # Table Requirements
 *
 * `on_conflict=email` needs a UNIQUE constraint on `"user"(email)`. Without
 * it PostgREST answers 400 with code `42P10` and every insert fails. Apply
 * `supabase/user_email_unique.sql` to the hosted project once:
 *
 * ```sql
 * ALTER TABLE "user" ADD CONSTRAINT user_email_key UNIQUE (email);
 * ```
 */

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};

use super::{StoreError, UserStore};
use crate::backend::auth::users::Account;

/// Account store backed by a Supabase project
#[derive(Debug, Clone)]
pub struct SupabaseUserStore {
    client: Client,
    table_url: String,
    service_key: String,
}

impl SupabaseUserStore {
    /// Create a store for `table` in the project at `project_url`
    pub fn new(project_url: &str, service_key: impl Into<String>, table: &str) -> Self {
        Self::with_client(Client::new(), project_url, service_key, table)
    }

    pub fn with_client(
        client: Client,
        project_url: &str,
        service_key: impl Into<String>,
        table: &str,
    ) -> Self {
        let table_url = format!("{}/rest/v1/{}", project_url.trim_end_matches('/'), table);
        Self {
            client,
            table_url,
            service_key: service_key.into(),
        }
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
    }

    async fn select_one(&self, column: &str, value: &str) -> Result<Option<Account>, StoreError> {
        let filter = format!("eq.{value}");
        let request = self.client.get(&self.table_url).query(&[
            ("select", "*"),
            (column, filter.as_str()),
            ("limit", "1"),
        ]);

        let response = self.authorized(request).send().await?;
        let rows: Vec<Account> = expect_success(response).await?.json().await?;
        Ok(rows.into_iter().next())
    }
}

async fn expect_success(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(StoreError::Remote { status, body })
}

/// PostgreSQL 42P10: no unique constraint matches the `on_conflict` columns
fn is_missing_conflict_target(err: &StoreError) -> bool {
    match err {
        StoreError::Remote { status, body } => {
            *status == StatusCode::BAD_REQUEST
                && serde_json::from_str::<serde_json::Value>(body)
                    .ok()
                    .and_then(|v| v.get("code").and_then(|c| c.as_str()).map(|c| c == "42P10"))
                    .unwrap_or(false)
        }
        _ => false,
    }
}

#[async_trait]
impl UserStore for SupabaseUserStore {
    async fn insert_if_absent(&self, account: Account) -> Result<Account, StoreError> {
        let request = self
            .client
            .post(&self.table_url)
            .query(&[("on_conflict", "email")])
            .header("Prefer", "resolution=ignore-duplicates,return=representation")
            .json(&account);

        let response = self.authorized(request).send().await?;
        if response.status() == StatusCode::CONFLICT {
            return Err(StoreError::Duplicate);
        }

        let rows: Vec<Account> = match expect_success(response).await {
            Ok(response) => response.json().await?,
            Err(err) => {
                if is_missing_conflict_target(&err) {
                    tracing::error!(
                        "Table {} has no UNIQUE constraint on email; apply supabase/user_email_unique.sql",
                        self.table_url
                    );
                }
                return Err(err);
            }
        };
        rows.into_iter().next().ok_or(StoreError::Duplicate)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        self.select_one("email", email).await
    }

    async fn find_by_id(&self, user_id: &str) -> Result<Option<Account>, StoreError> {
        self.select_one("user_id", user_id).await
    }
}
