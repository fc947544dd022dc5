/**
 * Account Model
 *
 * This module defines the account record as it is held by the backing store,
 * and the single place where new account identifiers are minted.
 */

use serde::{Deserialize, Deserializer, Serialize};

/// Read a nullable column as the type's default
///
/// Older signups stored `null` for `user_name` and `is_vendor` when the
/// client omitted them.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Account struct representing a row in the `user` table
///
/// Field names follow the table's column names on the wire. The password
/// column only ever holds a bcrypt digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Account {
    /// Unique account identifier
    pub user_id: String,
    /// Display name, empty when never set
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_name: String,
    /// Email address (unique)
    pub email: String,
    /// bcrypt digest of the password
    #[serde(rename = "user_password")]
    #[sqlx(rename = "user_password")]
    pub password_hash: String,
    /// Whether the account sells on the storefront
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_vendor: bool,
    /// Optional profile fields
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    /// Paid-user flag, managed outside this service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_user: Option<bool>,
}

/// Fields supplied by a registration request
#[derive(Debug, Clone, Default)]
pub struct NewAccount {
    pub user_name: String,
    pub email: String,
    pub is_vendor: bool,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
}

impl NewAccount {
    /// Build the stored record with a freshly minted identifier
    pub fn into_account(self, password_hash: String) -> Account {
        Account {
            user_id: new_account_id(),
            user_name: self.user_name,
            email: self.email,
            password_hash,
            is_vendor: self.is_vendor,
            first_name: self.first_name,
            last_name: self.last_name,
            address: self.address,
            paid_user: None,
        }
    }
}

/// Mint a new account identifier
///
/// Every registration path takes its identifier from here.
pub fn new_account_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
