/**
 * Legacy User Payload
 *
 * Older storefront clients read the account identifier as either `user_id`
 * or `id`, and the display name as either `username` or `user_name`. This
 * shim is the only place those duplicates exist; handlers work with
 * `Account` and convert at the response boundary.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::Account;

/// Account as returned by `POST /login` and `GET /me`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LegacyUser {
    pub user_id: String,
    pub id: String,
    pub email: String,
    pub username: String,
    pub user_name: String,
    pub is_vendor: bool,
    pub paid_user: bool,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
}

impl From<&Account> for LegacyUser {
    fn from(account: &Account) -> Self {
        Self {
            user_id: account.user_id.clone(),
            id: account.user_id.clone(),
            email: account.email.clone(),
            username: account.user_name.clone(),
            user_name: account.user_name.clone(),
            is_vendor: account.is_vendor,
            paid_user: account.paid_user.unwrap_or(false),
            first_name: account.first_name.clone().unwrap_or_default(),
            last_name: account.last_name.clone().unwrap_or_default(),
            address: account.address.clone().unwrap_or_default(),
        }
    }
}
