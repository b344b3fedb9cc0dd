//! User types
//!
//! `UserIdentity` is the signed-in user as seen by the client; `UserAccount`
//! is the admin view of any account.

use serde::{Deserialize, Serialize};

/// Identifier of a user account.
pub type UserId = i64;

/// Signed-in user. Its presence gates the notification channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// Account row in the admin user table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub admin: bool,
}
