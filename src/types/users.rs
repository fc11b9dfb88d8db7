//! Account summaries embedded in other records.

use serde::{Deserialize, Serialize};

/// Kind of GitHub account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountType {
    User,
    Organization,
    Bot,
    #[serde(other)]
    Unknown,
}

/// A user, organization or bot as it appears in `owner`, `user`, `author` etc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub login: String,
    #[serde(default)]
    pub node_id: Option<String>,
    #[serde(rename = "type", default = "default_account_type")]
    pub account_type: AccountType,
    #[serde(default)]
    pub site_admin: bool,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

fn default_account_type() -> AccountType {
    AccountType::User
}
