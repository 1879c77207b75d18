//! # User model
//!
//! ## [`User`]
//!
//! The stored account, built from one row of the `users` table (or one entry of the in-memory
//! store). `email` is the unique lookup key and is always stored normalised (trimmed,
//! lower-cased). `password_hash` is an Argon2id PHC string.
//!
//! ## [`UserInfo`]
//!
//! What pages are allowed to see: no hash, no timestamps, the id as a string. It is
//! built either from a stored [`User`] or from the claims in the session cookie.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Brand,
    Influencer,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Brand => "brand",
            AccountType::Influencer => "influencer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccountType::Brand => "Brand",
            AccountType::Influencer => "Influencer",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "brand" => Ok(AccountType::Brand),
            "influencer" => Ok(AccountType::Influencer),
            other => Err(format!("unknown account type: {other}")),
        }
    }
}

/// Full stored account.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub account_type: Option<AccountType>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            account_type: self.account_type,
        }
    }
}

/// Account data collected at sign-up, before an id is assigned.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub account_type: Option<AccountType>,
}

impl NewUser {
    pub fn into_user(self, now: DateTime<Utc>) -> User {
        User {
            id: Uuid::new_v4(),
            email: self.email,
            password_hash: self.password_hash,
            first_name: self.first_name,
            last_name: self.last_name,
            account_type: self.account_type,
            created_at: now,
            updated_at: now,
        }
    }
}

/// User information safe to render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub account_type: Option<AccountType>,
}

impl UserInfo {
    /// "First Last", falling back to the email when no name is set.
    pub fn display_name(&self) -> String {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if name.is_empty() {
            self.email.clone()
        } else {
            name
        }
    }
}
