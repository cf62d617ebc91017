//! Account types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use snapshop_commerce::ids::AccountId;

/// A registered account.
///
/// The password is kept and compared as plaintext. This is a local demo
/// store, not an authentication system; do not reuse it with real
/// credentials.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Creation time in milliseconds.
    pub id: AccountId,
    /// Display name.
    pub name: String,
    /// Email address, unique across accounts (compared exactly).
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Plaintext password.
    pub password: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create an account stamped with the current time.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let created_at = Utc::now();
        Self {
            id: AccountId::new(created_at.timestamp_millis()),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            password: password.into(),
            created_at,
        }
    }

    /// Check a password attempt.
    pub fn password_matches(&self, attempt: &str) -> bool {
        self.password == attempt
    }

    /// The public part of the account carried in a session.
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// Name, email and phone of a logged-in account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UserSummary {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl UserSummary {
    /// First word of the name, for greetings.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}
