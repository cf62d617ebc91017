//! Login sessions.

use crate::account::{Account, UserSummary};
use crate::AuthError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use snapshop_store::{keys, JsonExt, KeyValueStore, Scope, Stores};

/// A logged-in session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Always `true` for sessions written by a login.
    pub is_authenticated: bool,
    /// Who is logged in.
    pub user: UserSummary,
    /// When the login happened.
    pub login_time: DateTime<Utc>,
}

impl Session {
    /// Start a session for an account.
    pub fn start(account: &Account) -> Self {
        Self {
            is_authenticated: true,
            user: account.summary(),
            login_time: Utc::now(),
        }
    }

    /// Scope a session is written to: durable for "remember me",
    /// ephemeral otherwise.
    pub fn scope_for(remember_me: bool) -> Scope {
        if remember_me {
            Scope::Durable
        } else {
            Scope::Ephemeral
        }
    }

    /// Write the session to one scope.
    pub fn save<D, E>(&self, stores: &mut Stores<D, E>, scope: Scope) -> Result<(), AuthError>
    where
        D: KeyValueStore,
        E: KeyValueStore,
    {
        stores.scope_mut(scope).set_json(keys::AUTH, self)?;
        tracing::debug!(%scope, email = %self.user.email, "session saved");
        Ok(())
    }

    /// Find the stored session and the scope it lives in.
    ///
    /// The durable scope is checked first and the first entry found decides.
    /// A corrupt entry is skipped as if absent.
    pub fn locate<D, E>(stores: &Stores<D, E>) -> Result<Option<(Scope, Session)>, AuthError>
    where
        D: KeyValueStore,
        E: KeyValueStore,
    {
        for scope in Scope::LOOKUP_ORDER {
            let Some(raw) = stores.scope(scope).get(keys::AUTH)? else {
                continue;
            };
            match serde_json::from_str::<Session>(&raw) {
                Ok(session) => return Ok(Some((scope, session))),
                Err(e) => {
                    tracing::warn!(%scope, error = %e, "ignoring corrupt session entry");
                }
            }
        }
        Ok(None)
    }

    /// The current authenticated session, if any.
    pub fn current<D, E>(stores: &Stores<D, E>) -> Result<Option<Session>, AuthError>
    where
        D: KeyValueStore,
        E: KeyValueStore,
    {
        Ok(Self::locate(stores)?
            .map(|(_, session)| session)
            .filter(|session| session.is_authenticated))
    }
}
