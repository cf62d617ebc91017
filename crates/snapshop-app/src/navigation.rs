//! Routes, deferred redirects, and the navigation collaborator.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A screen the application can show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "route", rename_all = "lowercase")]
pub enum Route {
    /// The catalog and cart.
    Storefront,
    /// The login form, optionally with the email pre-filled.
    Login { email: Option<String> },
    /// The signup form.
    Signup,
}

/// Navigation to perform once `after` has elapsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redirect {
    pub to: Route,
    pub after: Duration,
}

impl Redirect {
    /// Navigate without waiting.
    pub fn now(to: Route) -> Self {
        Self {
            to,
            after: Duration::ZERO,
        }
    }

    pub fn after(to: Route, after: Duration) -> Self {
        Self { to, after }
    }

    pub fn is_immediate(&self) -> bool {
        self.after.is_zero()
    }
}

/// Receives redirects. The implementation decides how to wait.
pub trait Navigator {
    fn navigate(&mut self, redirect: &Redirect);
}

/// Navigator that ignores every redirect.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoNavigation;

impl Navigator for NoNavigation {
    fn navigate(&mut self, _redirect: &Redirect) {}
}

impl Navigator for Vec<Redirect> {
    fn navigate(&mut self, redirect: &Redirect) {
        self.push(redirect.clone());
    }
}
