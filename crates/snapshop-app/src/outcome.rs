//! Result of dispatching one action.

use snapshop_auth::{Account, Session};
use snapshop_commerce::checkout::Order;
use snapshop_commerce::validation::FieldErrors;
use snapshop_store::Scope;

use crate::{Notice, Redirect};

/// Something the action did beyond changing screen state.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Checkout succeeded; the cart has been cleared.
    OrderPlaced(Order),
    /// A new account was stored.
    SignedUp(Account),
    /// A session was written to `scope`.
    LoggedIn { session: Session, scope: Scope },
}

/// What happened when an action was dispatched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outcome {
    /// Toast to show.
    pub notice: Option<Notice>,
    /// Navigation to perform later.
    pub redirect: Option<Redirect>,
    /// Form errors; empty when the action was accepted.
    pub errors: FieldErrors,
    pub effect: Option<Effect>,
}

impl Outcome {
    /// Nothing to report.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_notice(notice: Notice) -> Self {
        Self {
            notice: Some(notice),
            ..Self::default()
        }
    }

    pub fn rejected(errors: FieldErrors, notice: Option<Notice>) -> Self {
        Self {
            notice,
            errors,
            ..Self::default()
        }
    }

    pub fn redirect(mut self, redirect: Redirect) -> Self {
        self.redirect = Some(redirect);
        self
    }

    pub fn effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Whether the action was refused because of invalid input.
    pub fn is_rejected(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn order(&self) -> Option<&Order> {
        match &self.effect {
            Some(Effect::OrderPlaced(order)) => Some(order),
            _ => None,
        }
    }
}
