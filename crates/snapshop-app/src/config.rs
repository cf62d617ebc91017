//! Application configuration.

use serde::{Deserialize, Serialize};
use snapshop_commerce::cart::ShippingPolicy;
use std::time::Duration;

use crate::Theme;

/// Storefront and auth screen settings.
///
/// Every field has a default, so an empty `[app]` table is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Flat shipping fee per order, in catalog currency units.
    pub shipping_fee: i64,

    /// Delay before leaving the auth screen after a successful login or
    /// signup, in milliseconds.
    pub redirect_delay_ms: u64,

    /// How long ordinary notices stay up, in milliseconds.
    pub notice_ms: u64,

    /// How long the order confirmation stays up, in milliseconds.
    pub order_notice_ms: u64,

    /// Theme to use when none has been saved yet. Stands in for the
    /// system color-scheme preference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_theme: Option<Theme>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            shipping_fee: 50,
            redirect_delay_ms: 1500,
            notice_ms: 3000,
            order_notice_ms: 5000,
            default_theme: None,
        }
    }
}

impl AppConfig {
    pub fn shipping_policy(&self) -> ShippingPolicy {
        ShippingPolicy::flat(self.shipping_fee)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_ms)
    }

    pub fn order_notice_duration(&self) -> Duration {
        Duration::from_millis(self.order_notice_ms)
    }

    /// Set the shipping fee.
    pub fn with_shipping_fee(mut self, fee: i64) -> Self {
        self.shipping_fee = fee;
        self
    }

    /// Set the redirect delay.
    pub fn with_redirect_delay(mut self, delay: Duration) -> Self {
        self.redirect_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the theme used before one is saved.
    pub fn with_default_theme(mut self, theme: Theme) -> Self {
        self.default_theme = Some(theme);
        self
    }
}
