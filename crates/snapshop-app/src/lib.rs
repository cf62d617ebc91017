//! Storefront and auth screen controllers for SnapShop.
//!
//! Each screen is an explicit state object driven by `dispatch(action)`.
//! A dispatch returns an [`Outcome`]: the notice to show, an optional
//! deferred [`Redirect`], form errors, and any side effect (order placed,
//! account created, session started). Rendering surfaces implement
//! [`Render`] and [`Navigator`] and honor the durations they are given.
//!
//! # Example
//!
//! ```rust
//! use snapshop_app::{AppConfig, Storefront, StorefrontAction};
//! use snapshop_commerce::ProductId;
//! use snapshop_store::MemoryStore;
//!
//! let mut shop = Storefront::open(MemoryStore::new(), AppConfig::default()).unwrap();
//! let outcome = shop.dispatch(StorefrontAction::AddToCart(ProductId::new(1))).unwrap();
//!
//! assert_eq!(outcome.notice.unwrap().message, "Wireless Headphones added to cart!");
//! assert_eq!(shop.cart().item_count(), 1);
//! ```

mod auth_screen;
mod config;
mod error;
mod navigation;
mod notice;
mod outcome;
mod storefront;
mod theme;
pub mod view;

pub use auth_screen::{AuthAction, AuthScreen, AuthState};
pub use config::AppConfig;
pub use error::AppError;
pub use navigation::{NoNavigation, Navigator, Redirect, Route};
pub use notice::{Notice, NoticeLevel};
pub use outcome::{Effect, Outcome};
pub use storefront::{CheckoutForm, Storefront, StorefrontAction, StorefrontState};
pub use theme::Theme;
pub use view::{Render, View};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        AppConfig, AppError, AuthAction, AuthScreen, Effect, Navigator, Notice, Outcome, Redirect,
        Render, Route, Storefront, StorefrontAction, Theme, View,
    };
}
