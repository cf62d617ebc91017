//! View models handed to the rendering surface.

use serde::Serialize;
use snapshop_auth::{FormKind, PasswordStrength};
use snapshop_commerce::cart::{CartLine, CartPricing};
use snapshop_commerce::prelude::*;

use crate::{Notice, Theme};

/// Everything a surface needs to draw one screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "lowercase")]
pub enum View {
    Storefront(StorefrontView),
    Auth(AuthView),
}

/// Receives a fresh view after every dispatched action.
pub trait Render {
    fn render(&mut self, view: &View);
}

impl Render for Vec<View> {
    fn render(&mut self, view: &View) {
        self.push(view.clone());
    }
}

/// One product in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub icon: String,
    pub category: Category,
    pub title: String,
    pub description: String,
    /// Formatted price, e.g. `₹12,499`.
    pub price: String,
}

impl ProductCard {
    pub fn new(product: &Product, currency: Currency) -> Self {
        Self {
            id: product.id,
            icon: product.icon.clone(),
            category: product.category,
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price_in(currency).display(),
        }
    }
}

/// One row in the cart sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineView {
    pub id: ProductId,
    pub icon: String,
    pub title: String,
    /// Formatted unit price.
    pub price: String,
    pub quantity: u32,
}

impl CartLineView {
    pub fn new(line: &CartLine, currency: Currency) -> Self {
        Self {
            id: line.product.id,
            icon: line.product.icon.clone(),
            title: line.product.title.clone(),
            price: line.product.price_in(currency).display(),
            quantity: line.quantity,
        }
    }
}

/// The cart sidebar and header badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub open: bool,
    pub lines: Vec<CartLineView>,
    /// Badge count: total units.
    pub item_count: u64,
    /// Formatted total.
    pub total: String,
    pub checkout_enabled: bool,
}

/// The checkout modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutView {
    pub subtotal: String,
    pub shipping: String,
    pub total: String,
    /// Fields as last submitted.
    pub fields: CheckoutFields,
    pub errors: FieldErrors,
}

impl CheckoutView {
    pub fn new(pricing: &CartPricing, fields: CheckoutFields, errors: FieldErrors) -> Self {
        Self {
            subtotal: pricing.subtotal.display(),
            shipping: pricing.shipping_total.display(),
            total: pricing.grand_total.display(),
            fields,
            errors,
        }
    }
}

/// The storefront screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorefrontView {
    pub theme: Theme,
    pub filter: FilterState,
    pub products: Vec<ProductCard>,
    /// Nothing matches the current filter.
    pub no_results: bool,
    pub cart: CartView,
    /// Present while the checkout modal is open.
    pub checkout: Option<CheckoutView>,
    pub notice: Option<Notice>,
}

/// The login/signup screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthView {
    pub theme: Theme,
    pub form: FormKind,
    pub errors: FieldErrors,
    /// Email to pre-fill in the login form.
    pub login_email: String,
    /// Rating of the signup password typed so far.
    pub strength: Option<PasswordStrength>,
    pub notice: Option<Notice>,
}

impl View {
    pub fn notice(&self) -> Option<&Notice> {
        match self {
            View::Storefront(view) => view.notice.as_ref(),
            View::Auth(view) => view.notice.as_ref(),
        }
    }
}
