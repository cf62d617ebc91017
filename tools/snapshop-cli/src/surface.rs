//! Terminal rendering surface for the storefront and auth screens.

use std::time::Duration;

use snapshop_app::view::{AuthView, CartView, CheckoutView, StorefrontView};
use snapshop_app::{Navigator, Redirect, Render, Route, View};
use snapshop_commerce::checkout::Order;
use snapshop_commerce::search::CategoryFilter;

use crate::output::{format_delay, theme_badge, Output};

/// Which part of a view a command cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Show {
    Products,
    Cart,
    Checkout,
    Auth,
}

/// Draws views to the terminal.
///
/// Prints nothing in JSON mode; commands print their final result there.
pub struct Terminal<'a> {
    output: &'a Output,
    show: Show,
}

impl<'a> Terminal<'a> {
    pub fn new(output: &'a Output, show: Show) -> Self {
        Self { output, show }
    }
}

impl Render for Terminal<'_> {
    fn render(&mut self, view: &View) {
        if self.output.is_json() {
            return;
        }

        match (self.show, view) {
            (Show::Products, View::Storefront(view)) => print_products(self.output, view),
            (Show::Cart, View::Storefront(view)) => print_cart(self.output, &view.cart),
            (Show::Checkout, View::Storefront(view)) => {
                if let Some(checkout) = &view.checkout {
                    print_checkout(self.output, checkout);
                }
            }
            (Show::Auth, View::Auth(view)) => print_auth(self.output, view),
            _ => {}
        }

        if let Some(notice) = view.notice() {
            self.output.notice(notice);
        }
    }
}

/// Follows redirects, optionally waiting out their delay.
pub struct TerminalNavigator<'a> {
    output: &'a Output,
    wait: bool,
    destination: Option<Route>,
}

impl<'a> TerminalNavigator<'a> {
    /// `wait` sleeps through deferred redirects, as an open tab would.
    pub fn new(output: &'a Output, wait: bool) -> Self {
        Self {
            output,
            wait,
            destination: None,
        }
    }

    /// Where the last redirect pointed, if any.
    pub fn take_destination(&mut self) -> Option<Route> {
        self.destination.take()
    }
}

impl Navigator for TerminalNavigator<'_> {
    fn navigate(&mut self, redirect: &Redirect) {
        let page = route_name(&redirect.to);
        if redirect.is_immediate() {
            self.output.debug(&format!("Going to {}", page));
        } else {
            let delay = format_delay(redirect.after);
            self.output.debug(&format!("Redirecting to {} in {}", page, delay));
            if self.wait {
                std::thread::sleep(redirect.after.min(Duration::from_secs(10)));
            }
        }
        self.destination = Some(redirect.to.clone());
    }
}

/// Human name for a route.
pub fn route_name(route: &Route) -> &'static str {
    match route {
        Route::Storefront => "the storefront",
        Route::Login { .. } => "login",
        Route::Signup => "signup",
    }
}

pub fn print_products(output: &Output, view: &StorefrontView) {
    let title = match view.filter.category {
        CategoryFilter::All => "Products".to_string(),
        CategoryFilter::Only(category) => format!("Products: {}", category.display_name()),
    };
    output.header(&title);
    if !view.filter.query.is_empty() {
        output.kv("search", &view.filter.query);
    }

    if view.no_results {
        output.info("No products found");
        return;
    }

    let widths = [3, 2, 22, 12, 10];
    for card in &view.products {
        output.table_row(
            &[
                &card.id.to_string(),
                &card.icon,
                &card.title,
                card.category.as_str(),
                &card.price,
            ],
            &widths,
        );
    }
}

pub fn print_cart(output: &Output, cart: &CartView) {
    output.header(&format!("Cart ({} items)", cart.item_count));

    if cart.lines.is_empty() {
        output.info("Your cart is empty");
        return;
    }

    let widths = [3, 2, 22, 10, 5];
    for line in &cart.lines {
        output.table_row(
            &[
                &line.id.to_string(),
                &line.icon,
                &line.title,
                &line.price,
                &format!("x{}", line.quantity),
            ],
            &widths,
        );
    }
    output.kv("Total", &cart.total);
}

pub fn print_checkout(output: &Output, checkout: &CheckoutView) {
    output.header("Checkout");
    output.kv("Subtotal", &checkout.subtotal);
    output.kv("Shipping", &checkout.shipping);
    output.kv("Total", &checkout.total);
    output.field_errors(&checkout.errors);
}

pub fn print_order(output: &Output, order: &Order) {
    output.header("Order placed");
    output.kv("Order", &order.id.to_string());
    output.kv("Items", &order.item_count().to_string());
    output.kv("Total", &order.pricing.grand_total.display());
    let fields = &order.fields;
    output.kv(
        "Ship to",
        &format!("{}, {}, {} {}", fields.name, fields.address, fields.city, fields.zip),
    );
}

pub fn print_auth(output: &Output, view: &AuthView) {
    output.field_errors(&view.errors);
    if let Some(strength) = view.strength {
        output.kv("Strength", strength.label());
    }
    output.debug(&format!("{} form, {} theme", view.form.as_str(), theme_badge(view.theme)));
}
