//! The storefront screen: catalog, filters, cart, and checkout.

use snapshop_commerce::cart::{load_cart, save_cart};
use snapshop_commerce::checkout::{self, Order};
use snapshop_commerce::prelude::*;
use snapshop_commerce::search::visible_products;
use snapshop_store::KeyValueStore;

use crate::view::{CartLineView, CartView, CheckoutView, ProductCard, StorefrontView};
use crate::{AppConfig, AppError, Effect, Navigator, Notice, Outcome, Render, Theme, View};

/// Something the shopper did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorefrontAction {
    /// Replace the search query.
    Search(String),
    /// Pick a category filter.
    Filter(CategoryFilter),
    AddToCart(ProductId),
    RemoveFromCart(ProductId),
    /// Adjust a line's quantity by a signed amount.
    ChangeQuantity(ProductId, i64),
    OpenCart,
    CloseCart,
    OpenCheckout,
    /// Close the modal and discard its fields and errors.
    CloseCheckout,
    SubmitCheckout(CheckoutFields),
    ToggleTheme,
}

/// Screen state owned by the storefront.
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontState {
    pub catalog: Catalog,
    pub cart: Cart,
    pub filter: FilterState,
    pub theme: Theme,
    pub cart_open: bool,
    /// Checkout modal contents while it is open.
    pub checkout: Option<CheckoutForm>,
    /// Last notice, shown until the next action.
    pub notice: Option<Notice>,
}

/// Checkout modal contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutForm {
    pub fields: CheckoutFields,
    pub errors: FieldErrors,
}

/// Storefront controller over a durable store.
///
/// The cart snapshot is written to `store` after every action that changes
/// the cart.
#[derive(Debug)]
pub struct Storefront<S> {
    state: StorefrontState,
    store: S,
    config: AppConfig,
}

impl<S: KeyValueStore> Storefront<S> {
    /// Open the storefront with the demo catalog, restoring the saved cart
    /// and theme.
    pub fn open(store: S, config: AppConfig) -> Result<Self, AppError> {
        Self::with_catalog(store, config, Catalog::demo())
    }

    /// Open the storefront over a specific catalog.
    pub fn with_catalog(store: S, config: AppConfig, catalog: Catalog) -> Result<Self, AppError> {
        let cart = load_cart(&store, catalog.currency())?;
        let theme = Theme::load(&store, config.default_theme.unwrap_or_default())?;
        tracing::debug!(
            products = catalog.len(),
            cart_items = cart.item_count(),
            %theme,
            "storefront opened"
        );

        Ok(Self {
            state: StorefrontState {
                catalog,
                cart,
                filter: FilterState::new(),
                theme,
                cart_open: false,
                checkout: None,
                notice: None,
            },
            store,
            config,
        })
    }

    pub fn state(&self) -> &StorefrontState {
        &self.state
    }

    pub fn cart(&self) -> &Cart {
        &self.state.cart
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Reload the page: re-read the saved cart and theme and reset the
    /// filter, sidebar, modal and notice.
    pub fn reload(&mut self) -> Result<(), AppError> {
        self.state.cart = load_cart(&self.store, self.state.catalog.currency())?;
        self.state.theme = Theme::load(&self.store, self.config.default_theme.unwrap_or_default())?;
        self.state.filter = FilterState::new();
        self.state.cart_open = false;
        self.state.checkout = None;
        self.state.notice = None;
        Ok(())
    }

    /// Apply one action.
    pub fn dispatch(&mut self, action: StorefrontAction) -> Result<Outcome, AppError> {
        tracing::trace!(?action, "storefront dispatch");
        let outcome = match action {
            StorefrontAction::Search(query) => {
                self.state.filter.query = query;
                Outcome::none()
            }
            StorefrontAction::Filter(category) => {
                self.state.filter.category = category;
                Outcome::none()
            }
            StorefrontAction::AddToCart(id) => {
                let change = self.state.cart.add(&self.state.catalog, id)?;
                self.after_cart_change(change)?
            }
            StorefrontAction::RemoveFromCart(id) => {
                let change = self.state.cart.remove(id);
                self.after_cart_change(change)?
            }
            StorefrontAction::ChangeQuantity(id, delta) => {
                let change = self.state.cart.change_quantity(id, delta)?;
                self.after_cart_change(change)?
            }
            StorefrontAction::OpenCart => {
                self.state.cart_open = true;
                Outcome::none()
            }
            StorefrontAction::CloseCart => {
                self.state.cart_open = false;
                Outcome::none()
            }
            StorefrontAction::OpenCheckout => self.open_checkout(),
            StorefrontAction::CloseCheckout => {
                self.state.checkout = None;
                Outcome::none()
            }
            StorefrontAction::SubmitCheckout(fields) => self.submit_checkout(fields)?,
            StorefrontAction::ToggleTheme => {
                self.state.theme = self.state.theme.toggled();
                self.state.theme.save(&mut self.store)?;
                Outcome::none()
            }
        };

        self.state.notice = outcome.notice.clone();
        Ok(outcome)
    }

    /// Dispatch, hand any redirect to `navigator`, then render.
    pub fn run(
        &mut self,
        action: StorefrontAction,
        render: &mut impl Render,
        navigator: &mut impl Navigator,
    ) -> Result<Outcome, AppError> {
        let outcome = self.dispatch(action)?;
        if let Some(redirect) = &outcome.redirect {
            navigator.navigate(redirect);
        }
        render.render(&self.view()?);
        Ok(outcome)
    }

    /// Products visible under the current filter, in catalog order.
    pub fn visible_products(&self) -> Vec<&Product> {
        visible_products(&self.state.catalog, &self.state.filter)
    }

    /// Build the current view.
    pub fn view(&self) -> Result<View, AppError> {
        Ok(View::Storefront(self.storefront_view()?))
    }

    pub fn storefront_view(&self) -> Result<StorefrontView, AppError> {
        let currency = self.state.catalog.currency();
        let cart = &self.state.cart;

        let products: Vec<ProductCard> = self
            .visible_products()
            .into_iter()
            .map(|product| ProductCard::new(product, currency))
            .collect();

        let checkout = match &self.state.checkout {
            Some(form) => Some(CheckoutView::new(
                &cart.pricing(&self.config.shipping_policy())?,
                form.fields.clone(),
                form.errors.clone(),
            )),
            None => None,
        };

        Ok(StorefrontView {
            theme: self.state.theme,
            filter: self.state.filter.clone(),
            no_results: products.is_empty(),
            products,
            cart: CartView {
                open: self.state.cart_open,
                lines: cart
                    .lines()
                    .iter()
                    .map(|line| CartLineView::new(line, currency))
                    .collect(),
                item_count: cart.item_count(),
                total: cart.total()?.display(),
                checkout_enabled: !cart.is_empty(),
            },
            checkout,
            notice: self.state.notice.clone(),
        })
    }

    fn after_cart_change(&mut self, change: CartChange) -> Result<Outcome, AppError> {
        if !change.is_mutation() {
            return Ok(Outcome::none());
        }
        save_cart(&mut self.store, &self.state.cart)?;

        let duration = self.config.notice_duration();
        let notice = match change {
            CartChange::Added { title, .. } | CartChange::Incremented { title, .. } => {
                Some(Notice::success(format!("{title} added to cart!"), duration))
            }
            CartChange::Removed { .. } => Some(Notice::success("Item removed from cart", duration)),
            CartChange::QuantityChanged { .. } | CartChange::Cleared | CartChange::Unchanged => None,
        };

        Ok(Outcome {
            notice,
            ..Outcome::none()
        })
    }

    fn open_checkout(&mut self) -> Outcome {
        if self.state.cart.is_empty() {
            return Outcome::with_notice(Notice::error(
                "Your cart is empty",
                self.config.notice_duration(),
            ));
        }
        self.state.cart_open = false;
        self.state.checkout = Some(CheckoutForm::default());
        Outcome::none()
    }

    fn submit_checkout(&mut self, fields: CheckoutFields) -> Result<Outcome, AppError> {
        if self.state.cart.is_empty() {
            return Ok(Outcome::with_notice(Notice::error(
                "Your cart is empty",
                self.config.notice_duration(),
            )));
        }

        let errors = checkout::validate(&fields);
        if !errors.is_empty() {
            tracing::debug!(fields = ?errors.fields(), "checkout rejected");
            self.state.checkout = Some(CheckoutForm {
                fields,
                errors: errors.clone(),
            });
            return Ok(Outcome::rejected(errors, None));
        }

        let order = Order::place(&self.state.cart, &fields, &self.config.shipping_policy())?;
        tracing::info!(
            order_id = %order.id,
            items = order.item_count(),
            total = %order.pricing.grand_total,
            customer = %order.fields.email,
            "order placed"
        );

        self.state.cart.clear();
        save_cart(&mut self.store, &self.state.cart)?;
        self.state.checkout = None;

        Ok(Outcome::with_notice(Notice::success(
            "Order placed successfully! Thank you for shopping with SnapShop.",
            self.config.order_notice_duration(),
        ))
        .effect(Effect::OrderPlaced(order)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapshop_store::MemoryStore;

    fn storefront() -> Storefront<MemoryStore> {
        Storefront::open(MemoryStore::new(), AppConfig::default()).unwrap()
    }

    #[test]
    fn test_add_notice_names_product() {
        let mut shop = storefront();
        let outcome = shop
            .dispatch(StorefrontAction::AddToCart(ProductId::new(1)))
            .unwrap();
        assert_eq!(
            outcome.notice.unwrap().message,
            "Wireless Headphones added to cart!"
        );
    }

    #[test]
    fn test_reload_resets_page_but_keeps_cart() {
        let mut shop = storefront();
        shop.dispatch(StorefrontAction::AddToCart(ProductId::new(3)))
            .unwrap();
        shop.dispatch(StorefrontAction::Search("lamp".into())).unwrap();
        shop.dispatch(StorefrontAction::OpenCart).unwrap();

        shop.reload().unwrap();
        assert_eq!(shop.cart().item_count(), 1);
        assert!(shop.state().filter.is_unfiltered());
        assert!(!shop.state().cart_open);
        assert!(shop.state().notice.is_none());
    }

    #[test]
    fn test_unknown_product_is_silent() {
        let mut shop = storefront();
        let outcome = shop
            .dispatch(StorefrontAction::AddToCart(ProductId::new(99)))
            .unwrap();
        assert_eq!(outcome, Outcome::none());
        assert!(shop.store().is_empty());
    }

    #[test]
    fn test_quantity_change_has_no_notice() {
        let mut shop = storefront();
        shop.dispatch(StorefrontAction::AddToCart(ProductId::new(2)))
            .unwrap();
        let outcome = shop
            .dispatch(StorefrontAction::ChangeQuantity(ProductId::new(2), 1))
            .unwrap();
        assert!(outcome.notice.is_none());
        assert_eq!(shop.cart().item_count(), 2);
    }

    #[test]
    fn test_decrement_to_zero_removes_line() {
        let mut shop = storefront();
        shop.dispatch(StorefrontAction::AddToCart(ProductId::new(2)))
            .unwrap();
        shop.dispatch(StorefrontAction::ChangeQuantity(ProductId::new(2), -1))
            .unwrap();
        assert!(shop.cart().is_empty());
    }

    #[test]
    fn test_checkout_disabled_for_empty_cart() {
        let mut shop = storefront();
        let outcome = shop.dispatch(StorefrontAction::OpenCheckout).unwrap();
        assert!(outcome.notice.unwrap().is_error());
        assert!(shop.state().checkout.is_none());
    }

    #[test]
    fn test_open_checkout_closes_cart() {
        let mut shop = storefront();
        shop.dispatch(StorefrontAction::AddToCart(ProductId::new(1)))
            .unwrap();
        shop.dispatch(StorefrontAction::OpenCart).unwrap();
        shop.dispatch(StorefrontAction::OpenCheckout).unwrap();

        let view = shop.storefront_view().unwrap();
        assert!(!view.cart.open);
        let checkout = view.checkout.unwrap();
        assert_eq!(checkout.subtotal, "₹12,499");
        assert_eq!(checkout.shipping, "₹50");
        assert_eq!(checkout.total, "₹12,549");
    }

    #[test]
    fn test_catalog_prices_stay_in_rupees() {
        let config: AppConfig =
            serde_json::from_str(r#"{"currency": "USD", "shipping_fee": 50}"#).unwrap();
        let mut shop = Storefront::open(MemoryStore::new(), config).unwrap();
        shop.dispatch(StorefrontAction::AddToCart(ProductId::new(1)))
            .unwrap();
        shop.dispatch(StorefrontAction::OpenCheckout).unwrap();

        let view = shop.storefront_view().unwrap();
        assert_eq!(view.products[0].price, "₹12,499");
        let checkout = view.checkout.unwrap();
        assert_eq!(checkout.total, "₹12,549");
        assert_eq!(checkout.shipping, "₹50");
    }

    #[test]
    fn test_rejected_checkout_keeps_cart() {
        let mut shop = storefront();
        shop.dispatch(StorefrontAction::AddToCart(ProductId::new(1)))
            .unwrap();
        shop.dispatch(StorefrontAction::OpenCheckout).unwrap();

        let outcome = shop
            .dispatch(StorefrontAction::SubmitCheckout(CheckoutFields::new()))
            .unwrap();
        assert!(outcome.is_rejected());
        assert_eq!(outcome.errors.len(), 7);
        assert_eq!(shop.cart().item_count(), 1);
        assert_eq!(shop.state().checkout.as_ref().unwrap().errors, outcome.errors);
    }

    #[test]
    fn test_filter_and_search_compose() {
        let mut shop = storefront();
        shop.dispatch(StorefrontAction::Filter(CategoryFilter::Only(Category::Home)))
            .unwrap();
        shop.dispatch(StorefrontAction::Search("COFFEE".into()))
            .unwrap();

        let view = shop.storefront_view().unwrap();
        assert_eq!(view.products.len(), 1);
        assert_eq!(view.products[0].title, "Coffee Maker");

        shop.dispatch(StorefrontAction::Search("zzz".into())).unwrap();
        assert!(shop.storefront_view().unwrap().no_results);
    }

    #[test]
    fn test_theme_toggle_persists() {
        let mut shop = storefront();
        assert_eq!(shop.state().theme, Theme::Light);
        shop.dispatch(StorefrontAction::ToggleTheme).unwrap();

        let reopened = Storefront::open(shop.into_store(), AppConfig::default()).unwrap();
        assert_eq!(reopened.state().theme, Theme::Dark);
    }

    #[test]
    fn test_run_renders_after_action() {
        let mut shop = storefront();
        let mut views: Vec<View> = Vec::new();
        let mut redirects: Vec<crate::Redirect> = Vec::new();

        shop.run(
            StorefrontAction::AddToCart(ProductId::new(5)),
            &mut views,
            &mut redirects,
        )
        .unwrap();

        assert_eq!(views.len(), 1);
        assert!(redirects.is_empty());
        let View::Storefront(view) = &views[0] else {
            panic!("expected storefront view");
        };
        assert_eq!(view.cart.item_count, 1);
        assert!(view.cart.checkout_enabled);
        assert!(view.notice.is_some());
    }
}
