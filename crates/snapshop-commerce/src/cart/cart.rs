//! Cart and cart line types.

use crate::cart::{CartPricing, ShippingPolicy};
use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// One product's accumulated quantity within a cart.
///
/// The product is embedded by value so a restored cart renders without the
/// catalog. Serialized flat: the product's fields plus `quantity`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    /// Always at least 1 while the line is in a cart.
    pub quantity: u32,
}

impl CartLine {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Line total (price * quantity).
    pub fn total(&self, currency: Currency) -> Result<Money, CommerceError> {
        self.product
            .price_in(currency)
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}

/// What a cart operation did. Used for notices and to decide whether the
/// snapshot needs persisting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartChange {
    /// A new line was appended.
    Added { product_id: ProductId, title: String },
    /// An existing line's quantity went up by one.
    Incremented {
        product_id: ProductId,
        title: String,
        quantity: u32,
    },
    /// A line's quantity was set to a new positive value.
    QuantityChanged { product_id: ProductId, quantity: u32 },
    /// A line was deleted.
    Removed { product_id: ProductId, title: String },
    /// All lines were deleted.
    Cleared,
    /// Nothing matched; the cart is untouched.
    Unchanged,
}

impl CartChange {
    /// Whether the cart contents changed.
    pub fn is_mutation(&self) -> bool {
        !matches!(self, CartChange::Unchanged)
    }
}

/// A shopping cart: lines in first-added order, at most one per product.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart in the default currency.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cart in the given currency.
    pub fn with_currency(currency: Currency) -> Self {
        Self {
            lines: Vec::new(),
            currency,
        }
    }

    /// Rebuild a cart from persisted lines.
    ///
    /// Lines with a zero quantity are dropped and repeated product ids are
    /// merged, so a hand-edited snapshot cannot break the cart invariants.
    pub fn from_lines(lines: Vec<CartLine>, currency: Currency) -> Self {
        let mut cart = Self::with_currency(currency);
        for line in lines {
            if line.quantity == 0 {
                continue;
            }
            match cart.position(line.product.id) {
                Some(idx) => {
                    let existing = &mut cart.lines[idx];
                    existing.quantity = existing.quantity.saturating_add(line.quantity);
                }
                None => cart.lines.push(line),
            }
        }
        cart
    }

    /// Add one unit of a catalog product.
    ///
    /// Merges into an existing line; unknown product ids are a no-op.
    pub fn add(&mut self, catalog: &Catalog, product_id: ProductId) -> Result<CartChange, CommerceError> {
        let Some(product) = catalog.get(product_id) else {
            tracing::debug!(%product_id, "add to cart ignored: unknown product");
            return Ok(CartChange::Unchanged);
        };

        if let Some(idx) = self.position(product_id) {
            let line = &mut self.lines[idx];
            line.quantity = line.quantity.checked_add(1).ok_or(CommerceError::Overflow)?;
            return Ok(CartChange::Incremented {
                product_id,
                title: line.product.title.clone(),
                quantity: line.quantity,
            });
        }

        self.lines.push(CartLine::new(product.clone()));
        Ok(CartChange::Added {
            product_id,
            title: product.title.clone(),
        })
    }

    /// Remove a product's line. No-op if the product is not in the cart.
    pub fn remove(&mut self, product_id: ProductId) -> CartChange {
        match self.position(product_id) {
            Some(idx) => {
                let line = self.lines.remove(idx);
                CartChange::Removed {
                    product_id,
                    title: line.product.title,
                }
            }
            None => CartChange::Unchanged,
        }
    }

    /// Adjust a line's quantity by `delta`.
    ///
    /// A resulting quantity of zero or less removes the line. No-op if the
    /// product is not in the cart.
    pub fn change_quantity(&mut self, product_id: ProductId, delta: i64) -> Result<CartChange, CommerceError> {
        let Some(idx) = self.position(product_id) else {
            return Ok(CartChange::Unchanged);
        };

        let new_quantity = i64::from(self.lines[idx].quantity)
            .checked_add(delta)
            .ok_or(CommerceError::Overflow)?;

        if new_quantity <= 0 {
            return Ok(self.remove(product_id));
        }

        let quantity = u32::try_from(new_quantity).map_err(|_| CommerceError::Overflow)?;
        self.lines[idx].quantity = quantity;
        Ok(CartChange::QuantityChanged {
            product_id,
            quantity,
        })
    }

    /// Remove every line.
    pub fn clear(&mut self) -> CartChange {
        if self.lines.is_empty() {
            return CartChange::Unchanged;
        }
        self.lines.clear();
        CartChange::Cleared
    }

    /// Sum of price * quantity over all lines.
    pub fn total(&self) -> Result<Money, CommerceError> {
        self.lines.iter().try_fold(Money::zero(self.currency), |acc, line| {
            let line_total = line.total(self.currency)?;
            acc.try_add(&line_total).ok_or(CommerceError::Overflow)
        })
    }

    /// Sum of quantities, for the badge count.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Order summary with shipping applied.
    pub fn pricing(&self, shipping: &ShippingPolicy) -> Result<CartPricing, CommerceError> {
        let subtotal = self.total()?;
        let shipping_total = shipping.fee_for(&subtotal, self.is_empty());
        let grand_total = subtotal
            .try_add(&shipping_total)
            .ok_or(CommerceError::Overflow)?;

        Ok(CartPricing {
            subtotal,
            shipping_total,
            grand_total,
        })
    }

    /// Lines in first-added order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a product.
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.lines.iter().position(|l| l.product.id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn id(n: u32) -> ProductId {
        ProductId::new(n)
    }

    #[test]
    fn test_add_same_product_merges() {
        let catalog = Catalog::demo();
        let mut cart = Cart::new();

        assert!(matches!(cart.add(&catalog, id(1)).unwrap(), CartChange::Added { .. }));
        assert!(matches!(
            cart.add(&catalog, id(1)).unwrap(),
            CartChange::Incremented { quantity: 2, .. }
        ));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total().unwrap().amount, 24998);
    }

    #[test]
    fn test_add_unknown_product_is_noop() {
        let catalog = Catalog::demo();
        let mut cart = Cart::new();

        assert_eq!(cart.add(&catalog, id(999)).unwrap(), CartChange::Unchanged);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_lines_keep_first_added_order() {
        let catalog = Catalog::demo();
        let mut cart = Cart::new();
        cart.add(&catalog, id(3)).unwrap();
        cart.add(&catalog, id(1)).unwrap();
        cart.add(&catalog, id(3)).unwrap();

        let ids: Vec<u32> = cart.lines().iter().map(|l| l.product.id.get()).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_change_quantity_to_zero_removes_line() {
        let catalog = Catalog::demo();
        let mut cart = Cart::new();
        cart.add(&catalog, id(2)).unwrap();
        cart.add(&catalog, id(2)).unwrap();

        let change = cart.change_quantity(id(2), -2).unwrap();
        assert!(matches!(change, CartChange::Removed { .. }));
        assert!(cart.line(id(2)).is_none());
    }

    #[test]
    fn test_change_quantity_below_zero_removes_line() {
        let catalog = Catalog::demo();
        let mut cart = Cart::new();
        cart.add(&catalog, id(2)).unwrap();

        cart.change_quantity(id(2), -5).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_change_quantity_updates_in_place() {
        let catalog = Catalog::demo();
        let mut cart = Cart::new();
        cart.add(&catalog, id(5)).unwrap();

        let change = cart.change_quantity(id(5), 3).unwrap();
        assert_eq!(
            change,
            CartChange::QuantityChanged {
                product_id: id(5),
                quantity: 4
            }
        );
        assert_eq!(cart.total().unwrap().amount, 4 * 6799);
    }

    #[test]
    fn test_change_quantity_missing_line_is_noop() {
        let mut cart = Cart::new();
        assert_eq!(cart.change_quantity(id(1), 1).unwrap(), CartChange::Unchanged);
    }

    #[test]
    fn test_remove() {
        let catalog = Catalog::demo();
        let mut cart = Cart::new();
        cart.add(&catalog, id(6)).unwrap();

        assert!(matches!(cart.remove(id(6)), CartChange::Removed { .. }));
        assert_eq!(cart.remove(id(6)), CartChange::Unchanged);
    }

    #[test]
    fn test_empty_cart_totals_zero() {
        let cart = Cart::new();
        assert!(cart.total().unwrap().is_zero());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_total_overflow_is_an_error() {
        let pricey = Product::new(1u32, "Gold", "Very expensive", i64::MAX, Category::Home, "x");
        let catalog = Catalog::new(vec![pricey], Currency::INR);
        let mut cart = Cart::new();
        cart.add(&catalog, id(1)).unwrap();
        cart.add(&catalog, id(1)).unwrap();

        assert!(matches!(cart.total(), Err(CommerceError::Overflow)));
    }

    #[test]
    fn test_from_lines_restores_invariants() {
        let catalog = Catalog::demo();
        let lamp = catalog.get(id(6)).unwrap().clone();
        let lines = vec![
            CartLine {
                product: lamp.clone(),
                quantity: 2,
            },
            CartLine {
                product: lamp.clone(),
                quantity: 1,
            },
            CartLine {
                product: catalog.get(id(1)).unwrap().clone(),
                quantity: 0,
            },
        ];

        let cart = Cart::from_lines(lines, Currency::INR);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.line(id(6)).unwrap().quantity, 3);
    }

    #[test]
    fn test_cart_line_wire_format() {
        let catalog = Catalog::demo();
        let mut cart = Cart::new();
        cart.add(&catalog, id(1)).unwrap();

        let json = serde_json::to_value(cart.lines()).unwrap();
        assert_eq!(json[0]["id"], 1);
        assert_eq!(json[0]["title"], "Wireless Headphones");
        assert_eq!(json[0]["quantity"], 1);
        assert_eq!(json[0]["emoji"], "\u{1f3a7}");
    }
}
