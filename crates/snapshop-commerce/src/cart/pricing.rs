//! Cart pricing calculations.

use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Order summary shown at checkout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartPricing {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Shipping cost.
    pub shipping_total: Money,
    /// subtotal + shipping.
    pub grand_total: Money,
}

/// How shipping is charged on an order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingPolicy {
    /// Flat fee charged on every non-empty order.
    pub flat_fee: i64,
}

impl ShippingPolicy {
    /// Flat-fee shipping.
    pub fn flat(flat_fee: i64) -> Self {
        Self { flat_fee }
    }

    /// Shipping charged for an order with the given subtotal.
    ///
    /// An empty cart ships nothing and is charged nothing.
    pub fn fee_for(&self, subtotal: &Money, cart_is_empty: bool) -> Money {
        if cart_is_empty {
            Money::zero(subtotal.currency)
        } else {
            Money::new(self.flat_fee, subtotal.currency)
        }
    }
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self::flat(50)
    }
}

impl CartPricing {
    /// All-zero pricing in a currency.
    pub fn zero(currency: Currency) -> Self {
        Self {
            subtotal: Money::zero(currency),
            shipping_total: Money::zero(currency),
            grand_total: Money::zero(currency),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use crate::catalog::Catalog;
    use crate::ids::ProductId;

    #[test]
    fn test_pricing_adds_flat_shipping() {
        let catalog = Catalog::demo();
        let mut cart = Cart::with_currency(catalog.currency());
        cart.add(&catalog, ProductId::new(6)).unwrap();

        let pricing = cart.pricing(&ShippingPolicy::default()).unwrap();
        assert_eq!(pricing.subtotal.amount, 3899);
        assert_eq!(pricing.shipping_total.amount, 50);
        assert_eq!(pricing.grand_total.amount, 3949);
    }

    #[test]
    fn test_empty_cart_has_no_shipping() {
        let pricing = Cart::new().pricing(&ShippingPolicy::flat(120)).unwrap();
        assert_eq!(pricing, CartPricing::zero(Currency::INR));
    }
}
