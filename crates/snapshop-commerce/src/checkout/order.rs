//! Order snapshot.

use crate::cart::{Cart, CartLine, CartPricing, ShippingPolicy};
use crate::checkout::CheckoutFields;
use crate::error::CommerceError;
use crate::ids::OrderId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A simulated order: what the cart held when checkout succeeded.
///
/// Orders are logged, not stored. Nothing is charged or shipped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Customer and shipping details, trimmed.
    pub fields: CheckoutFields,
    /// Items in the order.
    pub lines: Vec<CartLine>,
    /// Subtotal, shipping and grand total.
    pub pricing: CartPricing,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Snapshot a cart and validated fields as an order.
    pub fn place(
        cart: &Cart,
        fields: &CheckoutFields,
        shipping: &ShippingPolicy,
    ) -> Result<Self, CommerceError> {
        Ok(Self {
            id: OrderId::generate(),
            fields: fields.trimmed(),
            lines: cart.lines().to_vec(),
            pricing: cart.pricing(shipping)?,
            placed_at: Utc::now(),
        })
    }

    /// Total units ordered.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::ids::ProductId;

    #[test]
    fn test_place_snapshots_cart() {
        let catalog = Catalog::demo();
        let mut cart = Cart::new();
        cart.add(&catalog, ProductId::new(1)).unwrap();
        cart.add(&catalog, ProductId::new(3)).unwrap();
        cart.add(&catalog, ProductId::new(3)).unwrap();

        let fields = CheckoutFields {
            name: " Asha ".into(),
            ..CheckoutFields::default()
        };
        let order = Order::place(&cart, &fields, &ShippingPolicy::default()).unwrap();

        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.fields.name, "Asha");
        assert_eq!(order.pricing.subtotal, cart.total().unwrap());
        assert_eq!(order.pricing.shipping_total.amount, 50);
        assert_eq!(
            order.pricing.grand_total.amount,
            order.pricing.subtotal.amount + 50
        );
    }

    #[test]
    fn test_serializes_camel_case() {
        let catalog = Catalog::demo();
        let mut cart = Cart::new();
        cart.add(&catalog, ProductId::new(2)).unwrap();

        let order = Order::place(&cart, &CheckoutFields::new(), &ShippingPolicy::default()).unwrap();
        let json = serde_json::to_value(&order).unwrap();
        assert!(json.get("placedAt").is_some());
        assert_eq!(json["lines"][0]["quantity"], 1);
    }
}
