//! Cart persistence on a key-value store.
//!
//! The cart is stored as a JSON array of lines under one key and rewritten
//! in full after every mutation (last writer wins).

use crate::cart::{Cart, CartLine};
use crate::error::CommerceError;
use crate::money::Currency;
use snapshop_store::{keys, JsonExt, KeyValueStore};

/// Restore the cart snapshot, or an empty cart if none is stored.
///
/// A corrupt snapshot also yields an empty cart.
pub fn load_cart<S>(store: &S, currency: Currency) -> Result<Cart, CommerceError>
where
    S: KeyValueStore + ?Sized,
{
    let lines: Vec<CartLine> = store.load_or_default(keys::CART)?;
    Ok(Cart::from_lines(lines, currency))
}

/// Overwrite the stored snapshot with the cart's current lines.
pub fn save_cart<S>(store: &mut S, cart: &Cart) -> Result<(), CommerceError>
where
    S: KeyValueStore + ?Sized,
{
    store.set_json(keys::CART, cart.lines())?;
    tracing::debug!(lines = cart.lines().len(), items = cart.item_count(), "cart persisted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::ids::ProductId;
    use snapshop_store::MemoryStore;

    #[test]
    fn test_cart_round_trips_through_store() {
        let catalog = Catalog::demo();
        let mut store = MemoryStore::new();
        let mut cart = Cart::with_currency(catalog.currency());
        cart.add(&catalog, ProductId::new(1)).unwrap();
        cart.add(&catalog, ProductId::new(4)).unwrap();
        cart.add(&catalog, ProductId::new(1)).unwrap();

        save_cart(&mut store, &cart).unwrap();
        let restored = load_cart(&store, catalog.currency()).unwrap();

        assert_eq!(restored, cart);
    }

    #[test]
    fn test_missing_snapshot_loads_empty() {
        let store = MemoryStore::new();
        assert!(load_cart(&store, Currency::INR).unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_snapshot_loads_empty() {
        let mut store = MemoryStore::new();
        store.set(keys::CART, "{not json").unwrap();

        assert!(load_cart(&store, Currency::INR).unwrap().is_empty());
    }

    #[test]
    fn test_reads_browser_written_snapshot() {
        let mut store = MemoryStore::new();
        store
            .set(
                keys::CART,
                r#"[{"id":3,"title":"Leather Jacket","description":"Genuine leather jacket with modern slim fit design","price":16999,"category":"fashion","emoji":"x","quantity":2}]"#,
            )
            .unwrap();

        let cart = load_cart(&store, Currency::INR).unwrap();
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total().unwrap().amount, 33998);
    }
}
