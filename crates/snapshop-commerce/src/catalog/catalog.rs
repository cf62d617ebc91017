//! The fixed, in-memory product list.

use crate::catalog::{Category, Product};
use crate::ids::ProductId;
use crate::money::Currency;

/// The storefront catalog. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    currency: Currency,
}

impl Catalog {
    /// Build a catalog from a product list.
    ///
    /// Later duplicates of an id are dropped so lookups stay unambiguous.
    pub fn new(products: Vec<Product>, currency: Currency) -> Self {
        let mut unique: Vec<Product> = Vec::with_capacity(products.len());
        for product in products {
            if unique.iter().any(|p| p.id == product.id) {
                tracing::warn!(product_id = %product.id, "duplicate product id in catalog, skipping");
                continue;
            }
            unique.push(product);
        }
        Self {
            products: unique,
            currency,
        }
    }

    /// The eight-product demo catalog, priced in rupees.
    pub fn demo() -> Self {
        let products = vec![
            Product::new(
                1u32,
                "Wireless Headphones",
                "Premium noise-cancelling headphones with 30-hour battery life",
                12499,
                Category::Electronics,
                "\u{1f3a7}",
            ),
            Product::new(
                2u32,
                "Smart Watch",
                "Fitness tracker with heart rate monitor and GPS",
                24999,
                Category::Electronics,
                "\u{231a}",
            ),
            Product::new(
                3u32,
                "Leather Jacket",
                "Genuine leather jacket with modern slim fit design",
                16999,
                Category::Fashion,
                "\u{1f9e5}",
            ),
            Product::new(
                4u32,
                "Running Shoes",
                "Lightweight running shoes with cushioned sole",
                7499,
                Category::Fashion,
                "\u{1f45f}",
            ),
            Product::new(
                5u32,
                "Coffee Maker",
                "Programmable coffee maker with thermal carafe",
                6799,
                Category::Home,
                "\u{2615}",
            ),
            Product::new(
                6u32,
                "Table Lamp",
                "Modern LED desk lamp with adjustable brightness",
                3899,
                Category::Home,
                "\u{1f4a1}",
            ),
            Product::new(
                7u32,
                "Bluetooth Speaker",
                "Portable waterproof speaker with 360\u{b0} sound",
                5899,
                Category::Electronics,
                "\u{1f50a}",
            ),
            Product::new(
                8u32,
                "Designer Sunglasses",
                "UV protection polarized sunglasses",
                10999,
                Category::Fashion,
                "\u{1f576}\u{fe0f}",
            ),
        ];
        Self::new(products, Currency::INR)
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Currency the catalog is priced in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::demo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.currency(), Currency::INR);

        let headphones = catalog.get(ProductId::new(1)).unwrap();
        assert_eq!(headphones.title, "Wireless Headphones");
        assert_eq!(headphones.price, 12499);
    }

    #[test]
    fn test_unknown_product() {
        assert!(Catalog::demo().get(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_duplicate_ids_are_dropped() {
        let a = Product::new(1u32, "A", "first", 10, Category::Home, "a");
        let b = Product::new(1u32, "B", "second", 20, Category::Home, "b");
        let catalog = Catalog::new(vec![a, b], Currency::INR);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(ProductId::new(1)).unwrap().title, "A");
    }
}
