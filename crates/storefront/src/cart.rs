//! Cart aggregation.
//!
//! The cart keeps at most one line per product identity; adding a product
//! that is already carted merges quantities additively. Totals are derived
//! on every call - nothing is cached, so they can never go stale.

use serde::{Deserialize, Serialize};

use zarurat_core::{CurrencyCode, Price, ProductId};

use crate::models::Product;

/// A product plus how many units of it are in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product: Product,
    /// Always >= 1; a line with nothing in it does not exist.
    pub quantity: u32,
}

impl CartLine {
    /// Line total: unit price extended over the quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// The shopping cart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// The cart lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add `quantity` units of `product`.
    ///
    /// Merges into the existing line when the product is already carted;
    /// otherwise appends a new line. A quantity of zero still counts one
    /// unit - a line below one unit cannot exist.
    pub fn add(&mut self, product: Product, quantity: u32) {
        let quantity = quantity.max(1);
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += quantity;
        } else {
            self.lines.push(CartLine { product, quantity });
        }
    }

    /// Total number of units across all lines. Recomputed on every call.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of line totals. Recomputed on every call.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        let currency = self
            .lines
            .first()
            .map_or_else(CurrencyCode::default, |l| l.product.price.currency_code);
        self.lines
            .iter()
            .map(CartLine::line_total)
            .fold(Price::zero(currency), |acc, line| acc + line)
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Quantity currently carted for `id`, if any.
    #[must_use]
    pub fn quantity_of(&self, id: ProductId) -> Option<u32> {
        self.lines
            .iter()
            .find(|l| l.product.id == id)
            .map(|l| l.quantity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use zarurat_core::{Category, Condition};

    fn product(id: u32, rupees: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Price::from_major(rupees, CurrencyCode::Inr),
            category: Category::Groceries,
            condition: Condition::New,
            image: String::new(),
            video: None,
            description: String::new(),
            rating: 4.0,
            in_stock: true,
        }
    }

    #[test]
    fn repeated_adds_merge_into_one_line() {
        let mut cart = Cart::new();
        cart.add(product(1, 100), 2);
        cart.add(product(1, 100), 3);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity_of(ProductId::new(1)), Some(5));
    }

    #[test]
    fn distinct_products_get_distinct_lines() {
        let mut cart = Cart::new();
        cart.add(product(1, 100), 1);
        cart.add(product(2, 50), 1);

        assert_eq!(cart.lines().len(), 2);
    }

    #[test]
    fn totals_are_derived_from_lines() {
        let mut cart = Cart::new();
        cart.add(product(1, 100), 2);
        cart.add(product(2, 50), 3);

        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.subtotal(), Price::from_major(350, CurrencyCode::Inr));
    }

    #[test]
    fn zero_quantity_still_counts_one_unit() {
        let mut cart = Cart::new();
        cart.add(product(1, 100), 0);
        assert_eq!(cart.quantity_of(ProductId::new(1)), Some(1));
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = Cart::new();
        cart.add(product(1, 100), 2);
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.subtotal(), Price::zero(CurrencyCode::Inr));
    }
}
