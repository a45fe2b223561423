//! Side-by-side product comparison selection.

use zarurat_core::ProductId;

use crate::models::Product;

/// Most products a user can compare at once.
pub const COMPARE_CAPACITY: usize = 3;

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareToggle {
    /// The product was added to the set.
    Added,
    /// The product was already selected and has been removed.
    Removed,
    /// The set is full; nothing changed. The caller owes the user a notice.
    Full,
}

/// An ordered, bounded set of products selected for comparison.
///
/// Unique by product identity, capacity [`COMPARE_CAPACITY`]. A full set
/// rejects new entries instead of evicting the oldest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonSet {
    products: Vec<Product>,
}

impl ComparisonSet {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Selected products, in selection order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.products.iter().any(|p| p.id == id)
    }

    /// Toggle a product in or out of the set.
    pub fn toggle(&mut self, product: Product) -> CompareToggle {
        if self.contains(product.id) {
            self.remove(product.id);
            CompareToggle::Removed
        } else if self.products.len() < COMPARE_CAPACITY {
            self.products.push(product);
            CompareToggle::Added
        } else {
            CompareToggle::Full
        }
    }

    /// Remove by identity. No-op when absent.
    pub fn remove(&mut self, id: ProductId) {
        self.products.retain(|p| p.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zarurat_core::{Category, Condition, CurrencyCode, Price};

    fn product(id: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Price::from_major(10, CurrencyCode::Inr),
            category: Category::Electronics,
            condition: Condition::New,
            image: String::new(),
            video: None,
            description: String::new(),
            rating: 4.5,
            in_stock: true,
        }
    }

    #[test]
    fn fourth_distinct_toggle_is_rejected() {
        let mut set = ComparisonSet::new();
        assert_eq!(set.toggle(product(1)), CompareToggle::Added);
        assert_eq!(set.toggle(product(2)), CompareToggle::Added);
        assert_eq!(set.toggle(product(3)), CompareToggle::Added);

        let before = set.clone();
        assert_eq!(set.toggle(product(4)), CompareToggle::Full);
        assert_eq!(set, before);
        assert_eq!(set.len(), COMPARE_CAPACITY);
    }

    #[test]
    fn toggle_pair_restores_the_original_set() {
        let mut set = ComparisonSet::new();
        set.toggle(product(1));
        let before = set.clone();

        set.toggle(product(2));
        set.toggle(product(2));
        assert_eq!(set, before);
    }

    #[test]
    fn toggling_a_member_removes_it() {
        let mut set = ComparisonSet::new();
        set.toggle(product(1));
        assert_eq!(set.toggle(product(1)), CompareToggle::Removed);
        assert!(set.is_empty());
    }

    #[test]
    fn remove_is_unconditional() {
        let mut set = ComparisonSet::new();
        set.toggle(product(1));
        set.remove(ProductId::new(1));
        set.remove(ProductId::new(1));
        assert!(set.is_empty());
    }
}
