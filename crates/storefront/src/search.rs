//! The product filter engine.
//!
//! A pure function from (full product list, active page, criteria) to the
//! subset to display. The filter is stable: survivors keep their input
//! order, and an empty result is a valid answer the caller renders as an
//! empty state, not an error.

use zarurat_core::{CategoryFilter, Condition};

use crate::models::Product;
use crate::nav::Page;

/// Free-text query plus category selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Matched case-insensitively as a substring of name, description, or
    /// category display name. Not trimmed; whitespace is the user's choice.
    pub query: String,
    pub category: CategoryFilter,
}

impl SearchCriteria {
    #[must_use]
    pub fn new(query: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }
}

/// Derive the product list to display.
///
/// Rules, in order:
/// 1. On the new-products page, keep only `New` condition; on used-products,
///    only `Used`.
/// 2. On the search-results page, or whenever the query is non-empty: keep
///    products whose name, description, or category display name contains
///    the query (case-insensitive); then apply the category selector unless
///    it is `All`.
///
/// Note the category selector only applies inside the search branch - it
/// mirrors the search form, not a standing catalog restriction.
#[must_use]
pub fn filter_products<'a>(
    products: &'a [Product],
    page: Page,
    criteria: &SearchCriteria,
) -> Vec<&'a Product> {
    let mut filtered: Vec<&Product> = products.iter().collect();

    match page {
        Page::NewProducts => filtered.retain(|p| p.condition == Condition::New),
        Page::UsedProducts => filtered.retain(|p| p.condition == Condition::Used),
        _ => {}
    }

    if page == Page::SearchResults || !criteria.query.is_empty() {
        if !criteria.query.is_empty() {
            let needle = criteria.query.to_lowercase();
            filtered.retain(|p| matches_query(p, &needle));
        }
        if let CategoryFilter::Only(category) = criteria.category {
            filtered.retain(|p| p.category == category);
        }
    }

    filtered
}

fn matches_query(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
        || product.category.as_str().to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use zarurat_core::{Category, CurrencyCode, Price, ProductId};

    fn product(id: u32, name: &str, category: Category, condition: Condition) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            price: Price::from_major(100, CurrencyCode::Inr),
            category,
            condition,
            image: String::new(),
            video: None,
            description: format!("A fine {name}"),
            rating: 4.0,
            in_stock: true,
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, "Phone", Category::Electronics, Condition::New),
            product(2, "Rice", Category::Groceries, Condition::Used),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn new_products_page_keeps_only_new_condition() {
        let products = sample();
        let result = filter_products(&products, Page::NewProducts, &SearchCriteria::default());
        assert_eq!(ids(&result), [1]);
    }

    #[test]
    fn used_products_page_keeps_only_used_condition() {
        let products = sample();
        let result = filter_products(&products, Page::UsedProducts, &SearchCriteria::default());
        assert_eq!(ids(&result), [2]);
    }

    #[test]
    fn query_matches_name_case_insensitively() {
        let products = sample();
        let criteria = SearchCriteria::new("rice", CategoryFilter::All);
        let result = filter_products(&products, Page::SearchResults, &criteria);
        assert_eq!(ids(&result), [2]);
    }

    #[test]
    fn query_matches_category_display_name() {
        let products = sample();
        let criteria = SearchCriteria::new("electron", CategoryFilter::All);
        let result = filter_products(&products, Page::SearchResults, &criteria);
        assert_eq!(ids(&result), [1]);
    }

    #[test]
    fn all_selector_equals_no_category_filter() {
        let products = sample();
        let with_all = SearchCriteria::new("a fine", CategoryFilter::All);
        let without = SearchCriteria::new("a fine", CategoryFilter::default());
        assert_eq!(
            ids(&filter_products(&products, Page::SearchResults, &with_all)),
            ids(&filter_products(&products, Page::SearchResults, &without)),
        );
    }

    #[test]
    fn category_selector_restricts_within_search() {
        let products = sample();
        let criteria = SearchCriteria::new("a fine", CategoryFilter::Only(Category::Groceries));
        let result = filter_products(&products, Page::SearchResults, &criteria);
        assert_eq!(ids(&result), [2]);
    }

    #[test]
    fn category_selector_applies_on_search_page_even_without_query() {
        let products = sample();
        let criteria = SearchCriteria::new("", CategoryFilter::Only(Category::Electronics));
        let result = filter_products(&products, Page::SearchResults, &criteria);
        assert_eq!(ids(&result), [1]);
    }

    #[test]
    fn query_filters_on_any_page_once_non_empty() {
        let products = sample();
        let criteria = SearchCriteria::new("phone", CategoryFilter::All);
        let result = filter_products(&products, Page::Home, &criteria);
        assert_eq!(ids(&result), [1]);
    }

    #[test]
    fn no_match_yields_an_empty_result() {
        let products = sample();
        let criteria = SearchCriteria::new("tractor", CategoryFilter::All);
        assert!(filter_products(&products, Page::SearchResults, &criteria).is_empty());
    }

    #[test]
    fn survivors_keep_input_order() {
        let products = vec![
            product(3, "Rice cooker", Category::Electronics, Condition::New),
            product(1, "Basmati rice", Category::Groceries, Condition::New),
            product(2, "Rice bran oil", Category::Groceries, Condition::New),
        ];
        let criteria = SearchCriteria::new("rice", CategoryFilter::All);
        let result = filter_products(&products, Page::SearchResults, &criteria);
        assert_eq!(ids(&result), [3, 1, 2]);
    }
}
