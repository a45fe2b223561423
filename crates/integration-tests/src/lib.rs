//! Shared fixtures for the integration tests.
//!
//! Tests build their product fixtures here instead of leaning on the
//! embedded seed, so seed edits cannot silently change what a scenario
//! asserts.

#![cfg_attr(not(test), forbid(unsafe_code))]

use zarurat_core::{Category, Condition, CurrencyCode, Email, Price, ProductId, Role, UserId};
use zarurat_storefront::models::{Product, User};

/// A product fixture with the fields scenarios care about.
#[must_use]
pub fn product(id: u32, name: &str, rupees: i64, category: Category, condition: Condition) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Price::from_major(rupees, CurrencyCode::Inr),
        category,
        condition,
        image: format!("/media/products/{id}.jpg"),
        video: None,
        description: format!("Test listing for {name}"),
        rating: 4.0,
        in_stock: true,
    }
}

/// A user fixture with the given role and no profile data.
///
/// # Panics
///
/// Never - the fixture email is statically valid.
#[must_use]
pub fn user(id: u32, name: &str, role: Role) -> User {
    #[allow(clippy::unwrap_used)]
    let email = Email::parse(&format!("{}@test.example", name.to_lowercase())).unwrap();
    User {
        id: UserId::new(id),
        name: name.to_owned(),
        email,
        role,
        addresses: Vec::new(),
        orders: Vec::new(),
    }
}
