//! End-to-end storefront sessions through the dispatch loop.

#![allow(clippy::unwrap_used)]

use zarurat_core::{Category, CategoryFilter, Condition, CurrencyCode, Price, Role};
use zarurat_integration_tests::{product, user};
use zarurat_storefront::catalog::CatalogStore;
use zarurat_storefront::nav::Page;
use zarurat_storefront::services::auth::AuthService;
use zarurat_storefront::store::{Action, Notice, Store};
use zarurat_storefront::view::{self, View};

fn store() -> Store {
    Store::new(
        CatalogStore::builtin(),
        AuthService::with_directory(vec![
            user(1, "Arjun", Role::Admin),
            user(2, "Priya", Role::Customer),
        ]),
    )
}

#[test]
fn search_cart_checkout_session() {
    let mut store = store();

    // Customer searches for rice.
    store.dispatch(Action::Search {
        query: "rice".to_owned(),
        category: CategoryFilter::All,
    });
    assert_eq!(store.state().page(), Page::SearchResults);

    let hits = store.state().visible_products();
    assert!(!hits.is_empty(), "the embedded seed stocks rice");
    assert!(
        hits.iter()
            .all(|p| format!("{} {} {}", p.name, p.description, p.category)
                .to_lowercase()
                .contains("rice"))
    );

    // Two bags now, one more later: a single merged line.
    let rice = hits.first().copied().cloned().unwrap();
    store.dispatch(Action::AddToCart {
        product: rice.clone(),
        quantity: 2,
    });
    store.dispatch(Action::AddToCart {
        product: rice.clone(),
        quantity: 1,
    });
    assert_eq!(store.state().cart().lines().len(), 1);
    assert_eq!(store.state().cart_count(), 3);
    assert_eq!(store.state().cart().subtotal(), rice.price.times(3));

    // Checkout empties the cart and creates nothing else.
    let notice = store.dispatch(Action::Checkout);
    assert_eq!(notice, Some(Notice::CheckoutAccepted { items: 3 }));
    assert!(store.state().cart().is_empty());
}

#[test]
fn cart_totals_match_the_documented_example() {
    let mut store = store();
    let a = product(101, "Widget A", 100, Category::Hardware, Condition::New);
    let b = product(102, "Widget B", 50, Category::Hardware, Condition::New);

    store.dispatch(Action::AddToCart {
        product: a,
        quantity: 2,
    });
    store.dispatch(Action::AddToCart {
        product: b,
        quantity: 3,
    });

    assert_eq!(store.state().cart_count(), 5);
    assert_eq!(
        store.state().cart().subtotal(),
        Price::from_major(350, CurrencyCode::Inr)
    );
}

#[test]
fn comparison_is_capped_at_three_across_a_session() {
    let mut store = store();
    let picks: Vec<_> = (1..=4)
        .map(|i| product(200 + i, &format!("Pick {i}"), 500, Category::Electronics, Condition::New))
        .collect();

    let mut last = None;
    for pick in picks.clone() {
        last = store.dispatch(Action::ToggleCompare(pick));
    }
    assert_eq!(last, Some(Notice::ComparisonFull));
    assert_eq!(store.state().comparison().len(), 3);

    // The rejected product never entered the set.
    assert!(!store.state().comparison().contains(picks[3].id));

    // Removing from the comparison view frees a slot.
    store.dispatch(Action::RemoveCompared(picks[0].id));
    assert_eq!(
        store.dispatch(Action::ToggleCompare(picks[3].clone())),
        None
    );
    assert!(store.state().comparison().contains(picks[3].id));
}

#[test]
fn toggling_twice_leaves_no_trace() {
    let mut store = store();
    let pick = product(300, "Transient", 900, Category::Furniture, Condition::New);

    store.dispatch(Action::ToggleCompare(pick.clone()));
    store.dispatch(Action::ToggleCompare(pick.clone()));

    assert!(store.state().comparison().is_empty());
    assert!(!store.state().compare_fab_visible());
}

#[test]
fn login_logout_round_trip() {
    let mut store = store();
    store.dispatch(Action::Navigate(Page::Auth));

    let notice = store.dispatch(Action::Login {
        email: "priya@test.example".to_owned(),
    });
    assert_eq!(
        notice,
        Some(Notice::LoggedIn {
            name: "Priya".to_owned()
        })
    );
    assert_eq!(store.state().page(), Page::Home, "login lands on home");
    assert_eq!(store.state().session().unwrap().role, Role::Customer);

    store.dispatch(Action::Logout);
    assert!(store.state().session().is_none());
}

#[test]
fn failed_login_leaves_the_session_untouched() {
    let mut store = store();
    let notice = store.dispatch(Action::Login {
        email: "ghost@test.example".to_owned(),
    });
    assert!(matches!(notice, Some(Notice::LoginFailed(_))));
    assert!(store.state().session().is_none());
}

#[test]
fn comparison_overlay_renders_over_any_page() {
    let mut store = store();
    let pick = product(400, "Showcase", 1200, Category::Electronics, Condition::New);
    store.dispatch(Action::ToggleCompare(pick));
    store.dispatch(Action::Navigate(Page::About));
    store.dispatch(Action::OpenComparison);

    assert!(matches!(
        view::resolve(store.state()),
        View::Comparison { .. }
    ));

    // Closing it reveals the page underneath again.
    store.dispatch(Action::CloseComparison);
    assert!(matches!(view::resolve(store.state()), View::About { .. }));
}
