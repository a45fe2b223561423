//! Seed directory loading and catalog refresh behavior.

#![allow(clippy::unwrap_used)]

use zarurat_core::{Category, Condition};
use zarurat_integration_tests::product;
use zarurat_storefront::catalog::CatalogStore;
use zarurat_storefront::services::auth::AuthService;
use zarurat_storefront::store::{Action, Store};

#[test]
fn seed_directory_overrides_only_the_files_it_has() {
    let dir = tempfile::tempdir().unwrap();
    let custom = vec![
        product(1, "Lone Item", 99, Category::Groceries, Condition::New),
    ];
    std::fs::write(
        dir.path().join("products.json"),
        serde_json::to_string_pretty(&custom).unwrap(),
    )
    .unwrap();

    let catalog = CatalogStore::load(dir.path()).unwrap();

    // Products come from the directory...
    assert_eq!(catalog.products().len(), 1);
    assert_eq!(catalog.products().first().unwrap().name, "Lone Item");

    // ...everything else falls back to the embedded seed.
    let builtin = CatalogStore::builtin();
    assert_eq!(catalog.services().len(), builtin.services().len());
    assert_eq!(catalog.store_locations().len(), builtin.store_locations().len());
    assert_eq!(catalog.company_info(), builtin.company_info());
}

#[test]
fn exported_products_load_back_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let builtin = CatalogStore::builtin();

    std::fs::write(
        dir.path().join("products.json"),
        serde_json::to_string_pretty(&builtin.products()).unwrap(),
    )
    .unwrap();

    let reloaded = CatalogStore::load(dir.path()).unwrap();
    assert_eq!(reloaded.products(), builtin.products());
}

#[test]
fn malformed_seed_files_fail_loudly() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("groups.json"), "[{\"id\": }]").unwrap();

    assert!(CatalogStore::load(dir.path()).is_err());
}

#[test]
fn refresh_through_the_store_is_idempotent() {
    let mut store = Store::new(CatalogStore::builtin(), AuthService::with_directory(Vec::new()));

    let before = store.state().catalog().products().len();
    store.dispatch(Action::Refresh);
    store.dispatch(Action::Refresh);
    let after = store.state().catalog().products().len();

    assert_eq!(before, after);
}

#[test]
fn user_seed_loads_from_the_same_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("users.json"),
        r#"[{"id": 1, "name": "Solo", "email": "solo@test.example", "role": "Customer"}]"#,
    )
    .unwrap();

    let mut auth = AuthService::load(dir.path()).unwrap();
    assert_eq!(auth.directory().len(), 1);
    assert!(auth.login("solo@test.example").is_ok());
    assert!(auth.login("admin@zaruratbazaar.in").is_err());
}
