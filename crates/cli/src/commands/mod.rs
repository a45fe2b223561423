//! CLI command implementations.
//!
//! - `catalog` - product, service, store, and group listings
//! - `seed` - export the embedded seed data for editing
//! - `demo` - scripted end-to-end storefront session

pub mod catalog;
pub mod demo;
pub mod seed;

use zarurat_storefront::catalog::CatalogStore;
use zarurat_storefront::config::StorefrontConfig;
use zarurat_storefront::error::AppError;
use zarurat_storefront::services::auth::AuthService;
use zarurat_storefront::store::Store;

/// Build a store over the configured seed directory (or the embedded seed).
pub fn open_store() -> Result<Store, AppError> {
    let config = StorefrontConfig::from_env()?;

    let (catalog, auth) = match &config.data_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "loading seed directory");
            (CatalogStore::load(dir)?, AuthService::load(dir)?)
        }
        None => (CatalogStore::builtin(), AuthService::builtin()),
    };

    Ok(Store::new(catalog, auth))
}
