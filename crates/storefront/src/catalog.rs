//! The catalog collaborator: products, services, stores, and company info.
//!
//! Everything is held in memory behind `Arc`s, loaded once from JSON seed
//! files (or the embedded defaults) and read-only afterwards. `CatalogStore`
//! is cheap to clone, and the state core's `refresh` is just a fresh set of
//! `Arc` handles - synchronous and idempotent.

use std::path::Path;
use std::sync::Arc;

use zarurat_core::Role;

use crate::models::{ChatGroup, CompanyInfo, Product, Service, StoreLocation};
use crate::seed::{self, SeedError};

const PRODUCTS_FILE: &str = "products.json";
const SERVICES_FILE: &str = "services.json";
const STORES_FILE: &str = "stores.json";
const COMPANY_FILE: &str = "company.json";
const GROUPS_FILE: &str = "groups.json";

/// In-memory catalog snapshot.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Arc<Vec<Product>>,
    services: Arc<Vec<Service>>,
    stores: Arc<Vec<StoreLocation>>,
    company: Arc<CompanyInfo>,
    groups: Arc<Vec<ChatGroup>>,
}

impl CatalogStore {
    /// The embedded default catalog.
    ///
    /// The seed JSON is compiled into the binary; a parse failure here is a
    /// build defect, caught by `builtin_seed_parses` in this module's tests.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            products: Arc::new(parse_builtin(include_str!("../data/products.json"), "products")),
            services: Arc::new(parse_builtin(include_str!("../data/services.json"), "services")),
            stores: Arc::new(parse_builtin(include_str!("../data/stores.json"), "stores")),
            company: Arc::new(parse_builtin(include_str!("../data/company.json"), "company")),
            groups: Arc::new(parse_builtin(include_str!("../data/groups.json"), "groups")),
        }
    }

    /// Load a catalog from a seed directory.
    ///
    /// Each collection comes from its own file (`products.json`,
    /// `services.json`, `stores.json`, `company.json`, `groups.json`). A
    /// missing file falls back to the embedded default for that collection,
    /// with a warning, so a partial seed directory still yields a full
    /// catalog snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] when a file exists but cannot be read or parsed.
    pub fn load(dir: &Path) -> Result<Self, SeedError> {
        let builtin = Self::builtin();

        Ok(Self {
            products: load_or(dir, PRODUCTS_FILE, &builtin.products)?,
            services: load_or(dir, SERVICES_FILE, &builtin.services)?,
            stores: load_or(dir, STORES_FILE, &builtin.stores)?,
            company: load_or(dir, COMPANY_FILE, &builtin.company)?,
            groups: load_or(dir, GROUPS_FILE, &builtin.groups)?,
        })
    }

    /// All products.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All service listings.
    #[must_use]
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// All physical branches.
    #[must_use]
    pub fn store_locations(&self) -> &[StoreLocation] {
        &self.stores
    }

    /// Brand and contact details.
    #[must_use]
    pub fn company_info(&self) -> &CompanyInfo {
        &self.company
    }

    /// All Communication Hub groups, regardless of visibility.
    #[must_use]
    pub fn chat_groups(&self) -> &[ChatGroup] {
        &self.groups
    }

    /// Whether `role` may open the admin dashboard.
    #[must_use]
    pub fn has_admin_access(&self, role: Role) -> bool {
        match role {
            Role::Admin | Role::Director => true,
            Role::Shareholder | Role::Employee | Role::Distributor | Role::Shop | Role::Customer => {
                false
            }
        }
    }

    /// The chat groups visible to `role`, in seed order.
    #[must_use]
    pub fn groups_for(&self, role: Role) -> Vec<&ChatGroup> {
        self.groups.iter().filter(|g| g.is_visible_to(role)).collect()
    }
}

fn parse_builtin<T: serde::de::DeserializeOwned>(raw: &str, what: &str) -> T {
    serde_json::from_str(raw)
        .unwrap_or_else(|e| panic!("embedded {what} seed is malformed: {e}"))
}

fn load_or<T: serde::de::DeserializeOwned>(
    dir: &Path,
    file: &str,
    fallback: &Arc<T>,
) -> Result<Arc<T>, SeedError> {
    match seed::load_json(&dir.join(file))? {
        Some(value) => Ok(Arc::new(value)),
        None => {
            tracing::warn!(file, dir = %dir.display(), "seed file missing, using embedded default");
            Ok(Arc::clone(fallback))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_seed_parses() {
        let catalog = CatalogStore::builtin();
        assert!(!catalog.products().is_empty());
        assert!(!catalog.services().is_empty());
        assert!(!catalog.store_locations().is_empty());
        assert!(!catalog.chat_groups().is_empty());
        assert_eq!(catalog.company_info().name, "Zarurat Bazaar");
    }

    #[test]
    fn builtin_product_ids_are_unique() {
        let catalog = CatalogStore::builtin();
        let ids: HashSet<_> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), catalog.products().len());
    }

    #[test]
    fn admin_access_is_limited_to_leadership() {
        let catalog = CatalogStore::builtin();
        assert!(catalog.has_admin_access(Role::Admin));
        assert!(catalog.has_admin_access(Role::Director));
        assert!(!catalog.has_admin_access(Role::Customer));
        assert!(!catalog.has_admin_access(Role::Distributor));
    }

    #[test]
    fn group_visibility_filters_by_role() {
        let catalog = CatalogStore::builtin();
        let all = catalog.chat_groups().len();
        let customer_groups = catalog.groups_for(Role::Customer).len();
        let admin_groups = catalog.groups_for(Role::Admin).len();
        assert!(customer_groups < all);
        assert!(admin_groups >= customer_groups);
    }

    #[test]
    fn load_from_empty_dir_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = CatalogStore::load(dir.path()).unwrap();
        assert_eq!(catalog.products().len(), CatalogStore::builtin().products().len());
    }

    #[test]
    fn load_prefers_files_in_the_seed_dir() {
        let dir = tempfile::tempdir().unwrap();
        let products = CatalogStore::builtin().products().first().cloned().unwrap();
        std::fs::write(
            dir.path().join(PRODUCTS_FILE),
            serde_json::to_string(&vec![products]).unwrap(),
        )
        .unwrap();

        let catalog = CatalogStore::load(dir.path()).unwrap();
        assert_eq!(catalog.products().len(), 1);
    }

    #[test]
    fn malformed_seed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PRODUCTS_FILE), "oops").unwrap();
        assert!(CatalogStore::load(dir.path()).is_err());
    }
}
