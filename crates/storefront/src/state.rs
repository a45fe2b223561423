//! The application state.
//!
//! One struct owns everything mutable: catalog snapshot, session, cart,
//! comparison set, and navigation state. Views never hold state of their
//! own - they are derived from here (see [`crate::view`]), so there is
//! nothing to drift out of sync.

use zarurat_core::{Category, CategoryFilter, Condition, ProductId, ServiceFamily};

use crate::cart::Cart;
use crate::catalog::CatalogStore;
use crate::compare::{CompareToggle, ComparisonSet};
use crate::config::DEFAULT_FEATURED_ROW;
use crate::models::{ChatGroup, Product, Service, User};
use crate::nav::Page;
use crate::search::{SearchCriteria, filter_products};

/// All mutable storefront state, owned by a single controller.
#[derive(Debug, Clone)]
pub struct StorefrontState {
    catalog: CatalogStore,
    session: Option<User>,
    cart: Cart,
    comparison: ComparisonSet,
    page: Page,
    selected_product: Option<Product>,
    criteria: SearchCriteria,
    comparison_open: bool,
    featured_row: usize,
}

impl StorefrontState {
    /// Fresh state over a catalog snapshot, landing on the home page.
    #[must_use]
    pub fn new(catalog: CatalogStore) -> Self {
        Self {
            catalog,
            session: None,
            cart: Cart::new(),
            comparison: ComparisonSet::new(),
            page: Page::default(),
            selected_product: None,
            criteria: SearchCriteria::default(),
            comparison_open: false,
            featured_row: DEFAULT_FEATURED_ROW,
        }
    }

    /// Override the featured-row length (home view slices).
    #[must_use]
    pub const fn with_featured_row(mut self, featured_row: usize) -> Self {
        self.featured_row = featured_row;
        self
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Move to `page`, clearing page-scoped transient state.
    ///
    /// Any page other than product-detail drops the selected product, so a
    /// later visit to product-detail cannot show stale data. Every
    /// navigation closes the comparison overlay.
    pub fn navigate(&mut self, page: Page) {
        tracing::debug!(from = %self.page, to = %page, "navigate");
        self.page = page;
        if page != Page::ProductDetail {
            self.selected_product = None;
        }
        self.comparison_open = false;
    }

    /// Open a product's detail page.
    ///
    /// Selection and navigation happen together; there is no way to set one
    /// without the other.
    pub fn select_product(&mut self, product: Product) {
        self.selected_product = Some(product);
        self.navigate(Page::ProductDetail);
    }

    /// Submit a search: store the criteria and land on the results page.
    pub fn search(&mut self, query: impl Into<String>, category: CategoryFilter) {
        self.criteria = SearchCriteria::new(query, category);
        self.navigate(Page::SearchResults);
    }

    /// Store the logged-in user and return home.
    pub fn login(&mut self, user: User) {
        self.session = Some(user);
        self.navigate(Page::Home);
    }

    /// Adopt an already-running session without navigating (startup path).
    pub fn restore_session(&mut self, user: User) {
        self.session = Some(user);
    }

    /// Drop the session and return home.
    pub fn logout(&mut self) {
        self.session = None;
        self.navigate(Page::Home);
    }

    /// Add units of a product to the cart (merging by identity).
    pub fn add_to_cart(&mut self, product: Product, quantity: u32) {
        self.cart.add(product, quantity);
    }

    /// Empty the cart. Intentionally creates no order (placeholder checkout).
    ///
    /// Returns how many units were discarded.
    pub fn checkout(&mut self) -> u32 {
        let discarded = self.cart.item_count();
        self.cart.clear();
        discarded
    }

    /// Toggle a product in the comparison set.
    pub fn toggle_compare(&mut self, product: Product) -> CompareToggle {
        self.comparison.toggle(product)
    }

    /// Remove a product from the comparison set (comparison view action).
    pub fn remove_compared(&mut self, id: ProductId) {
        self.comparison.remove(id);
    }

    /// Show the comparison overlay.
    pub fn open_comparison(&mut self) {
        self.comparison_open = true;
    }

    /// Hide the comparison overlay.
    pub fn close_comparison(&mut self) {
        self.comparison_open = false;
    }

    /// Replace the catalog snapshot from the collaborator.
    ///
    /// Synchronous and idempotent: calling it twice in a row is the same as
    /// calling it once.
    pub fn refresh(&mut self, catalog: &CatalogStore) {
        self.catalog = catalog.clone();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub const fn page(&self) -> Page {
        self.page
    }

    #[must_use]
    pub const fn session(&self) -> Option<&User> {
        self.session.as_ref()
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub const fn comparison(&self) -> &ComparisonSet {
        &self.comparison
    }

    #[must_use]
    pub const fn comparison_open(&self) -> bool {
        self.comparison_open
    }

    #[must_use]
    pub const fn selected_product(&self) -> Option<&Product> {
        self.selected_product.as_ref()
    }

    #[must_use]
    pub const fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    #[must_use]
    pub const fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    // =========================================================================
    // Derived selectors
    // =========================================================================

    /// The product list the current page displays.
    #[must_use]
    pub fn visible_products(&self) -> Vec<&Product> {
        filter_products(self.catalog.products(), self.page, &self.criteria)
    }

    /// Units in the cart (header badge).
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.cart.item_count()
    }

    /// Whether the floating compare button shows: something is selected and
    /// the overlay is not already open.
    #[must_use]
    pub fn compare_fab_visible(&self) -> bool {
        !self.comparison.is_empty() && !self.comparison_open
    }

    /// First featured-row's worth of new products.
    #[must_use]
    pub fn featured_new(&self) -> Vec<&Product> {
        self.products_where(|p| p.condition == Condition::New)
    }

    /// First featured-row's worth of used products.
    #[must_use]
    pub fn featured_used(&self) -> Vec<&Product> {
        self.products_where(|p| p.condition == Condition::Used)
    }

    /// First featured-row's worth of digital products.
    #[must_use]
    pub fn featured_digital(&self) -> Vec<&Product> {
        self.products_where(|p| p.category == Category::DigitalProducts)
    }

    /// First featured-row's worth of home services.
    #[must_use]
    pub fn featured_home_services(&self) -> Vec<&Service> {
        self.services_in(ServiceFamily::Home, self.featured_row)
    }

    /// First featured-row's worth of digital services.
    #[must_use]
    pub fn featured_digital_services(&self) -> Vec<&Service> {
        self.services_in(ServiceFamily::Digital, self.featured_row)
    }

    /// Every home service (services view).
    #[must_use]
    pub fn home_services(&self) -> Vec<&Service> {
        self.services_in(ServiceFamily::Home, usize::MAX)
    }

    /// Every digital service (services view).
    #[must_use]
    pub fn digital_services(&self) -> Vec<&Service> {
        self.services_in(ServiceFamily::Digital, usize::MAX)
    }

    /// Chat groups the session user may see; empty when logged out.
    #[must_use]
    pub fn visible_groups(&self) -> Vec<&ChatGroup> {
        self.session
            .as_ref()
            .map(|user| self.catalog.groups_for(user.role))
            .unwrap_or_default()
    }

    fn products_where(&self, keep: impl Fn(&Product) -> bool) -> Vec<&Product> {
        self.catalog
            .products()
            .iter()
            .filter(|p| keep(p))
            .take(self.featured_row)
            .collect()
    }

    fn services_in(&self, family: ServiceFamily, limit: usize) -> Vec<&Service> {
        self.catalog
            .services()
            .iter()
            .filter(|s| s.family == family)
            .take(limit)
            .collect()
    }
}
