//! Unidirectional action dispatch.
//!
//! ```text
//! Action ──→ Store ──→ StorefrontState ──→ subscribers
//!               │
//!               └──→ Option<Notice>
//! ```
//!
//! The [`Store`] is the single controller: it owns the state and the mock
//! collaborators, applies one [`Action`] at a time, notifies subscribers
//! after every dispatch, and hands user-facing signals back as [`Notice`]
//! values. It never performs UI side effects itself - scroll resets and
//! alert boxes belong to the rendering layer.

use core::fmt;

use zarurat_core::{CategoryFilter, ProductId};

use crate::catalog::CatalogStore;
use crate::compare::CompareToggle;
use crate::models::Product;
use crate::nav::Page;
use crate::services::auth::AuthService;
use crate::state::StorefrontState;

/// Everything a UI can ask the storefront to do.
#[derive(Debug, Clone)]
pub enum Action {
    /// Go to a page.
    Navigate(Page),
    /// Open a product's detail page (selection travels with the
    /// navigation).
    SelectProduct(Product),
    /// Submit the search form.
    Search {
        query: String,
        category: CategoryFilter,
    },
    /// Add units of a product to the cart.
    AddToCart { product: Product, quantity: u32 },
    /// Empty the cart (placeholder checkout - no order is created).
    Checkout,
    /// Toggle a product in the comparison set.
    ToggleCompare(Product),
    /// Remove a product from the comparison set.
    RemoveCompared(ProductId),
    /// Show the comparison overlay.
    OpenComparison,
    /// Hide the comparison overlay.
    CloseComparison,
    /// Attempt a login against the auth collaborator.
    Login { email: String },
    /// End the session.
    Logout,
    /// Re-read the catalog snapshot from the data collaborator.
    Refresh,
}

/// A user-facing signal produced by a dispatch.
///
/// Notices are messages, not errors: the state stays consistent and the UI
/// decides how to show them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The comparison set is at capacity; nothing was added.
    ComparisonFull,
    /// Checkout ran: the cart was emptied, no order exists.
    CheckoutAccepted { items: u32 },
    /// Login succeeded.
    LoggedIn { name: String },
    /// Login failed; the session is unchanged.
    LoginFailed(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ComparisonFull => {
                write!(f, "You can compare up to 3 products at a time.")
            }
            Self::CheckoutAccepted { items } => {
                write!(f, "Checkout functionality coming soon! ({items} items cleared)")
            }
            Self::LoggedIn { name } => write!(f, "Welcome back, {name}."),
            Self::LoginFailed(reason) => write!(f, "Login failed: {reason}"),
        }
    }
}

/// Observer invoked with the state after every dispatch.
pub type Subscriber = Box<dyn FnMut(&StorefrontState)>;

/// The storefront controller.
pub struct Store {
    state: StorefrontState,
    catalog: CatalogStore,
    auth: AuthService,
    subscribers: Vec<Subscriber>,
}

impl Store {
    /// Build a store over the given collaborators.
    ///
    /// Loads the initial catalog snapshot and adopts a session the auth
    /// collaborator may already hold.
    #[must_use]
    pub fn new(catalog: CatalogStore, auth: AuthService) -> Self {
        let mut state = StorefrontState::new(catalog.clone());
        if let Some(user) = auth.current_user() {
            state.restore_session(user.clone());
        }

        Self {
            state,
            catalog,
            auth,
            subscribers: Vec::new(),
        }
    }

    /// A store over the embedded seed data.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(CatalogStore::builtin(), AuthService::builtin())
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> &StorefrontState {
        &self.state
    }

    /// Register an observer; it runs after every subsequent dispatch.
    pub fn subscribe(&mut self, subscriber: Subscriber) {
        self.subscribers.push(subscriber);
    }

    /// Apply one action.
    ///
    /// Mutations are synchronous: the action completes (and subscribers run)
    /// before this returns, so no two actions ever interleave.
    pub fn dispatch(&mut self, action: Action) -> Option<Notice> {
        tracing::debug!(?action, "dispatch");

        let notice = match action {
            Action::Navigate(page) => {
                self.state.navigate(page);
                None
            }
            Action::SelectProduct(product) => {
                self.state.select_product(product);
                None
            }
            Action::Search { query, category } => {
                self.state.search(query, category);
                None
            }
            Action::AddToCart { product, quantity } => {
                self.state.add_to_cart(product, quantity);
                None
            }
            Action::Checkout => {
                let items = self.state.checkout();
                Some(Notice::CheckoutAccepted { items })
            }
            Action::ToggleCompare(product) => match self.state.toggle_compare(product) {
                CompareToggle::Full => Some(Notice::ComparisonFull),
                CompareToggle::Added | CompareToggle::Removed => None,
            },
            Action::RemoveCompared(id) => {
                self.state.remove_compared(id);
                None
            }
            Action::OpenComparison => {
                self.state.open_comparison();
                None
            }
            Action::CloseComparison => {
                self.state.close_comparison();
                None
            }
            Action::Login { email } => match self.auth.login(&email) {
                Ok(user) => {
                    let name = user.name.clone();
                    self.state.login(user);
                    Some(Notice::LoggedIn { name })
                }
                Err(e) => {
                    tracing::warn!(error = %e, "login rejected");
                    Some(Notice::LoginFailed(e.to_string()))
                }
            },
            Action::Logout => {
                self.auth.logout();
                self.state.logout();
                None
            }
            Action::Refresh => {
                self.state.refresh(&self.catalog);
                None
            }
        };

        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }

        notice
    }
}
