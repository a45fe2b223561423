//! Derived view resolution.
//!
//! [`resolve`] is a pure function from state to the view the UI should
//! render. Access guards live here, not in stored state: the admin and
//! communication-hub fallbacks are recomputed on every render, so a logout
//! can never leave a privileged view on screen.

use crate::cart::Cart;
use crate::models::{ChatGroup, CompanyInfo, Product, Service, StoreLocation, User};
use crate::nav::Page;
use crate::state::StorefrontState;

/// Data for the home view's featured rows.
#[derive(Debug)]
pub struct HomeView<'a> {
    /// The session user, shown the Communication Hub widget when present.
    pub hub_user: Option<&'a User>,
    pub featured_new: Vec<&'a Product>,
    pub featured_digital: Vec<&'a Product>,
    pub home_services: Vec<&'a Service>,
    pub digital_services: Vec<&'a Service>,
    pub featured_used: Vec<&'a Product>,
}

/// What to render.
///
/// Borrowed from the state; a view never outlives the state it was derived
/// from, and holds nothing the state does not.
#[derive(Debug)]
pub enum View<'a> {
    /// The comparison overlay (preempts whatever page is active).
    Comparison { products: &'a [Product] },
    Home(HomeView<'a>),
    /// New-products, used-products, and search-results pages share a grid.
    ProductGrid {
        title: String,
        products: Vec<&'a Product>,
    },
    Services {
        digital: Vec<&'a Service>,
        home: Vec<&'a Service>,
    },
    StoreLocator { locations: &'a [StoreLocation] },
    ProductDetail { product: &'a Product },
    /// Nothing to render (product-detail without a selection).
    Blank,
    Cart { cart: &'a Cart },
    AdminDashboard { user: &'a User },
    /// Admin page without admin access.
    AccessDenied,
    /// Login/registration, also the fallback for session-gated pages.
    Auth,
    CommunicationHub {
        user: &'a User,
        groups: Vec<&'a ChatGroup>,
    },
    Profile { user: &'a User },
    About { company: &'a CompanyInfo },
}

/// Resolve the view for the current state.
#[must_use]
pub fn resolve(state: &StorefrontState) -> View<'_> {
    if state.comparison_open() {
        return View::Comparison {
            products: state.comparison().products(),
        };
    }

    match state.page() {
        Page::Home => View::Home(HomeView {
            hub_user: state.session(),
            featured_new: state.featured_new(),
            featured_digital: state.featured_digital(),
            home_services: state.featured_home_services(),
            digital_services: state.featured_digital_services(),
            featured_used: state.featured_used(),
        }),
        Page::NewProducts => View::ProductGrid {
            title: "New Products".to_owned(),
            products: state.visible_products(),
        },
        Page::UsedProducts => View::ProductGrid {
            title: "Used Market (Best Value)".to_owned(),
            products: state.visible_products(),
        },
        Page::SearchResults => View::ProductGrid {
            title: format!("Search Results for \"{}\"", state.criteria().query),
            products: state.visible_products(),
        },
        Page::Services => View::Services {
            digital: state.digital_services(),
            home: state.home_services(),
        },
        Page::Stores => View::StoreLocator {
            locations: state.catalog().store_locations(),
        },
        Page::ProductDetail => state
            .selected_product()
            .map_or(View::Blank, |product| View::ProductDetail { product }),
        Page::Cart => View::Cart {
            cart: state.cart(),
        },
        Page::Admin => match state.session() {
            Some(user) if state.catalog().has_admin_access(user.role) => {
                View::AdminDashboard { user }
            }
            Some(_) | None => View::AccessDenied,
        },
        Page::Auth => View::Auth,
        Page::Groups => state.session().map_or(View::Auth, |user| {
            View::CommunicationHub {
                user,
                groups: state.visible_groups(),
            }
        }),
        Page::Profile => state
            .session()
            .map_or(View::Auth, |user| View::Profile { user }),
        Page::About => View::About {
            company: state.catalog().company_info(),
        },
    }
}
