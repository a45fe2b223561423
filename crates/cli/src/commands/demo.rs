//! Scripted storefront session.
//!
//! Drives the store through a realistic browse-search-cart-compare-checkout
//! session, printing each notice the UI would have shown. Handy as a smoke
//! test of the whole dispatch loop.

#![allow(clippy::print_stdout)]

use zarurat_core::CategoryFilter;
use zarurat_storefront::error::AppError;
use zarurat_storefront::nav::Page;
use zarurat_storefront::store::{Action, Store};
use zarurat_storefront::view::{self, View};

/// Run the scripted session.
pub fn run() -> Result<(), AppError> {
    let mut store = open()?;

    step(&mut store, Action::Refresh);

    // Search for rice like a customer would.
    step(
        &mut store,
        Action::Search {
            query: "rice".to_owned(),
            category: CategoryFilter::All,
        },
    );
    show(&store);

    // Cart two bags, then one more of the same (lines merge).
    if let Some(rice) = store.state().visible_products().first().copied().cloned() {
        step(
            &mut store,
            Action::AddToCart {
                product: rice.clone(),
                quantity: 2,
            },
        );
        step(
            &mut store,
            Action::AddToCart {
                product: rice,
                quantity: 1,
            },
        );
    }

    // Try to compare four products; the fourth is rejected.
    let picks: Vec<_> = store
        .state()
        .catalog()
        .products()
        .iter()
        .take(4)
        .cloned()
        .collect();
    for product in picks {
        step(&mut store, Action::ToggleCompare(product));
    }
    step(&mut store, Action::OpenComparison);
    show(&store);
    step(&mut store, Action::CloseComparison);

    // Log in as the seeded admin and open the dashboard.
    step(
        &mut store,
        Action::Login {
            email: "admin@zaruratbazaar.in".to_owned(),
        },
    );
    step(&mut store, Action::Navigate(Page::Admin));
    show(&store);

    // Check out: the cart is emptied, no order is created.
    step(&mut store, Action::Navigate(Page::Cart));
    show(&store);
    step(&mut store, Action::Checkout);

    step(&mut store, Action::Logout);
    println!("demo complete");
    Ok(())
}

fn open() -> Result<Store, AppError> {
    let mut store = super::open_store()?;
    store.subscribe(Box::new(|state| {
        tracing::debug!(page = %state.page(), cart = state.cart_count(), "state changed");
    }));
    Ok(store)
}

fn step(store: &mut Store, action: Action) {
    println!("> {action:?}");
    if let Some(notice) = store.dispatch(action) {
        println!("  notice: {notice}");
    }
}

fn show(store: &Store) {
    match view::resolve(store.state()) {
        View::ProductGrid { title, products } => {
            println!("  [{title}] {} products", products.len());
        }
        View::Comparison { products } => {
            let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
            println!("  [Compare] {}", names.join(" | "));
        }
        View::Cart { cart } => {
            println!(
                "  [Cart] {} units, subtotal {}",
                cart.item_count(),
                cart.subtotal(),
            );
        }
        View::AdminDashboard { user } => {
            println!("  [Admin] open for {} ({})", user.name, user.role);
        }
        View::AccessDenied => println!("  [Access Denied]"),
        other => println!("  [{}]", describe(&other)),
    }
}

const fn describe(view: &View<'_>) -> &'static str {
    match view {
        View::Comparison { .. } => "Compare",
        View::Home(_) => "Home",
        View::ProductGrid { .. } => "Products",
        View::Services { .. } => "Services",
        View::StoreLocator { .. } => "Stores",
        View::ProductDetail { .. } => "Product Detail",
        View::Blank => "Blank",
        View::Cart { .. } => "Cart",
        View::AdminDashboard { .. } => "Admin",
        View::AccessDenied => "Access Denied",
        View::Auth => "Auth",
        View::CommunicationHub { .. } => "Communication Hub",
        View::Profile { .. } => "Profile",
        View::About { .. } => "About",
    }
}
