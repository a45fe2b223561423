//! Catalog listing commands.
//!
//! Listings go through the same dispatch-and-resolve path the storefront UI
//! uses, so what prints here is exactly what a page would show.

#![allow(clippy::print_stdout)]

use zarurat_core::{CategoryFilter, Role};
use zarurat_storefront::error::AppError;
use zarurat_storefront::nav::Page;
use zarurat_storefront::store::Action;
use zarurat_storefront::view::{self, View};

use super::open_store;

/// List the products a storefront page displays.
pub fn products(
    page: Page,
    query: Option<String>,
    category: CategoryFilter,
) -> Result<(), AppError> {
    let mut store = open_store()?;

    // A submitted query or category selection is a search, and a search
    // always lands on the search-results page, like the storefront form.
    if query.is_some() || category != CategoryFilter::All {
        store.dispatch(Action::Search {
            query: query.unwrap_or_default(),
            category,
        });
    } else {
        store.dispatch(Action::Navigate(page));
    }

    match view::resolve(store.state()) {
        View::ProductGrid { title, products } => {
            println!("{title}");
            if products.is_empty() {
                println!("  (no products match)");
            }
            for p in products {
                println!(
                    "  #{:<3} {:<36} {:>12}  {} / {:?}{}",
                    p.id,
                    p.name,
                    p.price.to_string(),
                    p.category,
                    p.condition,
                    if p.in_stock { "" } else { "  [out of stock]" },
                );
            }
        }
        _ => {
            // Pages without a grid (home, stores, ...) list the whole catalog.
            println!("Catalog");
            for p in store.state().catalog().products() {
                println!("  #{:<3} {:<36} {:>12}", p.id, p.name, p.price.to_string());
            }
        }
    }

    Ok(())
}

/// List every service offering, partitioned like the services view.
pub fn services() -> Result<(), AppError> {
    let mut store = open_store()?;
    store.dispatch(Action::Navigate(Page::Services));

    if let View::Services { digital, home } = view::resolve(store.state()) {
        println!("Digital & Creative Services");
        for s in digital {
            println!("  #{:<3} {:<36} {}", s.id, s.name, s.price_range);
        }
        println!("Home & Lifestyle Services");
        for s in home {
            println!("  #{:<3} {:<36} {}", s.id, s.name, s.price_range);
        }
    }

    Ok(())
}

/// List every physical branch.
pub fn stores() -> Result<(), AppError> {
    let mut store = open_store()?;
    store.dispatch(Action::Navigate(Page::Stores));

    if let View::StoreLocator { locations } = view::resolve(store.state()) {
        for branch in locations {
            println!("#{} {}", branch.id, branch.name);
            println!("    {}", branch.address);
            println!("    {}  ({}, {})", branch.phone, branch.coordinates.lat, branch.coordinates.lng);
        }
    }

    Ok(())
}

/// List the Communication Hub groups a role can see.
pub fn groups(role: Role) -> Result<(), AppError> {
    let store = open_store()?;

    let visible = store.state().catalog().groups_for(role);
    println!("Groups visible to {role}:");
    if visible.is_empty() {
        println!("  (none)");
    }
    for group in visible {
        println!(
            "  {} {} - {} ({} messages)",
            group.icon,
            group.name,
            group.description,
            group.messages.len(),
        );
    }

    Ok(())
}
