//! Zarurat Bazaar CLI - catalog browsing and seed management tools.
//!
//! # Usage
//!
//! ```bash
//! # List new products
//! zb-cli products
//!
//! # Search the catalog the way the storefront does
//! zb-cli products -q rice -c All
//!
//! # Service and branch listings
//! zb-cli services
//! zb-cli stores
//!
//! # Communication Hub groups visible to a role
//! zb-cli groups -r Customer
//!
//! # Export the embedded seed data for editing (point ZARURAT_DATA_DIR at it)
//! zb-cli seed -o ./data
//!
//! # Scripted storefront session (search, cart, compare, checkout)
//! zb-cli demo
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
// A CLI's job is to print.
#![allow(clippy::print_stdout)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use zarurat_core::{CategoryFilter, Role};
use zarurat_storefront::nav::Page;

mod commands;

#[derive(Parser)]
#[command(name = "zb-cli")]
#[command(author, version, about = "Zarurat Bazaar CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products the way a storefront page would show them
    Products {
        /// Page to browse (home, new-products, used-products, search-results)
        #[arg(short, long, default_value = "new-products")]
        page: Page,

        /// Free-text search query
        #[arg(short, long)]
        query: Option<String>,

        /// Category selector (a category display name, or "All")
        #[arg(short, long, default_value = "All")]
        category: CategoryFilter,
    },
    /// List service offerings
    Services,
    /// List physical branches
    Stores,
    /// List Communication Hub groups visible to a role
    Groups {
        /// Role to check visibility for
        #[arg(short, long)]
        role: Role,
    },
    /// Export the embedded seed data to a directory
    Seed {
        /// Target directory (created if missing)
        #[arg(short, long)]
        out: PathBuf,
    },
    /// Run a scripted storefront session end to end
    Demo,
}

fn main() {
    // Default to info for our crates if RUST_LOG is not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "zarurat=info".into());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Products {
            page,
            query,
            category,
        } => commands::catalog::products(page, query, category)?,
        Commands::Services => commands::catalog::services()?,
        Commands::Stores => commands::catalog::stores()?,
        Commands::Groups { role } => commands::catalog::groups(role)?,
        Commands::Seed { out } => commands::seed::export(&out)?,
        Commands::Demo => commands::demo::run()?,
    }
    Ok(())
}
