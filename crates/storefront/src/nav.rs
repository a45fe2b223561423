//! Page identifiers for the view router.

use core::fmt;

use serde::{Deserialize, Serialize};

use zarurat_core::UnknownVariant;

/// Every page the storefront can show.
///
/// A closed set: the view router matches exhaustively, so a new page cannot
/// be added without deciding what it renders and which guards apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Home,
    NewProducts,
    UsedProducts,
    SearchResults,
    Services,
    Stores,
    ProductDetail,
    Cart,
    Admin,
    Auth,
    Groups,
    Profile,
    About,
}

impl Page {
    /// Stable identifier, as used in links and the CLI.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::NewProducts => "new-products",
            Self::UsedProducts => "used-products",
            Self::SearchResults => "search-results",
            Self::Services => "services",
            Self::Stores => "stores",
            Self::ProductDetail => "product-detail",
            Self::Cart => "cart",
            Self::Admin => "admin",
            Self::Auth => "auth",
            Self::Groups => "groups",
            Self::Profile => "profile",
            Self::About => "about",
        }
    }

    const ALL: [Self; 13] = [
        Self::Home,
        Self::NewProducts,
        Self::UsedProducts,
        Self::SearchResults,
        Self::Services,
        Self::Stores,
        Self::ProductDetail,
        Self::Cart,
        Self::Admin,
        Self::Auth,
        Self::Groups,
        Self::Profile,
        Self::About,
    ];
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Page {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "page",
                value: s.to_owned(),
            })
    }
}
