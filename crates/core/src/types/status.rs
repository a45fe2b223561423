//! Closed enumerations for catalog and account entities.
//!
//! Every enumeration the storefront branches on lives here so matches stay
//! exhaustive: adding a variant breaks every site that forgot about it.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Product categories carried by the catalog.
///
/// Serialized with the display names the seed data uses ("Digital Services",
/// not `digital_services`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Groceries,
    Clothing,
    Electronics,
    Furniture,
    Automobiles,
    Hardware,
    Services,
    #[serde(rename = "Digital Services")]
    DigitalServices,
    #[serde(rename = "Digital Products")]
    DigitalProducts,
}

impl Category {
    /// Display name, as shown in the category selector and matched by the
    /// free-text search.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Groceries => "Groceries",
            Self::Clothing => "Clothing",
            Self::Electronics => "Electronics",
            Self::Furniture => "Furniture",
            Self::Automobiles => "Automobiles",
            Self::Hardware => "Hardware",
            Self::Services => "Services",
            Self::DigitalServices => "Digital Services",
            Self::DigitalProducts => "Digital Products",
        }
    }

    /// All categories, in selector display order.
    pub const ALL: [Self; 9] = [
        Self::Groceries,
        Self::Clothing,
        Self::Electronics,
        Self::Furniture,
        Self::Automobiles,
        Self::Hardware,
        Self::Services,
        Self::DigitalServices,
        Self::DigitalProducts,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = UnknownVariant;

    /// Parse a category from its display name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVariant {
                kind: "category",
                value: s.to_owned(),
            })
    }
}

/// Category selector state: either no restriction or exactly one category.
///
/// The "All" sentinel is its own variant rather than a magic string, so a
/// selector can never hold a category that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Restrict to one category.
    Only(Category),
}

impl CategoryFilter {
    /// Whether a product in `category` passes this selector.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// Product condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    New,
    Used,
    /// Bookable services listed alongside physical stock.
    Service,
}

/// Which family a service listing belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceFamily {
    /// Home and lifestyle services (plumbing, interiors, ...).
    #[serde(rename = "Services")]
    Home,
    /// Digital and creative services (web, design, marketing, ...).
    #[serde(rename = "Digital Services")]
    Digital,
}

/// Account roles, used for access checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Director,
    Shareholder,
    Employee,
    Distributor,
    Shop,
    Customer,
}

impl Role {
    /// Display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Director => "Director",
            Self::Shareholder => "Shareholder",
            Self::Employee => "Employee",
            Self::Distributor => "Distributor",
            Self::Shop => "Shop",
            Self::Customer => "Customer",
        }
    }
}

impl Role {
    const ALL: [Self; 7] = [
        Self::Admin,
        Self::Director,
        Self::Shareholder,
        Self::Employee,
        Self::Distributor,
        Self::Shop,
        Self::Customer,
    ];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = UnknownVariant;

    /// Parse a role from its display name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVariant {
                kind: "role",
                value: s.to_owned(),
            })
    }
}

/// Order lifecycle status (profile history only; checkout creates no orders).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

/// Communication Hub message kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    File,
    Meeting,
    Call,
}

/// Error for parsing one of the closed enumerations from text.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    /// Which enumeration was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}
