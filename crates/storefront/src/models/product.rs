//! Catalog listing types: products, services, and store locations.

use serde::{Deserialize, Serialize};

use zarurat_core::{Category, Condition, Price, ProductId, ServiceFamily, ServiceId, StoreId};

/// A catalog product.
///
/// A value type: immutable once loaded from the catalog collaborator. The
/// cart and comparison set clone it freely and key on [`Product::id`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: Category,
    pub condition: Condition,
    /// Primary image reference.
    pub image: String,
    /// Optional video reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    pub description: String,
    /// Average customer rating, 0.0 to 5.0.
    pub rating: f32,
    pub in_stock: bool,
}

/// A bookable service listing.
///
/// Services are browsed, never carted; their price is a display range rather
/// than an exact amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    /// Home vs digital, used to partition the services view.
    #[serde(rename = "category")]
    pub family: ServiceFamily,
    /// Display string, e.g. "₹500 - ₹2,000".
    pub price_range: String,
    pub description: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    pub rating: f32,
}

/// Latitude/longitude pair for the store locator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A physical supermarket branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreLocation {
    pub id: StoreId,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub coordinates: GeoPoint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
