//! Account types: users, their addresses, and their order history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use zarurat_core::{AddressId, Email, OrderId, OrderStatus, Price, Role, UserId};

use crate::cart::CartLine;

/// A saved shipping address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: AddressId,
    /// User-facing label, e.g. "Home" or "Office".
    pub label: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub is_default: bool,
}

/// A past order shown on the profile view.
///
/// Order history exists only as seeded profile data; checkout intentionally
/// creates none (see the store's checkout notice).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub date: NaiveDate,
    pub items: Vec<CartLine>,
    pub total: Price,
    pub status: OrderStatus,
    pub shipping_address: Address,
}

/// An account holder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    /// Role drives admin access and Communication Hub group visibility.
    pub role: Role,
    #[serde(default)]
    pub addresses: Vec<Address>,
    #[serde(default)]
    pub orders: Vec<Order>,
}
