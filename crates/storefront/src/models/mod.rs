//! Domain models for the storefront.
//!
//! These are validated value types separate from any wire or storage shape.
//! Seed files deserialize straight into them; everything downstream treats
//! them as immutable once loaded.

pub mod chat;
pub mod company;
pub mod product;
pub mod user;

pub use chat::{ChatGroup, Message};
pub use company::CompanyInfo;
pub use product::{GeoPoint, Product, Service, StoreLocation};
pub use user::{Address, Order, User};
