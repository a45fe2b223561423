//! Core types for Zarurat Bazaar.
//!
//! Type-safe wrappers for the domain concepts the storefront passes around.

pub mod email;
pub mod id;
pub mod price;
pub mod status;

pub use email::{Email, EmailError};
pub use id::*;
pub use price::{CurrencyCode, Price};
pub use status::*;
