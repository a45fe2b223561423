//! Zarurat Bazaar Core - shared domain types.
//!
//! This crate provides the value types used across all Zarurat Bazaar
//! components:
//! - `storefront` - The headless storefront state core
//! - `cli` - Command-line tools for browsing and seed management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O and no collaborator logic.
//! Everything here is a plain value: cheap to clone, comparable, and
//! serde-serializable for the JSON seed files.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, emails, and the closed enumerations
//!   (categories, conditions, roles, statuses)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
