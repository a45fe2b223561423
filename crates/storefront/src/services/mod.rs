//! Mock collaborator services for the storefront.
//!
//! - [`auth`] - session creation and teardown against a seeded user
//!   directory

pub mod auth;
