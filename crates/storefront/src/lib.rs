//! Zarurat Bazaar storefront state core.
//!
//! A headless storefront: all browsing, cart, comparison, and session state
//! for the Zarurat Bazaar hybrid-retail brand, with no rendering attached.
//! A UI layer (web, TUI, or the bundled CLI) dispatches [`store::Action`]s
//! and renders the [`view::View`] derived from the resulting state.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Store ──→ StorefrontState ──→ View
//!    ↑          │
//!    │          └──→ Notice (user-facing signals)
//!    └─────── UI layer
//! ```
//!
//! - [`state::StorefrontState`] - the single application-state struct
//! - [`store::Store`] - owns the state and the mock collaborators, applies
//!   actions, notifies subscribers
//! - [`view`] - pure derived render decision, exhaustive over [`nav::Page`]
//! - [`catalog::CatalogStore`] / [`services::auth::AuthService`] - mock
//!   data-access and auth collaborators backed by JSON seed data
//!
//! Everything is synchronous and single-owner: each dispatched action
//! completes before the next is processed.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod compare;
pub mod config;
pub mod error;
pub mod models;
pub mod nav;
pub mod search;
pub mod seed;
pub mod services;
pub mod state;
pub mod store;
pub mod view;
