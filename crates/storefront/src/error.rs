//! Unified error handling.
//!
//! The state core itself has no fatal errors: a full comparison set, a
//! denied page, and an empty result are all user-visible, locally recovered
//! outcomes (see [`crate::store::Notice`] and [`crate::view::View`]). The
//! error types here belong to the surrounding infrastructure - seed loading,
//! configuration, and the auth lookup.

use thiserror::Error;

use crate::config::ConfigError;
use crate::seed::SeedError;
use crate::services::auth::AuthError;

/// Application-level error type for embedders of the storefront core.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A seed file could not be read or parsed.
    #[error("Seed error: {0}")]
    Seed(#[from] SeedError),

    /// A login attempt failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
