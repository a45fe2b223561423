//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `ZARURAT_DATA_DIR` - seed directory for catalog and user data; the
//!   embedded seed is used when unset
//! - `ZARURAT_FEATURED_ROW` - how many items each featured home row shows
//!   (default: 4)

use std::path::PathBuf;

use thiserror::Error;

/// Default length of the featured rows on the home view.
pub const DEFAULT_FEATURED_ROW: usize = 4;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Seed directory for catalog and user data, if configured.
    pub data_dir: Option<PathBuf>,
    /// Items per featured home row.
    pub featured_row: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            featured_row: DEFAULT_FEATURED_ROW,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = get_optional_env("ZARURAT_DATA_DIR").map(PathBuf::from);
        let featured_row =
            parse_featured_row(get_optional_env("ZARURAT_FEATURED_ROW").as_deref())?;

        Ok(Self {
            data_dir,
            featured_row,
        })
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Parse the featured-row override, defaulting when unset.
fn parse_featured_row(raw: Option<&str>) -> Result<usize, ConfigError> {
    match raw {
        None => Ok(DEFAULT_FEATURED_ROW),
        Some(s) => match s.parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            Ok(_) => Err(ConfigError::InvalidEnvVar(
                "ZARURAT_FEATURED_ROW".to_owned(),
                "must be at least 1".to_owned(),
            )),
            Err(e) => Err(ConfigError::InvalidEnvVar(
                "ZARURAT_FEATURED_ROW".to_owned(),
                e.to_string(),
            )),
        },
    }
}
