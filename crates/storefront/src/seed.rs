//! JSON seed file loading.
//!
//! Both mock collaborators (catalog and auth) read their data from JSON
//! files in a seed directory. A missing file is not an error - callers fall
//! back to the embedded defaults - but an unreadable or malformed file is.

use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors raised while loading a seed file.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid JSON for the expected shape.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a JSON seed file, if present.
///
/// Returns `Ok(None)` when the file does not exist.
///
/// # Errors
///
/// Returns [`SeedError`] when the file exists but cannot be read or parsed.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, SeedError> {
    if !path.exists() {
        return Ok(None);
    }

    let display = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: display.clone(),
        source,
    })?;
    let value = serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
        path: display,
        source,
    })?;

    Ok(Some(value))
}
