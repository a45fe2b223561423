//! Seed export command.
//!
//! Writes the embedded seed data out as the JSON files the storefront loads
//! from `ZARURAT_DATA_DIR`, giving operators an editable starting point.

use std::path::Path;

use tracing::info;

use zarurat_storefront::catalog::CatalogStore;
use zarurat_storefront::services::auth::AuthService;

/// Export the embedded seed data to `out`.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or a file cannot be
/// written.
pub fn export(out: &Path) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(out)?;

    let catalog = CatalogStore::builtin();
    let auth = AuthService::builtin();

    write_json(out, "products.json", &catalog.products())?;
    write_json(out, "services.json", &catalog.services())?;
    write_json(out, "stores.json", &catalog.store_locations())?;
    write_json(out, "company.json", &catalog.company_info())?;
    write_json(out, "groups.json", &catalog.chat_groups())?;
    write_json(out, "users.json", &auth.directory())?;

    info!(dir = %out.display(), "seed data exported");
    Ok(())
}

fn write_json<T: serde::Serialize>(
    dir: &Path,
    file: &str,
    value: &T,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = dir.join(file);
    let pretty = serde_json::to_string_pretty(value)?;
    std::fs::write(&path, pretty)?;
    info!(file, "written");
    Ok(())
}
