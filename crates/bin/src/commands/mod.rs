//! Subcommand implementations.

pub mod catalog;
pub mod health;
pub mod serve;

use aiguide::catalog::Catalog;

use crate::cli::CatalogSource;

/// Load the configured catalog, or the built-in table when no file is given.
pub fn load_catalog(source: &CatalogSource) -> aiguide::Result<Catalog> {
    match &source.path {
        Some(path) => {
            let catalog = Catalog::from_json_file(path)?;
            tracing::info!(
                "Loaded catalog from {} ({} categories, {} tools)",
                path.display(),
                catalog.len(),
                catalog.tool_count()
            );
            Ok(catalog)
        }
        None => Ok(Catalog::builtin()),
    }
}
