use crate::catalog::{Catalog, CatalogError};
use std::path::Path;
use tracing::{debug, info};

/// Parse a JSON price table and check its invariants
pub fn parse_catalog_json(json: &str) -> Result<Catalog, CatalogError> {
    let catalog: Catalog =
        serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
    catalog.validate()?;
    Ok(catalog)
}

/// Parse a TOML price table (`[[eventTypes]]` / `[[addonGroups]]`, same keys as JSON)
pub fn parse_catalog_toml(text: &str) -> Result<Catalog, CatalogError> {
    let catalog: Catalog = toml::from_str(text).map_err(|e| CatalogError::Parse(e.to_string()))?;
    catalog.validate()?;
    Ok(catalog)
}

/// Load a catalog file; the format follows the extension (`.toml`, otherwise JSON)
pub fn load_catalog_file(path: &Path) -> Result<Catalog, CatalogError> {
    info!("Loading catalog from: {}", path.display());

    let content = std::fs::read_to_string(path)?;
    debug!("Read {} bytes of catalog data", content.len());

    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let catalog = if is_toml {
        parse_catalog_toml(&content)?
    } else {
        parse_catalog_json(&content)?
    };

    info!(
        "Parsed {} event types, {} add-on groups, {} add-on items",
        catalog.event_types.len(),
        catalog.addon_groups.len(),
        catalog.item_count()
    );
    Ok(catalog)
}

/// Operator file when configured, built-in table otherwise
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    match path {
        Some(path) => load_catalog_file(path),
        None => {
            debug!("No catalog path configured, using built-in price table");
            Catalog::builtin()
        }
    }
}
