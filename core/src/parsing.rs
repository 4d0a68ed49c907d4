use crate::catalog::{Catalog, Item};
use crate::error::CatalogError;
use std::path::Path;

/// Loads a catalog from a JSON array of `{"name", "category", "score"}` objects.
///
/// `score` may also be spelled `conversion_prob`, and `category` may be omitted.
pub fn parse_catalog_json(catalog_path: &Path) -> Result<Catalog, CatalogError> {
    let contents = std::fs::read_to_string(catalog_path)?;
    parse_catalog_str(&contents)
}

pub fn parse_catalog_str(contents: &str) -> Result<Catalog, CatalogError> {
    let items: Vec<Item> = serde_json::from_str(contents)?;
    Catalog::new(items)
}
