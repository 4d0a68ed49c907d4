use shoppath_core::fixtures::electronics_catalog;
use shoppath_core::{Catalog, CatalogError, parse_catalog_json};
use std::{error::Error, path::PathBuf};

pub const CATALOG_ENV: &str = "SHOPPATH_CATALOG";

pub struct ShopPathApp {
    /// `None` means the built-in electronics catalog
    pub catalog_path: Option<PathBuf>,
}

impl ShopPathApp {
    pub fn new(catalog_path: Option<PathBuf>) -> Result<Self, Box<dyn Error>> {
        let catalog_path = catalog_path.or_else(|| std::env::var_os(CATALOG_ENV).map(PathBuf::from));

        if let Some(path) = &catalog_path {
            if !path.exists() {
                return Err(format!("Catalog file does not exist: {:?}", path).into());
            }
        }

        Ok(Self { catalog_path })
    }

    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => parse_catalog_json(path),
            None => electronics_catalog(),
        }
    }
}
