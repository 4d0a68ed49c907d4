//! Demo data for the electronics store.

use crate::catalog::{Catalog, Item};
use crate::error::CatalogError;

pub const AIRPODS: &str = "AirPods Pro 2nd Generation";
pub const GAMING_LAPTOP: &str = "ASUS ROG Strix G15 Gaming Laptop";
pub const PRINTER_3D: &str = "Creality Ender-3 S1 Pro 3D Printer";

/// A fresh three-product catalog: one high, one medium and one low converter.
pub fn electronics_catalog() -> Result<Catalog, CatalogError> {
    Catalog::new(vec![
        Item::new(AIRPODS, "Audio", 0.85)?,
        Item::new(GAMING_LAPTOP, "Computers", 0.45)?,
        Item::new(PRINTER_3D, "3D Printing", 0.15)?,
    ])
}
