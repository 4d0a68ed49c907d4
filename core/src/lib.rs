pub mod catalog;
pub mod error;
pub mod fixtures;
pub mod parsing;
pub mod pathfinding;
pub mod pathfinding_config;
pub mod recommender;
pub mod string_normalization;

// Re-export commonly used items
pub use catalog::{Catalog, Item};
pub use error::{CatalogError, Endpoint, SearchError};
pub use parsing::{parse_catalog_json, parse_catalog_str};
pub use pathfinding::{
    EdgeCost, EdgeTable, HeuristicKind, PathStep, SearchOutcome, UniformCost, astar_find_path,
};
pub use pathfinding_config::PathfindingConfig;
pub use recommender::PathRecommender;
