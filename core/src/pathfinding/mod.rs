pub mod astar;
pub mod cost;
pub mod heuristic;
pub mod utils;

// Re-export the public functions
pub use astar::astar_find_path;
pub use cost::{EdgeCost, EdgeTable, UniformCost};
pub use heuristic::HeuristicKind;
pub use utils::{PathStep, SearchOutcome};
