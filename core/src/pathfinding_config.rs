use crate::pathfinding::heuristic::HeuristicKind;

/// Configuration for path recommendation
#[derive(Debug, Clone)]
pub struct PathfindingConfig {
    /// Heuristic used to bias expansion toward high-score items
    pub heuristic: HeuristicKind,
    /// Only pass through items with score >= threshold (0.0-1.0); the goal is always allowed
    pub min_score: f32,
    /// Consider only the N highest-score open neighbors per expansion
    pub top_related: usize,
}

impl PathfindingConfig {
    pub fn new(heuristic: HeuristicKind, min_score: f32, top_related: usize) -> Self {
        Self {
            heuristic,
            min_score,
            top_related,
        }
    }
}

impl Default for PathfindingConfig {
    fn default() -> Self {
        Self {
            heuristic: HeuristicKind::default(),
            min_score: 0.0,
            top_related: usize::MAX,
        }
    }
}
