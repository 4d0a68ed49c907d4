use crate::catalog::Catalog;
use crate::pathfinding_config::PathfindingConfig;
use rustc_hash::FxHashSet;

/// An item name and the accumulated cost `g` of reaching it.
pub type PathStep = (String, f32);

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Start-to-goal route, or `None` when the goal is unreachable.
    pub path: Option<Vec<PathStep>>,
    pub items_expanded: usize,
    /// Items in the order they were closed.
    pub expansion_order: Vec<String>,
    pub search_duration: f64,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    pub fn names(&self) -> Option<Vec<String>> {
        self.path
            .as_ref()
            .map(|path| path.iter().map(|(name, _)| name.clone()).collect())
    }

    pub fn total_cost(&self) -> Option<f32> {
        self.path
            .as_ref()
            .and_then(|path| path.last())
            .map(|(_, cost)| *cost)
    }

    pub fn hop_count(&self) -> Option<usize> {
        self.path.as_ref().map(|path| path.len().saturating_sub(1))
    }
}

/// Positions of the items that may follow `current`, in catalog order.
///
/// Closed items are never offered. `min_score` and `top_related` narrow the
/// intermediate stops only; the goal is offered whenever it is still open.
pub fn select_neighbors(
    catalog: &Catalog,
    current: usize,
    goal: usize,
    closed: &FxHashSet<usize>,
    config: &PathfindingConfig,
) -> Vec<usize> {
    let items = catalog.items();
    let mut neighbors: Vec<usize> = (0..items.len())
        .filter(|&position| position != current && position != goal)
        .filter(|position| !closed.contains(position))
        .collect();

    if config.min_score > 0.0 {
        neighbors.retain(|&position| items[position].score() >= config.min_score);
    }

    if neighbors.len() > config.top_related {
        neighbors.sort_by(|&a, &b| items[b].score().total_cmp(&items[a].score()));
        neighbors.truncate(config.top_related);
        neighbors.sort_unstable();
    }

    if goal != current && !closed.contains(&goal) {
        let insert_at = neighbors.partition_point(|&position| position < goal);
        neighbors.insert(insert_at, goal);
    }

    neighbors
}
