use super::cost::EdgeCost;
use super::heuristic::HeuristicKind;
use super::utils::{PathStep, SearchOutcome, select_neighbors};
use crate::catalog::Catalog;
use crate::error::{Endpoint, SearchError};
use crate::pathfinding_config::PathfindingConfig;
use rustc_hash::{FxHashMap, FxHashSet};
use std::{cmp::Ordering, collections::BinaryHeap, time::Instant};
use tracing::{debug, trace, warn};

#[derive(Clone)]
struct AStarNode {
    priority: f32,
    sequence: u64,
    item: usize,
    cost: f32,
    /// (catalog position, accumulated cost) from the start, inclusive
    path: Vec<(usize, f32)>,
}

impl PartialEq for AStarNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for AStarNode {}

impl PartialOrd for AStarNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AStarNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: BinaryHeap is a max-heap, we want the lowest
        // f first and, among equal f, the earliest pushed.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

struct AStarState {
    heap: BinaryHeap<AStarNode>,
    best_costs: FxHashMap<usize, f32>,
    closed: FxHashSet<usize>,
    expansion_order: Vec<usize>,
    next_sequence: u64,
}

impl AStarState {
    fn new(start: usize, start_estimate: f32) -> Self {
        let mut best_costs = FxHashMap::default();
        best_costs.insert(start, 0.0);

        let mut state = Self {
            heap: BinaryHeap::new(),
            best_costs,
            closed: FxHashSet::default(),
            expansion_order: Vec::new(),
            next_sequence: 0,
        };
        state.push(AStarNode {
            priority: start_estimate,
            sequence: 0,
            item: start,
            cost: 0.0,
            path: vec![(start, 0.0)],
        });
        state
    }

    fn push(&mut self, mut node: AStarNode) {
        node.sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(node);
    }

    fn visit_neighbor(&mut self, neighbor: usize, current: &AStarNode, tentative_cost: f32, estimate: f32) {
        if let Some(&best_cost) = self.best_costs.get(&neighbor) {
            if tentative_cost >= best_cost {
                return;
            }
        }

        self.best_costs.insert(neighbor, tentative_cost);

        let mut path = Vec::with_capacity(current.path.len() + 1);
        path.extend_from_slice(&current.path);
        path.push((neighbor, tentative_cost));

        trace!(item = neighbor, g = tentative_cost, f = tentative_cost + estimate, "frontier push");
        self.push(AStarNode {
            priority: tentative_cost + estimate,
            sequence: 0,
            item: neighbor,
            cost: tentative_cost,
            path,
        });
    }
}

/// Best-first search from `start` to `goal`, ordered by `f = g + h(item)`.
///
/// Returns `Ok` with `path: None` when the catalog is empty or the goal cannot
/// be reached under `edge_cost`. Unknown endpoints and invalid edge costs are
/// errors. Closed items are never reopened, and ties on `f` pop in push order,
/// so the result is fully deterministic.
pub fn astar_find_path(
    catalog: &Catalog,
    start: &str,
    goal: &str,
    edge_cost: &dyn EdgeCost,
    config: &PathfindingConfig,
) -> Result<SearchOutcome, SearchError> {
    let search_timer = Instant::now();

    if catalog.is_empty() {
        debug!(start, goal, "empty catalog, no path");
        return Ok(SearchOutcome {
            path: None,
            items_expanded: 0,
            expansion_order: Vec::new(),
            search_duration: search_timer.elapsed().as_secs_f64(),
        });
    }

    let start_position = locate(catalog, start, Endpoint::Start)?;
    let goal_position = locate(catalog, goal, Endpoint::Goal)?;
    let items = catalog.items();
    let heuristic: HeuristicKind = config.heuristic;

    debug!(
        start,
        goal,
        catalog_size = catalog.len(),
        heuristic = heuristic.as_str(),
        "starting path search"
    );

    let mut astar_state = AStarState::new(start_position, heuristic.estimate(&items[start_position]));

    while let Some(current) = astar_state.heap.pop() {
        if current.item == goal_position {
            astar_state.expansion_order.push(current.item);
            let outcome = build_outcome(catalog, &astar_state, Some(current.path.as_slice()), search_timer);
            debug!(
                found = true,
                items_expanded = outcome.items_expanded,
                elapsed = outcome.search_duration,
                "path search finished"
            );
            return Ok(outcome);
        }

        if astar_state.closed.contains(&current.item) {
            trace!(item = current.item, "skipping stale frontier entry");
            continue;
        }
        astar_state.closed.insert(current.item);
        astar_state.expansion_order.push(current.item);

        trace!(item = items[current.item].name(), g = current.cost, f = current.priority, "expanding");

        let neighbors = select_neighbors(catalog, current.item, goal_position, &astar_state.closed, config);
        for neighbor in neighbors {
            let from = &items[current.item];
            let to = &items[neighbor];
            let Some(step_cost) = edge_cost.cost(from, to) else {
                continue;
            };
            if !step_cost.is_finite() || step_cost < 0.0 {
                warn!(from = from.name(), to = to.name(), cost = step_cost, "rejecting edge cost");
                return Err(SearchError::InvalidEdgeCost {
                    from: from.name().to_string(),
                    to: to.name().to_string(),
                    cost: step_cost,
                });
            }

            astar_state.visit_neighbor(neighbor, &current, current.cost + step_cost, heuristic.estimate(to));
        }
    }

    let outcome = build_outcome(catalog, &astar_state, None, search_timer);
    debug!(
        found = false,
        items_expanded = outcome.items_expanded,
        elapsed = outcome.search_duration,
        "path search finished"
    );
    Ok(outcome)
}

fn locate(catalog: &Catalog, name: &str, endpoint: Endpoint) -> Result<usize, SearchError> {
    catalog.position(name).ok_or_else(|| SearchError::UnknownItem {
        name: name.to_string(),
        endpoint,
    })
}

fn build_outcome(
    catalog: &Catalog,
    astar_state: &AStarState,
    path: Option<&[(usize, f32)]>,
    search_timer: Instant,
) -> SearchOutcome {
    let items = catalog.items();
    let path = path.map(|steps| {
        steps
            .iter()
            .map(|&(position, cost)| -> PathStep { (items[position].name().to_string(), cost) })
            .collect()
    });

    SearchOutcome {
        path,
        items_expanded: astar_state.expansion_order.len(),
        expansion_order: astar_state
            .expansion_order
            .iter()
            .map(|&position| items[position].name().to_string())
            .collect(),
        search_duration: search_timer.elapsed().as_secs_f64(),
    }
}
