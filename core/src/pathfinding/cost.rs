use crate::catalog::Item;
use rustc_hash::FxHashMap;

/// Transition cost between two catalog items.
///
/// `None` means there is no edge from `from` to `to`. The search never asks
/// for a self-loop.
pub trait EdgeCost: Send + Sync {
    fn cost(&self, from: &Item, to: &Item) -> Option<f32>;
}

/// Every pair of distinct items is connected at cost 1: the complete graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCost;

impl EdgeCost for UniformCost {
    fn cost(&self, _from: &Item, _to: &Item) -> Option<f32> {
        Some(1.0)
    }
}

/// Explicit directed edges keyed by item name; unlisted pairs are unconnected.
#[derive(Debug, Clone, Default)]
pub struct EdgeTable {
    edges: FxHashMap<String, FxHashMap<String, f32>>,
}

impl EdgeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_edge(mut self, from: &str, to: &str, cost: f32) -> Self {
        self.insert(from, to, cost);
        self
    }

    pub fn with_undirected_edge(mut self, a: &str, b: &str, cost: f32) -> Self {
        self.insert(a, b, cost);
        self.insert(b, a, cost);
        self
    }

    pub fn insert(&mut self, from: &str, to: &str, cost: f32) {
        self.edges
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string(), cost);
    }

    pub fn len(&self) -> usize {
        self.edges.values().map(FxHashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl EdgeCost for EdgeTable {
    fn cost(&self, from: &Item, to: &Item) -> Option<f32> {
        self.edges
            .get(from.name())
            .and_then(|targets| targets.get(to.name()))
            .copied()
    }
}
