use crate::catalog::{Catalog, Item};
use crate::error::SearchError;
use crate::pathfinding::{EdgeCost, SearchOutcome, UniformCost, astar_find_path};
use crate::pathfinding_config::PathfindingConfig;

/// Recommends a browsing path between two products of a catalog.
///
/// Holds no per-search state, so one recommender can serve any number of
/// searches, including concurrent ones over a shared `&Catalog`.
pub struct PathRecommender {
    config: PathfindingConfig,
    edge_cost: Box<dyn EdgeCost>,
}

impl PathRecommender {
    pub fn new(config: PathfindingConfig) -> Self {
        Self::with_edge_cost(config, UniformCost)
    }

    pub fn with_edge_cost(config: PathfindingConfig, edge_cost: impl EdgeCost + 'static) -> Self {
        Self {
            config,
            edge_cost: Box::new(edge_cost),
        }
    }

    pub fn config(&self) -> &PathfindingConfig {
        &self.config
    }

    /// Runs the search and keeps its statistics.
    pub fn recommend(
        &self,
        catalog: &Catalog,
        start: &str,
        goal: &str,
    ) -> Result<SearchOutcome, SearchError> {
        astar_find_path(catalog, start, goal, self.edge_cost.as_ref(), &self.config)
    }

    /// The items to visit from `start` to `goal`, or `None` if the goal is unreachable.
    pub fn find_path<'a>(
        &self,
        catalog: &'a Catalog,
        start: &str,
        goal: &str,
    ) -> Result<Option<Vec<&'a Item>>, SearchError> {
        let outcome = self.recommend(catalog, start, goal)?;
        Ok(outcome.path.map(|path| {
            path.iter()
                .filter_map(|(name, _)| catalog.get(name))
                .collect()
        }))
    }

    pub fn find_path_names(
        &self,
        catalog: &Catalog,
        start: &str,
        goal: &str,
    ) -> Result<Option<Vec<String>>, SearchError> {
        Ok(self.recommend(catalog, start, goal)?.names())
    }
}

impl Default for PathRecommender {
    fn default() -> Self {
        Self::new(PathfindingConfig::default())
    }
}
