use shoppath_core::{Catalog, HeuristicKind, PathRecommender, PathfindingConfig, SearchError, SearchOutcome};

use crate::args::Args;

pub struct SearchRequest {
    pub start: String,
    pub goal: String,
    pub search_args: Args,
}

pub struct SearchResult {
    pub outcome: SearchOutcome,
    pub start: String,
    pub goal: String,
    pub display_options: Args,
}

pub fn find_best_item_match(name: &str, catalog: &Catalog) -> Result<String, String> {
    catalog
        .find_by_name(name)
        .map(|item| item.name().to_string())
        .ok_or_else(|| format!("Product '{}' not found in catalog", name))
}

pub fn create_search_request(args: Args, catalog: &Catalog) -> Result<SearchRequest, String> {
    let start = find_best_item_match(&args.start, catalog)?;
    let goal = find_best_item_match(&args.goal, catalog)?;

    Ok(SearchRequest {
        start,
        goal,
        search_args: args,
    })
}

pub fn pathfinding_config(args: &Args) -> PathfindingConfig {
    PathfindingConfig::new(
        HeuristicKind::from(args.heuristic.as_str()),
        args.min_score,
        args.top_related.unwrap_or(usize::MAX),
    )
}

pub fn execute_search(request: SearchRequest, catalog: &Catalog) -> Result<SearchResult, SearchError> {
    let recommender = PathRecommender::new(pathfinding_config(&request.search_args));
    let outcome = recommender.recommend(catalog, &request.start, &request.goal)?;

    Ok(SearchResult {
        outcome,
        start: request.start,
        goal: request.goal,
        display_options: request.search_args,
    })
}
