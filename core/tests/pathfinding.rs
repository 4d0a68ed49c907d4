use shoppath_core::fixtures::{AIRPODS, GAMING_LAPTOP, PRINTER_3D, electronics_catalog};
use shoppath_core::{
    Catalog, EdgeCost, EdgeTable, Endpoint, HeuristicKind, Item, PathfindingConfig, SearchError,
    UniformCost, astar_find_path,
};

fn catalog_of(entries: &[(&str, f32)]) -> Catalog {
    let items = entries
        .iter()
        .map(|(name, score)| Item::new(*name, "Test", *score).unwrap())
        .collect();
    Catalog::new(items).unwrap()
}

fn names(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|name| name.to_string()).collect()
}

#[test]
fn test_astar_electronics_scenario() {
    let catalog = electronics_catalog().unwrap();
    let config = PathfindingConfig::default();

    let outcome = astar_find_path(&catalog, AIRPODS, PRINTER_3D, &UniformCost, &config).unwrap();

    assert_eq!(outcome.names(), Some(names(&[AIRPODS, PRINTER_3D])));
    assert_eq!(outcome.total_cost(), Some(1.0));
    assert_eq!(outcome.hop_count(), Some(1));
    // The laptop (f = 0.55) is settled before the printer (f = 0.85) is popped
    assert_eq!(outcome.expansion_order, names(&[AIRPODS, GAMING_LAPTOP, PRINTER_3D]));
    assert_eq!(outcome.items_expanded, 3);
}

#[test]
fn test_astar_complement_heuristic_gives_same_result() {
    let catalog = electronics_catalog().unwrap();
    let negated = PathfindingConfig::default();
    let complement = PathfindingConfig {
        heuristic: HeuristicKind::Complement,
        ..PathfindingConfig::default()
    };

    let first = astar_find_path(&catalog, AIRPODS, PRINTER_3D, &UniformCost, &negated).unwrap();
    let second = astar_find_path(&catalog, AIRPODS, PRINTER_3D, &UniformCost, &complement).unwrap();

    assert_eq!(first.path, second.path);
    assert_eq!(first.expansion_order, second.expansion_order);
}

#[test]
fn test_astar_goal_with_high_score_pops_immediately() {
    let catalog = electronics_catalog().unwrap();

    let outcome = astar_find_path(
        &catalog,
        PRINTER_3D,
        AIRPODS,
        &UniformCost,
        &PathfindingConfig::default(),
    )
    .unwrap();

    assert_eq!(outcome.names(), Some(names(&[PRINTER_3D, AIRPODS])));
    assert_eq!(outcome.expansion_order, names(&[PRINTER_3D, AIRPODS]));
}

#[test]
fn test_astar_start_equals_goal() {
    let entries: Vec<(String, f32)> = (0..10)
        .map(|i| (format!("item-{}", i), i as f32 / 10.0))
        .collect();
    let borrowed: Vec<(&str, f32)> = entries.iter().map(|(n, s)| (n.as_str(), *s)).collect();
    let catalog = catalog_of(&borrowed);

    for (name, _) in &borrowed {
        let outcome =
            astar_find_path(&catalog, name, name, &UniformCost, &PathfindingConfig::default())
                .unwrap();
        assert_eq!(outcome.names(), Some(vec![name.to_string()]));
        assert_eq!(outcome.total_cost(), Some(0.0));
        assert_eq!(outcome.items_expanded, 1);
    }
}

#[test]
fn test_astar_single_item_catalog() {
    let catalog = catalog_of(&[("only", 0.5)]);

    let outcome =
        astar_find_path(&catalog, "only", "only", &UniformCost, &PathfindingConfig::default())
            .unwrap();

    assert_eq!(outcome.names(), Some(names(&["only"])));
}

#[test]
fn test_astar_high_score_intermediate_expanded_before_goal() {
    let catalog = catalog_of(&[("start", 0.1), ("goal", 0.2), ("mid", 0.9)]);

    let outcome =
        astar_find_path(&catalog, "start", "goal", &UniformCost, &PathfindingConfig::default())
            .unwrap();

    // Equal-cost detour never replaces the route recorded first
    assert_eq!(outcome.names(), Some(names(&["start", "goal"])));
    assert_eq!(outcome.expansion_order, names(&["start", "mid", "goal"]));
}

#[test]
fn test_astar_equal_cost_detour_keeps_direct_route() {
    let catalog = catalog_of(&[("start", 0.1), ("goal", 0.2), ("mid", 0.9)]);
    let edges = EdgeTable::new()
        .with_edge("start", "goal", 2.0)
        .with_edge("start", "mid", 1.0)
        .with_edge("mid", "goal", 1.0);

    let outcome =
        astar_find_path(&catalog, "start", "goal", &edges, &PathfindingConfig::default()).unwrap();

    assert_eq!(outcome.names(), Some(names(&["start", "goal"])));
    assert_eq!(outcome.total_cost(), Some(2.0));
    assert_eq!(outcome.expansion_order, names(&["start", "mid", "goal"]));
}

#[test]
fn test_astar_cheaper_detour_routes_through_high_score_item() {
    let catalog = catalog_of(&[("start", 0.1), ("goal", 0.2), ("mid", 0.9)]);
    let edges = EdgeTable::new()
        .with_edge("start", "goal", 2.0)
        .with_edge("start", "mid", 0.5)
        .with_edge("mid", "goal", 0.5);

    let outcome =
        astar_find_path(&catalog, "start", "goal", &edges, &PathfindingConfig::default()).unwrap();

    let path = outcome.path.unwrap();
    assert_eq!(
        path,
        vec![
            ("start".to_string(), 0.0),
            ("mid".to_string(), 0.5),
            ("goal".to_string(), 1.0),
        ]
    );
}

#[test]
fn test_astar_ties_pop_in_insertion_order() {
    let forward = catalog_of(&[("s", 0.5), ("x", 0.7), ("y", 0.7), ("g", 0.1)]);
    let backward = catalog_of(&[("s", 0.5), ("y", 0.7), ("x", 0.7), ("g", 0.1)]);
    let config = PathfindingConfig::default();

    let first = astar_find_path(&forward, "s", "g", &UniformCost, &config).unwrap();
    let second = astar_find_path(&backward, "s", "g", &UniformCost, &config).unwrap();

    assert_eq!(first.expansion_order, names(&["s", "x", "y", "g"]));
    assert_eq!(second.expansion_order, names(&["s", "y", "x", "g"]));
    assert_eq!(first.names(), Some(names(&["s", "g"])));
}

#[test]
fn test_astar_paths_start_and_end_at_endpoints_without_repeats() {
    let entries: Vec<(String, f32)> = (0..8)
        .map(|i| (format!("p{}", i), ((i * 37) % 11) as f32 / 10.0))
        .collect();
    let borrowed: Vec<(&str, f32)> = entries.iter().map(|(n, s)| (n.as_str(), *s)).collect();
    let catalog = catalog_of(&borrowed);
    let config = PathfindingConfig::default();

    for (start, _) in &borrowed {
        for (goal, _) in &borrowed {
            let path = astar_find_path(&catalog, start, goal, &UniformCost, &config)
                .unwrap()
                .names()
                .unwrap();

            assert_eq!(path.first().map(String::as_str), Some(*start));
            assert_eq!(path.last().map(String::as_str), Some(*goal));

            let mut unique = path.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), path.len(), "repeated item in {:?}", path);
        }
    }
}

#[test]
fn test_astar_is_deterministic() {
    let catalog = catalog_of(&[("a", 0.3), ("b", 0.3), ("c", 0.8), ("d", 0.3), ("e", 0.05)]);
    let config = PathfindingConfig::default();

    let first = astar_find_path(&catalog, "a", "e", &UniformCost, &config).unwrap();
    let second = astar_find_path(&catalog, "a", "e", &UniformCost, &config).unwrap();

    assert_eq!(first.path, second.path);
    assert_eq!(first.expansion_order, second.expansion_order);
    assert_eq!(first.items_expanded, second.items_expanded);
}

#[test]
fn test_astar_unknown_goal_is_precondition_error() {
    let catalog = electronics_catalog().unwrap();

    let result = astar_find_path(
        &catalog,
        AIRPODS,
        "Nonexistent Speaker",
        &UniformCost,
        &PathfindingConfig::default(),
    );

    assert_eq!(
        result.unwrap_err(),
        SearchError::UnknownItem {
            name: "Nonexistent Speaker".to_string(),
            endpoint: Endpoint::Goal,
        }
    );
}

#[test]
fn test_astar_unknown_start_reported_first() {
    let catalog = electronics_catalog().unwrap();

    let error = astar_find_path(
        &catalog,
        "missing-a",
        "missing-b",
        &UniformCost,
        &PathfindingConfig::default(),
    )
    .unwrap_err();

    match error {
        SearchError::UnknownItem { name, endpoint } => {
            assert_eq!(name, "missing-a");
            assert_eq!(endpoint, Endpoint::Start);
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_astar_empty_catalog_has_no_path() {
    let catalog = Catalog::default();

    let outcome =
        astar_find_path(&catalog, "a", "b", &UniformCost, &PathfindingConfig::default()).unwrap();

    assert!(!outcome.found());
    assert_eq!(outcome.items_expanded, 0);
}

#[test]
fn test_astar_disconnected_goal_has_no_path() {
    let catalog = catalog_of(&[("start", 0.4), ("mid", 0.6), ("goal", 0.9)]);
    let edges = EdgeTable::new().with_undirected_edge("start", "mid", 1.0);

    let outcome =
        astar_find_path(&catalog, "start", "goal", &edges, &PathfindingConfig::default()).unwrap();

    assert_eq!(outcome.path, None);
    assert_eq!(outcome.expansion_order, names(&["start", "mid"]));
}

#[test]
fn test_astar_sparse_graph_requires_detour() {
    let catalog = catalog_of(&[("start", 0.4), ("mid", 0.6), ("goal", 0.9)]);
    let edges = EdgeTable::new()
        .with_edge("start", "mid", 1.0)
        .with_edge("mid", "goal", 1.0);

    let outcome =
        astar_find_path(&catalog, "start", "goal", &edges, &PathfindingConfig::default()).unwrap();

    assert_eq!(outcome.names(), Some(names(&["start", "mid", "goal"])));
    assert_eq!(outcome.total_cost(), Some(2.0));
}

#[test]
fn test_astar_rejects_negative_edge_cost() {
    let catalog = catalog_of(&[("start", 0.4), ("goal", 0.9)]);
    let edges = EdgeTable::new().with_edge("start", "goal", -1.0);

    let error =
        astar_find_path(&catalog, "start", "goal", &edges, &PathfindingConfig::default())
            .unwrap_err();

    assert!(matches!(error, SearchError::InvalidEdgeCost { .. }));
}

struct NanCost;

impl EdgeCost for NanCost {
    fn cost(&self, _from: &Item, _to: &Item) -> Option<f32> {
        Some(f32::NAN)
    }
}

#[test]
fn test_astar_rejects_non_finite_edge_cost() {
    let catalog = catalog_of(&[("start", 0.4), ("goal", 0.9)]);

    let result = astar_find_path(&catalog, "start", "goal", &NanCost, &PathfindingConfig::default());

    assert!(matches!(result, Err(SearchError::InvalidEdgeCost { .. })));
}

#[test]
fn test_astar_min_score_skips_low_score_intermediates() {
    let catalog = catalog_of(&[("start", 0.2), ("low", 0.3), ("high", 0.9), ("goal", 0.1)]);

    let unfiltered =
        astar_find_path(&catalog, "start", "goal", &UniformCost, &PathfindingConfig::default())
            .unwrap();
    assert_eq!(unfiltered.expansion_order, names(&["start", "high", "low", "goal"]));

    let config = PathfindingConfig::new(HeuristicKind::Negated, 0.5, usize::MAX);
    let filtered = astar_find_path(&catalog, "start", "goal", &UniformCost, &config).unwrap();
    assert_eq!(filtered.expansion_order, names(&["start", "high", "goal"]));
    assert_eq!(filtered.names(), Some(names(&["start", "goal"])));
}

#[test]
fn test_astar_min_score_never_blocks_goal() {
    let catalog = catalog_of(&[("start", 0.2), ("goal", 0.05)]);
    let config = PathfindingConfig::new(HeuristicKind::Negated, 0.9, usize::MAX);

    let outcome = astar_find_path(&catalog, "start", "goal", &UniformCost, &config).unwrap();

    assert_eq!(outcome.names(), Some(names(&["start", "goal"])));
}

#[test]
fn test_astar_top_related_limits_neighbors() {
    let catalog = catalog_of(&[("start", 0.2), ("low", 0.3), ("high", 0.9), ("goal", 0.1)]);

    let top_one = PathfindingConfig::new(HeuristicKind::Negated, 0.0, 1);
    let outcome = astar_find_path(&catalog, "start", "goal", &UniformCost, &top_one).unwrap();
    assert_eq!(outcome.expansion_order, names(&["start", "high", "goal"]));

    let goal_only = PathfindingConfig::new(HeuristicKind::Negated, 0.0, 0);
    let outcome = astar_find_path(&catalog, "start", "goal", &UniformCost, &goal_only).unwrap();
    assert_eq!(outcome.expansion_order, names(&["start", "goal"]));
}
