use crate::search::{SearchResult, pathfinding_config};
use serde::{Deserialize, Serialize};
use shoppath_core::Catalog;

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    pub stats: JsonStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub from: String,
    pub to: String,
    pub options: JsonOptions,
}

#[derive(Serialize, Deserialize)]
pub struct JsonOptions {
    pub heuristic: String,
    pub min_score: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_related: Option<usize>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<JsonItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f32>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonItem {
    pub name: String,
    pub category: String,
    pub score: f32,
    pub cost: f32,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub items_expanded: usize,
    pub expansion_order: Vec<String>,
}

pub fn create_json_output(result: &SearchResult, catalog: &Catalog) -> JsonOutput {
    let config = pathfinding_config(&result.display_options);
    let outcome = &result.outcome;

    let json_path = outcome.path.as_ref().map(|path| {
        path.iter()
            .map(|(name, cost)| {
                let item = catalog.get(name);
                JsonItem {
                    name: name.clone(),
                    category: item.map(|item| item.category().to_string()).unwrap_or_default(),
                    score: item.map(|item| item.score()).unwrap_or_default(),
                    cost: *cost,
                }
            })
            .collect()
    });

    JsonOutput {
        query: JsonQuery {
            from: result.start.clone(),
            to: result.goal.clone(),
            options: JsonOptions {
                heuristic: config.heuristic.as_str().to_string(),
                min_score: config.min_score,
                top_related: result.display_options.top_related,
            },
        },
        result: JsonResult {
            found: outcome.found(),
            path: json_path,
            total_cost: outcome.total_cost(),
        },
        stats: JsonStats {
            search_time_ms: (outcome.search_duration * 1000.0) as u64,
            items_expanded: outcome.items_expanded,
            expansion_order: outcome.expansion_order.clone(),
        },
    }
}

pub fn print_json_output(json_output: &JsonOutput) {
    match serde_json::to_string_pretty(json_output) {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
