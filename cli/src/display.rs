use shoppath_core::{Catalog, PathStep};

use crate::args::Args;
use crate::colors::ColorScheme;
use crate::search::{SearchRequest, SearchResult, pathfinding_config};

pub fn display_catalog(catalog: &Catalog, colors: &ColorScheme) {
    println!("🛒 Catalog ({} products):", colors.number(&catalog.len().to_string()));
    for item in catalog.items() {
        println!(
            "- {} ({}) - Conversion: {}",
            colors.item_name(item.name()),
            colors.category(item.category()),
            colors.number(&format_percent(item.score()))
        );
    }
    println!();
}

pub fn display_search_info(request: &SearchRequest, colors: &ColorScheme) {
    let config = pathfinding_config(&request.search_args);

    println!(
        "🎯 Finding path from {} to {}",
        colors.item_name(&format!("\"{}\"", request.start)),
        colors.item_name(&format!("\"{}\"", request.goal))
    );

    println!("⚙️  Using {} score heuristic", config.heuristic.as_str());

    if config.min_score > 0.0 {
        println!(
            "⚡ Only passing through products with score >= {}",
            colors.number(&format!("{:.2}", config.min_score))
        );
    }

    if let Some(top_related) = request.search_args.top_related {
        println!(
            "🔝 Using top {} products per step",
            colors.number(&top_related.to_string())
        );
    }

    println!("🔍 Searching...");
}

pub fn display_search_results(result: SearchResult, catalog: &Catalog, colors: &ColorScheme) {
    let is_verbose = result.display_options.verbose;

    if is_verbose {
        println!("\n---\n");
    }

    match &result.outcome.path {
        Some(path) => {
            display_successful_path(path, &result.display_options, catalog, colors);
        }
        None => {
            println!(
                "{} {} and {}",
                colors.error("❌ No path found between"),
                colors.item_name(&format!("\"{}\"", result.start)),
                colors.item_name(&format!("\"{}\"", result.goal))
            );
        }
    }

    if is_verbose {
        display_search_statistics(
            result.outcome.items_expanded,
            result.outcome.search_duration,
            colors,
        );
    }
}

fn display_successful_path(
    path: &[PathStep],
    display_options: &Args,
    catalog: &Catalog,
    colors: &ColorScheme,
) {
    if display_options.verbose {
        let step_count = path.len() - 1;
        println!(
            "{} Found path with {} steps:\n",
            colors.success("✅"),
            colors.number(&step_count.to_string())
        );
    }

    let path_flow = path
        .iter()
        .map(|(name, _)| colors.item_name(&format!("\"{}\"", name)).to_string())
        .collect::<Vec<_>>()
        .join(" → ");
    println!("{}", path_flow);

    if !display_options.quiet {
        println!();
        for (step_index, (name, cost)) in path.iter().enumerate() {
            let step_number = format!("{}.", step_index + 1);
            let score = catalog.get(name).map(|item| item.score()).unwrap_or_default();

            let formatted_line = format_path_step(
                step_number,
                name,
                score,
                *cost,
                step_index,
                display_options,
                colors,
            );

            println!("{}", formatted_line);
        }
    }
}

fn format_path_step(
    step_number: String,
    item_name: &str,
    score: f32,
    cost: f32,
    step_index: usize,
    display_options: &Args,
    colors: &ColorScheme,
) -> String {
    let mut formatted_line = format!(
        "{:2} {} - {}",
        colors.step_number(&step_number),
        colors.item_name(&format!("\"{}\"", item_name)),
        colors.number(&format_percent(score))
    );

    if display_options.show_cost && step_index > 0 {
        formatted_line.push_str(&format!(
            " {}{}{}",
            colors.cost("[cost: "),
            colors.number(&format!("{:.2}", cost)),
            colors.cost("]")
        ));
    }

    formatted_line
}

fn display_search_statistics(items_expanded: usize, search_duration: f64, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Expanded {} products in {} sec",
        colors.stats("📊"),
        colors.number(&items_expanded.to_string()),
        colors.number(&format!("{:.3}", search_duration))
    );
}

/// Renders a score in `[0, 1]` as a whole percentage, e.g. `0.85` -> `85%`.
pub fn format_percent(score: f32) -> String {
    format!("{:.0}%", score * 100.0)
}
