use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shoppath")]
#[command(about = "Recommend a browsing path between two products, biased toward likely conversions")]
pub struct Args {
    /// Product to start from
    pub start: String,

    /// Product to end at
    pub goal: String,

    /// JSON catalog file (falls back to $SHOPPATH_CATALOG, then the built-in electronics catalog)
    #[arg(short, long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Heuristic mapping scores to priorities: negated or complement
    #[arg(long, value_name = "KIND", default_value = "negated")]
    pub heuristic: String,

    /// Only pass through products with score >= threshold (0.0-1.0)
    #[arg(short = 'm', long, value_name = "SCORE", default_value = "0.0")]
    pub min_score: f32,

    /// Limit to the top N products by score at each step
    #[arg(short = 't', long, value_name = "COUNT")]
    pub top_related: Option<usize>,

    /// List the catalog before searching
    #[arg(short, long)]
    pub list: bool,

    /// Show the accumulated cost at each step
    #[arg(short, long)]
    pub show_cost: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show search info and statistics
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the path flow
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}
