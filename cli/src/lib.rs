pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod json_output;
pub mod logging;
pub mod search;

// Re-export commonly used items
pub use args::Args;
pub use search::{SearchRequest, SearchResult, create_search_request, execute_search};
