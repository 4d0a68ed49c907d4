use std::fmt;
use thiserror::Error;

/// Which end of a search request an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::Goal => f.write_str("goal"),
        }
    }
}

/// Failures while building, loading or editing a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate item '{0}' in catalog")]
    DuplicateItem(String),

    #[error("score {score} for item '{name}' is outside [0.0, 1.0]")]
    ScoreOutOfRange { name: String, score: f32 },

    #[error("item '{0}' not found in catalog")]
    UnknownItem(String),

    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Precondition violations raised before or during a path search.
///
/// An unreachable goal is not an error: it is reported as a missing path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("{endpoint} item '{name}' is not in the catalog")]
    UnknownItem { name: String, endpoint: Endpoint },

    #[error("edge cost {cost} from '{from}' to '{to}' is negative or not finite")]
    InvalidEdgeCost { from: String, to: String, cost: f32 },
}
