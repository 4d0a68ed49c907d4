use crate::catalog::Item;
use serde::{Deserialize, Serialize};

/// Maps an item's score to the heuristic term of `f = g + h`.
///
/// This is a global desirability signal, not an estimate of the remaining
/// distance to the goal, so it is neither admissible nor consistent in the
/// classical A* sense. Both variants rank items identically and differ only
/// by a constant, so they always produce the same path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeuristicKind {
    /// `h = -score`
    #[default]
    Negated,
    /// `h = 1 - score`, never negative
    Complement,
}

impl HeuristicKind {
    pub fn estimate(self, item: &Item) -> f32 {
        match self {
            HeuristicKind::Negated => -item.score(),
            HeuristicKind::Complement => 1.0 - item.score(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HeuristicKind::Negated => "negated",
            HeuristicKind::Complement => "complement",
        }
    }
}

impl From<&str> for HeuristicKind {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "complement" => HeuristicKind::Complement,
            "negated" => HeuristicKind::Negated,
            _ => HeuristicKind::default(),
        }
    }
}

impl From<String> for HeuristicKind {
    fn from(s: String) -> Self {
        HeuristicKind::from(s.as_str())
    }
}
