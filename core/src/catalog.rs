use crate::error::CatalogError;
use crate::string_normalization::clean_str;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A product in the catalog.
///
/// Identity is the name: two items with the same name are the same item,
/// whatever their category or score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    name: String,
    #[serde(default)]
    category: String,
    #[serde(alias = "conversion_prob")]
    score: f32,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        score: f32,
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        validate_score(&name, score)?;
        Ok(Self {
            name,
            category: category.into(),
            score,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Estimated conversion likelihood in `[0.0, 1.0]`.
    pub fn score(&self) -> f32 {
        self.score
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Item {}

impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

fn validate_score(name: &str, score: f32) -> Result<(), CatalogError> {
    // NaN fails the range check too
    if (0.0..=1.0).contains(&score) {
        Ok(())
    } else {
        Err(CatalogError::ScoreOutOfRange {
            name: name.to_string(),
            score,
        })
    }
}

/// An ordered set of items, unique by name.
///
/// Every ordered pair of distinct items is an edge of the search graph; the
/// cost of each edge is decided by the [`EdgeCost`](crate::EdgeCost) policy
/// used for the search.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    index: FxHashMap<String, usize>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut catalog = Self {
            items: Vec::with_capacity(items.len()),
            index: FxHashMap::with_capacity_and_hasher(items.len(), Default::default()),
        };
        for item in items {
            catalog.push(item)?;
        }
        Ok(catalog)
    }

    pub fn push(&mut self, item: Item) -> Result<(), CatalogError> {
        validate_score(&item.name, item.score)?;
        if self.index.contains_key(&item.name) {
            return Err(CatalogError::DuplicateItem(item.name));
        }
        self.index.insert(item.name.clone(), self.items.len());
        self.items.push(item);
        Ok(())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.position(name).map(|position| &self.items[position])
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Looks an item up by a loosely typed name.
    ///
    /// An exact match wins; otherwise the first item (in catalog order) whose
    /// normalized name equals the normalized query is returned.
    pub fn find_by_name(&self, query: &str) -> Option<&Item> {
        if let Some(item) = self.get(query) {
            return Some(item);
        }

        let clean_query = clean_str(query);
        if clean_query.is_empty() {
            return None;
        }
        self.items
            .iter()
            .find(|item| clean_str(&item.name) == clean_query)
    }

    /// Replaces an item's score between searches.
    pub fn set_score(&mut self, name: &str, score: f32) -> Result<(), CatalogError> {
        validate_score(name, score)?;
        let position = self
            .position(name)
            .ok_or_else(|| CatalogError::UnknownItem(name.to_string()))?;
        self.items[position].score = score;
        Ok(())
    }

    pub fn set_category(
        &mut self,
        name: &str,
        category: impl Into<String>,
    ) -> Result<(), CatalogError> {
        let position = self
            .position(name)
            .ok_or_else(|| CatalogError::UnknownItem(name.to_string()))?;
        self.items[position].category = category.into();
        Ok(())
    }
}
