use crate::classify::Category;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Mapping from category to the set of matched URLs
///
/// Every category is present from construction on, so an empty run still
/// reports all keys. URLs within a category are unique and iterate in
/// sorted order; categories iterate in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    buckets: BTreeMap<Category, BTreeSet<String>>,
}

impl ResultSet {
    /// Creates an empty result set holding every category
    pub fn new() -> Self {
        let buckets = Category::ALL
            .iter()
            .map(|category| (*category, BTreeSet::new()))
            .collect();

        Self { buckets }
    }

    /// Records a URL under a category
    ///
    /// Returns false if the URL was already recorded there.
    pub fn insert(&mut self, category: Category, url: impl Into<String>) -> bool {
        self.buckets.entry(category).or_default().insert(url.into())
    }

    /// Sorted, unique URLs recorded for a category
    pub fn urls(&self, category: Category) -> impl Iterator<Item = &str> {
        self.buckets
            .get(&category)
            .into_iter()
            .flat_map(|urls| urls.iter().map(String::as_str))
    }

    /// Number of URLs recorded for a category
    pub fn count(&self, category: Category) -> usize {
        self.buckets.get(&category).map(BTreeSet::len).unwrap_or(0)
    }

    /// Iterates categories in declaration order with their URL sets
    pub fn iter(&self) -> impl Iterator<Item = (Category, &BTreeSet<String>)> {
        self.buckets.iter().map(|(category, urls)| (*category, urls))
    }

    /// Total number of (category, URL) entries
    pub fn total(&self) -> usize {
        self.buckets.values().map(BTreeSet::len).sum()
    }

    /// Returns true if no category holds a URL
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl Default for ResultSet {
    fn default() -> Self {
        Self::new()
    }
}
