use std::collections::HashMap;

use crate::models::CatalogItem;

/// Snapshot of the most recent search results, keyed by item id. Drop
/// payloads carry only an id; this is what turns them back into items.
/// Replaced wholesale on every new result set.
#[derive(Debug, Default)]
pub struct CatalogIndex {
    by_id: HashMap<i64, CatalogItem>,
}

impl CatalogIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot with a fresh result set.
    pub fn replace(&mut self, items: &[CatalogItem]) {
        self.by_id.clear();
        for item in items {
            self.by_id.insert(item.id, item.clone());
        }
    }

    /// Resolve an id from the last-seen results. Ids from stale or foreign
    /// sources simply miss.
    pub fn resolve(&self, id: i64) -> Option<&CatalogItem> {
        self.by_id.get(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;
