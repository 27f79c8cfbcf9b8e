//! Per-database cache of discovered filter functions.

use std::collections::{HashMap, HashSet};

use crate::domain::FilterFunction;

#[derive(Debug, Clone, Default)]
pub struct FilterCatalog {
    entries: HashMap<String, Vec<FilterFunction>>,
    pending: HashSet<String>,
}

impl FilterCatalog {
    pub fn get(&self, database: &str) -> Option<&[FilterFunction]> {
        self.entries.get(database).map(Vec::as_slice)
    }

    pub fn contains(&self, database: &str) -> bool {
        self.entries.contains_key(database)
    }

    pub fn is_pending(&self, database: &str) -> bool {
        self.pending.contains(database)
    }

    /// True when neither a cached entry nor an in-flight request exists.
    pub fn needs_fetch(&self, database: &str) -> bool {
        !self.contains(database) && !self.is_pending(database)
    }

    pub fn mark_pending(&mut self, database: &str) {
        self.pending.insert(database.to_string());
    }

    pub fn clear_pending(&mut self, database: &str) {
        self.pending.remove(database);
    }

    pub fn insert(&mut self, database: &str, filters: Vec<FilterFunction>) {
        self.pending.remove(database);
        self.entries.insert(database.to_string(), filters);
    }

    pub fn invalidate(&mut self, database: &str) {
        self.entries.remove(database);
    }
}
