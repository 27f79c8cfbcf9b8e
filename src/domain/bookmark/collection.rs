use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::id::BookmarkId;
use super::model::Bookmark;

/// Bookmarks keyed by their own id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookmarkCollection {
    entries: HashMap<BookmarkId, Bookmark>,
}

impl BookmarkCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the replaced bookmark when the id was already present.
    pub fn insert(&mut self, bookmark: Bookmark) -> Option<Bookmark> {
        self.entries.insert(bookmark.id.clone(), bookmark)
    }

    pub fn remove(&mut self, id: &BookmarkId) -> Option<Bookmark> {
        self.entries.remove(id)
    }

    pub fn get(&self, id: &BookmarkId) -> Option<&Bookmark> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &BookmarkId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = &Bookmark> {
        self.entries.values()
    }
}

impl FromIterator<Bookmark> for BookmarkCollection {
    fn from_iter<I: IntoIterator<Item = Bookmark>>(iter: I) -> Self {
        let mut collection = Self::new();
        for bookmark in iter {
            collection.insert(bookmark);
        }
        collection
    }
}

impl Serialize for BookmarkCollection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.entries.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BookmarkCollection {
    /// Entries are re-keyed by their `id` field, so a stored key that drifted
    /// from its bookmark never survives loading.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = HashMap::<String, Bookmark>::deserialize(deserializer)?;
        Ok(raw.into_values().collect())
    }
}
