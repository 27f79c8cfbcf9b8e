//! Bookmark persistence in a JSON key-value file.
//!
//! `storage.json` is one JSON object shared with other settings; bookmarks
//! live under [`BOOKMARKS_KEY`] and every other key survives a save.

use std::fs;
use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::app::ports::{BookmarkRepository, BookmarkStoreError};
use crate::config::paths::config_dir;
use crate::domain::BookmarkCollection;

pub const BOOKMARKS_KEY: &str = "__bookmarks";
const STORAGE_FILE_NAME: &str = "storage.json";

pub struct JsonBookmarkStore {
    config_dir: PathBuf,
}

impl JsonBookmarkStore {
    pub fn new() -> Result<Self, BookmarkStoreError> {
        let config_dir = config_dir().map_err(|e| BookmarkStoreError::ReadError(e.to_string()))?;
        Ok(Self { config_dir })
    }

    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    fn storage_file_path(&self) -> PathBuf {
        self.config_dir.join(STORAGE_FILE_NAME)
    }

    fn read_storage(&self) -> Result<Map<String, Value>, BookmarkStoreError> {
        let path = self.storage_file_path();

        if !path.exists() {
            return Ok(Map::new());
        }

        let content =
            fs::read_to_string(&path).map_err(|e| BookmarkStoreError::ReadError(e.to_string()))?;

        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str(&content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(BookmarkStoreError::InvalidFormat(
                "storage file is not a JSON object".to_string(),
            )),
            Err(e) => Err(BookmarkStoreError::InvalidFormat(e.to_string())),
        }
    }
}

impl BookmarkRepository for JsonBookmarkStore {
    fn load(&self) -> Result<BookmarkCollection, BookmarkStoreError> {
        let mut storage = self.read_storage()?;

        match storage.remove(BOOKMARKS_KEY) {
            Some(value) => serde_json::from_value(value)
                .map_err(|e| BookmarkStoreError::InvalidFormat(e.to_string())),
            None => Ok(BookmarkCollection::new()),
        }
    }

    fn save(&self, bookmarks: &BookmarkCollection) -> Result<(), BookmarkStoreError> {
        // An unreadable file is reported rather than overwritten, so the
        // other keys are never lost.
        let mut storage = self.read_storage()?;

        let value = serde_json::to_value(bookmarks)
            .map_err(|e| BookmarkStoreError::WriteError(e.to_string()))?;
        storage.insert(BOOKMARKS_KEY.to_string(), value);

        if !self.config_dir.exists() {
            fs::create_dir_all(&self.config_dir)
                .map_err(|e| BookmarkStoreError::WriteError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(&Value::Object(storage))
            .map_err(|e| BookmarkStoreError::WriteError(e.to_string()))?;
        fs::write(self.storage_file_path(), content)
            .map_err(|e| BookmarkStoreError::WriteError(e.to_string()))
    }

    fn storage_path(&self) -> PathBuf {
        self.storage_file_path()
    }
}
