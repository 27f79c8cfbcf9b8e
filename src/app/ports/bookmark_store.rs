use std::path::PathBuf;

use crate::domain::BookmarkCollection;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookmarkStoreError {
    #[error("Read error: {0}")]
    ReadError(String),
    #[error("Write error: {0}")]
    WriteError(String),
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Durable home of the bookmark collection. `load` on a fresh install
/// returns an empty collection.
#[cfg_attr(test, mockall::automock)]
pub trait BookmarkRepository: Send + Sync {
    fn load(&self) -> Result<BookmarkCollection, BookmarkStoreError>;

    fn save(&self, bookmarks: &BookmarkCollection) -> Result<(), BookmarkStoreError>;

    fn storage_path(&self) -> PathBuf;
}
