//! Side effects returned by the reducer, executed by EffectRunner.

use crate::domain::{BookmarkCollection, ReplicationRequest};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Render,

    /// Writes the whole collection under the bookmark storage key.
    PersistBookmarks {
        bookmarks: BookmarkCollection,
    },

    FetchLocalDatabases,

    /// Completion is tagged with `database` so stale answers can be dropped.
    FetchFilterFunctions {
        database: String,
    },

    StartReplication {
        request: Box<ReplicationRequest>,
        source_label: String,
        target_label: String,
    },

    FetchActiveTasks,
}
