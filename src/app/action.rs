use crate::advanced_state::{SourceOption, TargetOption};
use crate::domain::{
    ActiveTask, BookmarkCollection, BookmarkDraft, BookmarkId, EndpointType, FilterFunction,
    ReplicationSide, SortKey,
};
use crate::replication_form_state::ReplicationFormUpdate;
use crate::screen::Screen;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    Quit,
    Render,
    Resize(u16, u16),

    // Screens
    SwitchScreen(Screen),
    NextScreen,
    PrevScreen,
    DismissMessage,
    ToggleHelp,

    // Bookmark store
    InitBookmarks {
        bookmarks: BookmarkCollection,
        page: Option<usize>,
    },
    BookmarksLoadFailed(String),
    SaveBookmark(BookmarkDraft),
    DeleteBookmark(BookmarkId),
    FocusBookmark(BookmarkDraft),
    DismissBookmarkForm,
    SubmitBookmarkForm,
    SetBookmarkFilter(String),
    EnterBookmarkFilter,
    ExitBookmarkFilter,
    SetBookmarkPage(usize),
    NextBookmarkPage,
    PrevBookmarkPage,
    SortBookmarks(SortKey),
    SelectNextBookmark,
    SelectPrevBookmark,
    UseBookmarkAs {
        id: BookmarkId,
        side: ReplicationSide,
    },
    BookmarksPersistFailed(String),

    // Local database list
    LoadLocalDatabases,
    LocalDatabasesLoaded(Vec<String>),
    LocalDatabasesFailed(String),

    // Simple replicator
    InitReplicator(Option<String>),
    UpdateReplicationForm(ReplicationFormUpdate),
    SubmitReplication,
    ClearReplicationForm,

    // Advanced replicator
    SetSourceType(EndpointType),
    SetTargetType(EndpointType),
    SetSourceDatabase(String),
    SetTargetDatabase(String),
    SetSourcePassword(String),
    SetTargetPassword(String),
    SetSourceOption(SourceOption),
    SetTargetOption(TargetOption),
    FilterFunctionsLoaded {
        database: String,
        filters: Vec<FilterFunction>,
    },
    FilterFunctionsFailed {
        database: String,
        error: String,
    },
    ReloadFilterFunctions,
    StartAdvancedReplication,
    ClearAdvancedForm,

    // Replication start result
    ReplicationStarted {
        source: String,
        target: String,
    },
    ReplicationFailed(String),

    // Activity monitor
    LoadActiveTasks,
    ActiveTasksLoaded(Vec<ActiveTask>),
    ActiveTasksFailed(String),
    SelectNextTask,
    SelectPrevTask,

    // Focused form field, routed by screen
    FormNextField,
    FormPrevField,
    FormEnterEdit,
    FormExitEdit,
    FormInput(char),
    FormBackspace,
    FormClearField,
    FormToggle,
    FormCycle { forward: bool },
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }
}
