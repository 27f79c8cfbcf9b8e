pub mod active_task;
pub mod bookmark;
pub mod filter_function;
pub mod page;
pub mod replication;
pub mod session;

pub use active_task::{ActiveTask, replication_tasks};
pub use bookmark::{
    Bookmark, BookmarkCollection, BookmarkDraft, BookmarkField, BookmarkId, BookmarkSorting,
    SortDirection, SortKey, filter_bookmarks, page_slice, prepare_page, sort_bookmarks,
};
pub use filter_function::{
    AllDocsResponse, AllDocsRow, DesignDocument, FilterFunction, extract_filter_functions,
};
pub use page::{DEFAULT_PAGE_SIZE, PageDescriptor};
pub use replication::{
    EndpointType, ReplicationJob, ReplicationRequest, ReplicationSide, ReplicationSource,
    ReplicationTarget, RequestBuildError, SourceOptions, TargetOptions, build_replication_request,
    database_label,
};
pub use session::{OriginError, ServerOrigin, Session};
