mod collection;
mod id;
mod model;
mod view;

pub use collection::BookmarkCollection;
pub use id::BookmarkId;
pub use model::{Bookmark, BookmarkDraft, BookmarkField};
pub use view::{
    BookmarkSorting, SortDirection, SortKey, filter_bookmarks, page_slice, prepare_page,
    sort_bookmarks,
};
