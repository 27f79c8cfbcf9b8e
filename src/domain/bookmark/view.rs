//! Filtering, sorting and slicing of the bookmark table.
//!
//! Everything is recomputed from the full collection on each render; personal
//! bookmark lists stay small enough that no index is kept.

use super::collection::BookmarkCollection;
use super::model::{Bookmark, BookmarkField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Database,
    Host,
    User,
}

impl SortKey {
    pub fn field(&self) -> BookmarkField {
        match self {
            SortKey::Database => BookmarkField::Database,
            SortKey::Host => BookmarkField::Host,
            SortKey::User => BookmarkField::User,
        }
    }

    pub fn column_title(&self) -> &'static str {
        match self {
            SortKey::Database => "Database",
            SortKey::Host => "Remote URL",
            SortKey::User => "Remote User",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BookmarkSorting {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl BookmarkSorting {
    /// Same column flips the direction; another column sorts ascending by it.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.flipped();
        } else {
            self.key = key;
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Case-sensitive prefix match on host, user or database. An empty term keeps
/// everything in input order.
pub fn filter_bookmarks<'a, I>(bookmarks: I, term: &str) -> Vec<&'a Bookmark>
where
    I: IntoIterator<Item = &'a Bookmark>,
{
    bookmarks
        .into_iter()
        .filter(|bm| {
            term.is_empty()
                || bm.host.starts_with(term)
                || bm.user.starts_with(term)
                || bm.database.starts_with(term)
        })
        .collect()
}

/// Byte-wise ordering on the sort column; ties fall back to the id so the
/// table does not reshuffle between renders.
pub fn sort_bookmarks(bookmarks: &mut [&Bookmark], sorting: BookmarkSorting) {
    let field = sorting.key.field();
    bookmarks.sort_by(|left, right| {
        let ordering = left
            .field(field)
            .cmp(right.field(field))
            .then_with(|| left.id.cmp(&right.id));
        match sorting.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    let start = page.saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Filter, sort and slice in one pass, as the table renders it.
pub fn prepare_page<'a>(
    collection: &'a BookmarkCollection,
    term: &str,
    sorting: BookmarkSorting,
    page: usize,
    page_size: usize,
) -> Vec<&'a Bookmark> {
    let mut rows = filter_bookmarks(collection.values(), term);
    sort_bookmarks(&mut rows, sorting);
    page_slice(&rows, page, page_size).to_vec()
}
