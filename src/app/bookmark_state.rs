use crate::domain::{
    Bookmark, BookmarkCollection, BookmarkDraft, BookmarkField, BookmarkSorting,
    DEFAULT_PAGE_SIZE, PageDescriptor, prepare_page,
};

#[derive(Debug, Clone)]
pub struct BookmarkState {
    pub collection: BookmarkCollection,
    pub page_size: usize,
    pub descriptor: PageDescriptor,
    pub filter: String,
    pub sorting: BookmarkSorting,
    /// Bookmark open in the edit form.
    pub focused: Option<BookmarkDraft>,
    pub form_field: BookmarkField,
    /// Row index within the visible page.
    pub selected: usize,
}

impl Default for BookmarkState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl BookmarkState {
    pub fn with_page_size(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            collection: BookmarkCollection::new(),
            page_size,
            descriptor: PageDescriptor::compute(0, 0, page_size),
            filter: String::new(),
            sorting: BookmarkSorting::default(),
            focused: None,
            form_field: BookmarkField::default(),
            selected: 0,
        }
    }

    pub fn current_page(&self) -> usize {
        self.descriptor.current_page
    }

    /// Recomputes the descriptor for `page` without clamping.
    pub fn set_page_unclamped(&mut self, page: usize) {
        self.descriptor = PageDescriptor::compute(self.collection.len(), page, self.page_size);
    }

    pub fn set_page_clamped(&mut self, page: usize) {
        let page = PageDescriptor::clamp_page(self.collection.len(), page, self.page_size);
        self.set_page_unclamped(page);
    }

    pub fn visible_rows(&self) -> Vec<&Bookmark> {
        prepare_page(
            &self.collection,
            &self.filter,
            self.sorting,
            self.current_page(),
            self.page_size,
        )
    }

    pub fn selected_bookmark(&self) -> Option<&Bookmark> {
        self.visible_rows().get(self.selected).copied()
    }

    pub fn clamp_selection(&mut self) {
        let len = self.visible_rows().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn is_focused(&self, bookmark: &Bookmark) -> bool {
        self.focused
            .as_ref()
            .and_then(|draft| draft.id.as_ref())
            .is_some_and(|id| *id == bookmark.id)
    }
}
