#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the focused text field of a replicator form.
    Editing,
    BookmarkForm,
    BookmarkFilter,
}

impl InputMode {
    pub fn captures_text(self) -> bool {
        !matches!(self, InputMode::Normal)
    }
}
