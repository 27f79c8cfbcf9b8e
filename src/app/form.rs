//! Shared vocabulary of the replicator forms.

/// How the focused field reacts to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Left/right cycles through a fixed set of values.
    Choice,
    /// Space flips a boolean.
    Toggle,
    Text,
    /// Text that is masked when rendered.
    Secret,
    /// Free text that can also cycle through the local database list.
    LocalDatabase,
}

impl FieldKind {
    pub fn is_editable_text(self) -> bool {
        matches!(
            self,
            FieldKind::Text | FieldKind::Secret | FieldKind::LocalDatabase
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    Backspace,
    Clear,
}

impl TextEdit {
    pub fn apply(self, value: &str) -> String {
        let mut out = value.to_string();
        match self {
            TextEdit::Insert(c) => out.push(c),
            TextEdit::Backspace => {
                out.pop();
            }
            TextEdit::Clear => out.clear(),
        }
        out
    }
}

/// Neighbour of `current` in `fields`, wrapping around.
pub fn step<T: Copy + PartialEq>(fields: &[T], current: T, forward: bool) -> Option<T> {
    if fields.is_empty() {
        return None;
    }
    let len = fields.len();
    let pos = fields.iter().position(|f| *f == current).unwrap_or(0);
    let next = if forward {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    };
    fields.get(next).copied()
}
