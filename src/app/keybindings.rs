//! Centralized keybinding definitions.
//! Single source of truth for key/description used by Footer and Help.

use super::action::Action;
use super::input_mode::InputMode;
use super::screen::Screen;

#[derive(Clone)]
pub struct KeyBinding {
    /// Short key for Footer (e.g., "q", "j/k")
    pub key_short: &'static str,
    /// Display key for Help (e.g., "j / ↓")
    pub key: &'static str,
    /// Short description for Footer (e.g., "Quit", "Move")
    pub desc_short: &'static str,
    /// Full description for Help (e.g., "Quit application")
    pub description: &'static str,
    pub action: Action,
}

impl KeyBinding {
    /// Returns (key_short, desc_short) tuple for Footer display
    pub const fn as_hint(&self) -> (&'static str, &'static str) {
        (self.key_short, self.desc_short)
    }
}

// =============================================================================
// Global Keys (Normal mode)
// =============================================================================

pub const GLOBAL_KEYS: &[KeyBinding] = &[
    KeyBinding {
        key_short: "q",
        key: "q",
        desc_short: "Quit",
        description: "Quit application",
        action: Action::Quit,
    },
    KeyBinding {
        key_short: "?",
        key: "?",
        desc_short: "Help",
        description: "Toggle help",
        action: Action::ToggleHelp,
    },
    KeyBinding {
        key_short: "1-4",
        key: "1 / 2 / 3 / 4",
        desc_short: "Screen",
        description: "Jump to Replication / Advanced / Bookmarks / Activity",
        action: Action::None,
    },
    KeyBinding {
        key_short: "[/]",
        key: "[ / ]",
        desc_short: "Prev/Next",
        description: "Previous / next screen",
        action: Action::NextScreen,
    },
    KeyBinding {
        key_short: "Esc",
        key: "Esc",
        desc_short: "Dismiss",
        description: "Dismiss status message",
        action: Action::DismissMessage,
    },
];

// =============================================================================
// Replicator forms
// =============================================================================

/// Field navigation shared by both replicator forms.
pub const FORM_KEYS: &[KeyBinding] = &[
    KeyBinding {
        key_short: "j/k",
        key: "j / k / Tab / ⇧Tab",
        desc_short: "Field",
        description: "Next / previous field",
        action: Action::FormNextField,
    },
    KeyBinding {
        key_short: "Enter",
        key: "Enter",
        desc_short: "Edit",
        description: "Edit text field, or advance a choice",
        action: Action::FormEnterEdit,
    },
    KeyBinding {
        key_short: "h/l",
        key: "h / l / ← / →",
        desc_short: "Choose",
        description: "Cycle choice or local database",
        action: Action::FormCycle { forward: true },
    },
    KeyBinding {
        key_short: "Space",
        key: "Space",
        desc_short: "Toggle",
        description: "Toggle checkbox",
        action: Action::FormToggle,
    },
];

pub const REPLICATION_KEYS: &[KeyBinding] = &[
    KeyBinding {
        key_short: "s",
        key: "s",
        desc_short: "Start",
        description: "Start replication",
        action: Action::SubmitReplication,
    },
    KeyBinding {
        key_short: "x",
        key: "x",
        desc_short: "Clear",
        description: "Clear form",
        action: Action::ClearReplicationForm,
    },
    KeyBinding {
        key_short: "R",
        key: "R",
        desc_short: "Databases",
        description: "Reload local databases",
        action: Action::LoadLocalDatabases,
    },
];

pub const ADVANCED_KEYS: &[KeyBinding] = &[
    KeyBinding {
        key_short: "s",
        key: "s",
        desc_short: "Start",
        description: "Start replication",
        action: Action::StartAdvancedReplication,
    },
    KeyBinding {
        key_short: "r",
        key: "r",
        desc_short: "Filters",
        description: "Reload filter functions of the local source",
        action: Action::ReloadFilterFunctions,
    },
    KeyBinding {
        key_short: "x",
        key: "x",
        desc_short: "Clear",
        description: "Clear form",
        action: Action::ClearAdvancedForm,
    },
    KeyBinding {
        key_short: "R",
        key: "R",
        desc_short: "Databases",
        description: "Reload local databases",
        action: Action::LoadLocalDatabases,
    },
];

/// While typing into a field (Editing, BookmarkForm, BookmarkFilter).
pub const EDITING_KEYS: &[KeyBinding] = &[
    KeyBinding {
        key_short: "Esc",
        key: "Esc / Enter",
        desc_short: "Done",
        description: "Stop editing",
        action: Action::FormExitEdit,
    },
    KeyBinding {
        key_short: "^U",
        key: "Ctrl+U",
        desc_short: "Clear",
        description: "Clear field",
        action: Action::FormClearField,
    },
];

// =============================================================================
// Bookmarks
// =============================================================================

pub const BOOKMARK_KEYS: &[KeyBinding] = &[
    KeyBinding {
        key_short: "j/k",
        key: "j / k / ↓ / ↑",
        desc_short: "Select",
        description: "Select bookmark on this page",
        action: Action::SelectNextBookmark,
    },
    KeyBinding {
        key_short: "h/l",
        key: "h / l / ← / →",
        desc_short: "Page",
        description: "Previous / next page",
        action: Action::NextBookmarkPage,
    },
    KeyBinding {
        key_short: "n",
        key: "n",
        desc_short: "New",
        description: "New bookmark",
        action: Action::None,
    },
    KeyBinding {
        key_short: "e",
        key: "e / Enter",
        desc_short: "Edit",
        description: "Edit selected bookmark",
        action: Action::None,
    },
    KeyBinding {
        key_short: "d",
        key: "d",
        desc_short: "Delete",
        description: "Delete selected bookmark",
        action: Action::None,
    },
    KeyBinding {
        key_short: "/",
        key: "/",
        desc_short: "Filter",
        description: "Filter by host, user or database prefix",
        action: Action::EnterBookmarkFilter,
    },
    KeyBinding {
        key_short: "H/U/D",
        key: "H / U / D",
        desc_short: "Sort",
        description: "Sort by host / user / database (again to flip)",
        action: Action::None,
    },
    KeyBinding {
        key_short: "s/t",
        key: "s / t",
        desc_short: "Use as",
        description: "Use as remote source / target in the advanced form",
        action: Action::None,
    },
];

pub const BOOKMARK_FORM_KEYS: &[KeyBinding] = &[
    KeyBinding {
        key_short: "Tab",
        key: "Tab / ⇧Tab",
        desc_short: "Field",
        description: "Next / previous field",
        action: Action::FormNextField,
    },
    KeyBinding {
        key_short: "Enter",
        key: "Enter",
        desc_short: "Save",
        description: "Save bookmark",
        action: Action::SubmitBookmarkForm,
    },
    KeyBinding {
        key_short: "Esc",
        key: "Esc",
        desc_short: "Cancel",
        description: "Discard changes",
        action: Action::DismissBookmarkForm,
    },
];

// =============================================================================
// Activity
// =============================================================================

pub const ACTIVITY_KEYS: &[KeyBinding] = &[
    KeyBinding {
        key_short: "j/k",
        key: "j / k / ↓ / ↑",
        desc_short: "Select",
        description: "Select replication task",
        action: Action::SelectNextTask,
    },
    KeyBinding {
        key_short: "r",
        key: "r",
        desc_short: "Refresh",
        description: "Reload active tasks",
        action: Action::LoadActiveTasks,
    },
];

/// Bindings specific to the current screen and input mode, most relevant first.
pub fn context_keys(screen: Screen, mode: InputMode) -> [&'static [KeyBinding]; 2] {
    match (mode, screen) {
        (InputMode::Editing | InputMode::BookmarkFilter, _) => [EDITING_KEYS, &[]],
        (InputMode::BookmarkForm, _) => [BOOKMARK_FORM_KEYS, &EDITING_KEYS[1..]],
        (InputMode::Normal, Screen::Replication) => [REPLICATION_KEYS, FORM_KEYS],
        (InputMode::Normal, Screen::Advanced) => [ADVANCED_KEYS, FORM_KEYS],
        (InputMode::Normal, Screen::Bookmarks) => [BOOKMARK_KEYS, &[]],
        (InputMode::Normal, Screen::Activity) => [ACTIVITY_KEYS, &[]],
    }
}

// =============================================================================
// Help Overlay Layout
// =============================================================================

/// Sections shown by the help overlay, in display order.
pub const HELP_SECTIONS: &[(&str, &[KeyBinding])] = &[
    ("Global", GLOBAL_KEYS),
    ("Replicator forms", FORM_KEYS),
    ("Replication", REPLICATION_KEYS),
    ("Advanced", ADVANCED_KEYS),
    ("Editing", EDITING_KEYS),
    ("Bookmarks", BOOKMARK_KEYS),
    ("Bookmark form", BOOKMARK_FORM_KEYS),
    ("Activity", ACTIVITY_KEYS),
];

/// Total lines in help overlay content (one title and one blank line per section)
pub const HELP_TOTAL_LINES: usize = 2 * 8
    + GLOBAL_KEYS.len()
    + FORM_KEYS.len()
    + REPLICATION_KEYS.len()
    + ADVANCED_KEYS.len()
    + EDITING_KEYS.len()
    + BOOKMARK_KEYS.len()
    + BOOKMARK_FORM_KEYS.len()
    + ACTIVITY_KEYS.len();
