use std::time::Instant;

use crate::activity_state::ActivityState;
use crate::advanced_state::AdvancedFormState;
use crate::bookmark_state::BookmarkState;
use crate::database_list::DatabaseListState;
use crate::domain::{DEFAULT_PAGE_SIZE, ServerOrigin, Session};
use crate::filter_catalog::FilterCatalog;
use crate::input_mode::InputMode;
use crate::message_state::MessageState;
use crate::replication_form_state::ReplicationFormState;
use crate::screen::Screen;

/// Everything the screens render from. Only the reducer mutates it.
#[derive(Debug, Clone)]
pub struct AppState {
    pub should_quit: bool,
    pub render_dirty: bool,
    /// Bumped on every state change; the store notifies subscribers on change.
    pub revision: u64,
    pub terminal_height: u16,
    pub show_help: bool,

    pub screen: Screen,
    pub input_mode: InputMode,

    pub session: Session,
    pub origin: ServerOrigin,

    pub messages: MessageState,
    pub databases: DatabaseListState,
    pub bookmarks: BookmarkState,
    pub replication: ReplicationFormState,
    pub advanced: AdvancedFormState,
    pub filter_catalog: FilterCatalog,
    pub activity: ActivityState,
}

impl AppState {
    pub fn new(origin: ServerOrigin, session: Session) -> Self {
        Self::with_page_size(origin, session, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(origin: ServerOrigin, session: Session, page_size: usize) -> Self {
        Self {
            should_quit: false,
            render_dirty: true,
            revision: 0,
            terminal_height: 0,
            show_help: false,
            screen: Screen::default(),
            input_mode: InputMode::default(),
            session,
            origin,
            messages: MessageState::default(),
            databases: DatabaseListState::default(),
            bookmarks: BookmarkState::with_page_size(page_size),
            replication: ReplicationFormState::default(),
            advanced: AdvancedFormState::default(),
            filter_catalog: FilterCatalog::default(),
            activity: ActivityState::default(),
        }
    }

    pub fn mark_dirty(&mut self) {
        self.render_dirty = true;
        self.revision = self.revision.wrapping_add(1);
    }

    pub fn clear_dirty(&mut self) {
        self.render_dirty = false;
    }

    pub fn clear_expired_messages(&mut self, now: Instant) {
        if self.messages.clear_expired_at(now) {
            self.mark_dirty();
        }
    }

    /// Filter functions listed for the advanced form's current local source.
    pub fn available_filters(&self) -> &[crate::domain::FilterFunction] {
        self.advanced
            .local_source()
            .and_then(|db| self.filter_catalog.get(db))
            .unwrap_or(&[])
    }

    pub fn filters_loading(&self) -> bool {
        self.advanced
            .local_source()
            .is_some_and(|db| self.filter_catalog.is_pending(db))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServerOrigin::default(), Session::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FilterFunction;

    #[test]
    fn mark_dirty_bumps_revision() {
        let mut state = AppState::default();
        let before = state.revision;

        state.mark_dirty();

        assert!(state.render_dirty);
        assert_eq!(state.revision, before + 1);
    }

    #[test]
    fn available_filters_only_for_selected_local_source() {
        let mut state = AppState::default();
        state.filter_catalog.insert(
            "orders",
            vec![FilterFunction {
                id: "app/f".to_string(),
                label: "f".to_string(),
            }],
        );
        assert!(state.available_filters().is_empty());

        state.advanced.job.source.database = "orders".to_string();
        assert_eq!(state.available_filters().len(), 1);

        state.advanced.job.source.database = "users".to_string();
        assert!(state.available_filters().is_empty());
    }
}
