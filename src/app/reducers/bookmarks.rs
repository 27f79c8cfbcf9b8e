//! Bookmark sub-reducer: collection, pagination, table view and edit form.

use std::time::Instant;

use crate::action::Action;
use crate::domain::{BookmarkDraft, EndpointType, ReplicationSide};
use crate::effect::Effect;
use crate::form::TextEdit;
use crate::input_mode::InputMode;
use crate::reducers::helpers::persist_bookmarks;
use crate::screen::Screen;
use crate::state::AppState;

fn close_form(state: &mut AppState) {
    state.bookmarks.focused = None;
    if state.input_mode == InputMode::BookmarkForm {
        state.input_mode = InputMode::Normal;
    }
}

/// Inserts or overwrites by id and keeps the current page.
fn save_bookmark(state: &mut AppState, draft: BookmarkDraft, now: Instant) -> Vec<Effect> {
    let bookmark = draft.into_bookmark();
    state.bookmarks.collection.insert(bookmark);
    close_form(state);

    let page = state.bookmarks.current_page();
    state.bookmarks.set_page_unclamped(page);
    state.messages.set_success_at("Bookmark saved".to_string(), now);

    vec![persist_bookmarks(state)]
}

fn edit_focused(state: &mut AppState, edit: TextEdit) {
    let field = state.bookmarks.form_field;
    if let Some(draft) = state.bookmarks.focused.as_mut() {
        let value = draft.field_mut(field);
        *value = edit.apply(value);
    }
}

fn use_bookmark_as(state: &mut AppState, url: String, side: ReplicationSide) {
    let job = &mut state.advanced.job;
    match side {
        ReplicationSide::Source => {
            job.source.endpoint_type = EndpointType::Remote;
            job.source.database = url;
            job.source.options.filter_function.clear();
        }
        ReplicationSide::Target => {
            job.target.endpoint_type = EndpointType::Remote;
            job.target.database = url;
        }
    }
    state.advanced.ensure_focus_visible();
    state.screen = Screen::Advanced;
    state.input_mode = InputMode::Normal;
}

pub fn reduce_bookmarks(
    state: &mut AppState,
    action: &Action,
    now: Instant,
) -> Option<Vec<Effect>> {
    match action {
        Action::InitBookmarks { bookmarks, page } => {
            state.bookmarks.collection = bookmarks.clone();
            let page = page.unwrap_or(state.bookmarks.current_page());
            state.bookmarks.set_page_clamped(page);
            state.bookmarks.clamp_selection();
            Some(vec![])
        }
        Action::BookmarksLoadFailed(error) => {
            state
                .messages
                .set_error_at(format!("Failed to load bookmarks: {}", error), now);
            Some(vec![])
        }
        Action::SaveBookmark(draft) => Some(save_bookmark(state, draft.clone(), now)),
        Action::SubmitBookmarkForm => {
            let Some(draft) = state.bookmarks.focused.clone() else {
                return Some(vec![]);
            };
            if draft.host.trim().is_empty() {
                state
                    .messages
                    .set_error_at("Remote host is required".to_string(), now);
                return Some(vec![]);
            }
            Some(save_bookmark(state, draft, now))
        }
        Action::DeleteBookmark(id) => {
            if state.bookmarks.collection.remove(id).is_none() {
                return Some(vec![]);
            }
            let was_focused = state
                .bookmarks
                .focused
                .as_ref()
                .is_some_and(|draft| draft.id.as_ref() == Some(id));
            if was_focused {
                close_form(state);
            }
            let page = state.bookmarks.current_page();
            state.bookmarks.set_page_clamped(page);
            state.bookmarks.clamp_selection();
            state
                .messages
                .set_success_at("Bookmark deleted".to_string(), now);
            Some(vec![persist_bookmarks(state)])
        }
        Action::FocusBookmark(draft) => {
            state.bookmarks.focused = Some(draft.clone());
            state.bookmarks.form_field = Default::default();
            state.input_mode = InputMode::BookmarkForm;
            Some(vec![])
        }
        Action::DismissBookmarkForm => {
            close_form(state);
            Some(vec![])
        }
        Action::SetBookmarkFilter(term) => {
            state.bookmarks.filter = term.clone();
            state.bookmarks.selected = 0;
            Some(vec![])
        }
        Action::EnterBookmarkFilter => {
            state.input_mode = InputMode::BookmarkFilter;
            Some(vec![])
        }
        Action::ExitBookmarkFilter => {
            if state.input_mode == InputMode::BookmarkFilter {
                state.input_mode = InputMode::Normal;
            }
            Some(vec![])
        }
        Action::SetBookmarkPage(page) => {
            state.bookmarks.set_page_clamped(*page);
            state.bookmarks.selected = 0;
            Some(vec![])
        }
        Action::NextBookmarkPage => {
            if state.bookmarks.descriptor.has_next_page {
                let page = state.bookmarks.current_page() + 1;
                state.bookmarks.set_page_clamped(page);
                state.bookmarks.selected = 0;
            }
            Some(vec![])
        }
        Action::PrevBookmarkPage => {
            if state.bookmarks.descriptor.has_previous_page {
                let page = state.bookmarks.current_page() - 1;
                state.bookmarks.set_page_clamped(page);
                state.bookmarks.selected = 0;
            }
            Some(vec![])
        }
        Action::SortBookmarks(key) => {
            state.bookmarks.sorting.toggle(*key);
            Some(vec![])
        }
        Action::SelectNextBookmark => {
            let len = state.bookmarks.visible_rows().len();
            if len > 0 {
                state.bookmarks.selected = (state.bookmarks.selected + 1).min(len - 1);
            }
            Some(vec![])
        }
        Action::SelectPrevBookmark => {
            state.bookmarks.selected = state.bookmarks.selected.saturating_sub(1);
            Some(vec![])
        }
        Action::UseBookmarkAs { id, side } => {
            match state.bookmarks.collection.get(id).map(|b| b.remote_url()) {
                Some(url) => use_bookmark_as(state, url, *side),
                None => state
                    .messages
                    .set_error_at("Bookmark no longer exists".to_string(), now),
            }
            Some(vec![])
        }
        Action::BookmarksPersistFailed(error) => {
            state
                .messages
                .set_error_at(format!("Failed to save bookmarks: {}", error), now);
            Some(vec![])
        }

        // Edit form keys
        Action::FormNextField if state.input_mode == InputMode::BookmarkForm => {
            state.bookmarks.form_field = state.bookmarks.form_field.next();
            Some(vec![])
        }
        Action::FormPrevField if state.input_mode == InputMode::BookmarkForm => {
            state.bookmarks.form_field = state.bookmarks.form_field.prev();
            Some(vec![])
        }
        Action::FormInput(c) if state.input_mode == InputMode::BookmarkForm => {
            edit_focused(state, TextEdit::Insert(*c));
            Some(vec![])
        }
        Action::FormBackspace if state.input_mode == InputMode::BookmarkForm => {
            edit_focused(state, TextEdit::Backspace);
            Some(vec![])
        }
        Action::FormClearField if state.input_mode == InputMode::BookmarkForm => {
            edit_focused(state, TextEdit::Clear);
            Some(vec![])
        }

        _ => None,
    }
}
