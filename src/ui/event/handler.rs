use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::action::Action;
use crate::app::input_mode::InputMode;
use crate::app::screen::Screen;
use crate::app::state::AppState;
use crate::domain::{BookmarkDraft, ReplicationSide, SortKey};

use super::Event;

pub fn handle_event(event: Event, state: &AppState) -> Action {
    match event {
        Event::Init => Action::Render,
        Event::Resize(w, h) => Action::Resize(w, h),
        Event::Key(key) => handle_key_event(key, state),
    }
}

fn handle_key_event(key: KeyEvent, state: &AppState) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }
    if state.show_help {
        return handle_help_keys(key);
    }

    match state.input_mode {
        InputMode::Normal => handle_normal_mode(key, state),
        InputMode::Editing => handle_editing_keys(key),
        InputMode::BookmarkForm => handle_bookmark_form_keys(key),
        InputMode::BookmarkFilter => handle_bookmark_filter_keys(key, state),
    }
}

fn handle_normal_mode(key: KeyEvent, state: &AppState) -> Action {
    if let Some(action) = handle_global_keys(key) {
        return action;
    }

    match state.screen {
        Screen::Replication => handle_form_keys(key).unwrap_or(match key.code {
            KeyCode::Char('s') => Action::SubmitReplication,
            KeyCode::Char('x') => Action::ClearReplicationForm,
            KeyCode::Char('R') => Action::LoadLocalDatabases,
            _ => Action::None,
        }),
        Screen::Advanced => handle_form_keys(key).unwrap_or(match key.code {
            KeyCode::Char('s') => Action::StartAdvancedReplication,
            KeyCode::Char('r') => Action::ReloadFilterFunctions,
            KeyCode::Char('x') => Action::ClearAdvancedForm,
            KeyCode::Char('R') => Action::LoadLocalDatabases,
            _ => Action::None,
        }),
        Screen::Bookmarks => handle_bookmark_keys(key, state),
        Screen::Activity => match key.code {
            KeyCode::Down | KeyCode::Char('j') => Action::SelectNextTask,
            KeyCode::Up | KeyCode::Char('k') => Action::SelectPrevTask,
            KeyCode::Char('r') => Action::LoadActiveTasks,
            _ => Action::None,
        },
    }
}

fn handle_global_keys(key: KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::ToggleHelp,
        KeyCode::Char('[') => Action::PrevScreen,
        KeyCode::Char(']') => Action::NextScreen,
        KeyCode::Esc => Action::DismissMessage,
        KeyCode::Char(c @ '1'..='4') => {
            let index = c.to_digit(10)? as usize - 1;
            Action::SwitchScreen(*Screen::all().get(index)?)
        }
        _ => return None,
    };
    Some(action)
}

/// Field navigation shared by both replicator forms.
fn handle_form_keys(key: KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => Action::FormNextField,
        KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => Action::FormPrevField,
        KeyCode::Enter => Action::FormEnterEdit,
        KeyCode::Left | KeyCode::Char('h') => Action::FormCycle { forward: false },
        KeyCode::Right | KeyCode::Char('l') => Action::FormCycle { forward: true },
        KeyCode::Char(' ') => Action::FormToggle,
        _ => return None,
    };
    Some(action)
}

fn handle_editing_keys(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('u'), m) if m.contains(KeyModifiers::CONTROL) => Action::FormClearField,
        (KeyCode::Esc | KeyCode::Enter, _) => Action::FormExitEdit,
        (KeyCode::Tab, _) => Action::FormNextField,
        (KeyCode::BackTab, _) => Action::FormPrevField,
        (KeyCode::Backspace, _) => Action::FormBackspace,
        (KeyCode::Char(c), _) => Action::FormInput(c),
        _ => Action::None,
    }
}

fn handle_bookmark_form_keys(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('u'), m) if m.contains(KeyModifiers::CONTROL) => Action::FormClearField,
        (KeyCode::Esc, _) => Action::DismissBookmarkForm,
        (KeyCode::Enter, _) => Action::SubmitBookmarkForm,
        (KeyCode::Tab | KeyCode::Down, _) => Action::FormNextField,
        (KeyCode::BackTab | KeyCode::Up, _) => Action::FormPrevField,
        (KeyCode::Backspace, _) => Action::FormBackspace,
        (KeyCode::Char(c), _) => Action::FormInput(c),
        _ => Action::None,
    }
}

/// The filter applies as it is typed.
fn handle_bookmark_filter_keys(key: KeyEvent, state: &AppState) -> Action {
    let term = &state.bookmarks.filter;
    match (key.code, key.modifiers) {
        (KeyCode::Char('u'), m) if m.contains(KeyModifiers::CONTROL) => {
            Action::SetBookmarkFilter(String::new())
        }
        (KeyCode::Esc | KeyCode::Enter, _) => Action::ExitBookmarkFilter,
        (KeyCode::Backspace, _) => {
            let mut next = term.clone();
            next.pop();
            Action::SetBookmarkFilter(next)
        }
        (KeyCode::Char(c), _) => Action::SetBookmarkFilter(format!("{}{}", term, c)),
        _ => Action::None,
    }
}

fn handle_bookmark_keys(key: KeyEvent, state: &AppState) -> Action {
    let selected = state.bookmarks.selected_bookmark();
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => Action::SelectNextBookmark,
        KeyCode::Up | KeyCode::Char('k') => Action::SelectPrevBookmark,
        KeyCode::Right | KeyCode::Char('l') => Action::NextBookmarkPage,
        KeyCode::Left | KeyCode::Char('h') => Action::PrevBookmarkPage,
        KeyCode::Char('/') => Action::EnterBookmarkFilter,
        KeyCode::Char('n') => Action::FocusBookmark(BookmarkDraft::default()),
        KeyCode::Char('H') => Action::SortBookmarks(SortKey::Host),
        KeyCode::Char('U') => Action::SortBookmarks(SortKey::User),
        KeyCode::Char('D') => Action::SortBookmarks(SortKey::Database),
        KeyCode::Char('e') | KeyCode::Enter => selected
            .map(|b| Action::FocusBookmark(BookmarkDraft::from(b)))
            .unwrap_or(Action::None),
        KeyCode::Char('d') => selected
            .map(|b| Action::DeleteBookmark(b.id.clone()))
            .unwrap_or(Action::None),
        KeyCode::Char('s') => selected
            .map(|b| Action::UseBookmarkAs {
                id: b.id.clone(),
                side: ReplicationSide::Source,
            })
            .unwrap_or(Action::None),
        KeyCode::Char('t') => selected
            .map(|b| Action::UseBookmarkAs {
                id: b.id.clone(),
                side: ReplicationSide::Target,
            })
            .unwrap_or(Action::None),
        _ => Action::None,
    }
}

fn handle_help_keys(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Esc | KeyCode::Char('?') => Action::ToggleHelp,
        _ => Action::None,
    }
}
