//! Navigation sub-reducer: screens, help, quitting and message dismissal.

use std::time::Instant;

use crate::action::Action;
use crate::database_list::LoadStatus;
use crate::effect::Effect;
use crate::input_mode::InputMode;
use crate::screen::Screen;
use crate::state::AppState;

/// Data a screen needs on arrival. Activity always refreshes; the form
/// screens load the local database list once.
fn enter_screen(state: &mut AppState, screen: Screen) -> Vec<Effect> {
    state.screen = screen;
    state.input_mode = InputMode::Normal;
    match screen {
        Screen::Activity => {
            state.activity.status = LoadStatus::Loading;
            vec![Effect::FetchActiveTasks]
        }
        Screen::Replication | Screen::Advanced
            if matches!(state.databases.status, LoadStatus::Idle | LoadStatus::Failed) =>
        {
            state.databases.status = LoadStatus::Loading;
            vec![Effect::FetchLocalDatabases]
        }
        _ => vec![],
    }
}

pub fn reduce_navigation(
    state: &mut AppState,
    action: &Action,
    _now: Instant,
) -> Option<Vec<Effect>> {
    match action {
        Action::Quit => {
            state.should_quit = true;
            Some(vec![])
        }
        Action::Resize(_, height) => {
            state.terminal_height = *height;
            Some(vec![])
        }
        Action::SwitchScreen(screen) => Some(enter_screen(state, *screen)),
        Action::NextScreen => {
            let next = state.screen.next();
            Some(enter_screen(state, next))
        }
        Action::PrevScreen => {
            let prev = state.screen.prev();
            Some(enter_screen(state, prev))
        }
        Action::DismissMessage => {
            state.messages.dismiss();
            Some(vec![])
        }
        Action::ToggleHelp => {
            state.show_help = !state.show_help;
            Some(vec![])
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn now() -> Instant {
        Instant::now()
    }

    #[test]
    fn entering_activity_refreshes_tasks() {
        let mut state = AppState::default();
        state.activity.status = LoadStatus::Loaded;

        let effects = reduce_navigation(&mut state, &Action::SwitchScreen(Screen::Activity), now());

        assert_eq!(effects, Some(vec![Effect::FetchActiveTasks]));
        assert_eq!(state.activity.status, LoadStatus::Loading);
    }

    #[rstest]
    #[case(LoadStatus::Idle, true)]
    #[case(LoadStatus::Failed, true)]
    #[case(LoadStatus::Loading, false)]
    #[case(LoadStatus::Loaded, false)]
    fn form_screens_load_databases_once(#[case] status: LoadStatus, #[case] fetches: bool) {
        let mut state = AppState::default();
        state.screen = Screen::Bookmarks;
        state.databases.status = status;

        let effects = reduce_navigation(&mut state, &Action::SwitchScreen(Screen::Advanced), now())
            .unwrap_or_default();

        assert_eq!(effects.contains(&Effect::FetchLocalDatabases), fetches);
    }

    #[test]
    fn switching_screens_leaves_edit_mode() {
        let mut state = AppState::default();
        state.input_mode = InputMode::Editing;

        reduce_navigation(&mut state, &Action::NextScreen, now());

        assert_eq!(state.screen, Screen::Advanced);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn prev_screen_wraps_around() {
        let mut state = AppState::default();

        reduce_navigation(&mut state, &Action::PrevScreen, now());

        assert_eq!(state.screen, Screen::Activity);
    }

    #[test]
    fn toggle_help_flips_overlay() {
        let mut state = AppState::default();

        reduce_navigation(&mut state, &Action::ToggleHelp, now());
        assert!(state.show_help);

        reduce_navigation(&mut state, &Action::ToggleHelp, now());
        assert!(!state.show_help);
    }

    #[test]
    fn resize_records_height() {
        let mut state = AppState::default();

        reduce_navigation(&mut state, &Action::Resize(80, 24), now());

        assert_eq!(state.terminal_height, 24);
    }

    #[test]
    fn dismiss_clears_messages() {
        let mut state = AppState::default();
        state.messages.set_error_at("boom".to_string(), now());

        reduce_navigation(&mut state, &Action::DismissMessage, now());

        assert!(!state.messages.is_visible());
    }
}
