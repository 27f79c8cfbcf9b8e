use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use super::activity::ActivityPane;
use super::advanced_form::AdvancedForm;
use super::atoms::now_ms;
use super::bookmark_form::BookmarkForm;
use super::bookmark_table::BookmarkTable;
use super::footer::Footer;
use super::header::Header;
use super::help_overlay::HelpOverlay;
use super::replication_form::ReplicationForm;
use super::tabs::Tabs;
use crate::app::input_mode::InputMode;
use crate::app::screen::Screen;
use crate::app::state::AppState;

pub struct MainLayout;

impl MainLayout {
    /// `time_ms` pins spinner frames; `None` uses the wall clock.
    pub fn render(frame: &mut Frame, state: &AppState, time_ms: Option<u128>) {
        let time_ms = time_ms.unwrap_or_else(now_ms);
        let area = frame.area();

        let [header_area, tabs_area, main_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .areas(area);

        Header::render(frame, header_area, state);
        Tabs::render(frame, tabs_area, state);

        match state.screen {
            Screen::Replication => ReplicationForm::render(frame, main_area, state, time_ms),
            Screen::Advanced => AdvancedForm::render(frame, main_area, state, time_ms),
            Screen::Bookmarks => BookmarkTable::render(frame, main_area, state),
            Screen::Activity => ActivityPane::render(frame, main_area, state, time_ms),
        }

        Footer::render(frame, footer_area, state);

        // Overlays (on top of everything else)
        if state.input_mode == InputMode::BookmarkForm {
            BookmarkForm::render(frame, state);
        }
        if state.show_help {
            HelpOverlay::render(frame);
        }
    }
}
