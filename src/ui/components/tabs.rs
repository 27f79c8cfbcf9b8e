use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Tabs as RatatuiTabs;

use crate::app::screen::Screen;
use crate::app::state::AppState;

pub struct Tabs;

impl Tabs {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let titles: Vec<String> = Screen::all()
            .iter()
            .enumerate()
            .map(|(i, screen)| format!("{} {}", i + 1, screen.title()))
            .collect();
        let tabs = RatatuiTabs::new(titles)
            .select(state.screen.index())
            .style(Style::default().fg(Color::White))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .divider(" | ");

        frame.render_widget(tabs, area);
    }
}
