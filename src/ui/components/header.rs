use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::database_list::LoadStatus;
use crate::app::state::AppState;

pub struct Header;

impl Header {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        frame.render_widget(Paragraph::new(Self::line(state)), area);
    }

    fn line(state: &AppState) -> Line<'_> {
        let user = match state.session.user_name() {
            "" => "anonymous",
            name => name,
        };
        let databases = &state.databases;

        let (status_text, status_color) = match databases.status {
            LoadStatus::Loaded => (format!("{} databases", databases.names.len()), Color::Green),
            LoadStatus::Loading => ("loading...".to_string(), Color::Yellow),
            LoadStatus::Failed => ("unreachable".to_string(), Color::Red),
            LoadStatus::Idle => ("not loaded".to_string(), Color::Gray),
        };

        Line::from(vec![
            Span::styled("couchrep", Style::default().fg(Color::Cyan)),
            Span::raw(" | "),
            Span::raw(state.origin.to_string()),
            Span::raw(" | "),
            Span::styled(user, Style::default().fg(Color::Yellow)),
            Span::raw(" | "),
            Span::styled(status_text, Style::default().fg(status_color)),
        ])
    }
}
