use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::molecules::{chip_hint_line, render_modal};
use crate::app::keybindings::{HELP_SECTIONS, HELP_TOTAL_LINES};
use crate::theme::Theme;

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame) {
        let inner = render_modal(
            frame,
            Constraint::Percentage(80),
            Constraint::Percentage(90),
            "Help",
            "? or Esc to close",
        );
        frame.render_widget(Paragraph::new(Self::lines()), inner);
    }

    fn lines() -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(HELP_TOTAL_LINES);
        for (title, keys) in HELP_SECTIONS {
            lines.push(Line::from(Span::styled(
                format!("=== {} ===", title),
                Style::default()
                    .fg(Theme::FOCUS_BORDER)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.extend(keys.iter().map(|k| chip_hint_line(k.key, k.description)));
            lines.push(Line::from(""));
        }
        lines
    }
}
