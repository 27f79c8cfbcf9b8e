use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::molecules::hint_spans;
use super::status_message::{MessageType, StatusMessage};
use crate::app::keybindings::{GLOBAL_KEYS, context_keys};
use crate::app::state::AppState;

pub struct Footer;

impl Footer {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let line = match state.messages.error() {
            Some(error) => StatusMessage::render_line(error, MessageType::Error),
            None => {
                let hints = Self::context_hints(state);
                Self::hint_line_with_success(&hints, state.messages.success())
            }
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    /// Hint ordering: screen actions, then navigation, then Help and Quit.
    fn context_hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
        let [primary, secondary] = context_keys(state.screen, state.input_mode);
        let mut hints: Vec<_> = primary
            .iter()
            .chain(secondary)
            .map(|k| k.as_hint())
            .collect();
        if !state.input_mode.captures_text() {
            // Help, then Quit
            hints.push(GLOBAL_KEYS[1].as_hint());
            hints.push(GLOBAL_KEYS[0].as_hint());
        }
        hints
    }

    fn hint_line_with_success(
        hints: &[(&str, &str)],
        success_msg: Option<&str>,
    ) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = Vec::new();
        if let Some(msg) = success_msg {
            spans.push(StatusMessage::span(msg, MessageType::Success));
            spans.push(Span::raw("  "));
        }
        spans.extend(hint_spans(hints));
        Line::from(spans)
    }
}
