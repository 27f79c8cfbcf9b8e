use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::theme::Theme;

pub enum MessageType {
    Error,
    Success,
}

pub struct StatusMessage;

impl StatusMessage {
    pub fn span(message: &str, msg_type: MessageType) -> Span<'static> {
        let (prefix, color) = match msg_type {
            MessageType::Error => ("✗ ", Theme::STATUS_ERROR),
            MessageType::Success => ("✓ ", Theme::STATUS_SUCCESS),
        };

        Span::styled(format!("{}{}", prefix, message), Style::default().fg(color))
    }

    pub fn render_line(message: &str, msg_type: MessageType) -> Line<'static> {
        Line::from(Self::span(message, msg_type))
    }
}
