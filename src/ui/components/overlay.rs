use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders};

use crate::theme::Theme;

/// Creates a rectangle centered horizontally and vertically within `area`.
pub fn centered_rect(area: Rect, width: Constraint, height: Constraint) -> Rect {
    let [area] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
    let [area] = Layout::vertical([height]).flex(Flex::Center).areas(area);
    area
}

/// Rounded modal block with the title on top and a key hint on the bottom border.
pub fn modal_block_with_hint(title: &str, hint: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .title_bottom(Line::from(format!(" {} ", hint)).right_aligned())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Theme::MODAL_BORDER))
        .style(Style::default().bg(Theme::MODAL_BG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_centered() {
        let area = Rect::new(0, 0, 80, 24);

        let rect = centered_rect(area, Constraint::Length(40), Constraint::Length(10));

        assert_eq!(rect, Rect::new(20, 7, 40, 10));
    }
}
