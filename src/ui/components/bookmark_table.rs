use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table};

use super::atoms::panel_block;
use crate::app::bookmark_state::BookmarkState;
use crate::app::input_mode::InputMode;
use crate::app::state::AppState;
use crate::domain::{SortDirection, SortKey};
use crate::theme::Theme;

const COLUMNS: [SortKey; 3] = [SortKey::Host, SortKey::User, SortKey::Database];

pub struct BookmarkTable;

impl BookmarkTable {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let bookmarks = &state.bookmarks;
        let block = panel_block(&Self::title(state), state.input_mode == InputMode::Normal);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [table_area, status_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        let header = Row::new(COLUMNS.iter().map(|key| Self::header_cell(bookmarks, *key)))
            .style(Style::default().bg(Theme::TABLE_HEADER_BG));
        let rows = bookmarks.visible_rows().into_iter().enumerate().map(|(i, bm)| {
            let mut style = Style::default().fg(Theme::TEXT_PRIMARY);
            if i == bookmarks.selected {
                style = style.bg(Theme::SELECTED_BG);
            }
            if bookmarks.is_focused(bm) {
                style = style.add_modifier(Modifier::ITALIC);
            }
            Row::new(vec![bm.host.clone(), bm.user.clone(), bm.database.clone()]).style(style)
        });
        let table = Table::new(
            rows,
            [
                Constraint::Percentage(50),
                Constraint::Percentage(20),
                Constraint::Percentage(30),
            ],
        )
        .header(header);
        frame.render_widget(table, table_area);

        frame.render_widget(Paragraph::new(Self::status_line(bookmarks)), status_area);
    }

    fn title(state: &AppState) -> String {
        let filter = &state.bookmarks.filter;
        if state.input_mode == InputMode::BookmarkFilter {
            format!("Bookmarks /{}▏", filter)
        } else if filter.is_empty() {
            "Bookmarks".to_string()
        } else {
            format!("Bookmarks /{}", filter)
        }
    }

    fn header_cell(bookmarks: &BookmarkState, key: SortKey) -> Cell<'static> {
        let style = Style::default()
            .fg(Theme::TEXT_ACCENT)
            .add_modifier(Modifier::BOLD);
        if bookmarks.sorting.key != key {
            return Cell::from(key.column_title()).style(style);
        }
        let arrow = match bookmarks.sorting.direction {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        };
        Cell::from(format!("{} {}", key.column_title(), arrow)).style(style)
    }

    fn status_line(bookmarks: &BookmarkState) -> Line<'static> {
        let muted = Style::default().fg(Theme::TEXT_MUTED);
        let Some(range) = bookmarks.descriptor.range_text("bookmarks") else {
            return Line::from(Span::styled("No bookmarks available", muted));
        };
        let pages = format!(
            "  page {}/{}",
            bookmarks.descriptor.current_page + 1,
            bookmarks.descriptor.number_of_pages
        );
        Line::from(vec![
            Span::styled(range, Style::default().fg(Theme::TEXT_SECONDARY)),
            Span::styled(pages, muted),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Bookmark, BookmarkCollection};

    fn status(bookmarks: &BookmarkState) -> String {
        BookmarkTable::status_line(bookmarks)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect()
    }

    #[test]
    fn empty_collection_has_placeholder() {
        let bookmarks = BookmarkState::default();

        assert_eq!(status(&bookmarks), "No bookmarks available");
    }

    #[test]
    fn range_and_page_count() {
        let mut bookmarks = BookmarkState::with_page_size(2);
        bookmarks.collection = BookmarkCollection::from_iter(
            (0..5).map(|i| Bookmark::new("http://h", "u", format!("db{}", i))),
        );
        bookmarks.set_page_clamped(1);

        assert_eq!(status(&bookmarks), "Showing 3 - 4 of 5 bookmarks  page 2/3");
    }

    #[test]
    fn active_sort_column_has_arrow() {
        let mut bookmarks = BookmarkState::default();
        bookmarks.sorting.toggle(SortKey::Host);
        bookmarks.sorting.toggle(SortKey::Host);

        let cell = BookmarkTable::header_cell(&bookmarks, SortKey::Host);
        let other = BookmarkTable::header_cell(&bookmarks, SortKey::User);

        assert_eq!(cell, Cell::from("Remote URL ▼").style(header_style()));
        assert_eq!(other, Cell::from("Remote User").style(header_style()));
    }

    fn header_style() -> Style {
        Style::default()
            .fg(Theme::TEXT_ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    #[test]
    fn filter_mode_shows_cursor_in_title() {
        let mut state = AppState {
            input_mode: InputMode::BookmarkFilter,
            ..Default::default()
        };
        state.bookmarks.filter = "ord".to_string();

        assert_eq!(BookmarkTable::title(&state), "Bookmarks /ord▏");
    }
}
