use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use super::form_row::FormRow;
use super::molecules::render_modal;
use crate::app::form::FieldKind;
use crate::app::state::AppState;
use crate::domain::{BookmarkDraft, BookmarkField};

pub struct BookmarkForm;

impl BookmarkForm {
    pub fn render(frame: &mut Frame, state: &AppState) {
        let Some(draft) = &state.bookmarks.focused else {
            return;
        };
        let title = if draft.is_new() {
            "New bookmark"
        } else {
            "Edit bookmark"
        };
        let inner = render_modal(
            frame,
            Constraint::Length(64),
            Constraint::Length(7),
            title,
            "Enter save  Esc cancel",
        );

        let lines = Self::lines(draft, state.bookmarks.form_field);
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn lines(draft: &BookmarkDraft, focused: BookmarkField) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from("")];
        for &field in BookmarkField::all() {
            let mut row = FormRow::new(field.label(), FieldKind::Text, draft.field(field));
            row.focused = field == focused;
            row.editing = row.focused;
            lines.push(row.line());
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_only_on_focused_field() {
        let draft = BookmarkDraft::new("http://remote:5984", "admin", "");

        let lines: Vec<String> = BookmarkForm::lines(&draft, BookmarkField::Database)
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();

        assert!(lines[1].contains("http://remote:5984"));
        assert!(!lines[1].ends_with('▏'));
        assert!(lines[3].starts_with("▸ Database"));
        assert!(lines[3].ends_with('▏'));
    }
}
