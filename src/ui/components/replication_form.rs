use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use super::atoms::{panel_block, spinner_char};
use super::form_row::{FormRow, note};
use crate::app::database_list::{DatabaseListState, LoadStatus};
use crate::app::form::FieldKind;
use crate::app::input_mode::InputMode;
use crate::app::state::AppState;
use crate::theme::Theme;

pub struct ReplicationForm;

impl ReplicationForm {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState, time_ms: u128) {
        let lines = Self::lines(state, time_ms);
        let block = panel_block("Replicator", true);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn lines(state: &AppState, time_ms: u128) -> Vec<Line<'static>> {
        let form = &state.replication;
        let mut lines = vec![Line::from("")];

        for field in form.visible_fields() {
            let kind = form.field_kind(field);
            let focused = field == form.focused_field;
            let value = form.field_value(field);
            let mut row = FormRow::new(form.field_label(field), kind, value);
            row.focused = focused;
            row.editing = focused && state.input_mode == InputMode::Editing;
            if kind == FieldKind::LocalDatabase {
                row.note = database_note(&state.databases, value, time_ms);
            }
            lines.push(row.line());
        }

        lines
    }
}

/// Loading or "not found" status for a local database name.
pub fn database_note(
    databases: &DatabaseListState,
    name: &str,
    time_ms: u128,
) -> Option<ratatui::text::Span<'static>> {
    match databases.status {
        LoadStatus::Loading => Some(note(
            format!("{} loading databases", spinner_char(time_ms)),
            Theme::STATUS_PENDING,
        )),
        LoadStatus::Failed => Some(note("database list unavailable", Theme::STATUS_ERROR)),
        LoadStatus::Loaded if !name.is_empty() && !databases.contains(name) => {
            Some(note("not found", Theme::STATUS_ERROR))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::replication_form_state::{ReplicationFormUpdate, SourceKind};

    fn rendered(state: &AppState) -> Vec<String> {
        ReplicationForm::lines(state, 0)
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn unknown_local_database_is_flagged() {
        let mut state = AppState::default();
        state.databases.names = vec!["orders".to_string()];
        state.databases.status = LoadStatus::Loaded;
        state
            .replication
            .apply(ReplicationFormUpdate::Source(Some(SourceKind::Local)));
        state
            .replication
            .apply(ReplicationFormUpdate::SourceDatabase("missing".to_string()));

        let lines = rendered(&state);

        assert!(lines.iter().any(|l| l.contains("missing  not found")));
    }

    #[test]
    fn first_field_is_focused_initially() {
        let state = AppState::default();

        let lines = rendered(&state);

        assert!(lines[1].starts_with("▸ Replication Source"));
    }
}
