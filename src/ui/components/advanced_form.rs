use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::atoms::{panel_block, spinner_char};
use super::form_row::{FormRow, note};
use super::replication_form::database_note;
use crate::app::advanced_state::AdvancedField;
use crate::app::form::FieldKind;
use crate::app::input_mode::InputMode;
use crate::app::state::AppState;
use crate::theme::Theme;

pub struct AdvancedForm;

impl AdvancedForm {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState, time_ms: u128) {
        let [source_area, target_area] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(area);

        let (source_fields, target_fields) = Self::split_fields(state);
        let focus_on_source = source_fields.contains(&state.advanced.focused_field);

        let source = Self::lines(state, &source_fields, time_ms);
        frame.render_widget(
            Paragraph::new(source).block(panel_block("Source", focus_on_source)),
            source_area,
        );
        let target = Self::lines(state, &target_fields, time_ms);
        frame.render_widget(
            Paragraph::new(target).block(panel_block("Target", !focus_on_source)),
            target_area,
        );
    }

    fn split_fields(state: &AppState) -> (Vec<AdvancedField>, Vec<AdvancedField>) {
        let fields = state.advanced.visible_fields();
        let split = fields
            .iter()
            .position(|f| *f == AdvancedField::TargetType)
            .unwrap_or(fields.len());
        let (source, target) = fields.split_at(split);
        (source.to_vec(), target.to_vec())
    }

    fn lines(state: &AppState, fields: &[AdvancedField], time_ms: u128) -> Vec<Line<'static>> {
        let form = &state.advanced;
        let mut lines = vec![Line::from("")];

        for &field in fields {
            let kind = form.field_kind(field);
            let focused = field == form.focused_field;
            let text = match field {
                AdvancedField::SourceType => form.source_type().as_str(),
                AdvancedField::TargetType => form.target_type().as_str(),
                _ => form.text_value(field).unwrap_or(""),
            };
            let mut row = FormRow::new(form.field_label(field), kind, text);
            row.flag = form.flag_value(field).unwrap_or(false);
            row.focused = focused;
            row.editing = focused && state.input_mode == InputMode::Editing;
            row.note = match (field, kind) {
                (AdvancedField::FilterFunction, FieldKind::Choice) => {
                    filter_note(state, time_ms)
                }
                (_, FieldKind::LocalDatabase) => database_note(&state.databases, text, time_ms),
                _ => None,
            };
            lines.push(row.line());
        }

        lines
    }
}

fn filter_note(state: &AppState, time_ms: u128) -> Option<Span<'static>> {
    let db = state.advanced.local_source()?;
    if state.filters_loading() {
        return Some(note(
            format!("{} discovering filters", spinner_char(time_ms)),
            Theme::STATUS_PENDING,
        ));
    }
    if !state.filter_catalog.contains(db) {
        return None;
    }
    match state.available_filters().len() {
        0 => Some(note(format!("no filters in {}", db), Theme::TEXT_MUTED)),
        n => Some(note(format!("{} available", n), Theme::TEXT_MUTED)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EndpointType, FilterFunction};

    fn rendered(state: &AppState, fields: &[AdvancedField]) -> Vec<String> {
        AdvancedForm::lines(state, fields, 0)
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn target_panel_starts_at_target_type() {
        let state = AppState::default();

        let (source, target) = AdvancedForm::split_fields(&state);

        assert_eq!(source[0], AdvancedField::SourceType);
        assert_eq!(target[0], AdvancedField::TargetType);
        assert!(!source.contains(&AdvancedField::Continuous));
    }

    #[test]
    fn pending_discovery_shows_spinner() {
        let mut state = AppState::default();
        state.advanced.job.source.database = "orders".to_string();
        state.filter_catalog.mark_pending("orders");

        let lines = rendered(&state, &[AdvancedField::FilterFunction]);

        assert!(lines[1].contains("◐ discovering filters"));
    }

    #[test]
    fn loaded_catalog_reports_count() {
        let mut state = AppState::default();
        state.advanced.job.source.database = "orders".to_string();
        state.filter_catalog.insert(
            "orders",
            vec![FilterFunction {
                id: "app/by_type".to_string(),
                label: "by_type".to_string(),
            }],
        );

        let lines = rendered(&state, &[AdvancedField::FilterFunction]);

        assert!(lines[1].contains("‹ none ›  1 available"));
    }

    #[test]
    fn remote_source_filter_is_free_text() {
        let mut state = AppState::default();
        state.advanced.job.source.endpoint_type = EndpointType::Remote;

        assert_eq!(
            state.advanced.field_kind(AdvancedField::FilterFunction),
            FieldKind::Text
        );
    }
}
