//! Advanced replicator sub-reducer, including filter-function discovery.

use std::time::Instant;

use crate::action::Action;
use crate::advanced_state::{AdvancedField, AdvancedFormState, SourceOption, TargetOption};
use crate::database_list::LoadStatus;
use crate::domain::EndpointType;
use crate::effect::Effect;
use crate::form::{FieldKind, TextEdit, step};
use crate::input_mode::InputMode;
use crate::reducers::helpers::{exit_edit_unless, start_replication};
use crate::screen::Screen;
use crate::state::AppState;

fn form_active(state: &AppState) -> bool {
    state.screen == Screen::Advanced
        && matches!(state.input_mode, InputMode::Normal | InputMode::Editing)
}

/// Requests discovery for the selected LOCAL source unless it is cached or
/// already in flight. While the database list is known, only names on it
/// count as selected, so partially typed names never hit the server.
fn discover_filters(state: &mut AppState) -> Vec<Effect> {
    let Some(db) = state.advanced.local_source().map(str::to_string) else {
        return vec![];
    };
    let listed = state.databases.status != LoadStatus::Loaded || state.databases.contains(&db);
    if !listed || !state.filter_catalog.needs_fetch(&db) {
        return vec![];
    }
    state.filter_catalog.mark_pending(&db);
    vec![Effect::FetchFilterFunctions { database: db }]
}

fn refocus(state: &mut AppState) {
    state.advanced.ensure_focus_visible();
    let form = &state.advanced;
    let still_text = form.field_kind(form.focused_field).is_editable_text();
    exit_edit_unless(state, still_text);
}

fn text_action(field: AdvancedField, value: String) -> Option<Action> {
    let action = match field {
        AdvancedField::SourceDatabase => Action::SetSourceDatabase(value),
        AdvancedField::SourcePassword => Action::SetSourcePassword(value),
        AdvancedField::ProxyUrl => Action::SetSourceOption(SourceOption::ProxyUrl(value)),
        AdvancedField::StartingSequence => {
            Action::SetSourceOption(SourceOption::StartingSequence(value))
        }
        AdvancedField::FilterFunction => {
            Action::SetSourceOption(SourceOption::FilterFunction(value))
        }
        AdvancedField::QueryParameters => {
            Action::SetSourceOption(SourceOption::QueryParameters(value))
        }
        AdvancedField::CheckpointInterval => {
            Action::SetSourceOption(SourceOption::CheckpointInterval(value))
        }
        AdvancedField::TargetDatabase => Action::SetTargetDatabase(value),
        AdvancedField::TargetPassword => Action::SetTargetPassword(value),
        AdvancedField::DocumentId => Action::SetTargetOption(TargetOption::DocumentId(value)),
        _ => return None,
    };
    Some(action)
}

fn toggle_action(form: &AdvancedFormState, field: AdvancedField) -> Option<Action> {
    let flag = !form.flag_value(field)?;
    match field {
        AdvancedField::UseCheckpoints => {
            Some(Action::SetSourceOption(SourceOption::UseCheckpoints(flag)))
        }
        AdvancedField::Continuous => Some(Action::SetTargetOption(TargetOption::Continuous(flag))),
        AdvancedField::CreateTarget => {
            Some(Action::SetTargetOption(TargetOption::CreateTarget(flag)))
        }
        _ => None,
    }
}

/// Left/right on the focused field, mapped onto the typed setter actions.
fn cycle_action(state: &AppState, forward: bool) -> Option<Action> {
    let form = &state.advanced;
    let field = form.focused_field;
    match (field, form.field_kind(field)) {
        (AdvancedField::SourceType, _) => Some(Action::SetSourceType(form.source_type().toggled())),
        (AdvancedField::TargetType, _) => Some(Action::SetTargetType(form.target_type().toggled())),
        (AdvancedField::FilterFunction, FieldKind::Choice) => {
            let mut choices: Vec<&str> = vec![""];
            choices.extend(state.available_filters().iter().map(|f| f.id.as_str()));
            let current = form.text_value(field).unwrap_or("");
            let next = step(&choices, current, forward)?;
            text_action(field, next.to_string())
        }
        (_, FieldKind::LocalDatabase) => {
            let current = form.text_value(field).unwrap_or("");
            let name = state.databases.cycle(current, forward)?;
            text_action(field, name.to_string())
        }
        (_, FieldKind::Toggle) => toggle_action(form, field),
        _ => None,
    }
}

fn edit_action(state: &AppState, edit: TextEdit) -> Option<Action> {
    if state.input_mode != InputMode::Editing {
        return None;
    }
    let field = state.advanced.focused_field;
    let value = edit.apply(state.advanced.text_value(field)?);
    text_action(field, value)
}

fn dispatch_nested(state: &mut AppState, action: Option<Action>, now: Instant) -> Vec<Effect> {
    match action {
        Some(action) => reduce_advanced(state, &action, now).unwrap_or_default(),
        None => vec![],
    }
}

pub fn reduce_advanced(
    state: &mut AppState,
    action: &Action,
    now: Instant,
) -> Option<Vec<Effect>> {
    match action {
        Action::SetSourceType(endpoint_type) => {
            let source = &mut state.advanced.job.source;
            if source.endpoint_type != *endpoint_type {
                source.endpoint_type = *endpoint_type;
                source.options.filter_function.clear();
            }
            refocus(state);
            Some(discover_filters(state))
        }
        Action::SetTargetType(endpoint_type) => {
            state.advanced.job.target.endpoint_type = *endpoint_type;
            refocus(state);
            Some(vec![])
        }
        Action::SetSourceDatabase(database) => {
            let source = &mut state.advanced.job.source;
            if source.database != *database {
                source.database = database.clone();
                source.options.filter_function.clear();
            }
            Some(discover_filters(state))
        }
        Action::SetTargetDatabase(database) => {
            state.advanced.job.target.database = database.clone();
            Some(vec![])
        }
        Action::SetSourcePassword(password) => {
            state.advanced.job.source.password = password.clone();
            Some(vec![])
        }
        Action::SetTargetPassword(password) => {
            state.advanced.job.target.password = password.clone();
            Some(vec![])
        }
        Action::SetSourceOption(option) => {
            state.advanced.apply_source_option(option.clone());
            refocus(state);
            Some(vec![])
        }
        Action::SetTargetOption(option) => {
            state.advanced.apply_target_option(option.clone());
            Some(vec![])
        }
        Action::FilterFunctionsLoaded { database, filters } => {
            if state.advanced.local_source() == Some(database.as_str()) {
                state.filter_catalog.insert(database, filters.clone());
            } else {
                state.filter_catalog.clear_pending(database);
            }
            Some(vec![])
        }
        Action::FilterFunctionsFailed { database, error } => {
            state.filter_catalog.clear_pending(database);
            if state.advanced.local_source() == Some(database.as_str()) {
                state.messages.set_error_at(
                    format!(
                        "Failed to fetch filter functions for database {}: {}",
                        database, error
                    ),
                    now,
                );
            }
            Some(vec![])
        }
        Action::ReloadFilterFunctions => {
            let Some(db) = state.advanced.local_source().map(str::to_string) else {
                return Some(vec![]);
            };
            state.filter_catalog.invalidate(&db);
            Some(discover_filters(state))
        }
        Action::StartAdvancedReplication => {
            let job = state.advanced.job.clone();
            Some(start_replication(state, &job, now))
        }
        Action::ClearAdvancedForm => {
            state.advanced.clear();
            if state.screen == Screen::Advanced {
                state.input_mode = InputMode::Normal;
            }
            Some(vec![])
        }

        Action::FormNextField | Action::FormPrevField if form_active(state) => {
            state
                .advanced
                .focus_step(matches!(action, Action::FormNextField));
            state.input_mode = InputMode::Normal;
            Some(vec![])
        }
        Action::FormEnterEdit if form_active(state) => {
            let kind = state.advanced.field_kind(state.advanced.focused_field);
            if kind.is_editable_text() {
                state.input_mode = InputMode::Editing;
                Some(vec![])
            } else {
                let nested = cycle_action(state, true);
                Some(dispatch_nested(state, nested, now))
            }
        }
        Action::FormExitEdit if form_active(state) => {
            state.input_mode = InputMode::Normal;
            Some(vec![])
        }
        Action::FormInput(c) if form_active(state) => {
            let nested = edit_action(state, TextEdit::Insert(*c));
            Some(dispatch_nested(state, nested, now))
        }
        Action::FormBackspace if form_active(state) => {
            let nested = edit_action(state, TextEdit::Backspace);
            Some(dispatch_nested(state, nested, now))
        }
        Action::FormClearField if form_active(state) => {
            let nested = edit_action(state, TextEdit::Clear);
            Some(dispatch_nested(state, nested, now))
        }
        Action::FormToggle | Action::FormCycle { .. } if form_active(state) => {
            let forward = !matches!(action, Action::FormCycle { forward: false });
            let nested = cycle_action(state, forward);
            Some(dispatch_nested(state, nested, now))
        }

        _ => None,
    }
}
