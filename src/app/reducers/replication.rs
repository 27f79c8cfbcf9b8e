//! Simple replicator sub-reducer, plus the shared start/failed results.

use std::time::Instant;

use crate::action::Action;
use crate::database_list::LoadStatus;
use crate::effect::Effect;
use crate::form::{FieldKind, TextEdit};
use crate::input_mode::InputMode;
use crate::reducers::helpers::{exit_edit_unless, start_replication};
use crate::replication_form_state::{ReplicationFormState, ReplicationFormUpdate, SourceKind};
use crate::screen::Screen;
use crate::state::AppState;

fn form_active(state: &AppState) -> bool {
    state.screen == Screen::Replication
        && matches!(state.input_mode, InputMode::Normal | InputMode::Editing)
}

fn apply_update(state: &mut AppState, update: ReplicationFormUpdate) {
    state.replication.apply(update);
    let form = &mut state.replication;
    if !form.visible_fields().contains(&form.focused_field) {
        form.focused_field = Default::default();
    }
    let still_text = form.field_kind(form.focused_field).is_editable_text();
    exit_edit_unless(state, still_text);
}

fn edit_text(state: &mut AppState, edit: TextEdit) {
    if state.input_mode != InputMode::Editing {
        return;
    }
    let form = &state.replication;
    let field = form.focused_field;
    let value = edit.apply(form.field_value(field));
    if let Some(update) = form.text_update(field, value) {
        apply_update(state, update);
    }
}

fn cycle_field(state: &mut AppState, forward: bool) {
    let form = &state.replication;
    let field = form.focused_field;
    let update = match form.field_kind(field) {
        FieldKind::Choice => form.cycle_update(field, forward),
        FieldKind::LocalDatabase => state
            .databases
            .cycle(form.field_value(field), forward)
            .and_then(|name| form.text_update(field, name.to_string())),
        _ => None,
    };
    if let Some(update) = update {
        apply_update(state, update);
    }
}

pub fn reduce_replication(
    state: &mut AppState,
    action: &Action,
    now: Instant,
) -> Option<Vec<Effect>> {
    match action {
        Action::InitReplicator(source) => {
            state.replication = ReplicationFormState::default();
            if let Some(db) = source {
                state.replication.source = Some(SourceKind::Local);
                state.replication.source_database = db.clone();
            }
            state.screen = Screen::Replication;
            state.input_mode = InputMode::Normal;
            state.databases.status = LoadStatus::Loading;
            Some(vec![Effect::FetchLocalDatabases])
        }
        Action::UpdateReplicationForm(update) => {
            apply_update(state, update.clone());
            Some(vec![])
        }
        Action::SubmitReplication => {
            if !state.replication.can_submit(&state.databases) {
                state.messages.set_error_at(
                    "Choose a known source and target before starting the replication"
                        .to_string(),
                    now,
                );
                return Some(vec![]);
            }
            let Some(job) = state.replication.to_job(&state.session) else {
                return Some(vec![]);
            };
            Some(start_replication(state, &job, now))
        }
        Action::ClearReplicationForm => {
            state.replication = ReplicationFormState::default();
            if state.screen == Screen::Replication {
                state.input_mode = InputMode::Normal;
            }
            Some(vec![])
        }
        Action::ReplicationStarted { source, target } => {
            state.messages.set_success_at(
                format!("Replication from {} to {} started", source, target),
                now,
            );
            Some(vec![])
        }
        Action::ReplicationFailed(reason) => {
            state.messages.set_error_at(
                format!("Failed to start the replication: {}", reason),
                now,
            );
            Some(vec![])
        }

        Action::FormNextField | Action::FormPrevField if form_active(state) => {
            state
                .replication
                .focus_step(matches!(action, Action::FormNextField));
            state.input_mode = InputMode::Normal;
            Some(vec![])
        }
        Action::FormEnterEdit if form_active(state) => {
            let kind = state
                .replication
                .field_kind(state.replication.focused_field);
            if kind.is_editable_text() {
                state.input_mode = InputMode::Editing;
            } else {
                cycle_field(state, true);
            }
            Some(vec![])
        }
        Action::FormExitEdit if form_active(state) => {
            state.input_mode = InputMode::Normal;
            Some(vec![])
        }
        Action::FormInput(c) if form_active(state) => {
            edit_text(state, TextEdit::Insert(*c));
            Some(vec![])
        }
        Action::FormBackspace if form_active(state) => {
            edit_text(state, TextEdit::Backspace);
            Some(vec![])
        }
        Action::FormClearField if form_active(state) => {
            edit_text(state, TextEdit::Clear);
            Some(vec![])
        }
        Action::FormToggle if form_active(state) => {
            cycle_field(state, true);
            Some(vec![])
        }
        Action::FormCycle { forward } if form_active(state) => {
            cycle_field(state, *forward);
            Some(vec![])
        }

        _ => None,
    }
}
