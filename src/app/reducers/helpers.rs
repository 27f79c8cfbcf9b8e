//! Shared helper functions for sub-reducers.

use std::time::Instant;

use crate::domain::{ReplicationJob, build_replication_request, database_label};
use crate::effect::Effect;
use crate::input_mode::InputMode;
use crate::state::AppState;

pub fn persist_bookmarks(state: &AppState) -> Effect {
    Effect::PersistBookmarks {
        bookmarks: state.bookmarks.collection.clone(),
    }
}

/// Builds the replicator document; a validation failure becomes an error
/// message and nothing is sent.
pub fn start_replication(state: &mut AppState, job: &ReplicationJob, now: Instant) -> Vec<Effect> {
    match build_replication_request(job, &state.session, &state.origin) {
        Ok(request) => {
            let source_label = database_label(&request.source.url).to_string();
            let target_label = database_label(&request.target.url).to_string();
            state.input_mode = InputMode::Normal;
            vec![Effect::StartReplication {
                request: Box::new(request),
                source_label,
                target_label,
            }]
        }
        Err(e) => {
            state.messages.set_error_at(e.to_string(), now);
            vec![]
        }
    }
}

/// Leaves text editing when the focused field stopped being a text field.
pub fn exit_edit_unless(state: &mut AppState, still_text: bool) {
    if state.input_mode == InputMode::Editing && !still_text {
        state.input_mode = InputMode::Normal;
    }
}
