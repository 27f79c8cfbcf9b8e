//! Pure reducer: state transitions only, no I/O.
//!
//! # Purity Rules
//!
//! The reducer MUST NOT:
//! - Call `Instant::now()` (time is passed as `now` parameter)
//! - Perform I/O operations
//! - Spawn async tasks
//!
//! This keeps the reducer testable without mocking time or I/O.

use std::time::Instant;

use crate::action::Action;
use crate::effect::Effect;
use crate::reducers::{
    reduce_activity, reduce_advanced, reduce_bookmarks, reduce_databases, reduce_navigation,
    reduce_replication,
};
use crate::state::AppState;

pub fn reduce(state: &mut AppState, action: Action, now: Instant) -> Vec<Effect> {
    let should_mark_dirty = !is_noop(state, &action);

    let effects = reduce_inner(state, action, now);

    if should_mark_dirty {
        state.mark_dirty();
    }

    effects
}

/// Actions that leave the state untouched: no render, no notification.
fn is_noop(state: &AppState, action: &Action) -> bool {
    match action {
        Action::None | Action::Render => true,
        Action::DeleteBookmark(id) => !state.bookmarks.collection.contains(id),
        Action::FilterFunctionsLoaded { database, .. }
        | Action::FilterFunctionsFailed { database, .. } => {
            state.advanced.local_source() != Some(database.as_str())
        }
        _ => false,
    }
}

fn reduce_inner(state: &mut AppState, action: Action, now: Instant) -> Vec<Effect> {
    if let Some(effects) = reduce_bookmarks(state, &action, now) {
        return effects;
    }
    if let Some(effects) = reduce_databases(state, &action, now) {
        return effects;
    }
    if let Some(effects) = reduce_replication(state, &action, now) {
        return effects;
    }
    if let Some(effects) = reduce_advanced(state, &action, now) {
        return effects;
    }
    if let Some(effects) = reduce_activity(state, &action, now) {
        return effects;
    }
    if let Some(effects) = reduce_navigation(state, &action, now) {
        return effects;
    }

    match action {
        Action::Render => {
            state.clear_expired_messages(now);
            vec![Effect::Render]
        }
        _ => vec![],
    }
}
