//! Local database list sub-reducer.

use std::time::Instant;

use crate::action::Action;
use crate::database_list::LoadStatus;
use crate::effect::Effect;
use crate::state::AppState;

pub fn reduce_databases(
    state: &mut AppState,
    action: &Action,
    now: Instant,
) -> Option<Vec<Effect>> {
    match action {
        Action::LoadLocalDatabases => {
            state.databases.status = LoadStatus::Loading;
            Some(vec![Effect::FetchLocalDatabases])
        }
        Action::LocalDatabasesLoaded(names) => {
            state.databases.names = names.clone();
            state.databases.status = LoadStatus::Loaded;
            Some(vec![])
        }
        Action::LocalDatabasesFailed(error) => {
            state.databases.status = LoadStatus::Failed;
            state.messages.set_error_at(
                format!("An error occurred fetching the local database names: {}", error),
                now,
            );
            Some(vec![])
        }
        _ => None,
    }
}
