//! Activity monitor sub-reducer.

use std::time::Instant;

use crate::action::Action;
use crate::database_list::LoadStatus;
use crate::effect::Effect;
use crate::state::AppState;

pub fn reduce_activity(
    state: &mut AppState,
    action: &Action,
    now: Instant,
) -> Option<Vec<Effect>> {
    match action {
        Action::LoadActiveTasks => {
            state.activity.status = LoadStatus::Loading;
            Some(vec![Effect::FetchActiveTasks])
        }
        Action::ActiveTasksLoaded(tasks) => {
            state.activity.tasks = tasks.clone();
            state.activity.status = LoadStatus::Loaded;
            let len = state.activity.replications().len();
            state.activity.selected = state.activity.selected.min(len.saturating_sub(1));
            Some(vec![])
        }
        Action::ActiveTasksFailed(error) => {
            state.activity.status = LoadStatus::Failed;
            state
                .messages
                .set_error_at(format!("Failed to load active tasks: {}", error), now);
            Some(vec![])
        }
        Action::SelectNextTask => {
            state.activity.select_next();
            Some(vec![])
        }
        Action::SelectPrevTask => {
            state.activity.select_prev();
            Some(vec![])
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ActiveTask;

    fn replication(id: &str) -> ActiveTask {
        ActiveTask {
            task_type: "replication".to_string(),
            replication_id: id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn loaded_tasks_clamp_selection() {
        let mut state = AppState::default();
        state.activity.selected = 5;

        reduce_activity(
            &mut state,
            &Action::ActiveTasksLoaded(vec![replication("a"), replication("b")]),
            Instant::now(),
        );

        assert_eq!(state.activity.selected, 1);
        assert_eq!(state.activity.status, LoadStatus::Loaded);
    }

    #[test]
    fn selection_ignores_non_replication_tasks() {
        let mut state = AppState::default();
        let indexer = ActiveTask {
            task_type: "indexer".to_string(),
            ..Default::default()
        };
        reduce_activity(
            &mut state,
            &Action::ActiveTasksLoaded(vec![replication("a"), indexer]),
            Instant::now(),
        );

        reduce_activity(&mut state, &Action::SelectNextTask, Instant::now());

        assert_eq!(state.activity.selected, 0);
    }

    #[test]
    fn load_requests_fetch() {
        let mut state = AppState::default();
        let effects = reduce_activity(&mut state, &Action::LoadActiveTasks, Instant::now());
        assert_eq!(effects, Some(vec![Effect::FetchActiveTasks]));
    }
}
