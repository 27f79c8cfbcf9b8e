use crate::database_list::LoadStatus;
use crate::domain::{ActiveTask, replication_tasks};

#[derive(Debug, Clone, Default)]
pub struct ActivityState {
    pub tasks: Vec<ActiveTask>,
    pub status: LoadStatus,
    pub selected: usize,
}

impl ActivityState {
    pub fn replications(&self) -> Vec<&ActiveTask> {
        replication_tasks(&self.tasks)
    }

    pub fn select_next(&mut self) {
        let len = self.replications().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}
