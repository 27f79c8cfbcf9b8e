use serde::Deserialize;

/// One entry of `GET /_active_tasks`. Fields absent for a task type default.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ActiveTask {
    #[serde(rename = "type")]
    pub task_type: String,
    pub source: String,
    pub target: String,
    pub replication_id: String,
    pub continuous: bool,
    pub docs_read: u64,
    pub docs_written: u64,
    pub doc_write_failures: u64,
    pub started_on: u64,
    pub updated_on: u64,
}

impl ActiveTask {
    pub fn is_replication(&self) -> bool {
        self.task_type == "replication"
    }
}

pub fn replication_tasks(tasks: &[ActiveTask]) -> Vec<&ActiveTask> {
    tasks.iter().filter(|task| task.is_replication()).collect()
}
