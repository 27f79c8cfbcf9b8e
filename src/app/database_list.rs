#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Names returned by `GET /_all_dbs`, shared by both replicator forms.
#[derive(Debug, Clone, Default)]
pub struct DatabaseListState {
    pub names: Vec<String>,
    pub status: LoadStatus,
}

impl DatabaseListState {
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Neighbour of `current` in the list, wrapping around. An unknown or
    /// empty `current` starts from the first (or last) entry.
    pub fn cycle(&self, current: &str, forward: bool) -> Option<&str> {
        if self.names.is_empty() {
            return None;
        }
        let len = self.names.len();
        let next = match self.names.iter().position(|n| n == current) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None if forward => 0,
            None => len - 1,
        };
        self.names.get(next).map(String::as_str)
    }
}
