use async_trait::async_trait;

use crate::domain::{ActiveTask, AllDocsResponse, ReplicationRequest};

/// The CouchDB endpoints the replicator screens talk to.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CouchApi: Send + Sync {
    /// `GET /_all_dbs`
    async fn list_databases(&self) -> Result<Vec<String>, CouchApiError>;

    /// Design documents of `database`, bodies included.
    async fn fetch_design_documents(
        &self,
        database: &str,
    ) -> Result<AllDocsResponse, CouchApiError>;

    /// `POST /_replicator`
    async fn start_replication(&self, request: &ReplicationRequest) -> Result<(), CouchApiError>;

    /// `GET /_active_tasks`
    async fn active_tasks(&self) -> Result<Vec<ActiveTask>, CouchApiError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CouchApiError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    /// Non-success status; `reason` comes from the response body when present.
    #[error("{reason}")]
    Server { status: u16, reason: String },
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_displays_reason_only() {
        let err = CouchApiError::Server {
            status: 401,
            reason: "Name or password is incorrect.".to_string(),
        };

        assert_eq!(err.to_string(), "Name or password is incorrect.");
    }
}
