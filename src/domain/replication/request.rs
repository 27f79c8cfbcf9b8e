//! Assembly of the `POST /_replicator` document body.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use serde_json::{Map, Value};

use super::endpoint::ReplicationSide;
use super::job::ReplicationJob;
use crate::session::{ServerOrigin, Session};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RequestBuildError {
    #[error("the {} database is required", .0.label())]
    MissingDatabase(ReplicationSide),
    #[error("query parameters must be a JSON object: {0}")]
    InvalidQueryParameters(String),
    #[error("checkpoint interval must be a whole number of milliseconds: {0}")]
    InvalidCheckpointInterval(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointHeaders {
    #[serde(rename = "Authorization")]
    pub authorization: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointSpec {
    pub url: String,
    pub headers: EndpointHeaders,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserContext {
    pub name: String,
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplicationRequest {
    pub source: EndpointSpec,
    pub target: EndpointSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_seq: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_params: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_checkpoints: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkpoint_interval: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuous: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_target: Option<bool>,
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_ctx: UserContext,
}

/// Builds the replicator document for `job`.
///
/// Optional keys are emitted only when their field holds non-whitespace text
/// (or the flag is set). The job is never modified.
pub fn build_replication_request(
    job: &ReplicationJob,
    session: &Session,
    origin: &ServerOrigin,
) -> Result<ReplicationRequest, RequestBuildError> {
    let source_db = job.source.database.trim();
    if source_db.is_empty() {
        return Err(RequestBuildError::MissingDatabase(ReplicationSide::Source));
    }
    let target_db = job.target.database.trim();
    if target_db.is_empty() {
        return Err(RequestBuildError::MissingDatabase(ReplicationSide::Target));
    }

    let user = session.user_name();
    let source_opts = &job.source.options;
    let target_opts = &job.target.options;

    let query_params = non_empty(&source_opts.query_parameters)
        .map(parse_query_parameters)
        .transpose()?;

    let checkpoint_interval = if source_opts.use_checkpoints {
        non_empty(&source_opts.checkpoint_interval)
            .map(|raw| {
                raw.parse::<u64>()
                    .map_err(|_| RequestBuildError::InvalidCheckpointInterval(raw.to_string()))
            })
            .transpose()?
    } else {
        None
    };

    Ok(ReplicationRequest {
        source: EndpointSpec {
            url: endpoint_url(source_db, origin),
            headers: basic_auth_headers(user, &job.source.password),
        },
        target: EndpointSpec {
            url: endpoint_url(target_db, origin),
            headers: basic_auth_headers(user, &job.target.password),
        },
        proxy: non_empty(&source_opts.proxy_url).map(str::to_string),
        since_seq: non_empty(&source_opts.starting_sequence).map(str::to_string),
        filter: non_empty(&source_opts.filter_function).map(str::to_string),
        query_params,
        use_checkpoints: source_opts.use_checkpoints.then_some(true),
        checkpoint_interval,
        continuous: target_opts.continuous.then_some(true),
        create_target: target_opts.create_target.then_some(true),
        id: non_empty(&target_opts.document_id).map(str::to_string),
        user_ctx: UserContext {
            name: user.to_string(),
            roles: vec!["_admin".to_string()],
        },
    })
}

/// Last non-empty path segment of a database URL, or the name itself.
pub fn database_label(database: &str) -> &str {
    let trimmed = database.trim().trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn is_absolute_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// A full URL is used verbatim whatever the endpoint type; anything else is a
/// database on the configured server.
fn endpoint_url(database: &str, origin: &ServerOrigin) -> String {
    if is_absolute_url(database) {
        database.to_string()
    } else {
        format!("{}/{}", origin, urlencoding::encode(database))
    }
}

fn basic_auth_headers(user: &str, password: &str) -> EndpointHeaders {
    let token = STANDARD.encode(format!("{user}:{password}"));
    EndpointHeaders {
        authorization: format!("Basic {token}"),
    }
}

fn parse_query_parameters(raw: &str) -> Result<Map<String, Value>, RequestBuildError> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(RequestBuildError::InvalidQueryParameters(
            "expected an object".to_string(),
        )),
        Err(e) => Err(RequestBuildError::InvalidQueryParameters(e.to_string())),
    }
}
