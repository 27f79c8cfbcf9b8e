use super::endpoint::EndpointType;

/// Options that describe how documents are read from the source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceOptions {
    pub proxy_url: String,
    pub starting_sequence: String,
    /// `<ddoc>/<filter>` as listed by filter discovery
    pub filter_function: String,
    /// Raw JSON text; validated when the request is built.
    pub query_parameters: String,
    pub use_checkpoints: bool,
    pub checkpoint_interval: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TargetOptions {
    pub continuous: bool,
    pub create_target: bool,
    pub document_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReplicationSource {
    pub endpoint_type: EndpointType,
    /// Local database name, or a full URL for remote endpoints.
    pub database: String,
    pub password: String,
    pub options: SourceOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReplicationTarget {
    pub endpoint_type: EndpointType,
    pub database: String,
    pub password: String,
    pub options: TargetOptions,
}

/// Everything the forms collect before a request is assembled.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReplicationJob {
    pub source: ReplicationSource,
    pub target: ReplicationTarget,
}

impl ReplicationJob {
    pub fn is_complete(&self) -> bool {
        !self.source.database.trim().is_empty() && !self.target.database.trim().is_empty()
    }
}
