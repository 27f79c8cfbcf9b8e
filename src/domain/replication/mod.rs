mod endpoint;
mod job;
mod request;

pub use endpoint::{EndpointType, ReplicationSide};
pub use job::{ReplicationJob, ReplicationSource, ReplicationTarget, SourceOptions, TargetOptions};
pub use request::{
    EndpointHeaders, EndpointSpec, ReplicationRequest, RequestBuildError, UserContext, build_replication_request,
    database_label,
};
