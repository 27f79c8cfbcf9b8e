use std::fmt;
use std::str::FromStr;

/// Whether an endpoint names a database on this server or a full remote URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EndpointType {
    #[default]
    Local,
    Remote,
}

impl EndpointType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndpointType::Local => "LOCAL",
            EndpointType::Remote => "REMOTE",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            EndpointType::Local => EndpointType::Remote,
            EndpointType::Remote => EndpointType::Local,
        }
    }
}

impl fmt::Display for EndpointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EndpointType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "LOCAL" => Ok(EndpointType::Local),
            "REMOTE" => Ok(EndpointType::Remote),
            _ => Err(format!("unknown endpoint type: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplicationSide {
    Source,
    Target,
}

impl ReplicationSide {
    pub fn label(&self) -> &'static str {
        match self {
            ReplicationSide::Source => "source",
            ReplicationSide::Target => "target",
        }
    }
}
