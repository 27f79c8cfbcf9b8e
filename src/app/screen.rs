use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Replication,
    Advanced,
    Bookmarks,
    Activity,
}

impl Screen {
    pub fn next(self) -> Self {
        match self {
            Self::Replication => Self::Advanced,
            Self::Advanced => Self::Bookmarks,
            Self::Bookmarks => Self::Activity,
            Self::Activity => Self::Replication,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Replication => Self::Activity,
            Self::Advanced => Self::Replication,
            Self::Bookmarks => Self::Advanced,
            Self::Activity => Self::Bookmarks,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Replication => "Replicator",
            Self::Advanced => "Advanced",
            Self::Bookmarks => "Bookmarks",
            Self::Activity => "Activity",
        }
    }

    pub fn all() -> &'static [Self] {
        &[
            Self::Replication,
            Self::Advanced,
            Self::Bookmarks,
            Self::Activity,
        ]
    }

    pub fn index(self) -> usize {
        Self::all().iter().position(|s| *s == self).unwrap_or(0)
    }
}

impl FromStr for Screen {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "replication" | "replicator" => Ok(Self::Replication),
            "advanced" => Ok(Self::Advanced),
            "bookmarks" => Ok(Self::Bookmarks),
            "activity" => Ok(Self::Activity),
            other => Err(format!(
                "unknown screen '{other}' (expected replication, advanced, bookmarks or activity)"
            )),
        }
    }
}
