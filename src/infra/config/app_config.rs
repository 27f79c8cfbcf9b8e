//! `config.toml` loading with environment overrides.
//!
//! Precedence, lowest first: built-in defaults, the file, `COUCHREP_*`
//! variables, then CLI flags applied by the binary.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{DEFAULT_PAGE_SIZE, OriginError, ServerOrigin, Session};

use super::paths::config_dir;

const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5984";

pub const ENV_URL: &str = "COUCHREP_URL";
pub const ENV_USER: &str = "COUCHREP_USER";
pub const ENV_PASSWORD: &str = "COUCHREP_PASSWORD";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine the {0} directory")]
    NoConfigDir(&'static str),
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid server url: {0}")]
    InvalidUrl(#[from] OriginError),
    #[error("bookmark page size must be greater than 0, got {0}")]
    InvalidPageSize(usize),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub bookmarks: BookmarkConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub url: String,
    pub user: Option<String>,
    pub password: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SERVER_URL.to_string(),
            user: None,
            password: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BookmarkConfig {
    pub page_size: usize,
}

impl Default for BookmarkConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Empty variables are ignored.
    pub fn apply_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if let Some(url) = get(ENV_URL) {
            self.server.url = url;
        }
        if let Some(user) = get(ENV_USER) {
            self.server.user = Some(user);
        }
        if let Some(password) = get(ENV_PASSWORD) {
            self.server.password = Some(password);
        }
    }

    pub fn origin(&self) -> Result<ServerOrigin, ConfigError> {
        Ok(ServerOrigin::parse(&self.server.url)?)
    }

    pub fn session(&self) -> Session {
        Session::new(self.server.user.clone(), self.server.password.clone())
    }

    pub fn page_size(&self) -> Result<usize, ConfigError> {
        match self.bookmarks.page_size {
            0 => Err(ConfigError::InvalidPageSize(0)),
            size => Ok(size),
        }
    }
}
