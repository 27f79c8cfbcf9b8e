pub mod app_config;
pub mod paths;

pub use app_config::{AppConfig, BookmarkConfig, ConfigError, ServerConfig};
