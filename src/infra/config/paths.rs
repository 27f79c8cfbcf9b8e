use std::fs;
use std::path::PathBuf;

use super::app_config::ConfigError;

const APP_DIR: &str = "couchrep";

/// `<config dir>/couchrep`, home of `config.toml` and `storage.json`.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir("config"))?;
    Ok(base.join(APP_DIR))
}

/// `<cache dir>/couchrep`, created on demand. The log file lives here.
pub fn cache_dir() -> Result<PathBuf, ConfigError> {
    let base = dirs::cache_dir().ok_or(ConfigError::NoConfigDir("cache"))?;
    let dir = base.join(APP_DIR);

    if !dir.exists() {
        fs::create_dir_all(&dir).map_err(|source| ConfigError::Io {
            path: dir.clone(),
            source,
        })?;
    }

    Ok(dir)
}
