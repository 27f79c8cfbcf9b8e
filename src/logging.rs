//! File logging. Stdout belongs to the TUI, so records go to
//! `<cache dir>/couchrep/couchrep.log`.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::eyre::{Result, eyre};
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "COUCHREP_LOG";
pub const LOG_FILE_NAME: &str = "couchrep.log";
const DEFAULT_DIRECTIVE: &str = "info";

/// Installs the global subscriber and returns the log file path.
pub fn init(dir: &Path) -> Result<PathBuf> {
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(|key| std::env::var(key).ok()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| eyre!("failed to install log subscriber: {e}"))?;

    Ok(path)
}

/// `COUCHREP_LOG`, then `RUST_LOG`, then `info`. An unparsable directive
/// falls back to the default instead of aborting startup.
fn env_filter(lookup: impl Fn(&str) -> Option<String>) -> EnvFilter {
    let directive = filter_directive(lookup);
    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

fn filter_directive(lookup: impl Fn(&str) -> Option<String>) -> String {
    [LOG_ENV, "RUST_LOG"]
        .into_iter()
        .filter_map(|key| lookup(key))
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string())
}
