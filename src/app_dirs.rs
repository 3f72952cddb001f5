//! Where rectime keeps its files.
//!
//! Everything lives in a `.rectime` folder under the OS config root, or under
//! `RECTIME_CONFIG_HOME` when that variable is set to a non-empty path.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use thiserror::Error;

/// Name of the application directory that lives under the config root.
pub const APP_DIR_NAME: &str = ".rectime";
/// Environment variable overriding the config root.
pub const CONFIG_HOME_ENV: &str = "RECTIME_CONFIG_HOME";

const LOGS_DIR_NAME: &str = "logs";

/// Errors raised while resolving or creating application directories.
#[derive(Debug, Error)]
pub enum AppDirError {
    /// Neither the override nor the OS reported a config root.
    #[error("No config directory available for application files")]
    NoBaseDir,
    /// Creating a directory failed.
    #[error("Failed to create application directory at {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Return the `.rectime` directory, creating it if needed.
pub fn app_root_dir() -> Result<PathBuf, AppDirError> {
    let base = config_root().ok_or(AppDirError::NoBaseDir)?;
    create_child(&base, APP_DIR_NAME)
}

/// Return the `logs` directory inside the `.rectime` root, creating it if needed.
pub fn logs_dir() -> Result<PathBuf, AppDirError> {
    create_child(&app_root_dir()?, LOGS_DIR_NAME)
}

fn config_root() -> Option<PathBuf> {
    std::env::var_os(CONFIG_HOME_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf()))
}

fn create_child(parent: &Path, name: &str) -> Result<PathBuf, AppDirError> {
    let path = parent.join(name);
    std::fs::create_dir_all(&path).map_err(|source| AppDirError::CreateDir {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
