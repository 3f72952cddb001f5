use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_dirs;

use super::{SettingsError, SettingsStore};

/// Filename of the settings file inside the application directory.
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

const TEMP_NAME_ATTEMPTS: usize = 5;

/// Resolve the settings file path, creating the application directory.
pub fn settings_path() -> Result<PathBuf, SettingsError> {
    Ok(app_dirs::app_root_dir()?.join(SETTINGS_FILE_NAME))
}

/// Load settings from the application directory, returning defaults if the
/// file does not exist yet.
pub fn load_or_default() -> Result<SettingsStore, SettingsError> {
    load_from(&settings_path()?)
}

/// Load settings from `path`; a missing file yields defaults.
pub fn load_from(path: &Path) -> Result<SettingsStore, SettingsError> {
    if !path.exists() {
        return Ok(SettingsStore::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| SettingsError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Persist settings to the application directory.
pub fn save(settings: &SettingsStore) -> Result<(), SettingsError> {
    save_to_path(settings, &settings_path()?)
}

/// Save settings to `path`, creating parent directories as needed.
///
/// The file is written to a sibling temp file first and renamed into place so
/// a crash never leaves a truncated settings file behind.
pub fn save_to_path(settings: &SettingsStore, path: &Path) -> Result<(), SettingsError> {
    let dir = path.parent().ok_or_else(|| SettingsError::Write {
        path: path.to_path_buf(),
        source: std::io::Error::other("settings path has no parent directory"),
    })?;
    std::fs::create_dir_all(dir).map_err(|source| SettingsError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let data = toml::to_string_pretty(settings).map_err(|source| SettingsError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    atomic_write(dir, path, data.as_bytes())
}

fn atomic_write(dir: &Path, path: &Path, data: &[u8]) -> Result<(), SettingsError> {
    let write_err = |path: &Path, source: std::io::Error| SettingsError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| write_err(path, std::io::Error::other("settings path has no file name")))?
        .to_string_lossy()
        .into_owned();

    let mut last_err = None;
    for _ in 0..TEMP_NAME_ATTEMPTS {
        let tmp_path = dir.join(format!("{file_name}.tmp-{}", temp_suffix()?));
        let mut file = match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&tmp_path)
        {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
                last_err = Some(err);
                continue;
            }
            Err(err) => return Err(write_err(&tmp_path, err)),
        };
        let written = file.write_all(data).and_then(|()| file.sync_all());
        drop(file);
        if let Err(err) = written.and_then(|()| replace_file(&tmp_path, path)) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(write_err(path, err));
        }
        return Ok(());
    }

    Err(write_err(
        path,
        last_err.unwrap_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "no free temporary file name",
            )
        }),
    ))
}

fn temp_suffix() -> Result<String, SettingsError> {
    use rand::TryRngCore;
    let mut bytes = [0u8; 6];
    rand::rngs::OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|err| SettingsError::Write {
            path: PathBuf::new(),
            source: std::io::Error::other(format!(
                "failed to generate temporary file suffix: {err}"
            )),
        })?;
    Ok(bytes.iter().map(|b| format!("{b:02x}")).collect())
}

fn replace_file(temp_path: &Path, path: &Path) -> Result<(), std::io::Error> {
    match std::fs::rename(temp_path, path) {
        Ok(()) => Ok(()),
        #[cfg(target_os = "windows")]
        Err(err)
            if err.kind() == std::io::ErrorKind::AlreadyExists
                || err.kind() == std::io::ErrorKind::PermissionDenied =>
        {
            if let Err(inner) = std::fs::remove_file(path) {
                if inner.kind() != std::io::ErrorKind::NotFound {
                    return Err(inner);
                }
            }
            std::fs::rename(temp_path, path)
        }
        Err(err) => Err(err),
    }
}
