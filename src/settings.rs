//! User settings with default-value fallback, persisted as TOML.
//!
//! Values are stored untyped; each known [`SettingId`] carries its default and
//! the typed accessors on [`SettingsStore`] fall back to it whenever the
//! stored value has a different shape.

mod errors;
mod io;
mod store;

pub use errors::SettingsError;
pub use io::{SETTINGS_FILE_NAME, load_from, load_or_default, save, save_to_path, settings_path};
pub use store::{SettingId, SettingsStore};
