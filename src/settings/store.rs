use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use toml::Value;

/// Settings known to the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SettingId {
    /// Start the timer as soon as the window opens.
    AutostartTimer,
    /// Title of the recorder window.
    WindowTitle,
    /// Show the list of finished takes under the clock.
    ShowTakeList,
}

impl SettingId {
    pub const ALL: [SettingId; 3] = [
        SettingId::AutostartTimer,
        SettingId::WindowTitle,
        SettingId::ShowTakeList,
    ];

    /// Key used in the settings file.
    pub fn key(self) -> &'static str {
        match self {
            SettingId::AutostartTimer => "autostart_timer",
            SettingId::WindowTitle => "window_title",
            SettingId::ShowTakeList => "show_take_list",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }

    pub fn default_value(self) -> Value {
        match self {
            SettingId::AutostartTimer => Value::Boolean(false),
            SettingId::WindowTitle => Value::String("Rectime".to_string()),
            SettingId::ShowTakeList => Value::Boolean(true),
        }
    }
}

/// User overrides keyed by [`SettingId::key`].
///
/// Keys the application does not know are kept so a newer settings file
/// survives a round trip through an older build.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsStore {
    user: BTreeMap<String, Value>,
}

impl SettingsStore {
    /// User value if set, otherwise the default.
    pub fn get(&self, id: SettingId) -> Value {
        self.user
            .get(id.key())
            .cloned()
            .unwrap_or_else(|| id.default_value())
    }

    pub fn set(&mut self, id: SettingId, value: impl Into<Value>) {
        self.user.insert(id.key().to_string(), value.into());
    }

    /// Drop the user value so the default applies again.
    pub fn reset(&mut self, id: SettingId) {
        self.user.remove(id.key());
    }

    /// True when no user value is set or it equals the default.
    pub fn is_default(&self, id: SettingId) -> bool {
        match self.user.get(id.key()) {
            None => true,
            Some(value) => *value == id.default_value(),
        }
    }

    pub fn autostart_timer(&self) -> bool {
        self.bool_or_default(SettingId::AutostartTimer)
    }

    pub fn window_title(&self) -> String {
        match self.get(SettingId::WindowTitle) {
            Value::String(title) => title,
            other => {
                tracing::warn!("Ignoring non-string window_title setting: {other}");
                default_string(SettingId::WindowTitle)
            }
        }
    }

    pub fn show_take_list(&self) -> bool {
        self.bool_or_default(SettingId::ShowTakeList)
    }

    fn bool_or_default(&self, id: SettingId) -> bool {
        match self.get(id) {
            Value::Boolean(value) => value,
            other => {
                tracing::warn!("Ignoring non-boolean {} setting: {other}", id.key());
                id.default_value().as_bool().unwrap_or_default()
            }
        }
    }
}

fn default_string(id: SettingId) -> String {
    id.default_value().as_str().unwrap_or_default().to_string()
}
