mod support;

use rectime::app_dirs::APP_DIR_NAME;
use rectime::settings::{self, SETTINGS_FILE_NAME, SettingId, SettingsStore};
use support::rectime_env::RectimeEnvGuard;

#[test]
fn fresh_config_home_yields_defaults() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let _env = RectimeEnvGuard::set_config_home(temp.path().to_path_buf());

    let store = settings::load_or_default().expect("load settings");

    assert_eq!(store, SettingsStore::default());
    assert!(!store.autostart_timer());
    assert_eq!(store.window_title(), "Rectime");
}

#[test]
fn saved_settings_land_in_app_dir_and_reload() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let _env = RectimeEnvGuard::set_config_home(temp.path().to_path_buf());

    let mut store = SettingsStore::default();
    store.set(SettingId::AutostartTimer, true);
    store.set(SettingId::ShowTakeList, false);
    settings::save(&store).expect("save settings");

    let expected_path = temp.path().join(APP_DIR_NAME).join(SETTINGS_FILE_NAME);
    assert_eq!(settings::settings_path().expect("settings path"), expected_path);
    assert!(expected_path.is_file());

    let reloaded = settings::load_or_default().expect("reload settings");
    assert!(reloaded.autostart_timer());
    assert!(!reloaded.show_take_list());
    assert!(reloaded.is_default(SettingId::WindowTitle));
}
