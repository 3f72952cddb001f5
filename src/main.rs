#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the Rectime recorder window.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use rectime::logging;
use rectime::settings::{self, SettingsStore};
use rectime::ui::{MIN_VIEWPORT_SIZE, RecorderApp};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let settings = load_settings();
    let title = settings.window_title();
    let viewport = egui::ViewportBuilder::default()
        .with_title(title.clone())
        .with_inner_size(MIN_VIEWPORT_SIZE)
        .with_min_inner_size(MIN_VIEWPORT_SIZE);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        native_options,
        Box::new(move |_cc| Ok(Box::new(RecorderApp::new(settings)))),
    )?;
    Ok(())
}

/// Load persisted settings, falling back to defaults when they are unreadable.
fn load_settings() -> SettingsStore {
    match settings::load_or_default() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!("Using default settings: {err}");
            SettingsStore::default()
        }
    }
}
