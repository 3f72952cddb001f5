//! egui front-end showing the running clock and finished takes.

use eframe::egui::{self, Color32, RichText};

use crate::session::Session;
use crate::settings::{self, SettingsStore};
use crate::timer::{Clock, SystemClock};

/// Smallest window that still fits the clock and the buttons.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(360.0, 220.0);

const CLOCK_FONT_SIZE: f32 = 42.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StatusTone {
    Idle,
    Busy,
    Info,
    Warning,
}

impl StatusTone {
    fn color(self) -> Color32 {
        match self {
            StatusTone::Idle => Color32::GRAY,
            StatusTone::Busy => Color32::from_rgb(220, 70, 60),
            StatusTone::Info => Color32::from_rgb(90, 170, 230),
            StatusTone::Warning => Color32::from_rgb(230, 180, 60),
        }
    }
}

/// Renders a [`Session`] and forwards button presses to it.
pub struct RecorderApp<C: Clock = SystemClock> {
    session: Session<C>,
    settings: SettingsStore,
    status: (String, StatusTone),
    visuals_set: bool,
}

impl RecorderApp<SystemClock> {
    /// Create the app with already loaded settings.
    pub fn new(settings: SettingsStore) -> Self {
        Self::with_session(Session::new(), settings)
    }
}

impl<C: Clock> RecorderApp<C> {
    /// Create the app around an existing session, starting it when
    /// `AutostartTimer` is set.
    pub fn with_session(mut session: Session<C>, settings: SettingsStore) -> Self {
        let status = if settings.autostart_timer() {
            session.start();
            ("Recording".to_string(), StatusTone::Busy)
        } else {
            ("Ready".to_string(), StatusTone::Idle)
        };
        Self {
            session,
            settings,
            status,
            visuals_set: false,
        }
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.status = (text.into(), tone);
    }

    fn toggle_recording(&mut self) {
        self.session.toggle();
        if self.session.is_running() {
            self.set_status("Recording", StatusTone::Busy);
        } else {
            self.set_status(
                format!("Paused at {}", self.session.elapsed_display()),
                StatusTone::Idle,
            );
        }
    }

    fn finish_take(&mut self) {
        match self.session.finish_take() {
            Some(take) => self.set_status(
                format!("Take {} finished: {}", take.number, take.display()),
                StatusTone::Info,
            ),
            None => self.set_status("Nothing recorded yet", StatusTone::Warning),
        }
    }

    fn toggle_take_list(&mut self) {
        let show = !self.settings.show_take_list();
        self.settings.set(settings::SettingId::ShowTakeList, show);
        if let Err(err) = settings::save(&self.settings) {
            tracing::warn!("Failed to save settings: {err}");
            self.set_status(format!("Settings not saved: {err}"), StatusTone::Warning);
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = Color32::from_rgb(16, 16, 16);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    /// Space toggles recording, Enter finishes the take.
    ///
    /// Keys are consumed so a focused button does not also treat them as a click.
    fn handle_hotkeys(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let (space, enter) = ctx.input_mut(|i| {
            (
                i.consume_key(egui::Modifiers::NONE, egui::Key::Space),
                i.consume_key(egui::Modifiers::NONE, egui::Key::Enter),
            )
        });
        if space {
            self.toggle_recording();
        }
        if enter {
            self.finish_take();
        }
    }

    fn render_status(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let (text, tone) = &self.status;
            ui.label(RichText::new(text).color(tone.color()));
        });
    }

    fn render_clock(&mut self, ui: &mut egui::Ui) {
        let clock_color = if self.session.is_running() {
            StatusTone::Busy.color()
        } else {
            Color32::WHITE
        };
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(self.session.elapsed_display())
                    .monospace()
                    .size(CLOCK_FONT_SIZE)
                    .color(clock_color),
            );
        });
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let label = if self.session.is_running() {
                "Pause"
            } else {
                "Record"
            };
            if ui.button(label).clicked() {
                self.toggle_recording();
            }
            if ui.button("Finish take").clicked() {
                self.finish_take();
            }
            let list_label = if self.settings.show_take_list() {
                "Hide takes"
            } else {
                "Show takes"
            };
            if ui.button(list_label).clicked() {
                self.toggle_take_list();
            }
        });
    }

    fn render_takes(&mut self, ui: &mut egui::Ui) {
        if !self.settings.show_take_list() {
            return;
        }
        ui.separator();
        if self.session.takes().is_empty() {
            ui.label(RichText::new("No takes yet").italics());
            return;
        }
        egui::ScrollArea::vertical().show(ui, |ui| {
            for take in self.session.takes().iter().rev() {
                ui.label(
                    RichText::new(format!("Take {:>3}  {}", take.number, take.display()))
                        .monospace(),
                );
            }
        });
        if ui.small_button("Clear").clicked() {
            self.session.clear_takes();
        }
    }

    /// Run one frame: hotkeys, tick pump, then the panels.
    fn show(&mut self, ctx: &egui::Context) {
        self.apply_visuals(ctx);
        self.handle_hotkeys(ctx);
        self.session.pump();

        self.render_status(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_clock(ui);
            self.render_takes(ui);
        });

        if let Some(wait) = self.session.time_until_next_tick() {
            ctx.request_repaint_after(wait);
        }
    }
}

impl<C: Clock> eframe::App for RecorderApp<C> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SettingId;
    use crate::timer::ManualClock;

    fn manual_app(settings: SettingsStore) -> (RecorderApp<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let app = RecorderApp::with_session(Session::with_clock(clock.clone()), settings);
        (app, clock)
    }

    fn key_press(key: egui::Key) -> egui::RawInput {
        egui::RawInput {
            events: vec![egui::Event::Key {
                key,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::default(),
            }],
            ..Default::default()
        }
    }

    fn frame(ctx: &egui::Context, app: &mut RecorderApp<ManualClock>, input: egui::RawInput) {
        let _ = ctx.run(input, |ctx| app.show(ctx));
    }

    #[test]
    fn autostart_setting_starts_recording() {
        let mut settings = SettingsStore::default();
        settings.set(SettingId::AutostartTimer, true);
        let (app, _clock) = manual_app(settings);
        assert!(app.session.is_running());
        assert_eq!(app.status, ("Recording".to_string(), StatusTone::Busy));
    }

    #[test]
    fn default_settings_leave_timer_stopped() {
        let (app, _clock) = manual_app(SettingsStore::default());
        assert!(!app.session.is_running());
        assert_eq!(app.status, ("Ready".to_string(), StatusTone::Idle));
    }

    #[test]
    fn finishing_empty_take_warns() {
        let (mut app, _clock) = manual_app(SettingsStore::default());
        app.finish_take();
        assert_eq!(
            app.status,
            ("Nothing recorded yet".to_string(), StatusTone::Warning)
        );
        assert!(app.session.takes().is_empty());
    }

    #[test]
    fn finishing_take_reports_number_and_time() {
        let ctx = egui::Context::default();
        let (mut app, clock) = manual_app(SettingsStore::default());
        app.toggle_recording();
        clock.advance_ms(1_500);
        frame(&ctx, &mut app, egui::RawInput::default());

        app.finish_take();
        assert_eq!(
            app.status,
            ("Take 1 finished: 00:00:01.500".to_string(), StatusTone::Info)
        );
        assert!(!app.session.is_running());
        assert_eq!(app.session.takes().len(), 1);
    }

    #[test]
    fn pausing_shows_elapsed_time() {
        let ctx = egui::Context::default();
        let (mut app, clock) = manual_app(SettingsStore::default());
        app.toggle_recording();
        clock.advance_ms(100);
        frame(&ctx, &mut app, egui::RawInput::default());
        app.toggle_recording();
        assert_eq!(
            app.status,
            ("Paused at 00:00:00.100".to_string(), StatusTone::Idle)
        );
    }

    #[test]
    fn hotkeys_act_once_while_button_has_focus() {
        let ctx = egui::Context::default();
        let (mut app, clock) = manual_app(SettingsStore::default());
        frame(&ctx, &mut app, egui::RawInput::default());
        frame(&ctx, &mut app, key_press(egui::Key::Tab));
        assert!(ctx.memory(|m| m.focused().is_some()), "Tab should focus Record");

        frame(&ctx, &mut app, key_press(egui::Key::Space));
        assert!(app.session.is_running(), "one Space press should start recording");

        clock.advance_ms(120);
        frame(&ctx, &mut app, egui::RawInput::default());
        frame(&ctx, &mut app, key_press(egui::Key::Enter));
        assert!(!app.session.is_running(), "Enter should not restart recording");
        assert_eq!(
            app.status,
            ("Take 1 finished: 00:00:00.120".to_string(), StatusTone::Info)
        );
    }
}
