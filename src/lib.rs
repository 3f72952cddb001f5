//! Elapsed-time tracking and duration display for a recording front-end.
/// Application directory resolution.
pub mod app_dirs;
/// Tracing subscriber setup.
pub mod logging;
/// Running total and take list driven by a timer.
pub mod session;
/// Persisted user settings.
pub mod settings;
/// `HH:MM:SS.mmm` formatting.
pub mod time_format;
/// Drift-corrected periodic ticker.
pub mod timer;
/// egui recorder window.
pub mod ui;

pub use session::{Session, Take};
pub use time_format::{format_duration, format_time};
pub use timer::{Clock, ManualClock, SystemClock, TICK_PERIOD, Tick, TickSubscription, Timer};
