//! Drift-corrected elapsed-time ticker.
//!
//! A [`Timer`] reports, every [`TICK_PERIOD`], how much wall-clock time has
//! passed since its previous report. Each delta is measured against the
//! clock rather than assumed from the period, so a late poll produces a
//! larger delta instead of losing time.
//!
//! The timer is driven cooperatively: the owning event loop calls
//! [`Timer::poll`] and may sleep for [`Timer::time_until_next_tick`] in
//! between.

mod clock;
mod listeners;
mod schedule;
#[cfg(test)]
mod tests;

use std::{
    sync::mpsc::Receiver,
    time::{Duration, Instant},
};

pub use clock::{Clock, ManualClock, SystemClock};
pub use listeners::TickSubscription;

use listeners::TickListeners;
use schedule::Interval;

/// Fixed cadence of the periodic tick.
pub const TICK_PERIOD: Duration = Duration::from_millis(50);

/// One periodic notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    /// Wall-clock time since the previous tick, or since `start` for the first one.
    pub elapsed: Duration,
}

impl Tick {
    /// Elapsed time truncated to whole milliseconds, saturating at `u64::MAX`.
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX)
    }
}

#[derive(Clone, Copy, Debug)]
enum TimerState {
    Stopped,
    Running {
        last_sample: Instant,
        interval: Interval,
    },
}

/// Start/stop elapsed-time tracker emitting [`Tick`]s to its listeners.
pub struct Timer<C: Clock = SystemClock> {
    clock: C,
    state: TimerState,
    listeners: TickListeners,
}

impl Timer<SystemClock> {
    /// Create a stopped timer reading the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Timer<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Timer<C> {
    /// Create a stopped timer reading `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            state: TimerState::Stopped,
            listeners: TickListeners::default(),
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    /// Begin ticking. Calling this while running has no effect.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        let now = self.clock.now();
        self.state = TimerState::Running {
            last_sample: now,
            interval: Interval::starting_at(now, TICK_PERIOD),
        };
        tracing::debug!("Timer started");
    }

    /// Stop ticking and forget the last sample. Calling this while stopped
    /// has no effect.
    pub fn stop(&mut self) {
        if !self.is_running() {
            return;
        }
        self.state = TimerState::Stopped;
        tracing::debug!("Timer stopped");
    }

    pub fn toggle(&mut self) {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Run the periodic action if its deadline has passed.
    ///
    /// Emits at most one tick per call; a poll that arrives several periods
    /// late yields a single tick covering the whole gap.
    pub fn poll(&mut self) -> Option<Tick> {
        let TimerState::Running {
            last_sample,
            interval,
        } = &mut self.state
        else {
            return None;
        };
        let now = self.clock.now();
        if !interval.is_due(now) {
            return None;
        }
        let tick = Tick {
            elapsed: now.saturating_duration_since(*last_sample),
        };
        *last_sample = now;
        interval.advance(now);
        self.listeners.emit(tick);
        Some(tick)
    }

    /// How long the owner may wait before the next [`Timer::poll`] is due.
    /// `None` while stopped.
    pub fn time_until_next_tick(&self) -> Option<Duration> {
        match &self.state {
            TimerState::Stopped => None,
            TimerState::Running { interval, .. } => Some(interval.remaining(self.clock.now())),
        }
    }

    /// Register `callback` for every future tick.
    pub fn on_tick<F>(&mut self, callback: F) -> TickSubscription
    where
        F: FnMut(Tick) + 'static,
    {
        self.listeners.subscribe(Box::new(callback))
    }

    /// Register a channel listener; it detaches once the receiver is dropped.
    pub fn tick_channel(&mut self) -> Receiver<Tick> {
        self.listeners.channel()
    }

    /// Number of attached listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
