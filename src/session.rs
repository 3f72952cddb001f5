//! Recording session: accumulates timer ticks into a running total and
//! archives finished takes.

use std::{sync::mpsc::Receiver, time::Duration};

use crate::time_format::format_duration;
use crate::timer::{Clock, SystemClock, Tick, Timer};

/// A finished recording span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Take {
    /// 1-based position in completion order.
    pub number: usize,
    pub elapsed: Duration,
}

impl Take {
    /// Formatted elapsed time of the take.
    pub fn display(&self) -> String {
        format_duration(self.elapsed)
    }
}

/// Drives one [`Timer`] and keeps the total it has reported.
pub struct Session<C: Clock = SystemClock> {
    timer: Timer<C>,
    ticks: Receiver<Tick>,
    total: Duration,
    takes: Vec<Take>,
}

impl Session<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Session<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Session<C> {
    pub fn with_clock(clock: C) -> Self {
        let mut timer = Timer::with_clock(clock);
        let ticks = timer.tick_channel();
        Self {
            timer,
            ticks,
            total: Duration::ZERO,
            takes: Vec::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Start or resume accumulating.
    pub fn start(&mut self) {
        self.timer.start();
    }

    /// Pause; the running total is kept.
    pub fn stop(&mut self) {
        self.timer.stop();
        self.drain();
    }

    pub fn toggle(&mut self) {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Poll the timer and fold any received ticks into the total.
    ///
    /// Returns true when the total changed.
    pub fn pump(&mut self) -> bool {
        self.timer.poll();
        self.drain()
    }

    fn drain(&mut self) -> bool {
        let before = self.total;
        for tick in self.ticks.try_iter() {
            self.total += tick.elapsed;
        }
        self.total != before
    }

    /// Total reported by the timer for the current take.
    pub fn elapsed(&self) -> Duration {
        self.total
    }

    /// Current total as `HH:MM:SS.mmm`.
    pub fn elapsed_display(&self) -> String {
        format_duration(self.total)
    }

    /// Stop the timer and archive the current total as a take.
    ///
    /// An empty total is discarded and yields `None`.
    pub fn finish_take(&mut self) -> Option<Take> {
        self.stop();
        let elapsed = std::mem::take(&mut self.total);
        if elapsed.is_zero() {
            return None;
        }
        let take = Take {
            number: self.takes.len() + 1,
            elapsed,
        };
        tracing::info!("Finished take {} ({})", take.number, take.display());
        self.takes.push(take);
        Some(take)
    }

    pub fn takes(&self) -> &[Take] {
        &self.takes
    }

    pub fn clear_takes(&mut self) {
        self.takes.clear();
    }

    pub fn time_until_next_tick(&self) -> Option<Duration> {
        self.timer.time_until_next_tick()
    }
}
