use std::time::{Duration, Instant};

/// Repeating deadline on a fixed period grid.
///
/// When the owner falls behind by several periods the missed deadlines are
/// skipped and the next one lands on the first grid point after `now`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct Interval {
    period: Duration,
    next_due: Instant,
}

impl Interval {
    pub(super) fn starting_at(start: Instant, period: Duration) -> Self {
        Self {
            period,
            next_due: start + period,
        }
    }

    pub(super) fn is_due(&self, now: Instant) -> bool {
        now >= self.next_due
    }

    pub(super) fn advance(&mut self, now: Instant) {
        if now < self.next_due {
            return;
        }
        let period_ns = self.period.as_nanos().max(1);
        let behind_ns = now.duration_since(self.next_due).as_nanos();
        let into_period = Duration::from_nanos((behind_ns % period_ns) as u64);
        self.next_due = now + self.period - into_period;
    }

    pub(super) fn remaining(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(50);

    #[test]
    fn first_deadline_is_one_period_out() {
        let start = Instant::now();
        let interval = Interval::starting_at(start, PERIOD);
        assert!(!interval.is_due(start + Duration::from_millis(49)));
        assert!(interval.is_due(start + PERIOD));
        assert_eq!(interval.remaining(start), PERIOD);
    }

    #[test]
    fn advance_skips_missed_periods() {
        let start = Instant::now();
        let mut interval = Interval::starting_at(start, PERIOD);
        interval.advance(start + Duration::from_millis(180));
        assert_eq!(
            interval.remaining(start + Duration::from_millis(180)),
            Duration::from_millis(20)
        );
    }

    #[test]
    fn advance_on_exact_deadline_moves_one_period() {
        let start = Instant::now();
        let mut interval = Interval::starting_at(start, PERIOD);
        interval.advance(start + PERIOD);
        assert_eq!(interval.remaining(start + PERIOD), PERIOD);
    }
}
