use super::*;
use std::{cell::RefCell, rc::Rc};

fn manual_timer() -> (Timer<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    (Timer::with_clock(clock.clone()), clock)
}

fn recorded(timer: &mut Timer<ManualClock>) -> Rc<RefCell<Vec<u64>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let _ = timer.on_tick(move |tick| sink.borrow_mut().push(tick.elapsed_ms()));
    seen
}

#[test]
fn starts_stopped() {
    let (mut timer, clock) = manual_timer();
    assert!(!timer.is_running());
    clock.advance_ms(500);
    assert_eq!(timer.poll(), None);
    assert_eq!(timer.time_until_next_tick(), None);
}

#[test]
fn start_is_idempotent() {
    let (mut timer, clock) = manual_timer();
    let seen = recorded(&mut timer);
    timer.start();
    clock.advance_ms(30);
    timer.start();
    assert!(timer.is_running());
    clock.advance_ms(20);
    timer.poll();
    // The second start must not have reset the sample or the schedule.
    assert_eq!(*seen.borrow(), vec![50]);
}

#[test]
fn stop_when_stopped_is_noop() {
    let (mut timer, _clock) = manual_timer();
    timer.stop();
    assert!(!timer.is_running());
    timer.start();
    timer.stop();
    timer.stop();
    assert!(!timer.is_running());
}

#[test]
fn toggle_alternates_state() {
    let (mut timer, _clock) = manual_timer();
    timer.toggle();
    assert!(timer.is_running());
    timer.toggle();
    assert!(!timer.is_running());
}

#[test]
fn no_tick_before_period_elapses() {
    let (mut timer, clock) = manual_timer();
    timer.start();
    clock.advance_ms(49);
    assert_eq!(timer.poll(), None);
    assert_eq!(timer.time_until_next_tick(), Some(Duration::from_millis(1)));
}

#[test]
fn tick_reports_real_elapsed_time_when_late() {
    let (mut timer, clock) = manual_timer();
    let seen = recorded(&mut timer);
    timer.start();
    clock.advance_ms(50);
    timer.poll();
    clock.advance_ms(137);
    timer.poll();
    clock.advance_ms(13);
    timer.poll();
    assert_eq!(*seen.borrow(), vec![50, 137, 13]);
}

#[test]
fn sum_of_deltas_matches_wall_clock_under_jitter() {
    let (mut timer, clock) = manual_timer();
    let seen = recorded(&mut timer);
    timer.start();
    let mut wall = 0;
    for step in [50, 61, 50, 204, 50, 75, 52, 3000, 50] {
        clock.advance_ms(step);
        wall += step;
        timer.poll();
    }
    timer.stop();
    assert_eq!(seen.borrow().iter().sum::<u64>(), wall);
}

#[test]
fn no_ticks_after_stop() {
    let (mut timer, clock) = manual_timer();
    let seen = recorded(&mut timer);
    timer.start();
    clock.advance_ms(50);
    timer.poll();
    timer.stop();
    for _ in 0..20 {
        clock.advance_ms(100);
        assert_eq!(timer.poll(), None);
    }
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn restart_measures_from_new_start() {
    let (mut timer, clock) = manual_timer();
    let seen = recorded(&mut timer);
    timer.start();
    clock.advance_ms(70);
    timer.stop();
    clock.advance_ms(10_000);
    timer.start();
    clock.advance_ms(50);
    timer.poll();
    assert_eq!(*seen.borrow(), vec![50]);
}

#[test]
fn unsubscribed_listener_stops_receiving() {
    let (mut timer, clock) = manual_timer();
    let hits = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&hits);
    let subscription = timer.on_tick(move |_| *counter.borrow_mut() += 1);
    timer.start();
    clock.advance_ms(50);
    timer.poll();
    subscription.unsubscribe();
    clock.advance_ms(50);
    assert!(timer.poll().is_some());
    assert_eq!(*hits.borrow(), 1);
    assert_eq!(timer.listener_count(), 0);
}

#[test]
fn channel_listener_receives_ticks() {
    let (mut timer, clock) = manual_timer();
    let rx = timer.tick_channel();
    timer.start();
    clock.advance_ms(55);
    timer.poll();
    let ticks: Vec<u64> = rx.try_iter().map(|tick| tick.elapsed_ms()).collect();
    assert_eq!(ticks, vec![55]);
}

#[test]
fn elapsed_ms_truncates_and_saturates() {
    let tick = Tick {
        elapsed: Duration::from_micros(1_999),
    };
    assert_eq!(tick.elapsed_ms(), 1);
    let huge = Tick {
        elapsed: Duration::MAX,
    };
    assert_eq!(huge.elapsed_ms(), u64::MAX);
}
