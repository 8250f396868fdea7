use std::time::{Duration, Instant};

use super::*;

fn engine(work: u32, brk: u32) -> TimerEngine {
    TimerEngine::new(PhaseConfig {
        work_minutes: work,
        break_minutes: brk,
    })
}

#[test]
fn new_engine_is_idle_at_full_work_duration() {
    let e = engine(25, 5);
    assert_eq!(e.phase(), Phase::Work);
    assert_eq!(e.remaining_secs(), 1500);
    assert!(!e.is_running());
}

#[test]
fn phase_labels() {
    assert_eq!(Phase::Work.label(), "Work Time");
    assert_eq!(Phase::Break.label(), "Break Time");
    assert_eq!(Phase::Work.other(), Phase::Break);
    assert_eq!(Phase::Break.other(), Phase::Work);
}

#[test]
fn setting_work_minutes_while_idle_in_work_resets_remaining() {
    for w in [1u32, 7, 25, 90] {
        let mut e = engine(25, 5);
        assert!(e.set_work_minutes(w));
        assert_eq!(e.remaining_secs(), w * 60);
    }
}

#[test]
fn setting_break_minutes_during_work_leaves_remaining_alone() {
    let mut e = engine(25, 5);
    e.start();
    e.tick();
    e.pause();
    assert!(e.set_break_minutes(10));
    assert_eq!(e.remaining_secs(), 1499);
    assert_eq!(e.config().break_minutes, 10);
}

#[test]
fn durations_are_locked_while_running() {
    let mut e = engine(25, 5);
    e.start();
    assert!(!e.set_work_minutes(10));
    assert!(!e.set_break_minutes(10));
    assert_eq!(e.config(), PhaseConfig::default());
    assert_eq!(e.remaining_secs(), 1500);
}

#[test]
fn start_then_pause_keeps_remaining() {
    let mut e = engine(25, 5);
    e.start();
    e.pause();
    assert_eq!(e.remaining_secs(), 1500);
    assert!(!e.is_running());
}

#[test]
fn start_is_idempotent_and_toggle_flips_running() {
    let mut e = engine(25, 5);
    e.start();
    e.start();
    assert!(e.is_running());
    e.toggle();
    assert!(!e.is_running());
    e.toggle();
    assert!(e.is_running());
}

#[test]
fn idle_engine_ignores_ticks() {
    let mut e = engine(25, 5);
    assert_eq!(e.tick(), None);
    assert_eq!(e.remaining_secs(), 1500);
}

#[test]
fn last_second_flips_to_idle_break() {
    let mut e = engine(1, 5);
    e.start();
    for _ in 0..59 {
        assert_eq!(e.tick(), None);
    }
    assert_eq!(e.remaining_secs(), 1);

    let change = e.tick();
    assert_eq!(
        change,
        Some(PhaseChange {
            from: Phase::Work,
            to: Phase::Break
        })
    );
    assert_eq!(e.phase(), Phase::Break);
    assert_eq!(e.remaining_secs(), 300);
    assert!(!e.is_running());
}

#[test]
fn zero_minute_phase_flips_on_first_tick() {
    let mut e = engine(25, 5);
    assert!(e.set_work_minutes(0));
    assert_eq!(e.remaining_secs(), 0);
    e.start();
    assert!(e.tick().is_some());
    assert_eq!(e.phase(), Phase::Break);
    assert_eq!(e.remaining_secs(), 300);
}

#[test]
fn reset_returns_to_idle_work_from_any_state() {
    let mut running_break = engine(1, 2);
    running_break.start();
    for _ in 0..60 {
        running_break.tick();
    }
    running_break.start();
    running_break.tick();
    assert_eq!(running_break.phase(), Phase::Break);
    assert!(running_break.is_running());

    let mut paused_work = engine(1, 2);
    paused_work.start();
    paused_work.tick();
    paused_work.pause();

    for mut e in [running_break, paused_work, engine(1, 2)] {
        e.reset();
        assert_eq!(e.phase(), Phase::Work);
        assert_eq!(e.remaining_secs(), 60);
        assert!(!e.is_running());
    }
}

#[test]
fn full_work_session_ends_in_idle_break() {
    let mut e = engine(25, 5);
    e.start();
    for _ in 0..1500 {
        e.tick();
    }
    assert_eq!(e.phase(), Phase::Break);
    assert_eq!(e.remaining_secs(), 300);
    assert!(!e.is_running());
}

#[test]
fn break_runs_back_into_work() {
    let mut e = engine(2, 1);
    e.start();
    for _ in 0..120 {
        e.tick();
    }
    e.start();
    for _ in 0..60 {
        e.tick();
    }
    assert_eq!(e.phase(), Phase::Work);
    assert_eq!(e.remaining_secs(), 120);
    assert!(!e.is_running());
}

#[test]
fn ticker_fires_once_per_period() {
    let t0 = Instant::now();
    let mut t = Ticker::default();
    assert!(!t.poll(t0 + Duration::from_secs(5)));

    t.arm(t0);
    assert!(!t.poll(t0 + Duration::from_millis(999)));
    assert!(t.poll(t0 + Duration::from_secs(1)));
    assert!(!t.poll(t0 + Duration::from_millis(1500)));
    assert_eq!(
        t.time_until_due(t0 + Duration::from_millis(1500)),
        Some(Duration::from_millis(500))
    );
}

#[test]
fn late_ticker_catches_up_one_tick_per_poll() {
    let t0 = Instant::now();
    let mut t = Ticker::default();
    t.arm(t0);

    let late = t0 + Duration::from_millis(3500);
    let mut fired = 0;
    while t.poll(late) {
        fired += 1;
    }
    assert_eq!(fired, 3);
}

#[test]
fn cancelled_ticker_never_fires() {
    let t0 = Instant::now();
    let mut t = Ticker::default();
    t.arm(t0);
    t.cancel();
    assert!(!t.is_armed());
    assert!(!t.poll(t0 + Duration::from_secs(10)));
    assert_eq!(t.time_until_due(t0), None);
}
