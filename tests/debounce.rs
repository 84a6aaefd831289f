use std::time::{Duration, Instant};

use window_translator::debounce::DebounceGate;

#[test]
fn triggers_inside_cooldown_collapse() {
    let mut gate = DebounceGate::new(Duration::from_secs(1));
    let t0 = Instant::now();

    assert!(gate.should_proceed(t0));
    assert!(!gate.should_proceed(t0 + Duration::from_millis(200)));
    assert!(!gate.should_proceed(t0 + Duration::from_millis(999)));
}

#[test]
fn triggers_past_cooldown_run_independently() {
    let mut gate = DebounceGate::new(Duration::from_secs(1));
    let t0 = Instant::now();

    assert!(gate.should_proceed(t0));
    assert!(gate.should_proceed(t0 + Duration::from_secs(1)));
    assert!(gate.should_proceed(t0 + Duration::from_secs(2)));
}

#[test]
fn rejected_triggers_do_not_extend_the_cooldown() {
    let mut gate = DebounceGate::new(Duration::from_secs(1));
    let t0 = Instant::now();

    assert!(gate.should_proceed(t0));
    // A burst of rejected repeats must not push the window forward.
    assert!(!gate.should_proceed(t0 + Duration::from_millis(900)));
    assert!(!gate.should_proceed(t0 + Duration::from_millis(950)));
    assert!(gate.should_proceed(t0 + Duration::from_millis(1000)));
}

#[test]
fn first_trigger_always_passes() {
    let mut gate = DebounceGate::new(Duration::from_secs(1));
    assert!(gate.should_proceed(Instant::now()));
}
