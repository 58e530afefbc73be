use std::time::{Duration, Instant};

use lookout_core::reload::ReloadGuard;

const DELAY: Duration = Duration::from_secs(4);

#[test]
fn test_fires_once_after_delay() {
    let mut guard = ReloadGuard::new(true, DELAY);
    let t0 = Instant::now();

    guard.connection_lost(t0);
    assert!(guard.is_pending());
    assert!(!guard.take_reload(t0));
    assert!(!guard.take_reload(t0 + Duration::from_secs(3)));
    assert!(guard.take_reload(t0 + DELAY));

    // Fired and disarmed.
    assert!(!guard.is_pending());
    assert!(!guard.take_reload(t0 + Duration::from_secs(60)));
}

#[test]
fn test_repeated_losses_do_not_extend_the_deadline() {
    let mut guard = ReloadGuard::new(true, DELAY);
    let t0 = Instant::now();

    guard.connection_lost(t0);
    guard.connection_lost(t0 + Duration::from_secs(3));
    assert!(guard.take_reload(t0 + DELAY));
}

#[test]
fn test_restore_disarms() {
    let mut guard = ReloadGuard::new(true, DELAY);
    let t0 = Instant::now();

    guard.connection_lost(t0);
    guard.connection_restored();
    assert!(!guard.is_pending());
    assert!(!guard.take_reload(t0 + DELAY));
}

#[test]
fn test_disabled_guard_never_arms() {
    let mut guard = ReloadGuard::new(false, DELAY);
    let t0 = Instant::now();

    guard.connection_lost(t0);
    assert!(!guard.is_pending());
    assert!(!guard.take_reload(t0 + DELAY));
}

#[test]
fn test_disabling_cancels_pending_reload() {
    let mut guard = ReloadGuard::new(true, DELAY);
    let t0 = Instant::now();

    guard.connection_lost(t0);
    guard.set_enabled(false);
    assert!(!guard.is_pending());
    assert!(!guard.take_reload(t0 + DELAY));

    // Re-enabling does not resurrect the old deadline.
    guard.set_enabled(true);
    assert!(!guard.take_reload(t0 + DELAY + DELAY));
}

#[test]
fn test_can_arm_again_after_firing() {
    let mut guard = ReloadGuard::new(true, DELAY);
    let t0 = Instant::now();

    guard.connection_lost(t0);
    assert!(guard.take_reload(t0 + DELAY));

    let t1 = t0 + Duration::from_secs(30);
    guard.connection_lost(t1);
    assert!(guard.is_pending());
    assert!(guard.take_reload(t1 + DELAY));
}

#[test]
fn test_remaining_secs_rounds_up() {
    let mut guard = ReloadGuard::new(true, DELAY);
    let t0 = Instant::now();

    assert!(guard.remaining_secs(t0).is_none());

    guard.connection_lost(t0);
    assert_eq!(guard.remaining_secs(t0), Some(4));
    assert_eq!(guard.remaining_secs(t0 + Duration::from_millis(1500)), Some(3));
    assert_eq!(guard.remaining_secs(t0 + Duration::from_secs(10)), Some(0));
}
