use glam::Vec2;
use multiwin_core::*;

#[test]
fn snap_without_easing() {
    let mut tracker = OffsetTracker::new();
    tracker.retarget(120.0, 80.0, false);
    assert_eq!(tracker.current(), tracker.target());
    assert_eq!(tracker.current(), Vec2::new(-120.0, -80.0));
}

#[test]
fn eased_retarget_leaves_current_in_place() {
    let mut tracker = OffsetTracker::new();
    tracker.retarget(120.0, 80.0, true);
    assert_eq!(tracker.current(), Vec2::ZERO);
    assert_eq!(tracker.target(), Vec2::new(-120.0, -80.0));
}

#[test]
fn eased_retarget_converges_monotonically() {
    let mut tracker = OffsetTracker::new();
    tracker.retarget(300.0, -200.0, true);
    let target = tracker.target();
    let mut prev_err = (target - tracker.current()).abs();
    for _ in 0..400 {
        tracker.tick();
        let err = (target - tracker.current()).abs();
        assert!(
            err.x <= prev_err.x && err.y <= prev_err.y,
            "per-axis error must never grow: {err:?} after {prev_err:?}"
        );
        prev_err = err;
    }
    assert!(prev_err.x < 1e-3 && prev_err.y < 1e-3);
}

#[test]
fn convergence_rate_is_geometric() {
    let mut tracker = OffsetTracker::new();
    tracker.retarget(100.0, 0.0, true);
    let initial = (tracker.target() - tracker.current()).x.abs();
    for _ in 0..10 {
        tracker.tick();
    }
    let expected = initial * (1.0 - OFFSET_FALLOFF).powi(10);
    let actual = (tracker.target() - tracker.current()).x.abs();
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected geometric decay to {expected}, got {actual}"
    );
}

#[test]
fn never_overshoots_a_constant_target() {
    let mut tracker = OffsetTracker::new();
    tracker.retarget(-50.0, 75.0, true);
    let target = tracker.target();
    for _ in 0..1000 {
        let before = tracker.current();
        tracker.tick();
        let after = tracker.current();
        // The sign of the remaining gap must never flip.
        assert!((target.x - before.x) * (target.x - after.x) >= 0.0);
        assert!((target.y - before.y) * (target.y - after.y) >= 0.0);
    }
}
