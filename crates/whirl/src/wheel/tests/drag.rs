use std::time::Instant;

use super::super::selection::{FLING_MAX_DURATION_MS, SNAP_DURATION_MS, SpinKind};
use super::*;

#[test]
fn drag_tracks_rotation_live() {
    // Drag from angle 10 to angle 100 with start rotation 0: the wheel
    // follows to 90 while the pointer is down.
    let mut wheel = wheel_abcd();
    let t0 = Instant::now();

    wheel.begin_drag(10.0, t0);
    assert_eq!(wheel.phase(), Phase::Dragging);
    wheel.drag_to(100.0, at(t0, 9000));
    assert_eq!(wheel.rotation(), 90.0);
}

#[test]
fn gentle_release_snaps_to_the_nearest_slice() {
    let mut wheel = wheel_abcd();
    let mut fx = CountingFx::new();
    let t0 = Instant::now();

    wheel.begin_drag(10.0, t0);
    // 90 degrees over 9 seconds: 0.01 deg/ms, below the fling threshold.
    wheel.drag_to(100.0, at(t0, 9000));
    wheel.end_drag();

    assert_eq!(wheel.phase(), Phase::Animating);
    let session = wheel.session.as_ref().unwrap();
    assert_eq!(session.kind, SpinKind::Snap);
    assert_eq!(session.target_index, 2);
    assert_eq!(session.tween.duration_ms(), SNAP_DURATION_MS);
    // Nearest slice to the pointer at rotation 90 is slice 2; its next
    // aligned rotation ahead of 90 is 135.
    assert_eq!(session.tween.end_value(), 135.0);

    let t1 = at(t0, 9001);
    run_to_completion(&mut wheel, t1, 400, &mut fx);
    assert_eq!(wheel.phase(), Phase::Settled);
    assert_eq!(wheel.rotation(), 135.0);
    assert_eq!(wheel.selected_label(), Some("c"));
    assert_eq!(fx.fired, 1);
}

#[test]
fn fast_release_flings_forward() {
    let mut wheel = wheel_abcd();
    let t0 = Instant::now();

    wheel.begin_drag(0.0, t0);
    // 90 degrees in 100 ms: 0.9 deg/ms, clamped to the 0.6 ceiling.
    wheel.drag_to(90.0, at(t0, 100));
    wheel.end_drag();

    assert_eq!(wheel.phase(), Phase::Animating);
    let session = wheel.session.as_ref().unwrap();
    assert_eq!(session.kind, SpinKind::Fling);
    assert_eq!(session.target_index, 2);
    // Clamped speed pegs the duration and turn count at their maxima.
    assert_eq!(session.tween.duration_ms(), FLING_MAX_DURATION_MS);
    assert_eq!(session.tween.end_value(), 1575.0);
}

#[test]
fn backward_fling_still_spins_forward() {
    let mut wheel = wheel_abcd();
    let t0 = Instant::now();

    wheel.begin_drag(0.0, t0);
    wheel.drag_to(-90.0, at(t0, 100));
    let released_at = wheel.rotation();
    wheel.end_drag();

    assert_eq!(wheel.phase(), Phase::Animating);
    let session = wheel.session.as_ref().unwrap();
    assert_eq!(session.kind, SpinKind::Fling);
    assert!(session.tween.end_value() > released_at);
}

#[test]
fn velocity_uses_the_latest_sample_pair() {
    let mut wheel = wheel_abcd();
    let t0 = Instant::now();

    wheel.begin_drag(0.0, t0);
    // A fast sweep followed by a near stop: the stale fast sample must not
    // turn this release into a fling.
    wheel.drag_to(80.0, at(t0, 100));
    wheel.drag_to(81.0, at(t0, 2100));
    wheel.end_drag();

    let session = wheel.session.as_ref().unwrap();
    assert_eq!(session.kind, SpinKind::Snap);
}

#[test]
fn drag_is_ignored_while_animating() {
    let mut wheel = wheel_abcd();
    let mut fx = CountingFx::new();
    let t0 = Instant::now();

    wheel.spin_with(1, 4000.0);
    wheel.tick(t0, &mut fx);
    wheel.begin_drag(45.0, at(t0, 10));

    assert_eq!(wheel.phase(), Phase::Animating);
    assert!(wheel.drag.is_none());
}

#[test]
fn drag_moves_are_ignored_outside_a_drag() {
    let mut wheel = wheel_abcd();
    let t0 = Instant::now();
    wheel.drag_to(50.0, t0);
    assert_eq!(wheel.rotation(), 0.0);
    wheel.end_drag();
    assert_eq!(wheel.phase(), Phase::Idle);
}

#[test]
fn ticks_never_write_the_rotation_during_a_drag() {
    let mut wheel = wheel_abcd();
    let mut fx = CountingFx::new();
    let t0 = Instant::now();

    wheel.begin_drag(0.0, t0);
    wheel.drag_to(30.0, at(t0, 50));
    wheel.tick(at(t0, 60), &mut fx);

    assert_eq!(wheel.rotation(), 30.0);
    assert_eq!(wheel.phase(), Phase::Dragging);
    assert_eq!(fx.fired, 0);
}

#[test]
fn release_on_an_emptied_wheel_goes_idle() {
    let mut wheel = wheel_with(2);
    let t0 = Instant::now();

    wheel.begin_drag(0.0, t0);
    wheel.drag_to(20.0, at(t0, 2000));
    wheel.remove_item("item-0");
    wheel.remove_item("item-1");
    wheel.end_drag();

    assert_eq!(wheel.phase(), Phase::Idle);
    assert_eq!(wheel.selected_label(), None);
}
