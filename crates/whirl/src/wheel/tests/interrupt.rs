use std::time::Instant;

use super::super::RotationWriter;
use super::super::selection::SpinKind;
use super::*;

#[test]
fn stop_settles_on_the_predetermined_pick() {
    // At rotation 0 the slice nearest the pointer is 0; stopping early must
    // still honor the random pick of slice 2.
    let mut wheel = wheel_abcd();
    let mut fx = CountingFx::new();
    let t0 = Instant::now();

    wheel.spin_with(2, 4000.0);
    wheel.tick(t0, &mut fx);
    wheel.stop(&mut fx);

    assert_eq!(wheel.phase(), Phase::Settled);
    assert_eq!(wheel.selected_label(), Some("c"));
    assert_eq!(fx.fired, 1);
}

#[test]
fn stop_freezes_the_rotation_mid_flight() {
    let mut wheel = wheel_abcd();
    let mut fx = CountingFx::new();
    let t0 = Instant::now();

    wheel.spin_with(2, 4000.0);
    wheel.tick(t0, &mut fx);
    wheel.tick(at(t0, 2000), &mut fx);
    let frozen = wheel.rotation();
    assert!(frozen > 0.0 && frozen < 1575.0);

    wheel.stop(&mut fx);
    assert_eq!(wheel.rotation(), frozen);
    assert_eq!(wheel.selected_label(), Some("c"));

    // The dead session's completion must not re-settle or re-fire.
    wheel.tick(at(t0, 5000), &mut fx);
    assert_eq!(wheel.rotation(), frozen);
    assert_eq!(fx.fired, 1);
}

#[test]
fn stop_before_the_first_frame_is_safe() {
    let mut wheel = wheel_abcd();
    let mut fx = CountingFx::new();

    wheel.spin_with(3, 4000.0);
    wheel.stop(&mut fx);

    assert_eq!(wheel.phase(), Phase::Settled);
    assert_eq!(wheel.rotation(), 0.0);
    assert_eq!(wheel.selected_label(), Some("d"));
    assert_eq!(fx.fired, 1);
}

#[test]
fn stop_outside_animating_is_a_noop() {
    let mut wheel = wheel_abcd();
    let mut fx = CountingFx::new();
    let t0 = Instant::now();

    wheel.stop(&mut fx);
    assert_eq!(wheel.phase(), Phase::Idle);
    assert_eq!(fx.fired, 0);

    wheel.spin_with(1, 4000.0);
    run_to_completion(&mut wheel, t0, 4000, &mut fx);
    wheel.stop(&mut fx);
    assert_eq!(wheel.phase(), Phase::Settled);
    assert_eq!(fx.fired, 1);
}

#[test]
fn stop_does_not_interrupt_a_snap() {
    let mut wheel = wheel_abcd();
    let mut fx = CountingFx::new();
    let t0 = Instant::now();

    wheel.begin_drag(10.0, t0);
    wheel.drag_to(100.0, at(t0, 9000));
    wheel.end_drag();
    assert_eq!(wheel.session.as_ref().unwrap().kind, SpinKind::Snap);

    wheel.stop(&mut fx);
    assert_eq!(wheel.phase(), Phase::Animating);
    assert_eq!(fx.fired, 0);

    let t1 = at(t0, 9001);
    run_to_completion(&mut wheel, t1, 400, &mut fx);
    assert_eq!(wheel.phase(), Phase::Settled);
    assert_eq!(fx.fired, 1);
}

#[test]
fn stale_frames_cannot_write_after_cancellation() {
    let mut wheel = wheel_abcd();
    let mut fx = CountingFx::new();
    let t0 = Instant::now();

    wheel.spin_with(2, 4000.0);
    let old_generation = wheel.session.as_ref().unwrap().generation;
    wheel.tick(t0, &mut fx);
    wheel.stop(&mut fx);
    let frozen = wheel.rotation();

    // A frame queued before the stop arrives late.
    assert!(!wheel.apply_frame(old_generation, at(t0, 100)));
    assert_eq!(wheel.rotation(), frozen);

    // A fresh animation owns a new generation; the stale one stays dead.
    wheel.begin_drag(0.0, at(t0, 200));
    wheel.drag_to(40.0, at(t0, 2200));
    wheel.end_drag();
    let new_generation = wheel.session.as_ref().unwrap().generation;
    assert_ne!(new_generation, old_generation);
    assert!(!wheel.apply_frame(old_generation, at(t0, 2300)));
    assert!(wheel.apply_frame(new_generation, at(t0, 2300)));
}

#[test]
fn exactly_one_writer_at_any_instant() {
    let mut wheel = wheel_abcd();
    let mut fx = CountingFx::new();
    let t0 = Instant::now();

    assert_eq!(wheel.writer, RotationWriter::None);

    wheel.begin_drag(0.0, t0);
    assert_eq!(wheel.writer, RotationWriter::Drag);

    wheel.drag_to(30.0, at(t0, 2000));
    wheel.end_drag();
    assert!(matches!(wheel.writer, RotationWriter::Animation(_)));
    assert!(wheel.drag.is_none());

    run_to_completion(&mut wheel, at(t0, 2001), 400, &mut fx);
    assert_eq!(wheel.writer, RotationWriter::None);
    assert!(wheel.session.is_none());
}
