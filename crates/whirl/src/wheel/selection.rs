//! The three selection policies.
//!
//! Each policy picks a target slice and produces a [`SpinPlan`] for the
//! animation driver. Randomness stays behind the two `random_*` helpers so the
//! engine itself is deterministic under test.

use rand::Rng;

use super::geometry;

/// Full forward turns added by a button-triggered spin.
pub const SPIN_EXTRA_TURNS: u32 = 5;
/// Base duration of a button-triggered spin, milliseconds.
pub const SPIN_BASE_DURATION_MS: f64 = 4000.0;
/// Random jitter added on top of the base duration, milliseconds.
pub const SPIN_JITTER_MS: f64 = 1000.0;
/// Duration of the short corrective snap after a gentle drag release.
pub const SNAP_DURATION_MS: f64 = 400.0;
/// Release speed (deg/ms) below which a drag release snaps instead of flinging.
pub const FLING_THRESHOLD: f64 = 0.02;
/// Release speed ceiling (deg/ms); faster flicks are clamped.
pub const FLING_MAX_SPEED: f64 = 0.6;
pub const FLING_MIN_DURATION_MS: f64 = 900.0;
pub const FLING_MAX_DURATION_MS: f64 = 2200.0;
pub const FLING_MIN_TURNS: f64 = 2.0;
pub const FLING_MAX_TURNS: f64 = 5.0;

/// Which policy produced a plan. Stop-and-settle only applies to `Random`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinKind {
    Random,
    Snap,
    Fling,
}

/// Target and trajectory for one animated spin.
#[derive(Debug, Clone)]
pub struct SpinPlan {
    pub kind: SpinKind,
    pub target_index: usize,
    pub end_rotation: f64,
    pub duration_ms: f64,
}

/// Uniform random slice pick. `None` for an empty wheel.
pub fn pick_random_index(count: usize) -> Option<usize> {
    if count == 0 {
        None
    } else {
        Some(rand::rng().random_range(0..count))
    }
}

/// Randomised spin duration: base plus uniform jitter.
pub fn random_spin_duration_ms() -> f64 {
    SPIN_BASE_DURATION_MS + rand::rng().random_range(0.0..SPIN_JITTER_MS)
}

/// Policy 1: button/keyboard spin toward an already-picked random index,
/// always five full turns ahead.
pub fn plan_random_spin(
    target_index: usize,
    count: usize,
    rotation: f64,
    duration_ms: f64,
) -> SpinPlan {
    SpinPlan {
        kind: SpinKind::Random,
        target_index,
        end_rotation: geometry::solve_rotation_for_target(
            target_index,
            count,
            rotation,
            SPIN_EXTRA_TURNS,
        ),
        duration_ms,
    }
}

/// Policy 2: gentle release. Ease forward to the nearest aligned position
/// rather than spinning.
pub fn plan_snap(rotation: f64, count: usize) -> Option<SpinPlan> {
    let target_index = geometry::nearest_slice(rotation, count)?;
    Some(SpinPlan {
        kind: SpinKind::Snap,
        target_index,
        end_rotation: geometry::snap_rotation_forward(target_index, count, rotation),
        duration_ms: SNAP_DURATION_MS,
    })
}

/// Policy 3: inertial fling. Falls back to the snap below the speed threshold.
///
/// Duration and extra turns scale linearly with release speed; turns are
/// rounded to whole turns so the wheel still lands exactly on a slice center.
/// Direction is always forward, whichever way the flick went.
pub fn plan_fling(rotation: f64, count: usize, velocity: f64) -> Option<SpinPlan> {
    let speed = velocity.abs().min(FLING_MAX_SPEED);
    if speed < FLING_THRESHOLD {
        return plan_snap(rotation, count);
    }
    let target_index = geometry::nearest_slice(rotation, count)?;
    let ratio = speed / FLING_MAX_SPEED;
    let duration_ms =
        FLING_MIN_DURATION_MS + (FLING_MAX_DURATION_MS - FLING_MIN_DURATION_MS) * ratio;
    let extra_turns = (FLING_MIN_TURNS + (FLING_MAX_TURNS - FLING_MIN_TURNS) * ratio).round() as u32;
    Some(SpinPlan {
        kind: SpinKind::Fling,
        target_index,
        end_rotation: geometry::solve_rotation_for_target(target_index, count, rotation, extra_turns),
        duration_ms,
    })
}
