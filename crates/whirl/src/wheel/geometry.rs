//! Pure slice/angle math for the wheel face.
//!
//! The winning pointer sits at 3 o'clock, which is 0 degrees in the wheel's
//! local frame. Slice `i` spans `[i*slice, (i+1)*slice)` before rotation, so
//! its center lands on screen at `i*slice + slice/2 + rotation`.

/// Angular width of one slice, in degrees. Zero for an empty wheel.
pub fn slice_angle(count: usize) -> f64 {
    if count == 0 { 0.0 } else { 360.0 / count as f64 }
}

/// Screen angle of slice `index`'s center under the given rotation, unwrapped.
pub fn slice_center_angle(index: usize, slice: f64, rotation: f64) -> f64 {
    index as f64 * slice + slice / 2.0 + rotation
}

/// Normalise an angle into [0, 360).
pub fn wrap_degrees(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Angular distance from `deg` to the pointer at 0 degrees, in [0, 180].
fn pointer_distance(deg: f64) -> f64 {
    let wrapped = wrap_degrees(deg);
    wrapped.min(360.0 - wrapped)
}

/// The slice whose center lies closest to the pointer. Ties resolve to the
/// lowest index. `None` for an empty wheel.
pub fn nearest_slice(rotation: f64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let slice = slice_angle(count);
    let mut best = 0;
    let mut best_delta = f64::INFINITY;
    for index in 0..count {
        let delta = pointer_distance(slice_center_angle(index, slice, rotation));
        if delta < best_delta {
            best_delta = delta;
            best = index;
        }
    }
    Some(best)
}

/// Absolute rotation that puts slice `index`'s center under the pointer after
/// advancing `extra_turns` full turns past the turn count implied by
/// `rotation`. Motion toward the result is always forward.
pub fn solve_rotation_for_target(
    index: usize,
    count: usize,
    rotation: f64,
    extra_turns: u32,
) -> f64 {
    let slice = slice_angle(count);
    let target_turns = (rotation / 360.0).floor() + f64::from(extra_turns);
    360.0 * target_turns - index as f64 * slice - slice / 2.0
}

/// The first aligned rotation for slice `index` at or ahead of `rotation`.
/// Used by the drag-release snap, which corrects rather than spins.
pub fn snap_rotation_forward(index: usize, count: usize, rotation: f64) -> f64 {
    let slice = slice_angle(count);
    let center = index as f64 * slice + slice / 2.0;
    let target_turns = ((rotation + center) / 360.0).ceil();
    360.0 * target_turns - center
}

/// Pointer angle relative to the wheel center, in degrees (atan2 convention,
/// range (-180, 180]).
pub fn drag_angle_deg(dx: f64, dy: f64) -> f64 {
    dy.atan2(dx).to_degrees()
}
