//! Converts raw pointer angles into a live rotation and a velocity estimate.

use std::time::Instant;

/// Live state of a pointer drag on the wheel face.
///
/// Velocity is the instantaneous estimate from the last two samples, in
/// degrees per millisecond; no smoothing is applied.
#[derive(Debug, Clone)]
pub struct DragTracker {
    start_angle: f64,
    start_rotation: f64,
    last_angle: f64,
    last_at: Instant,
    velocity: f64,
}

impl DragTracker {
    /// Begin tracking at pointer-down.
    pub fn begin(angle: f64, rotation: f64, now: Instant) -> Self {
        Self {
            start_angle: angle,
            start_rotation: rotation,
            last_angle: angle,
            last_at: now,
            velocity: 0.0,
        }
    }

    /// Fold in a pointer-move sample; returns the new live rotation.
    pub fn update(&mut self, angle: f64, now: Instant) -> f64 {
        let dt_ms = now.saturating_duration_since(self.last_at).as_secs_f64() * 1000.0;
        if dt_ms > 0.0 {
            self.velocity = (angle - self.last_angle) / dt_ms;
        }
        self.last_angle = angle;
        self.last_at = now;
        self.start_rotation + (angle - self.start_angle)
    }

    /// Latest velocity estimate, deg/ms. Zero until two samples exist.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }
}
