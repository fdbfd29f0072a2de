//! Frame-sampled tween driving the rotation scalar toward a fixed target.

use std::time::Instant;

/// Cubic ease-out: fast start, decelerating into the target.
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// A single animation from one rotation value to another.
///
/// The tween holds no timer of its own: the app samples it once per frame and
/// the session state machine watches for completion, so dropping the tween is
/// a complete cancellation. The first sample pins the start time; a tween
/// constructed ahead of its first frame loses none of its duration.
#[derive(Debug, Clone)]
pub struct Tween {
    start_value: f64,
    end_value: f64,
    duration_ms: f64,
    started_at: Option<Instant>,
}

impl Tween {
    pub fn new(start_value: f64, end_value: f64, duration_ms: f64) -> Self {
        Self {
            start_value,
            end_value,
            duration_ms,
            started_at: None,
        }
    }

    /// Eased value for this frame. Pins the start timestamp on first call.
    pub fn sample(&mut self, now: Instant) -> f64 {
        let started = *self.started_at.get_or_insert(now);
        let elapsed_ms = now.saturating_duration_since(started).as_secs_f64() * 1000.0;
        let t = if self.duration_ms <= 0.0 {
            1.0
        } else {
            (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        };
        self.start_value + (self.end_value - self.start_value) * ease_out_cubic(t)
    }

    /// Whether the tween has run its full duration. Never true before the
    /// first sample.
    pub fn is_complete(&self, now: Instant) -> bool {
        match self.started_at {
            Some(started) => {
                now.saturating_duration_since(started).as_secs_f64() * 1000.0 >= self.duration_ms
            }
            None => false,
        }
    }

    pub fn end_value(&self) -> f64 {
        self.end_value
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }
}
