mod drag;
mod interrupt;

use std::time::{Duration, Instant};

use super::*;
use crate::items::ItemList;

/// Celebration stub counting how many times it fired.
struct CountingFx {
    fired: u32,
}

impl CountingFx {
    fn new() -> Self {
        Self { fired: 0 }
    }
}

impl Celebration for CountingFx {
    fn fire(&mut self) -> anyhow::Result<()> {
        self.fired += 1;
        Ok(())
    }
}

/// Celebration stub that always fails.
struct FailingFx;

impl Celebration for FailingFx {
    fn fire(&mut self) -> anyhow::Result<()> {
        anyhow::bail!("confetti jammed")
    }
}

/// A wheel loaded with `count` labels "item-0", "item-1", ...
fn wheel_with(count: usize) -> WheelState {
    WheelState::new(ItemList::new((0..count).map(|i| format!("item-{i}"))))
}

/// The four-slice wheel from the end-to-end scenarios: slice angle 90.
fn wheel_abcd() -> WheelState {
    WheelState::new(ItemList::new(
        ["a", "b", "c", "d"].iter().map(|s| s.to_string()),
    ))
}

fn at(t0: Instant, ms: u64) -> Instant {
    t0 + Duration::from_millis(ms)
}

/// Drive an animation from its first frame to past its duration.
fn run_to_completion(wheel: &mut WheelState, t0: Instant, duration_ms: u64, fx: &mut dyn Celebration) {
    wheel.tick(t0, fx);
    wheel.tick(at(t0, duration_ms + 1), fx);
}
