//! The rotation/selection engine: one wheel, one selection attempt at a time.
//!
//! [`WheelState`] owns the rotation scalar and enforces the single-writer
//! rule: the scalar is only ever written through the live drag tracker or
//! through the current animation generation, never both. The app drives it
//! from the egui frame loop via [`WheelState::tick`].

pub mod animation;
pub mod geometry;
pub mod gesture;
pub mod selection;

#[cfg(test)]
mod tests;

use std::time::Instant;

use crate::items::ItemList;
use animation::Tween;
use gesture::DragTracker;
use selection::{SpinKind, SpinPlan};

/// Fire-and-forget settlement effect. Errors are discarded by the engine.
pub trait Celebration {
    fn fire(&mut self) -> anyhow::Result<()>;
}

/// Lifecycle of one selection attempt. `Settled` is the new idle baseline:
/// it accepts the same triggers as `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Dragging,
    Animating,
    Settled,
}

/// Which side currently owns writes to the rotation scalar.
///
/// Switching writers is an atomic handoff: cancel the old writer, install the
/// tag, then write. A frame carrying a stale animation generation fails the
/// tag check and cannot touch the scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RotationWriter {
    None,
    Drag,
    Animation(u64),
}

/// The ephemeral record of one animated spin.
#[derive(Debug, Clone)]
struct SpinSession {
    kind: SpinKind,
    target_index: usize,
    generation: u64,
    tween: Tween,
}

pub struct WheelState {
    items: ItemList,
    rotation: f64,
    phase: Phase,
    writer: RotationWriter,
    session: Option<SpinSession>,
    drag: Option<DragTracker>,
    selected_label: Option<String>,
    next_generation: u64,
}

impl WheelState {
    pub fn new(items: ItemList) -> Self {
        Self {
            items,
            rotation: 0.0,
            phase: Phase::Idle,
            writer: RotationWriter::None,
            session: None,
            drag: None,
            selected_label: None,
            next_generation: 0,
        }
    }

    pub fn items(&self) -> &ItemList {
        &self.items
    }

    /// Total accumulated rotation of the wheel face, degrees, unbounded.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_spinning(&self) -> bool {
        self.phase == Phase::Animating
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }

    /// The committed selection, once settled. Persists until the next
    /// settlement or until its label leaves the item list.
    pub fn selected_label(&self) -> Option<&str> {
        self.selected_label.as_deref()
    }

    /// Button/keyboard spin: uniform random target, five extra turns,
    /// randomised duration. No-op when the wheel is empty, already animating,
    /// or being dragged.
    pub fn spin(&mut self) {
        let Some(index) = selection::pick_random_index(self.items.len()) else {
            return;
        };
        self.spin_with(index, selection::random_spin_duration_ms());
    }

    /// Spin toward a known index. Split from [`Self::spin`] so the pick and
    /// the duration can be injected.
    pub fn spin_with(&mut self, target_index: usize, duration_ms: f64) {
        if target_index >= self.items.len() {
            return;
        }
        if matches!(self.phase, Phase::Animating | Phase::Dragging) {
            return;
        }
        let plan =
            selection::plan_random_spin(target_index, self.items.len(), self.rotation, duration_ms);
        self.start_animation(plan);
    }

    /// Pointer-down on the wheel face. Ignored while animating.
    pub fn begin_drag(&mut self, angle: f64, now: Instant) {
        if matches!(self.phase, Phase::Animating | Phase::Dragging) {
            return;
        }
        self.session = None;
        self.drag = Some(DragTracker::begin(angle, self.rotation, now));
        self.writer = RotationWriter::Drag;
        self.phase = Phase::Dragging;
    }

    /// Pointer-move while dragging: the rotation follows the pointer live.
    pub fn drag_to(&mut self, angle: f64, now: Instant) {
        if self.writer != RotationWriter::Drag {
            return;
        }
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        self.rotation = drag.update(angle, now);
    }

    /// Pointer-up: dispatch the inertial fling or the corrective snap.
    pub fn end_drag(&mut self) {
        if self.phase != Phase::Dragging {
            return;
        }
        let Some(drag) = self.drag.take() else {
            return;
        };
        self.writer = RotationWriter::None;
        let velocity = drag.velocity();
        let plan = if velocity.abs() > selection::FLING_THRESHOLD {
            selection::plan_fling(self.rotation, self.items.len(), velocity)
        } else {
            selection::plan_snap(self.rotation, self.items.len())
        };
        match plan {
            Some(plan) => self.start_animation(plan),
            // The wheel emptied mid-drag; nothing to settle on.
            None => self.phase = Phase::Idle,
        }
    }

    /// Advance the active animation by one frame, settling on completion.
    pub fn tick(&mut self, now: Instant, fx: &mut dyn Celebration) {
        let RotationWriter::Animation(generation) = self.writer else {
            return;
        };
        self.apply_frame(generation, now);
        if self.session.as_ref().is_some_and(|s| s.tween.is_complete(now)) {
            self.finish_animation(fx);
        }
    }

    /// Apply one animation frame. Returns false, leaving the rotation
    /// untouched, when `generation` is not the active writer (a frame from a
    /// canceled animation arriving late).
    pub fn apply_frame(&mut self, generation: u64, now: Instant) -> bool {
        if self.writer != RotationWriter::Animation(generation) {
            return false;
        }
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        self.rotation = session.tween.sample(now);
        true
    }

    /// Stop a button-triggered spin early: freeze the wheel where it is and
    /// settle on the index picked when the spin started, not the slice nearest
    /// the pointer. Snap and fling animations run to completion; stopping
    /// anything else is a no-op.
    pub fn stop(&mut self, fx: &mut dyn Celebration) {
        if self.phase != Phase::Animating {
            return;
        }
        let Some(session) = self.session.as_ref() else {
            return;
        };
        if session.kind != SpinKind::Random {
            return;
        }
        let target_index = session.target_index;
        self.session = None;
        self.writer = RotationWriter::None;
        self.settle(target_index, fx);
    }

    /// Add a label through the item store.
    pub fn add_item(&mut self, label: &str) -> bool {
        self.items.add(label)
    }

    /// Remove a label, clearing the selection and aborting any in-flight spin
    /// whose target no longer exists.
    pub fn remove_item(&mut self, label: &str) -> bool {
        let removed = self.items.remove(label);
        if removed {
            self.reconcile_items();
        }
        removed
    }

    /// Rename a label in place; a settled selection follows the rename.
    pub fn rename_item(&mut self, old: &str, new: &str) -> bool {
        let renamed = self.items.rename(old, new);
        if renamed {
            if self.selected_label.as_deref() == Some(old) {
                self.selected_label = Some(new.trim().to_string());
            }
            self.reconcile_items();
        }
        renamed
    }

    fn start_animation(&mut self, plan: SpinPlan) {
        // Handoff: cancel whatever was writing, then install the new writer.
        self.drag = None;
        let generation = self.next_generation;
        self.next_generation += 1;
        self.session = Some(SpinSession {
            kind: plan.kind,
            target_index: plan.target_index,
            generation,
            tween: Tween::new(self.rotation, plan.end_rotation, plan.duration_ms),
        });
        self.writer = RotationWriter::Animation(generation);
        self.phase = Phase::Animating;
        self.selected_label = None;
    }

    fn finish_animation(&mut self, fx: &mut dyn Celebration) {
        let Some(session) = self.session.take() else {
            return;
        };
        self.writer = RotationWriter::None;
        self.rotation = session.tween.end_value();
        self.settle(session.target_index, fx);
    }

    fn settle(&mut self, target_index: usize, fx: &mut dyn Celebration) {
        match self.items.get(target_index) {
            Some(label) => {
                self.selected_label = Some(label.to_string());
                self.phase = Phase::Settled;
                // Celebration is cosmetic; a failing effect never aborts settlement.
                let _ = fx.fire();
            }
            None => {
                // The list shrank under the in-flight spin; abandon the attempt.
                self.selected_label = None;
                self.phase = Phase::Idle;
            }
        }
    }

    /// Restore the invariants after an item-list mutation: a vanished label
    /// cannot stay selected, and an animation whose target index fell out of
    /// range is aborted rather than left to settle on a dangling slice.
    fn reconcile_items(&mut self) {
        if let Some(label) = self.selected_label.as_deref() {
            if !self.items.contains(label) {
                self.selected_label = None;
            }
        }
        if self.phase == Phase::Animating {
            let stale = self
                .session
                .as_ref()
                .is_none_or(|s| s.target_index >= self.items.len());
            if stale {
                self.session = None;
                self.writer = RotationWriter::None;
                self.selected_label = None;
                self.phase = Phase::Idle;
            }
        }
    }
}
