//! Confetti burst fired on settlement.
//!
//! The emitter is the engine's celebration collaborator: [`Celebration::fire`]
//! only queues a burst, and the particles spawn at the next draw when the
//! screen origin is known. Purely cosmetic.

use std::time::Instant;

use eframe::egui;
use rand::Rng;

use crate::theme::Theme;
use crate::wheel::Celebration;

const PARTICLE_COUNT: usize = 120;
const SPREAD_DEG: f32 = 70.0;
const LIFETIME_S: f32 = 2.2;
const FADE_S: f32 = 0.6;
const GRAVITY_PX_S2: f32 = 420.0;

struct Particle {
    pos: egui::Pos2,
    vel: egui::Vec2,
    color: egui::Color32,
    size: f32,
    born: Instant,
}

pub struct ConfettiEmitter {
    particles: Vec<Particle>,
    pending_bursts: u32,
    origin: egui::Pos2,
    last_step: Option<Instant>,
}

impl ConfettiEmitter {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            pending_bursts: 0,
            origin: egui::Pos2::ZERO,
            last_step: None,
        }
    }

    /// The app keeps this pointed at the burst origin above the wheel hub.
    pub fn set_origin(&mut self, origin: egui::Pos2) {
        self.origin = origin;
    }

    pub fn is_active(&self) -> bool {
        self.pending_bursts > 0 || !self.particles.is_empty()
    }

    /// Spawn pending bursts, advance the simulation, and paint the particles.
    pub fn draw(&mut self, ui: &egui::Ui, now: Instant) {
        for _ in 0..self.pending_bursts {
            self.spawn_burst(now);
        }
        self.pending_bursts = 0;

        let dt = self
            .last_step
            .map(|last| now.saturating_duration_since(last).as_secs_f32())
            .unwrap_or(0.0)
            .min(0.1);
        self.last_step = Some(now);

        self.particles
            .retain(|p| now.saturating_duration_since(p.born).as_secs_f32() < LIFETIME_S);

        let painter = ui.painter();
        for particle in &mut self.particles {
            particle.vel.y += GRAVITY_PX_S2 * dt;
            particle.pos += particle.vel * dt;

            let age = now.saturating_duration_since(particle.born).as_secs_f32();
            let opacity = ((LIFETIME_S - age) / FADE_S).clamp(0.0, 1.0);
            painter.circle_filled(
                particle.pos,
                particle.size,
                Theme::with_opacity(particle.color, opacity),
            );
        }

        if self.particles.is_empty() {
            self.last_step = None;
        }
    }

    fn spawn_burst(&mut self, now: Instant) {
        let mut rng = rand::rng();
        let palette = Theme::confetti_palette();
        for _ in 0..PARTICLE_COUNT {
            // Fan upward around 12 o'clock.
            let angle =
                (-90.0 + rng.random_range(-SPREAD_DEG / 2.0..SPREAD_DEG / 2.0)).to_radians();
            let speed = rng.random_range(240.0..560.0);
            self.particles.push(Particle {
                pos: self.origin,
                vel: egui::vec2(angle.cos() * speed, angle.sin() * speed),
                color: palette[rng.random_range(0..palette.len())],
                size: rng.random_range(2.0..4.0),
                born: now,
            });
        }
    }
}

impl Celebration for ConfettiEmitter {
    fn fire(&mut self) -> anyhow::Result<()> {
        self.pending_bursts += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fire_queues_a_burst() {
        let mut emitter = ConfettiEmitter::new();
        assert!(!emitter.is_active());
        emitter.fire().unwrap();
        assert!(emitter.is_active());
    }
}
