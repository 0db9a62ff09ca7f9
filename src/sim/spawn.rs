//! Spawn scheduling and randomized shape specs

use glam::Vec3;
use rand::Rng;

use super::color::{Color, ShapeTag};
use super::shape::ShapeKind;
use crate::scene::ShapeSpec;
use crate::tuning::Tuning;

/// Decides when the next shape launches
#[derive(Debug, Clone, PartialEq)]
pub struct Spawner {
    /// Frame time after which the next shape spawns
    next_spawn: f64,
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spawner {
    /// First frame with a positive time spawns immediately
    pub fn new() -> Self {
        Self { next_spawn: 0.0 }
    }

    pub fn next_spawn(&self) -> f64 {
        self.next_spawn
    }

    /// Strictly past the scheduled time
    #[inline]
    pub fn is_due(&self, time: f64) -> bool {
        time > self.next_spawn
    }

    /// Schedule the following spawn a random gap after `time`; returns the gap.
    pub fn reschedule<R: Rng + ?Sized>(&mut self, time: f64, tuning: &Tuning, rng: &mut R) -> f64 {
        let delay = rng.random_range(tuning.spawn_interval());
        self.next_spawn = time + delay;
        delay
    }
}

/// Roll a fresh shape: kind, color, tag and launch impulse
pub fn random_shape_spec<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning, trails: bool) -> ShapeSpec {
    let kind = ShapeKind::random(rng);
    let color = Color::random(rng);
    let (x_min, x_max) = tuning.impulse_x;
    let (y_min, y_max) = tuning.impulse_y;
    let impulse = Vec3::new(
        rng.random_range(x_min..=x_max),
        rng.random_range(y_min..=y_max),
        0.0,
    );

    ShapeSpec {
        kind,
        geometry: kind.geometry(),
        color,
        tag: ShapeTag::classify(color),
        impulse,
        impulse_offset: tuning.impulse_offset,
        trail: trails.then_some(color),
    }
}
