//! Data-driven game balance
//!
//! Every number the core uses to schedule, launch and judge shapes lives here so
//! a JSON file can override it without a rebuild.

use std::ops::Range;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, load_json};
use crate::consts::*;

/// Game balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Shortest gap between spawns (seconds)
    pub spawn_interval_min: f64,
    /// Longest gap between spawns (seconds, exclusive)
    pub spawn_interval_max: f64,
    /// Horizontal impulse bounds (inclusive)
    pub impulse_x: (f32, f32),
    /// Vertical impulse bounds (inclusive)
    pub impulse_y: (f32, f32),
    /// Local point the launch impulse is applied at
    pub impulse_offset: Vec3,
    /// Height below which shapes are discarded
    pub cleanup_floor_y: f32,
    /// Lives granted on reset
    pub starting_lives: u32,
    /// Seconds between game over and the tap-to-play splash
    pub game_over_delay: f64,
    pub hud_position: Vec3,
    pub splash_position: Vec3,
    pub splash_size: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            spawn_interval_min: SPAWN_INTERVAL_MIN,
            spawn_interval_max: SPAWN_INTERVAL_MAX,
            impulse_x: (IMPULSE_X_MIN, IMPULSE_X_MAX),
            impulse_y: (IMPULSE_Y_MIN, IMPULSE_Y_MAX),
            impulse_offset: Vec3::from_array(IMPULSE_OFFSET),
            cleanup_floor_y: CLEANUP_FLOOR_Y,
            starting_lives: STARTING_LIVES,
            game_over_delay: GAME_OVER_DELAY,
            hud_position: Vec3::from_array(HUD_POSITION),
            splash_position: Vec3::from_array(SPLASH_POSITION),
            splash_size: SPLASH_SIZE,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file; missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let tuning: Self = load_json(path)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the sampler or state machine cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.spawn_interval_min > 0.0 && self.spawn_interval_min < self.spawn_interval_max) {
            return Err(ConfigError::Invalid(format!(
                "spawn interval must satisfy 0 < min < max, got [{}, {})",
                self.spawn_interval_min, self.spawn_interval_max
            )));
        }
        if self.impulse_x.0 > self.impulse_x.1 || self.impulse_y.0 > self.impulse_y.1 {
            return Err(ConfigError::Invalid("impulse ranges are inverted".into()));
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::Invalid("starting_lives must be at least 1".into()));
        }
        if self.game_over_delay < 0.0 {
            return Err(ConfigError::Invalid("game_over_delay cannot be negative".into()));
        }
        Ok(())
    }

    /// Half-open range the spawn gap is drawn from
    #[inline]
    pub fn spawn_interval(&self) -> Range<f64> {
        self.spawn_interval_min..self.spawn_interval_max
    }
}
