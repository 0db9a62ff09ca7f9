//! Player preferences
//!
//! Persisted separately from the high score save as a small JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::load_or_default;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Visual Effects ===
    /// Camera shake when a bad shape is hit
    pub screen_shake: bool,
    /// Particle trails behind flying shapes
    pub trails: bool,
    /// Explosion bursts when a shape is tapped
    pub explosions: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Silence everything
    pub muted: bool,

    // === Accessibility ===
    /// Reduced motion (no shake, no trails)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_shake: true,
            trails: true,
            explosions: true,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Effective trails (respects reduced_motion)
    pub fn effective_trails(&self) -> bool {
        self.trails && !self.reduced_motion
    }

    /// Load settings from a JSON file, falling back to defaults when it is
    /// missing or unreadable
    pub fn load(path: &Path) -> Self {
        load_or_default(path, "settings")
    }
}
