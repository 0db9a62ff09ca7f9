//! Geometry Fighter - tap the colored shapes, dodge the black ones
//!
//! Core modules:
//! - `sim`: Deterministic game core (spawning, cleanup, hit resolution, state)
//! - `scene`: Port traits the host 3D engine implements
//! - `audio`: Sound effect catalog and volume mixing
//! - `ui`: HUD text and splash overlay bookkeeping
//! - `persistence`: High score save/load
//! - `tuning` / `settings`: Data-driven balance and player preferences
//! - `headless`: Engine-free host used by the native runner and tests

pub mod audio;
pub mod config;
pub mod headless;
pub mod highscores;
pub mod persistence;
pub mod scene;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use highscores::HighScores;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Earliest the next shape may spawn after the previous one (seconds)
    pub const SPAWN_INTERVAL_MIN: f64 = 0.2;
    /// Latest the next shape may spawn after the previous one (seconds, exclusive)
    pub const SPAWN_INTERVAL_MAX: f64 = 1.5;

    /// Horizontal launch impulse range
    pub const IMPULSE_X_MIN: f32 = -2.0;
    pub const IMPULSE_X_MAX: f32 = 2.0;
    /// Vertical launch impulse range
    pub const IMPULSE_Y_MIN: f32 = 10.0;
    pub const IMPULSE_Y_MAX: f32 = 18.0;
    /// Local point the impulse is applied at (slightly off-center so shapes tumble)
    pub const IMPULSE_OFFSET: [f32; 3] = [0.05, 0.05, 0.05];

    /// Shapes below this height are out of view and get removed
    pub const CLEANUP_FLOOR_Y: f32 = -2.0;

    /// Lives at the start of every run
    pub const STARTING_LIVES: u32 = 3;
    /// Seconds the game-over splash stays up before returning to tap-to-play
    pub const GAME_OVER_DELAY: f64 = 5.0;

    /// HUD hovers over the play area
    pub const HUD_POSITION: [f32; 3] = [0.0, 10.0, 0.0];
    /// Splash planes float in front of the camera target
    pub const SPLASH_POSITION: [f32; 3] = [0.0, 5.0, 0.0];
    /// Splash planes are square
    pub const SPLASH_SIZE: f32 = 5.0;
}
