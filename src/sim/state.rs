//! Game state and live entity types
//!
//! `GameState` is the single owner of score, lives and phase. It is passed
//! explicitly through the frame and tap entry points.


use super::color::{Color, ShapeTag};
use super::shape::{Geometry, ShapeKind};
use crate::scene::{NodeHandle, ShapeSpec};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Splash up, waiting for the first tap
    #[default]
    TapToPlay,
    /// Active gameplay
    Playing,
    /// Out of lives; taps ignored until the return timer fires
    GameOver,
}

/// Score, lives and phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub score: u32,
    pub lives: u32,
    pub phase: GamePhase,
    /// Best score across runs (mirrors the save file)
    pub high_score: u32,
}

impl GameState {
    pub fn new(lives: u32) -> Self {
        Self {
            score: 0,
            lives,
            phase: GamePhase::TapToPlay,
            high_score: 0,
        }
    }

    /// Start-of-run values; the high score survives
    pub fn reset(&mut self, lives: u32) {
        self.score = 0;
        self.lives = lives;
    }

    /// Take one life. Returns true exactly when this call used up the last one.
    pub fn lose_life(&mut self) -> bool {
        if self.lives == 0 {
            return false;
        }
        self.lives -= 1;
        self.lives == 0
    }

    pub fn add_point(&mut self) {
        self.score += 1;
        self.high_score = self.high_score.max(self.score);
    }
}

/// A shape currently flying in the host scene
#[derive(Debug, Clone, PartialEq)]
pub struct LiveShape {
    pub handle: NodeHandle,
    pub kind: ShapeKind,
    pub geometry: Geometry,
    pub color: Color,
    pub tag: ShapeTag,
    /// Trail tint the host attached, if any
    pub trail: Option<Color>,
}

impl LiveShape {
    pub fn from_spec(handle: NodeHandle, spec: &ShapeSpec) -> Self {
        Self {
            handle,
            kind: spec.kind,
            geometry: spec.geometry,
            color: spec.color,
            tag: spec.tag,
            trail: spec.trail,
        }
    }
}
