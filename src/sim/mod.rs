//! Deterministic game core
//!
//! Everything that decides what happens lives here:
//! - Seeded RNG only (`Pcg32`)
//! - Time comes in through `Session::frame`, never read from a clock
//! - The 3D engine is reached only through the `Host` ports

pub mod color;
pub mod hit;
pub mod session;
pub mod shape;
pub mod spawn;
pub mod state;
pub mod tick;

#[cfg(test)]
pub mod testing;

pub use color::{Color, ShapeTag};
pub use hit::TapOutcome;
pub use session::Session;
pub use shape::{Geometry, ShapeKind};
pub use spawn::{Spawner, random_shape_spec};
pub use state::{GamePhase, GameState, LiveShape};
pub use tick::{FrameReport, cleanup_shapes};

use crate::audio::AudioPort;
use crate::scene::ScenePort;

/// Everything the core needs from the host engine
pub trait Host: ScenePort + AudioPort {}

impl<T: ScenePort + AudioPort + ?Sized> Host for T {}
