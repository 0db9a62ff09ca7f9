//! Per-frame update
//!
//! Order inside one frame: game-over timer, spawn, cleanup, HUD.

use super::Host;
use super::color::ShapeTag;
use super::session::Session;
use super::spawn::random_shape_spec;
use super::state::{GamePhase, LiveShape};
use crate::audio::SoundEffect;
use crate::scene::{NodeHandle, ScenePort, Splash};

/// What one frame did (for logging and tests)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Shape launched this frame, if any
    pub spawned: Option<NodeHandle>,
    /// Shapes dropped by the cleanup pass
    pub removed: usize,
    /// The game-over timer fired and tap-to-play is back up
    pub returned_to_title: bool,
}

impl Session {
    /// Advance one rendered frame. `time` is the host's monotonic clock in seconds.
    pub fn frame<H: Host>(&mut self, host: &mut H, time: f64) -> FrameReport {
        self.clock = time;
        let mut report = FrameReport {
            returned_to_title: self.poll_game_over_timer(host, time),
            ..Default::default()
        };

        if self.spawner.is_due(time) {
            report.spawned = Some(self.spawn_shape(host));
            let delay = self.spawner.reschedule(time, &self.tuning, &mut self.rng);
            log::trace!("Next spawn in {:.2}s", delay);
        }

        report.removed = cleanup_shapes(host, &mut self.shapes, self.tuning.cleanup_floor_y);
        if report.removed > 0 {
            log::debug!("Cleaned up {} shapes, {} live", report.removed, self.shapes.len());
        }

        self.hud.refresh(host, &self.state);
        report
    }

    fn spawn_shape<H: Host>(&mut self, host: &mut H) -> NodeHandle {
        let spec = random_shape_spec(&mut self.rng, &self.tuning, self.settings.effective_trails());
        let handle = host.spawn_shape(&spec);

        let sound = match spec.tag {
            ShapeTag::Good => SoundEffect::SpawnGood,
            ShapeTag::Bad => SoundEffect::SpawnBad,
        };
        self.mixer.play(host, sound);

        log::debug!(
            "Spawned {:?} {} ({:?}) impulse ({:.2}, {:.2})",
            spec.kind,
            spec.tag.as_str(),
            handle,
            spec.impulse.x,
            spec.impulse.y
        );
        self.shapes.push(LiveShape::from_spec(handle, &spec));
        handle
    }

    /// Hand GameOver back to TapToPlay once the deadline passes
    fn poll_game_over_timer<H: Host>(&mut self, host: &mut H, time: f64) -> bool {
        if self.state.phase != GamePhase::GameOver {
            return false;
        }
        match self.game_over_deadline {
            Some(deadline) if time >= deadline => {
                self.game_over_deadline = None;
                self.state.phase = GamePhase::TapToPlay;
                self.splashes.show(host, Some(Splash::TapToPlay));
                log::info!("Back to tap-to-play");
                true
            }
            _ => false,
        }
    }
}

/// Remove every shape below `floor_y`. Shapes the host no longer knows are
/// dropped from the registry without a remove call. Returns how many went.
pub fn cleanup_shapes(scene: &mut dyn ScenePort, shapes: &mut Vec<LiveShape>, floor_y: f32) -> usize {
    let before = shapes.len();
    shapes.retain(|shape| match scene.node_transform(shape.handle) {
        Some(transform) if transform.position.y < floor_y => {
            scene.remove_node(shape.handle);
            false
        }
        Some(_) => true,
        None => false,
    });
    before - shapes.len()
}
