//! Tap resolution and the TapToPlay / Playing / GameOver state machine

use glam::Vec2;

use super::Host;
use super::color::ShapeTag;
use super::session::Session;
use super::state::GamePhase;
use crate::audio::SoundEffect;
use crate::scene::{HitTarget, Splash};

/// What a tap did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// Tap-to-play dismissed, a fresh run began
    Started,
    /// Game over splash is up; taps do nothing
    Ignored,
    /// Landed on the HUD or a splash plane
    Overlay,
    /// Nothing (or nothing we spawned) under the tap
    Miss,
    /// Good shape popped
    Good { score: u32 },
    /// Bad shape popped, lives left
    Bad { lives: u32 },
    /// Bad shape took the last life
    GameOver { final_score: u32 },
}

impl Session {
    /// Resolve a tap at a screen-space point. Only the nearest hit counts.
    pub fn tap<H: Host>(&mut self, host: &mut H, point: Vec2) -> TapOutcome {
        match self.state.phase {
            GamePhase::GameOver => return TapOutcome::Ignored,
            GamePhase::TapToPlay => {
                self.start_run(host);
                return TapOutcome::Started;
            }
            GamePhase::Playing => {}
        }

        let handle = match host.hit_test(point) {
            Some(HitTarget::Shape(handle)) => handle,
            Some(HitTarget::Hud | HitTarget::Splash(_)) => return TapOutcome::Overlay,
            None => return TapOutcome::Miss,
        };
        let Some(index) = self.shapes.iter().position(|s| s.handle == handle) else {
            log::debug!("Tap hit untracked node {:?}", handle);
            return TapOutcome::Miss;
        };

        let shape = self.shapes.remove(index);
        let transform = host.node_transform(handle);

        let outcome = match shape.tag {
            ShapeTag::Good => self.handle_good(host),
            ShapeTag::Bad => self.handle_bad(host),
        };

        if self.settings.explosions {
            if let Some(transform) = transform {
                host.emit_explosion(&shape.geometry, shape.color, transform);
            }
        }
        host.remove_node(handle);
        outcome
    }

    fn start_run<H: Host>(&mut self, host: &mut H) {
        self.state.reset(self.tuning.starting_lives);
        self.state.phase = GamePhase::Playing;
        self.splashes.show(host, None);
        log::info!("Run started with {} lives", self.state.lives);
    }

    fn handle_good<H: Host>(&mut self, host: &mut H) -> TapOutcome {
        self.state.add_point();
        self.mixer.play(host, SoundEffect::ExplodeGood);
        TapOutcome::Good {
            score: self.state.score,
        }
    }

    fn handle_bad<H: Host>(&mut self, host: &mut H) -> TapOutcome {
        let out_of_lives = self.state.lose_life();
        self.mixer.play(host, SoundEffect::ExplodeBad);
        if self.settings.effective_screen_shake() {
            host.shake_camera();
        }

        if out_of_lives {
            self.enter_game_over(host);
            TapOutcome::GameOver {
                final_score: self.state.score,
            }
        } else {
            TapOutcome::Bad {
                lives: self.state.lives,
            }
        }
    }

    fn enter_game_over<H: Host>(&mut self, host: &mut H) {
        self.save_state();
        self.splashes.show(host, Some(Splash::GameOver));
        self.mixer.play(host, SoundEffect::GameOver);
        self.state.phase = GamePhase::GameOver;
        self.game_over_deadline = Some(self.clock + self.tuning.game_over_delay);
        log::info!(
            "Game over: score {}, high score {}",
            self.state.score,
            self.state.high_score
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::scene::NodeHandle;
    use crate::sim::color::Color;
    use crate::sim::testing::{MockHost, session_with};

    /// Session already in Playing with one shape of the given color in view
    fn playing_with(color: Color) -> (Session, MockHost, NodeHandle) {
        let mut host = MockHost::new();
        let mut session = session_with(77, MemoryStore::default());
        session.setup(&mut host);
        assert_eq!(session.tap(&mut host, Vec2::ZERO), TapOutcome::Started);
        let handle = session.frame(&mut host, 0.1).spawned.unwrap();
        session.shapes[0].color = color;
        session.shapes[0].tag = ShapeTag::classify(color);
        host.set_y(handle, 2.0);
        (session, host, handle)
    }

    #[test]
    fn test_tap_to_play_starts_run() {
        let mut host = MockHost::new();
        let mut session = session_with(1, MemoryStore::default());
        session.setup(&mut host);
        session.state.score = 9;
        session.state.lives = 1;
        host.next_hit = Some(HitTarget::Splash(Splash::TapToPlay));

        assert_eq!(session.tap(&mut host, Vec2::new(3.0, 4.0)), TapOutcome::Started);
        assert_eq!(session.phase(), GamePhase::Playing);
        assert_eq!(session.state().score, 0);
        assert_eq!(session.state().lives, 3);
        assert!(host.visible_splashes().is_empty());
        assert_eq!(host.hit_tests, 0);
    }

    #[test]
    fn test_good_tap_scores() {
        let (mut session, mut host, handle) = playing_with(Color::RED);
        host.next_hit = Some(HitTarget::Shape(handle));

        assert_eq!(session.tap(&mut host, Vec2::ZERO), TapOutcome::Good { score: 1 });
        assert_eq!(session.state().lives, 3);
        assert_eq!(host.play_count(SoundEffect::ExplodeGood), 1);
        assert_eq!(host.explosions.len(), 1);
        assert_eq!(host.explosions[0].1.position.y, 2.0);
        assert_eq!(host.removed, vec![handle]);
        assert!(session.shapes().is_empty());
        assert_eq!(host.shakes, 0);
    }

    #[test]
    fn test_bad_tap_costs_life() {
        let (mut session, mut host, handle) = playing_with(Color::BLACK);
        host.next_hit = Some(HitTarget::Shape(handle));

        assert_eq!(session.tap(&mut host, Vec2::ZERO), TapOutcome::Bad { lives: 2 });
        assert_eq!(session.state().score, 0);
        assert_eq!(host.play_count(SoundEffect::ExplodeBad), 1);
        assert_eq!(host.shakes, 1);
        assert_eq!(host.explosions.len(), 1);
        assert_eq!(host.removed, vec![handle]);
        assert_eq!(session.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_overlay_and_miss_are_noops() {
        let (mut session, mut host, _handle) = playing_with(Color::RED);

        host.next_hit = Some(HitTarget::Hud);
        assert_eq!(session.tap(&mut host, Vec2::ZERO), TapOutcome::Overlay);
        host.next_hit = Some(HitTarget::Splash(Splash::GameOver));
        assert_eq!(session.tap(&mut host, Vec2::ZERO), TapOutcome::Overlay);
        host.next_hit = None;
        assert_eq!(session.tap(&mut host, Vec2::ZERO), TapOutcome::Miss);
        host.next_hit = Some(HitTarget::Shape(NodeHandle(9999)));
        assert_eq!(session.tap(&mut host, Vec2::ZERO), TapOutcome::Miss);

        assert_eq!(session.shapes().len(), 1);
        assert!(host.removed.is_empty());
        assert!(host.explosions.is_empty());
        assert_eq!(session.state().score, 0);
    }

    #[test]
    fn test_last_life_scenario() {
        let (mut session, mut host, handle) = playing_with(Color::BLACK);
        session.state.lives = 1;
        session.state.score = 4;
        host.next_hit = Some(HitTarget::Shape(handle));

        assert_eq!(
            session.tap(&mut host, Vec2::ZERO),
            TapOutcome::GameOver { final_score: 4 }
        );
        assert_eq!(session.state().lives, 0);
        assert_eq!(session.phase(), GamePhase::GameOver);
        assert_eq!(host.visible_splashes(), vec![Splash::GameOver]);
        assert_eq!(host.play_count(SoundEffect::GameOver), 1);
        assert_eq!(session.save_data().games_played, 1);
        assert_eq!(session.save_data().high_score, 4);
        assert_eq!(session.game_over_deadline(), Some(0.1 + 5.0));
    }

    #[test]
    fn test_game_over_ignores_taps_until_timer() {
        let (mut session, mut host, handle) = playing_with(Color::BLACK);
        session.state.lives = 1;
        host.next_hit = Some(HitTarget::Shape(handle));
        session.tap(&mut host, Vec2::ZERO);
        assert_eq!(session.phase(), GamePhase::GameOver);

        // Taps during game over change nothing, not even with shapes around
        let second = session.frame(&mut host, 0.5).spawned;
        if let Some(h) = second {
            host.next_hit = Some(HitTarget::Shape(h));
        }
        assert_eq!(session.tap(&mut host, Vec2::ZERO), TapOutcome::Ignored);
        assert_eq!(session.phase(), GamePhase::GameOver);
        assert_eq!(host.play_count(SoundEffect::GameOver), 1);

        let report = session.frame(&mut host, 5.0);
        assert!(!report.returned_to_title);
        assert_eq!(session.phase(), GamePhase::GameOver);

        let report = session.frame(&mut host, 5.2);
        assert!(report.returned_to_title);
        assert_eq!(session.phase(), GamePhase::TapToPlay);
        assert_eq!(host.visible_splashes(), vec![Splash::TapToPlay]);
        assert_eq!(session.game_over_deadline(), None);

        // Timer fires once
        assert!(!session.frame(&mut host, 6.0).returned_to_title);

        // And tap-to-play works again
        assert_eq!(session.tap(&mut host, Vec2::ZERO), TapOutcome::Started);
        assert_eq!(session.state().lives, 3);
        assert_eq!(session.state().score, 0);
    }

    #[test]
    fn test_game_over_happens_once_per_run() {
        let mut host = MockHost::new();
        let mut session = session_with(5, MemoryStore::default());
        session.setup(&mut host);
        session.tap(&mut host, Vec2::ZERO);

        let mut time = 0.0;
        let mut game_overs = 0;
        while session.phase() == GamePhase::Playing {
            time += 0.25;
            if let Some(handle) = session.frame(&mut host, time).spawned {
                if let Some(shape) = session.shapes().iter().find(|s| s.handle == handle) {
                    if shape.tag == ShapeTag::Bad {
                        host.next_hit = Some(HitTarget::Shape(handle));
                        if let TapOutcome::GameOver { .. } = session.tap(&mut host, Vec2::ZERO) {
                            game_overs += 1;
                        }
                    }
                }
            }
            assert!(time < 10_000.0, "never ran out of lives");
        }

        assert_eq!(game_overs, 1);
        assert_eq!(session.state().lives, 0);
        assert_eq!(host.play_count(SoundEffect::ExplodeBad), 3);
        assert_eq!(host.play_count(SoundEffect::GameOver), 1);
    }

    #[test]
    fn test_explosions_setting_respected() {
        let (mut session, mut host, handle) = playing_with(Color::RED);
        session.settings.explosions = false;
        host.next_hit = Some(HitTarget::Shape(handle));
        session.tap(&mut host, Vec2::ZERO);
        assert!(host.explosions.is_empty());
        assert_eq!(host.removed, vec![handle]);
    }

    #[test]
    fn test_failed_save_does_not_block_game_over() {
        let mut host = MockHost::new();
        let mut session = crate::sim::testing::session_with_store(
            77,
            Box::new(crate::sim::testing::FailingStore),
        );
        session.setup(&mut host);
        session.tap(&mut host, Vec2::ZERO);
        let handle = session.frame(&mut host, 0.1).spawned.unwrap();
        session.shapes[0].tag = ShapeTag::Bad;
        session.state.lives = 1;
        host.next_hit = Some(HitTarget::Shape(handle));

        assert!(matches!(
            session.tap(&mut host, Vec2::ZERO),
            TapOutcome::GameOver { .. }
        ));
        assert_eq!(session.phase(), GamePhase::GameOver);
    }
}
