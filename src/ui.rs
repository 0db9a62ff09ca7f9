//! HUD text and splash overlay bookkeeping
//!
//! Both are thin: they remember what the host is currently showing so the core
//! only pushes changes.

use std::collections::BTreeMap;

use crate::scene::{ScenePort, Splash};
use crate::sim::GameState;
use crate::tuning::Tuning;

/// Tracks which splash planes exist and which one is visible
#[derive(Debug, Clone, Default)]
pub struct SplashBoard {
    visible: BTreeMap<Splash, bool>,
}

impl SplashBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create every splash plane in the host, all hidden
    pub fn create_all(&mut self, scene: &mut dyn ScenePort, tuning: &Tuning) {
        for splash in Splash::ALL {
            scene.create_splash(
                splash,
                tuning.splash_position,
                tuning.splash_size,
                splash.texture(),
            );
            scene.set_splash_visible(splash, false);
            self.visible.insert(splash, false);
        }
    }

    /// Make `target` the only visible splash; `None` hides them all.
    pub fn show(&mut self, scene: &mut dyn ScenePort, target: Option<Splash>) {
        for (splash, visible) in self.visible.iter_mut() {
            let want = Some(*splash) == target;
            if *visible != want {
                scene.set_splash_visible(*splash, want);
                *visible = want;
            }
        }
    }

    pub fn is_visible(&self, splash: Splash) -> bool {
        self.visible.get(&splash).copied().unwrap_or(false)
    }

    /// The splash currently up, if any
    pub fn current(&self) -> Option<Splash> {
        self.visible
            .iter()
            .find_map(|(splash, visible)| visible.then_some(*splash))
    }
}

/// HUD text cache
#[derive(Debug, Clone, Default)]
pub struct Hud {
    last_text: Option<String>,
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place(&mut self, scene: &mut dyn ScenePort, tuning: &Tuning) {
        scene.place_hud(tuning.hud_position);
        self.last_text = None;
    }

    /// Rebuild the text and push it only if it changed
    pub fn refresh(&mut self, scene: &mut dyn ScenePort, state: &GameState) -> bool {
        let text = hud_text(state);
        if self.last_text.as_deref() == Some(text.as_str()) {
            return false;
        }
        scene.set_hud_text(&text);
        self.last_text = Some(text);
        true
    }

    pub fn text(&self) -> Option<&str> {
        self.last_text.as_deref()
    }
}

/// `Hi: 0012  Score: 0003  Lives: 02`
pub fn hud_text(state: &GameState) -> String {
    format!(
        "Hi: {:04}  Score: {:04}  Lives: {:02}",
        state.high_score, state.score, state.lives
    )
}
