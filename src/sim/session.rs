//! A play session: the owner of game state and everything the core tracks
//! between frames

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::Host;
use super::spawn::Spawner;
use super::state::{GamePhase, GameState, LiveShape};
use crate::audio::AudioMixer;
use crate::persistence::{SaveData, SaveStore};
use crate::scene::Splash;
use crate::settings::Settings;
use crate::tuning::Tuning;
use crate::ui::{Hud, SplashBoard};

/// Single owner of the game. The host drives it with `frame` and `tap`.
pub struct Session {
    pub(crate) state: GameState,
    seed: u64,
    pub(crate) rng: Pcg32,
    pub(crate) spawner: Spawner,
    pub(crate) shapes: Vec<LiveShape>,
    pub(crate) splashes: SplashBoard,
    pub(crate) hud: Hud,
    pub(crate) mixer: AudioMixer,
    pub(crate) tuning: Tuning,
    pub(crate) settings: Settings,
    store: Box<dyn SaveStore>,
    save: SaveData,
    /// Frame time at which GameOver hands back to TapToPlay. Armed from the
    /// last frame's time, not the tap's, so it can fire up to a frame early.
    pub(crate) game_over_deadline: Option<f64>,
    /// Time of the most recent frame
    pub(crate) clock: f64,
}

impl Session {
    /// Create a session. Tuning that fails validation and a broken or
    /// unreadable save are both logged and replaced with defaults.
    pub fn new(seed: u64, tuning: Tuning, settings: Settings, mut store: Box<dyn SaveStore>) -> Self {
        let tuning = match tuning.validate() {
            Ok(()) => tuning,
            Err(err) => {
                log::warn!("Rejected tuning ({}), using defaults", err);
                Tuning::default()
            }
        };
        let save = match store.load() {
            Ok(Some(save)) => save,
            Ok(None) => SaveData::default(),
            Err(err) => {
                log::warn!("Could not load save, starting fresh: {}", err);
                SaveData::default()
            }
        };

        let mut state = GameState::new(tuning.starting_lives);
        state.high_score = save.high_score;

        Self {
            state,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            spawner: Spawner::new(),
            shapes: Vec::new(),
            splashes: SplashBoard::new(),
            hud: Hud::new(),
            mixer: AudioMixer::from_settings(&settings),
            tuning,
            settings,
            store,
            save,
            game_over_deadline: None,
            clock: 0.0,
        }
    }

    /// Register sounds, place the HUD, build the splashes and show tap-to-play.
    pub fn setup<H: Host>(&mut self, host: &mut H) {
        self.mixer.load_all(host);
        self.hud.place(host, &self.tuning);
        self.splashes.create_all(host, &self.tuning);
        self.splashes.show(host, Some(Splash::TapToPlay));
        self.hud.refresh(host, &self.state);
        log::info!("Session ready (seed {})", self.seed);
    }

    /// Fold the finished run into the save and write it out.
    /// A failed write is logged; play continues either way.
    pub(crate) fn save_state(&mut self) {
        if let Some(rank) = self.save.record_run(self.state.score) {
            log::info!("Score {} placed #{} on the leaderboard", self.state.score, rank);
        }
        self.state.high_score = self.save.high_score;
        if let Err(err) = self.store.save(&self.save) {
            log::warn!("Failed to save progress: {}", err);
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn shapes(&self) -> &[LiveShape] {
        &self.shapes
    }

    pub fn splashes(&self) -> &SplashBoard {
        &self.splashes
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn save_data(&self) -> &SaveData {
        &self.save
    }

    pub fn next_spawn(&self) -> f64 {
        self.spawner.next_spawn()
    }

    /// When the game-over splash gives way to tap-to-play
    pub fn game_over_deadline(&self) -> Option<f64> {
        self.game_over_deadline
    }
}
