//! Sound effects
//!
//! The host engine owns playback; the core only names effects, registers their
//! asset files once, and asks for them at the right moments.

use crate::settings::Settings;

/// Where the bundled sound files live
pub const SOUND_DIR: &str = "GeometryFighter.scnassets/Sounds";

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// A good shape was tapped
    ExplodeGood,
    /// A good shape launched
    SpawnGood,
    /// A bad shape was tapped
    ExplodeBad,
    /// A bad shape launched
    SpawnBad,
    /// Out of lives
    GameOver,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 5] = [
        SoundEffect::ExplodeGood,
        SoundEffect::SpawnGood,
        SoundEffect::ExplodeBad,
        SoundEffect::SpawnBad,
        SoundEffect::GameOver,
    ];

    /// Name the host registers the sound under
    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::ExplodeGood => "ExplodeGood",
            SoundEffect::SpawnGood => "SpawnGood",
            SoundEffect::ExplodeBad => "ExplodeBad",
            SoundEffect::SpawnBad => "SpawnBad",
            SoundEffect::GameOver => "GameOver",
        }
    }

    /// Asset path of the wav file
    pub fn asset_path(&self) -> String {
        format!("{}/{}.wav", SOUND_DIR, self.name())
    }
}

/// Playback capability supplied by the host
pub trait AudioPort {
    /// Register a sound file under an effect. Called once per effect at setup.
    fn load_sound(&mut self, effect: SoundEffect, path: &str);

    /// Fire-and-forget playback at the given gain (0.0 - 1.0)
    fn play_sound(&mut self, effect: SoundEffect, volume: f32);
}

/// Applies the player's volume settings in front of an `AudioPort`
#[derive(Debug, Clone)]
pub struct AudioMixer {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioMixer {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl AudioMixer {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            muted: settings.muted,
        }
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Register every effect's asset with the host
    pub fn load_all(&self, port: &mut dyn AudioPort) {
        for effect in SoundEffect::ALL {
            port.load_sound(effect, &effect.asset_path());
        }
        log::info!("Registered {} sound effects", SoundEffect::ALL.len());
    }

    /// Play a sound effect (skipped entirely when silent)
    pub fn play(&self, port: &mut dyn AudioPort, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        port.play_sound(effect, vol);
    }
}
