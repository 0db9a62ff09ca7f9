//! Recording host for unit tests

use std::collections::{BTreeMap, HashMap};

use glam::{Vec2, Vec3};

use super::color::{Color, ShapeTag};
use super::session::Session;
use super::shape::{Geometry, ShapeKind};
use crate::audio::{AudioPort, SoundEffect};
use crate::persistence::{SaveData, SaveStore, StoreError};
use crate::scene::{HitTarget, NodeHandle, ScenePort, ShapeSpec, Splash, Transform};
use crate::settings::Settings;
use crate::tuning::Tuning;

/// Remembers every port call. Spawned shapes sit still at y = 0 until moved.
#[derive(Debug, Default)]
pub struct MockHost {
    pub spawned: Vec<ShapeSpec>,
    pub positions: HashMap<NodeHandle, Vec3>,
    pub removed: Vec<NodeHandle>,
    /// What the next `hit_test` returns
    pub next_hit: Option<HitTarget>,
    pub hit_tests: usize,
    pub explosions: Vec<(Geometry, Transform)>,
    pub shakes: usize,
    pub hud_position: Option<Vec3>,
    pub hud_texts: Vec<String>,
    pub created_splashes: Vec<Splash>,
    pub splash_visibility: BTreeMap<Splash, bool>,
    pub loaded_sounds: Vec<(SoundEffect, String)>,
    pub played: Vec<SoundEffect>,
    next_id: u64,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plain red box at height `y` as if it had been spawned
    pub fn add_shape_at(&mut self, y: f32) -> NodeHandle {
        let spec = ShapeSpec {
            kind: ShapeKind::Box,
            geometry: ShapeKind::Box.geometry(),
            color: Color::RED,
            tag: ShapeTag::Good,
            impulse: Vec3::ZERO,
            impulse_offset: Vec3::ZERO,
            trail: None,
        };
        let handle = self.spawn_shape(&spec);
        self.set_y(handle, y);
        handle
    }

    pub fn set_y(&mut self, handle: NodeHandle, y: f32) {
        if let Some(pos) = self.positions.get_mut(&handle) {
            pos.y = y;
        }
    }

    pub fn position_of(&self, handle: NodeHandle) -> Vec3 {
        self.positions[&handle]
    }

    /// Drop a node behind the core's back
    pub fn forget(&mut self, handle: NodeHandle) {
        self.positions.remove(&handle);
    }

    pub fn visible_splashes(&self) -> Vec<Splash> {
        self.splash_visibility
            .iter()
            .filter_map(|(splash, visible)| visible.then_some(*splash))
            .collect()
    }

    pub fn play_count(&self, effect: SoundEffect) -> usize {
        self.played.iter().filter(|e| **e == effect).count()
    }
}

impl ScenePort for MockHost {
    fn spawn_shape(&mut self, spec: &ShapeSpec) -> NodeHandle {
        self.next_id += 1;
        let handle = NodeHandle(self.next_id);
        self.spawned.push(spec.clone());
        self.positions.insert(handle, Vec3::ZERO);
        handle
    }

    fn remove_node(&mut self, handle: NodeHandle) {
        self.removed.push(handle);
        self.positions.remove(&handle);
    }

    fn node_transform(&mut self, handle: NodeHandle) -> Option<Transform> {
        self.positions.get(&handle).map(|p| Transform::from_position(*p))
    }

    fn hit_test(&mut self, _point: Vec2) -> Option<HitTarget> {
        self.hit_tests += 1;
        self.next_hit
    }

    fn emit_explosion(&mut self, geometry: &Geometry, _color: Color, transform: Transform) {
        self.explosions.push((*geometry, transform));
    }

    fn shake_camera(&mut self) {
        self.shakes += 1;
    }

    fn place_hud(&mut self, position: Vec3) {
        self.hud_position = Some(position);
    }

    fn set_hud_text(&mut self, text: &str) {
        self.hud_texts.push(text.to_string());
    }

    fn create_splash(&mut self, splash: Splash, _position: Vec3, _size: f32, _texture: &str) {
        self.created_splashes.push(splash);
        self.splash_visibility.insert(splash, true);
    }

    fn set_splash_visible(&mut self, splash: Splash, visible: bool) {
        self.splash_visibility.insert(splash, visible);
    }
}

impl AudioPort for MockHost {
    fn load_sound(&mut self, effect: SoundEffect, path: &str) {
        self.loaded_sounds.push((effect, path.to_string()));
    }

    fn play_sound(&mut self, effect: SoundEffect, _volume: f32) {
        self.played.push(effect);
    }
}

/// Store whose every call fails
pub struct FailingStore;

impl SaveStore for FailingStore {
    fn load(&mut self) -> Result<Option<SaveData>, StoreError> {
        Err(StoreError::Io(std::io::Error::other("disk on fire")))
    }

    fn save(&mut self, _data: &SaveData) -> Result<(), StoreError> {
        Err(StoreError::Io(std::io::Error::other("disk on fire")))
    }
}

/// Session with default tuning and settings
pub fn session_with<S: SaveStore + 'static>(seed: u64, store: S) -> Session {
    session_with_store(seed, Box::new(store))
}

pub fn session_with_store(seed: u64, store: Box<dyn SaveStore>) -> Session {
    Session::new(seed, Tuning::default(), Settings::default(), store)
}
