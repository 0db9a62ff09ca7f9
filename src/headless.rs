//! Engine-free host
//!
//! A tiny stand-in for the real 3D engine: point-mass ballistics under gravity,
//! an orthographic camera looking down -Z, and sphere picking for taps. Tap
//! points are world-space (x, y) on the z = 0 plane. Good enough to drive the
//! whole game loop from the native runner and from tests.

use std::collections::{BTreeMap, HashMap};

use glam::{Quat, Vec2, Vec3};

use crate::audio::{AudioPort, SoundEffect};
use crate::scene::{HitTarget, NodeHandle, ScenePort, ShapeSpec, Splash, Transform};
use crate::sim::{Color, Geometry, ShapeTag};

/// Downward acceleration (scene units/s²)
pub const GRAVITY: f32 = -9.8;
/// Half-width of the HUD text strip
const HUD_HALF_WIDTH: f32 = 4.0;
/// Half-height of the HUD text strip
const HUD_HALF_HEIGHT: f32 = 0.5;

/// A simulated rigid body (unit mass, unit inertia)
#[derive(Debug, Clone)]
pub struct Body {
    pub position: Vec3,
    pub velocity: Vec3,
    pub rotation: Quat,
    pub spin: Vec3,
    pub radius: f32,
    pub color: Color,
    pub tag: ShapeTag,
    pub trail: bool,
}

impl Body {
    fn launch(spec: &ShapeSpec) -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: spec.impulse,
            rotation: Quat::IDENTITY,
            // Off-center impulse -> angular impulse r × J
            spin: spec.impulse_offset.cross(spec.impulse),
            radius: spec.geometry.bounding_radius(),
            color: spec.color,
            tag: spec.tag,
            trail: spec.trail.is_some(),
        }
    }

    fn integrate(&mut self, dt: f32) {
        self.velocity.y += GRAVITY * dt;
        self.position += self.velocity * dt;
        let angle = self.spin.length() * dt;
        if angle > 0.0 {
            let step = Quat::from_axis_angle(self.spin.normalize(), angle);
            self.rotation = (step * self.rotation).normalize();
        }
    }

    pub fn transform(&self) -> Transform {
        Transform {
            position: self.position,
            rotation: self.rotation,
        }
    }
}

#[derive(Debug, Clone)]
struct SplashPlane {
    position: Vec3,
    half_size: f32,
    visible: bool,
}

/// Counters the runner prints at the end
#[derive(Debug, Clone, Default)]
pub struct HostStats {
    pub spawned: usize,
    pub removed: usize,
    pub explosions: usize,
    pub shakes: usize,
    pub sounds: HashMap<SoundEffect, usize>,
}

/// Headless implementation of every host port
#[derive(Debug, Default)]
pub struct HeadlessHost {
    bodies: BTreeMap<NodeHandle, Body>,
    next_id: u64,
    hud_position: Option<Vec3>,
    hud_text: String,
    splashes: BTreeMap<Splash, SplashPlane>,
    sounds: HashMap<SoundEffect, String>,
    pub stats: HostStats,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance physics by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        for body in self.bodies.values_mut() {
            body.integrate(dt);
        }
    }

    pub fn body(&self, handle: NodeHandle) -> Option<&Body> {
        self.bodies.get(&handle)
    }

    /// Shapes a player could see: handle, position and color
    pub fn visible_shapes(&self) -> impl Iterator<Item = (NodeHandle, Vec3, Color)> + '_ {
        self.bodies
            .iter()
            .map(|(handle, body)| (*handle, body.position, body.color))
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn hud_text(&self) -> &str {
        &self.hud_text
    }

    pub fn splash_visible(&self, splash: Splash) -> bool {
        self.splashes.get(&splash).is_some_and(|s| s.visible)
    }

    fn hit_overlay(&self, point: Vec2) -> Option<HitTarget> {
        for (splash, plane) in &self.splashes {
            let d = (point - plane.position.truncate()).abs();
            if plane.visible && d.x <= plane.half_size && d.y <= plane.half_size {
                return Some(HitTarget::Splash(*splash));
            }
        }
        let hud = self.hud_position?;
        let d = (point - hud.truncate()).abs();
        (d.x <= HUD_HALF_WIDTH && d.y <= HUD_HALF_HEIGHT).then_some(HitTarget::Hud)
    }
}

impl ScenePort for HeadlessHost {
    fn spawn_shape(&mut self, spec: &ShapeSpec) -> NodeHandle {
        self.next_id += 1;
        let handle = NodeHandle(self.next_id);
        self.bodies.insert(handle, Body::launch(spec));
        self.stats.spawned += 1;
        log::trace!(
            "Body {:?} {:?} color #{:08x}",
            handle,
            spec.kind,
            spec.color.to_rgba8()
        );
        handle
    }

    fn remove_node(&mut self, handle: NodeHandle) {
        if self.bodies.remove(&handle).is_some() {
            self.stats.removed += 1;
        }
    }

    fn node_transform(&mut self, handle: NodeHandle) -> Option<Transform> {
        self.bodies.get(&handle).map(Body::transform)
    }

    /// Overlays sit in front of everything; among shapes the one closest to
    /// the camera (largest z) wins, then the one closest to the tap.
    fn hit_test(&mut self, point: Vec2) -> Option<HitTarget> {
        if let Some(overlay) = self.hit_overlay(point) {
            return Some(overlay);
        }
        self.bodies
            .iter()
            .filter_map(|(handle, body)| {
                let dist = body.position.truncate().distance(point);
                (dist <= body.radius).then_some((*handle, body.position.z, dist))
            })
            .max_by(|a, b| a.1.total_cmp(&b.1).then(b.2.total_cmp(&a.2)))
            .map(|(handle, _, _)| HitTarget::Shape(handle))
    }

    fn emit_explosion(&mut self, geometry: &Geometry, color: Color, transform: Transform) {
        self.stats.explosions += 1;
        log::trace!(
            "Explosion r={:.2} #{:08x} at {:?}",
            geometry.bounding_radius(),
            color.to_rgba8(),
            transform.matrix().w_axis.truncate()
        );
    }

    fn shake_camera(&mut self) {
        self.stats.shakes += 1;
    }

    fn place_hud(&mut self, position: Vec3) {
        self.hud_position = Some(position);
    }

    fn set_hud_text(&mut self, text: &str) {
        self.hud_text.clear();
        self.hud_text.push_str(text);
    }

    fn create_splash(&mut self, splash: Splash, position: Vec3, size: f32, texture: &str) {
        log::debug!("Splash {} uses {}", splash.node_name(), texture);
        self.splashes.insert(
            splash,
            SplashPlane {
                position,
                half_size: size * 0.5,
                visible: false,
            },
        );
    }

    fn set_splash_visible(&mut self, splash: Splash, visible: bool) {
        if let Some(plane) = self.splashes.get_mut(&splash) {
            plane.visible = visible;
        }
    }
}

impl AudioPort for HeadlessHost {
    fn load_sound(&mut self, effect: SoundEffect, path: &str) {
        self.sounds.insert(effect, path.to_string());
    }

    fn play_sound(&mut self, effect: SoundEffect, volume: f32) {
        match self.sounds.get(&effect) {
            Some(path) => log::debug!("Play {} ({:.2})", path, volume),
            None => log::warn!("Sound {} played before it was loaded", effect.name()),
        }
        *self.stats.sounds.entry(effect).or_default() += 1;
    }
}
