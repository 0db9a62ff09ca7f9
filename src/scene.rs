//! Scene port: the contract between the game core and the host 3D engine
//!
//! The host owns rendering, rigid-body physics, particles and ray casting. The
//! core hands it `ShapeSpec`s, keeps the returned `NodeHandle`s, and asks where
//! things are. Nothing in `sim` ever touches a concrete engine.

use glam::{Mat4, Quat, Vec2, Vec3};

use crate::sim::color::{Color, ShapeTag};
use crate::sim::shape::{Geometry, ShapeKind};

/// Opaque id of a node the host created for us
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle(pub u64);

/// Presentation-space pose of a node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    /// Rotate about the node origin, then translate into place
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }
}

/// Everything the host needs to build one flying shape
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeSpec {
    pub kind: ShapeKind,
    pub geometry: Geometry,
    pub color: Color,
    pub tag: ShapeTag,
    /// One-shot launch impulse (dynamic body, engine-default mass)
    pub impulse: Vec3,
    /// Local point the impulse is applied at
    pub impulse_offset: Vec3,
    /// Particle trail tint, `None` when trails are disabled
    pub trail: Option<Color>,
}

/// Full-screen overlay planes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Splash {
    TapToPlay,
    GameOver,
}

impl Splash {
    pub const ALL: [Splash; 2] = [Splash::TapToPlay, Splash::GameOver];

    /// Node name the host gives the plane
    pub fn node_name(&self) -> &'static str {
        match self {
            Splash::TapToPlay => "TAPTOPLAY",
            Splash::GameOver => "GAMEOVER",
        }
    }

    /// Diffuse texture for the plane
    pub fn texture(&self) -> &'static str {
        match self {
            Splash::TapToPlay => "GeometryFighter.scnassets/Textures/TapToPlay_Diffuse.png",
            Splash::GameOver => "GeometryFighter.scnassets/Textures/GameOver_Diffuse.png",
        }
    }
}

/// What a tap ray hit first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A node created through `spawn_shape`
    Shape(NodeHandle),
    /// The HUD text plane
    Hud,
    /// A splash plane
    Splash(Splash),
}

/// Scene and physics capability supplied by the host engine.
///
/// All calls happen on the frame/input thread; implementations need no locking.
pub trait ScenePort {
    /// Create a dynamic body for `spec`, apply its impulse, attach its trail.
    fn spawn_shape(&mut self, spec: &ShapeSpec) -> NodeHandle;

    /// Detach a node. Unknown handles are ignored.
    fn remove_node(&mut self, handle: NodeHandle);

    /// Current presentation transform, `None` if the node no longer exists.
    fn node_transform(&mut self, handle: NodeHandle) -> Option<Transform>;

    /// Nearest node under a screen-space point.
    fn hit_test(&mut self, point: Vec2) -> Option<HitTarget>;

    /// Burst particles over `geometry`'s surface at `transform`.
    fn emit_explosion(&mut self, geometry: &Geometry, color: Color, transform: Transform);

    /// Short camera shake.
    fn shake_camera(&mut self);

    /// Place the HUD plane in world space.
    fn place_hud(&mut self, position: Vec3);

    /// Replace the HUD text.
    fn set_hud_text(&mut self, text: &str);

    /// Create a splash plane; visibility is set separately.
    fn create_splash(&mut self, splash: Splash, position: Vec3, size: f32, texture: &str);

    /// Toggle a splash plane.
    fn set_splash_visible(&mut self, splash: Splash, visible: bool);
}
