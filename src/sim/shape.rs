//! Shape kinds and their fixed geometry

use rand::Rng;

/// The eight primitive shapes that can be launched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Box,
    Sphere,
    Pyramid,
    Torus,
    Capsule,
    Cylinder,
    Cone,
    Tube,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 8] = [
        ShapeKind::Box,
        ShapeKind::Sphere,
        ShapeKind::Pyramid,
        ShapeKind::Torus,
        ShapeKind::Capsule,
        ShapeKind::Cylinder,
        ShapeKind::Cone,
        ShapeKind::Tube,
    ];

    /// Uniform pick over all kinds
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Dimensions the host builds this kind with
    pub fn geometry(&self) -> Geometry {
        match self {
            ShapeKind::Box => Geometry::Box {
                width: 1.0,
                height: 1.0,
                length: 1.0,
                chamfer_radius: 0.0,
            },
            ShapeKind::Sphere => Geometry::Sphere { radius: 0.5 },
            ShapeKind::Pyramid => Geometry::Pyramid {
                width: 1.0,
                height: 1.0,
                length: 1.0,
            },
            ShapeKind::Torus => Geometry::Torus {
                ring_radius: 0.5,
                pipe_radius: 0.25,
            },
            ShapeKind::Capsule => Geometry::Capsule {
                cap_radius: 0.3,
                height: 2.5,
            },
            ShapeKind::Cylinder => Geometry::Cylinder {
                radius: 0.3,
                height: 2.5,
            },
            ShapeKind::Cone => Geometry::Cone {
                top_radius: 0.25,
                bottom_radius: 0.5,
                height: 1.0,
            },
            ShapeKind::Tube => Geometry::Tube {
                inner_radius: 0.25,
                outer_radius: 0.5,
                height: 1.0,
            },
        }
    }
}

/// Primitive geometry, in scene units
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Box {
        width: f32,
        height: f32,
        length: f32,
        chamfer_radius: f32,
    },
    Sphere {
        radius: f32,
    },
    Pyramid {
        width: f32,
        height: f32,
        length: f32,
    },
    Torus {
        ring_radius: f32,
        pipe_radius: f32,
    },
    Capsule {
        cap_radius: f32,
        height: f32,
    },
    Cylinder {
        radius: f32,
        height: f32,
    },
    Cone {
        top_radius: f32,
        bottom_radius: f32,
        height: f32,
    },
    Tube {
        inner_radius: f32,
        outer_radius: f32,
        height: f32,
    },
}

impl Geometry {
    /// Radius of a sphere around the node origin that encloses the shape.
    /// Hosts without real ray casting use it as a pick radius.
    pub fn bounding_radius(&self) -> f32 {
        match *self {
            Geometry::Box {
                width,
                height,
                length,
                ..
            }
            | Geometry::Pyramid {
                width,
                height,
                length,
            } => 0.5 * (width * width + height * height + length * length).sqrt(),
            Geometry::Sphere { radius } => radius,
            Geometry::Torus {
                ring_radius,
                pipe_radius,
            } => ring_radius + pipe_radius,
            Geometry::Capsule { cap_radius, height } => (height * 0.5).max(cap_radius),
            Geometry::Cylinder { radius, height } => (radius * radius + height * height * 0.25).sqrt(),
            Geometry::Cone {
                top_radius,
                bottom_radius,
                height,
            } => {
                let r = top_radius.max(bottom_radius);
                (r * r + height * height * 0.25).sqrt()
            }
            Geometry::Tube {
                outer_radius,
                height,
                ..
            } => (outer_radius * outer_radius + height * height * 0.25).sqrt(),
        }
    }
}
