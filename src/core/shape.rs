use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Tagged union of the collision geometries the core understands.
///
/// `Line` is visual-only: the contact generator skips every pair that
/// involves it (see [`crate::collision::narrowphase`]).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Shape {
    Sphere { radius: f32 },
    Box { half_extents: Vec3 },
    Line { p1: Vec3, p2: Vec3 },
}

impl Shape {
    pub fn sphere(radius: f32) -> Self {
        Shape::Sphere { radius }
    }

    pub fn cuboid(half_extents: Vec3) -> Self {
        Shape::Box { half_extents }
    }

    pub fn line(p1: Vec3, p2: Vec3) -> Self {
        Shape::Line { p1, p2 }
    }
}

impl Default for Shape {
    fn default() -> Self {
        Shape::Sphere { radius: 1.0 }
    }
}
