use glam::{Mat3, Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::shape::Shape;

/// Stable index into [`crate::world::World`]'s append-only body array.
///
/// Bodies are never removed, so a `BodyId` stays valid for the lifetime
/// of the `World` that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BodyId(pub u32);

impl BodyId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// User-supplied template for a body; consumed by [`crate::world::World::create_body`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyDef {
    pub angular_velocity: Vec3,
    pub orientation: Quat,
    pub velocity: Vec3,
    pub position: Vec3,
    pub inertia: Mat3,
    pub mass: f32,
    pub center_of_mass: Vec3,
    pub friction: f32,
    pub restitution: f32,
    pub shape: Shape,
}

impl Default for BodyDef {
    fn default() -> Self {
        Self {
            angular_velocity: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            velocity: Vec3::ZERO,
            position: Vec3::ZERO,
            inertia: Mat3::IDENTITY,
            mass: 0.0,
            center_of_mass: Vec3::ZERO,
            friction: 0.5,
            restitution: 0.5,
            shape: Shape::sphere(1.0),
        }
    }
}

impl BodyDef {
    pub fn builder() -> BodyDefBuilder {
        BodyDefBuilder::new()
    }
}

/// Fluent builder mirroring the construction style used throughout this crate's corpus.
pub struct BodyDefBuilder {
    def: BodyDef,
}

impl Default for BodyDefBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BodyDefBuilder {
    pub fn new() -> Self {
        Self {
            def: BodyDef::default(),
        }
    }

    pub fn shape(mut self, shape: Shape) -> Self {
        self.def.shape = shape;
        self
    }

    pub fn position(mut self, position: Vec3) -> Self {
        self.def.position = position;
        self
    }

    pub fn orientation(mut self, orientation: Quat) -> Self {
        self.def.orientation = orientation;
        self
    }

    pub fn velocity(mut self, velocity: Vec3) -> Self {
        self.def.velocity = velocity;
        self
    }

    pub fn angular_velocity(mut self, angular_velocity: Vec3) -> Self {
        self.def.angular_velocity = angular_velocity;
        self
    }

    pub fn mass(mut self, mass: f32) -> Self {
        self.def.mass = mass;
        self
    }

    pub fn inertia(mut self, inertia: Mat3) -> Self {
        self.def.inertia = inertia;
        self
    }

    pub fn center_of_mass(mut self, center_of_mass: Vec3) -> Self {
        self.def.center_of_mass = center_of_mass;
        self
    }

    pub fn friction(mut self, friction: f32) -> Self {
        self.def.friction = friction;
        self
    }

    pub fn restitution(mut self, restitution: f32) -> Self {
        self.def.restitution = restitution;
        self
    }

    pub fn build(self) -> BodyDef {
        self.def
    }
}

/// Simulated body: a `BodyDef` plus the derived `inverse_mass`.
///
/// `mass == 0 <=> inverse_mass == 0 <=> static`. Kinematic fields
/// (`position`, `orientation`, `velocity`, `angular_velocity`) are mutated
/// only from inside `World::step`. `inertia` and `center_of_mass` are
/// carried over from the `BodyDef` but are not consumed by the solver:
/// this crate does not integrate angular dynamics (see DESIGN.md).
#[derive(Debug, Clone)]
pub struct Body {
    pub shape: Shape,
    pub position: Vec3,
    pub orientation: Quat,
    pub velocity: Vec3,
    pub angular_velocity: Vec3,
    pub mass: f32,
    pub inverse_mass: f32,
    pub inertia: Mat3,
    pub center_of_mass: Vec3,
    pub friction: f32,
    pub restitution: f32,
}

impl Body {
    pub fn from_def(def: BodyDef) -> Self {
        let inverse_mass = if def.mass == 0.0 { 0.0 } else { 1.0 / def.mass };
        Self {
            shape: def.shape,
            position: def.position,
            orientation: def.orientation,
            velocity: def.velocity,
            angular_velocity: def.angular_velocity,
            mass: def.mass,
            inverse_mass,
            inertia: def.inertia,
            center_of_mass: def.center_of_mass,
            friction: def.friction,
            restitution: def.restitution,
        }
    }

    pub fn is_static(&self) -> bool {
        self.inverse_mass == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_body_has_zero_inverse_mass() {
        let body = Body::from_def(BodyDef::default());
        assert_eq!(body.mass, 0.0);
        assert_eq!(body.inverse_mass, 0.0);
        assert!(body.is_static());
    }

    #[test]
    fn dynamic_body_derives_inverse_mass() {
        let def = BodyDef::builder().mass(2.0).build();
        let body = Body::from_def(def);
        assert!((body.inverse_mass - 0.5).abs() < 1e-6);
        assert!(!body.is_static());
    }

    #[test]
    fn builder_sets_every_field() {
        let def = BodyDef::builder()
            .shape(Shape::cuboid(Vec3::splat(0.5)))
            .position(Vec3::new(1.0, 2.0, 3.0))
            .velocity(Vec3::new(0.0, -1.0, 0.0))
            .mass(4.0)
            .friction(0.2)
            .restitution(0.9)
            .build();

        assert_eq!(def.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(def.velocity, Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(def.mass, 4.0);
        assert_eq!(def.friction, 0.2);
        assert_eq!(def.restitution, 0.9);
        assert!(matches!(def.shape, Shape::Box { .. }));
    }
}
