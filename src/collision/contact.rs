//! The `Contact` record emitted by the pair detectors and consumed by the
//! constraint solver.

use glam::Vec3;

use crate::core::BodyId;

/// A single contact point between two bodies, regenerated from scratch
/// every substep and every position-projection iteration.
///
/// `body_a` is always the lower-indexed body of the pair; `normal` points
/// from `body_a` toward `body_b`.
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    pub body_a: BodyId,
    pub body_b: BodyId,
    pub normal: Vec3,
    pub point: Vec3,
    pub penetration: f32,
    pub friction: f32,
    pub restitution: f32,
}
