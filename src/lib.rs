//! A fixed-timestep 3D rigid-body physics core.
//!
//! Spheres, oriented boxes, and visual-only line segments collide through
//! a GJK + Separating-Axis-Theorem narrow phase; contacts are resolved by
//! a Baumgarte-stabilized Gauss-Seidel impulse solver followed by an
//! iterative position-projection pass. See [`World::step`] for the
//! per-substep pipeline.

pub mod collision;
pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod utils;
pub mod world;

pub use glam::{Mat3, Quat, Vec3};

pub use collision::Contact;
pub use core::{Body, BodyDef, BodyDefBuilder, BodyId, Shape};
pub use error::{PhysicsError, PhysicsResult};
pub use world::World;
