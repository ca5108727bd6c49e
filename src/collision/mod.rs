//! Collision detection: support primitives, GJK, SAT, pair detectors, and
//! the per-substep contact generator.

pub mod contact;
pub mod gjk;
pub mod narrowphase;
pub mod sat;
pub mod support;

pub use contact::Contact;
pub use narrowphase::{collide_box_box, collide_sphere_box, collide_sphere_sphere, generate_contacts};
