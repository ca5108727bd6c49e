//! Core types describing bodies, shapes, and shared data.

pub mod body;
pub mod shape;

pub use body::{Body, BodyDef, BodyDefBuilder, BodyId};
pub use shape::Shape;
