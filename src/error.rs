//! Error type for the one recoverable failure mode in the core pipeline.
//!
//! `substep == 0` is a programmer error, not a runtime condition, so it is
//! enforced with `debug_assert!` in [`crate::world::World::step`] rather
//! than modeled here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhysicsError {
    #[error("failed to reserve contact buffer capacity for {pairs} pairs")]
    OutOfMemory { pairs: usize },
}

pub type PhysicsResult<T> = Result<T, PhysicsError>;
