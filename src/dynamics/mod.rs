//! Velocity and position resolution for contacts generated each substep.

pub mod solver;

pub use solver::{correct_positions, solve_velocities};
