//! Named constants for every tunable used by the collision and solver
//! pipeline, so the algorithms never carry unexplained literals.

/// Default gravity vector applied in the physics world (Y-up).
pub const DEFAULT_GRAVITY: [f32; 3] = [0.0, -9.81, 0.0];

/// Below this squared length, a displacement/normal vector is treated as
/// degenerate and a fallback direction is substituted.
pub const DEGENERATE_LENGTH_SQ: f32 = 1e-6 * 1e-6;

/// Fallback normal used when a contact's natural normal direction
/// collapses to (near) zero length.
pub const FALLBACK_NORMAL: [f32; 3] = [0.0, 1.0, 0.0];

/// Maximum GJK simplex-growth iterations before a pair is treated as disjoint.
pub const GJK_MAX_ITERATIONS: usize = 30;

/// SAT's "near-parallel axis" inflation epsilon (Gottschalk's safeguard).
pub const SAT_PARALLEL_EPSILON: f32 = 1e-6;

/// Below this squared length, an edge-edge SAT axis is considered
/// degenerate and skipped (already covered by the face axes).
pub const SAT_EDGE_DEGENERACY_SQ: f32 = 1e-8;

/// Velocity-pass iteration count (Gauss-Seidel sweeps per substep).
pub const VELOCITY_ITERATIONS: u32 = 12;

/// Baumgarte stabilization factor applied to the velocity bias.
pub const BAUMGARTE_FACTOR: f32 = 0.3;

/// Penetration slop ignored by the velocity-bias term.
pub const VELOCITY_SLOP: f32 = 0.003;

/// Below this (negative, i.e. closing) normal velocity, restitution is
/// not applied, to suppress resting-contact jitter.
pub const RESTITUTION_VELOCITY_THRESHOLD: f32 = -0.5;

/// Number of {regenerate contacts, project positions} passes run by
/// `World::integrate_positions` after each position integration step.
pub const POSITION_ITERATIONS: u32 = 10;

/// Fraction of remaining penetration corrected per position-projection pass.
pub const POSITION_CORRECTION_FACTOR: f32 = 0.2;

/// Penetration slop ignored by the position-projection term.
pub const POSITION_SLOP: f32 = 0.005;
