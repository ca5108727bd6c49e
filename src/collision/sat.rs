//! Separating Axis Theorem test for two oriented boxes.
//!
//! Only invoked once [`crate::collision::gjk::intersect_boxes`] has
//! confirmed overlap; this pass recovers the minimum-penetration axis and
//! depth that GJK's boolean answer doesn't carry.

use glam::{Quat, Vec3};

use crate::config::{SAT_EDGE_DEGENERACY_SQ, SAT_PARALLEL_EPSILON};

/// Minimum-translation-vector result of a box-box SAT test.
pub struct SatResult {
    /// Unit vector pointing from box A toward box B along the axis of
    /// least penetration.
    pub normal: Vec3,
    pub penetration: f32,
}

/// Runs the 15-axis SAT test (3 face axes per box, 9 edge cross products).
///
/// Returns `None` if a separating axis is found. Near-parallel edge pairs
/// are inflated by [`SAT_PARALLEL_EPSILON`] before testing (Gottschalk's
/// safeguard) and truly degenerate cross products are skipped outright,
/// since they're already covered by the corresponding face axes.
pub fn intersect_boxes(
    center_a: Vec3,
    orientation_a: Quat,
    half_extents_a: Vec3,
    center_b: Vec3,
    orientation_b: Quat,
    half_extents_b: Vec3,
) -> Option<SatResult> {
    let relative_pos = center_b - center_a;

    let axes_a = [
        orientation_a * Vec3::X,
        orientation_a * Vec3::Y,
        orientation_a * Vec3::Z,
    ];
    let axes_b = [
        orientation_b * Vec3::X,
        orientation_b * Vec3::Y,
        orientation_b * Vec3::Z,
    ];
    let extents_a = [half_extents_a.x, half_extents_a.y, half_extents_a.z];
    let extents_b = [half_extents_b.x, half_extents_b.y, half_extents_b.z];

    let mut test_axes: Vec<Vec3> = Vec::with_capacity(15);
    test_axes.extend_from_slice(&axes_a);
    test_axes.extend_from_slice(&axes_b);

    for axis_a in &axes_a {
        for axis_b in &axes_b {
            let cross = axis_a.cross(*axis_b);
            let len_sq = cross.length_squared();
            if len_sq < SAT_EDGE_DEGENERACY_SQ {
                continue;
            }
            test_axes.push(cross / len_sq.sqrt());
        }
    }

    let mut min_overlap = f32::MAX;
    let mut min_axis = Vec3::ZERO;

    for axis in test_axes {
        let mut extent_a = 0.0;
        let mut extent_b = 0.0;
        for i in 0..3 {
            let dot_a = axes_a[i].dot(axis).abs();
            let dot_a = if dot_a < SAT_PARALLEL_EPSILON { 0.0 } else { dot_a } + SAT_PARALLEL_EPSILON;
            extent_a += dot_a * extents_a[i];

            let dot_b = axes_b[i].dot(axis).abs();
            let dot_b = if dot_b < SAT_PARALLEL_EPSILON { 0.0 } else { dot_b } + SAT_PARALLEL_EPSILON;
            extent_b += dot_b * extents_b[i];
        }

        let projection = relative_pos.dot(axis);
        let overlap = (extent_a + extent_b) - projection.abs();

        if overlap <= 0.0 {
            return None;
        }

        if overlap < min_overlap {
            min_overlap = overlap;
            min_axis = if projection < 0.0 { -axis } else { axis };
        }
    }

    Some(SatResult {
        normal: min_axis.normalize_or_zero(),
        penetration: min_overlap,
    })
}
