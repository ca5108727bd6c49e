//! Boolean GJK intersection test over the Minkowski difference of two OBBs.
//!
//! This only answers "do they overlap" — penetration depth and normal
//! come from [`crate::collision::sat`] once GJK confirms an overlap.

use glam::{Quat, Vec3};

use crate::config::GJK_MAX_ITERATIONS;

use super::support::support_box;

struct BoxSupport {
    center: Vec3,
    orientation: Quat,
    half_extents: Vec3,
}

impl BoxSupport {
    fn support(&self, dir: Vec3) -> Vec3 {
        support_box(self.center, self.orientation, self.half_extents, dir)
    }
}

fn minkowski_support(a: &BoxSupport, b: &BoxSupport, dir: Vec3) -> Vec3 {
    a.support(dir) - b.support(-dir)
}

/// Returns `true` if the two oriented boxes overlap.
#[allow(clippy::too_many_arguments)]
pub fn intersect_boxes(
    center_a: Vec3,
    orientation_a: Quat,
    half_extents_a: Vec3,
    center_b: Vec3,
    orientation_b: Quat,
    half_extents_b: Vec3,
) -> bool {
    let a = BoxSupport {
        center: center_a,
        orientation: orientation_a,
        half_extents: half_extents_a,
    };
    let b = BoxSupport {
        center: center_b,
        orientation: orientation_b,
        half_extents: half_extents_b,
    };

    let mut direction = center_b - center_a;
    if direction.length_squared() < 1e-12 {
        direction = Vec3::X;
    }

    let mut simplex: Vec<Vec3> = Vec::with_capacity(4);
    let s0 = minkowski_support(&a, &b, direction);
    if s0.dot(direction) <= 0.0 {
        return false;
    }
    simplex.push(s0);
    direction = -s0;

    for _ in 0..GJK_MAX_ITERATIONS {
        let point = minkowski_support(&a, &b, direction);
        if point.dot(direction) <= 0.0 {
            return false;
        }
        simplex.push(point);

        match do_simplex(&mut simplex, &mut direction) {
            SimplexResult::ContainsOrigin => return true,
            SimplexResult::Continue => {}
        }
    }

    false
}

enum SimplexResult {
    ContainsOrigin,
    Continue,
}

fn do_simplex(simplex: &mut Vec<Vec3>, direction: &mut Vec3) -> SimplexResult {
    match simplex.len() {
        2 => line_case(simplex, direction),
        3 => triangle_case(simplex, direction),
        4 => tetrahedron_case(simplex, direction),
        _ => SimplexResult::Continue,
    }
}

fn line_case(simplex: &[Vec3], direction: &mut Vec3) -> SimplexResult {
    let a = simplex[1];
    let b = simplex[0];
    let ab = b - a;
    let ao = -a;

    let mut new_dir = ab.cross(ao).cross(ab);
    if new_dir.length_squared() < 1e-12 {
        new_dir = Vec3::new(-ab.y, ab.x, 0.0);
        if new_dir.length_squared() < 1e-12 {
            new_dir = Vec3::X;
        }
    }
    *direction = new_dir;
    SimplexResult::Continue
}

fn triangle_case(simplex: &mut Vec<Vec3>, direction: &mut Vec3) -> SimplexResult {
    let a = simplex[2];
    let b = simplex[1];
    let c = simplex[0];
    let ab = b - a;
    let ac = c - a;
    let ao = -a;
    let abc = ab.cross(ac);

    if abc.cross(ac).dot(ao) > 0.0 {
        // Origin is outside edge AC: reduce to {A, C}.
        simplex.remove(1); // remove B
        *direction = ac.cross(ao).cross(ac);
        return SimplexResult::Continue;
    }

    if ab.cross(abc).dot(ao) > 0.0 {
        // Origin is outside edge AB: reduce to {A, B}.
        simplex.remove(0); // remove C
        *direction = ab.cross(ao).cross(ab);
        return SimplexResult::Continue;
    }

    if abc.dot(ao) > 0.0 {
        *direction = abc;
    } else {
        // Re-wind so the new tetrahedron face normals stay consistent.
        simplex.swap(0, 1);
        *direction = -abc;
    }
    SimplexResult::Continue
}

fn tetrahedron_case(simplex: &mut Vec<Vec3>, direction: &mut Vec3) -> SimplexResult {
    let a = simplex[3];
    let b = simplex[2];
    let c = simplex[1];
    let d = simplex[0];
    let ao = -a;

    let abc = (b - a).cross(c - a);
    let acd = (c - a).cross(d - a);
    let adb = (d - a).cross(b - a);

    if abc.dot(ao) > 0.0 {
        *simplex = vec![c, b, a];
        *direction = abc;
        return SimplexResult::Continue;
    }
    if acd.dot(ao) > 0.0 {
        *simplex = vec![d, c, a];
        *direction = acd;
        return SimplexResult::Continue;
    }
    if adb.dot(ao) > 0.0 {
        *simplex = vec![b, d, a];
        *direction = adb;
        return SimplexResult::Continue;
    }

    SimplexResult::ContainsOrigin
}
