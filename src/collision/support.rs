//! Support and closest-point primitives shared by the GJK, SAT, and
//! sphere-pair detectors.

use glam::{Quat, Vec3};

/// Returns the OBB vertex farthest along `dir`.
///
/// World-space axes are `orientation`-rotated unit axes; for each axis the
/// sign of its dot product with `dir` selects which face the vertex sits
/// on. The sign of zero is treated as positive, matching the reference
/// behavior for a direction exactly perpendicular to an axis.
pub fn support_box(center: Vec3, orientation: Quat, half_extents: Vec3, dir: Vec3) -> Vec3 {
    let axes = [orientation * Vec3::X, orientation * Vec3::Y, orientation * Vec3::Z];
    let extents = [half_extents.x, half_extents.y, half_extents.z];

    let mut vertex = center;
    for i in 0..3 {
        let sign = if axes[i].dot(dir) >= 0.0 { 1.0 } else { -1.0 };
        vertex += axes[i] * (extents[i] * sign);
    }
    vertex
}

/// Returns the closest point to `point` on the surface or interior of an OBB.
///
/// `point - center` is rotated into the box's local frame, clamped to
/// `[-h, h]` per axis, then rotated back and translated.
pub fn closest_point_on_obb(point: Vec3, center: Vec3, orientation: Quat, half_extents: Vec3) -> Vec3 {
    let local = orientation.inverse() * (point - center);
    let clamped = Vec3::new(
        local.x.clamp(-half_extents.x, half_extents.x),
        local.y.clamp(-half_extents.y, half_extents.y),
        local.z.clamp(-half_extents.z, half_extents.z),
    );
    center + orientation * clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn support_box_identity_orientation_reduces_to_axis_aligned() {
        let half_extents = Vec3::new(1.0, 2.0, 3.0);
        let v = support_box(Vec3::ZERO, Quat::IDENTITY, half_extents, Vec3::new(1.0, -1.0, 1.0));
        assert_eq!(v, Vec3::new(1.0, -2.0, 3.0));
    }

    #[test]
    fn support_box_zero_dot_treated_as_positive() {
        let half_extents = Vec3::ONE;
        let v = support_box(Vec3::ZERO, Quat::IDENTITY, half_extents, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(v.x, 1.0);
        assert_eq!(v.z, 1.0);
    }

    #[test]
    fn closest_point_on_obb_identity_orientation_clamps_per_axis() {
        let half_extents = Vec3::splat(1.0);
        let p = closest_point_on_obb(Vec3::new(5.0, 0.0, -5.0), Vec3::ZERO, Quat::IDENTITY, half_extents);
        assert_eq!(p, Vec3::new(1.0, 0.0, -1.0));
    }

    #[test]
    fn closest_point_on_obb_interior_point_is_unchanged() {
        let half_extents = Vec3::splat(2.0);
        let p = closest_point_on_obb(Vec3::new(0.5, -0.5, 1.0), Vec3::ZERO, Quat::IDENTITY, half_extents);
        assert_eq!(p, Vec3::new(0.5, -0.5, 1.0));
    }

    #[test]
    fn closest_point_on_obb_rotated_box() {
        let rotation = Quat::from_rotation_z(std::f32::consts::FRAC_PI_2);
        let half_extents = Vec3::new(1.0, 2.0, 1.0);
        // After a 90 degree rotation about Z, the box's local X axis points along world Y.
        let p = closest_point_on_obb(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO, rotation, half_extents);
        assert!(p.length() < 2.01);
    }
}
