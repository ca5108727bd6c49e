//! Pair detectors (`collide_sphere_sphere`, `collide_sphere_box`,
//! `collide_box_box`) and the contact generator that dispatches across all
//! body pairs each substep.

use glam::Vec3;

use crate::config::{DEGENERATE_LENGTH_SQ, FALLBACK_NORMAL};
use crate::core::{Body, BodyId, Shape};

use super::contact::Contact;
use super::gjk;
use super::sat;
use super::support::closest_point_on_obb;

fn combine_friction(a: f32, b: f32) -> f32 {
    (a.max(0.0) * b.max(0.0)).sqrt()
}

fn combine_restitution(a: f32, b: f32) -> f32 {
    a.max(b)
}

fn fallback_normal() -> Vec3 {
    Vec3::from(FALLBACK_NORMAL)
}

/// Detects a contact between two spheres, or `None` if they are disjoint.
#[allow(clippy::too_many_arguments)]
pub fn collide_sphere_sphere(
    body_a: BodyId,
    pos_a: Vec3,
    radius_a: f32,
    friction_a: f32,
    restitution_a: f32,
    body_b: BodyId,
    pos_b: Vec3,
    radius_b: f32,
    friction_b: f32,
    restitution_b: f32,
) -> Option<Contact> {
    let d = pos_b - pos_a;
    let r = radius_a + radius_b;
    let dist_sq = d.length_squared();
    if dist_sq > r * r {
        return None;
    }

    let dist = dist_sq.sqrt();
    let normal = if dist_sq > DEGENERATE_LENGTH_SQ {
        d / dist
    } else {
        fallback_normal()
    };
    let penetration = r - dist;

    Some(Contact {
        body_a,
        body_b,
        normal,
        point: pos_a + normal * (radius_a - penetration * 0.5),
        penetration,
        friction: combine_friction(friction_a, friction_b),
        restitution: combine_restitution(restitution_a, restitution_b),
    })
}

/// Detects a contact between a sphere and an OBB.
///
/// The normal points from the sphere toward the box; the contact
/// generator's box-sphere arm negates it so `body_a` stays the box.
pub fn collide_sphere_box(
    sphere_center: Vec3,
    radius: f32,
    box_center: Vec3,
    box_orientation: glam::Quat,
    box_half_extents: Vec3,
) -> Option<(Vec3, Vec3, f32)> {
    let closest = closest_point_on_obb(sphere_center, box_center, box_orientation, box_half_extents);
    let delta = closest - sphere_center;
    let dist_sq = delta.length_squared();
    if dist_sq > radius * radius {
        return None;
    }

    let dist = dist_sq.sqrt();
    let normal = if dist_sq > DEGENERATE_LENGTH_SQ {
        delta / dist
    } else {
        fallback_normal()
    };
    let penetration = radius - dist;
    Some((normal, closest, penetration))
}

/// Detects a contact between two OBBs via GJK (boolean) then SAT (normal +
/// depth). Returns `None` if GJK or SAT finds a separating axis.
#[allow(clippy::too_many_arguments)]
pub fn collide_box_box(
    body_a: BodyId,
    pos_a: Vec3,
    orientation_a: glam::Quat,
    half_extents_a: Vec3,
    friction_a: f32,
    restitution_a: f32,
    body_b: BodyId,
    pos_b: Vec3,
    orientation_b: glam::Quat,
    half_extents_b: Vec3,
    friction_b: f32,
    restitution_b: f32,
) -> Option<Contact> {
    if !gjk::intersect_boxes(pos_a, orientation_a, half_extents_a, pos_b, orientation_b, half_extents_b) {
        return None;
    }

    let result = sat::intersect_boxes(
        pos_a,
        orientation_a,
        half_extents_a,
        pos_b,
        orientation_b,
        half_extents_b,
    )?;

    Some(Contact {
        body_a,
        body_b,
        normal: result.normal,
        // Midpoint approximation — see the box-box open question in DESIGN.md.
        point: (pos_a + pos_b) * 0.5,
        penetration: result.penetration,
        friction: combine_friction(friction_a, friction_b),
        restitution: combine_restitution(restitution_a, restitution_b),
    })
}

/// Clears `contacts` and refills it with one entry per colliding,
/// non-static, non-`Line` pair `(i, j)` with `i < j`.
pub fn generate_contacts(bodies: &[Body], contacts: &mut Vec<Contact>) {
    contacts.clear();

    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let a = &bodies[i];
            let b = &bodies[j];
            if a.is_static() && b.is_static() {
                continue;
            }

            let id_a = BodyId(i as u32);
            let id_b = BodyId(j as u32);

            let contact = match (&a.shape, &b.shape) {
                (Shape::Line { .. }, _) | (_, Shape::Line { .. }) => None,
                (Shape::Sphere { radius: ra }, Shape::Sphere { radius: rb }) => {
                    collide_sphere_sphere(
                        id_a, a.position, *ra, a.friction, a.restitution,
                        id_b, b.position, *rb, b.friction, b.restitution,
                    )
                }
                (Shape::Sphere { radius }, Shape::Box { half_extents }) => {
                    // collide_sphere_box returns sphere->box, i.e. already A->B.
                    collide_sphere_box(a.position, *radius, b.position, b.orientation, *half_extents).map(
                        |(normal, point, penetration)| Contact {
                            body_a: id_a,
                            body_b: id_b,
                            normal,
                            point,
                            penetration,
                            friction: combine_friction(a.friction, b.friction),
                            restitution: combine_restitution(a.restitution, b.restitution),
                        },
                    )
                }
                (Shape::Box { half_extents }, Shape::Sphere { radius }) => {
                    // collide_sphere_box returns sphere->box, i.e. B->A here; negate for A->B.
                    collide_sphere_box(b.position, *radius, a.position, a.orientation, *half_extents).map(
                        |(normal, point, penetration)| Contact {
                            body_a: id_a,
                            body_b: id_b,
                            normal: -normal,
                            point,
                            penetration,
                            friction: combine_friction(a.friction, b.friction),
                            restitution: combine_restitution(a.restitution, b.restitution),
                        },
                    )
                }
                (
                    Shape::Box { half_extents: he_a },
                    Shape::Box { half_extents: he_b },
                ) => collide_box_box(
                    id_a, a.position, a.orientation, *he_a, a.friction, a.restitution,
                    id_b, b.position, b.orientation, *he_b, b.friction, b.restitution,
                ),
            };

            if let Some(contact) = contact {
                contacts.push(contact);
            }
        }
    }
}
