//! Iterative impulse solver: a Baumgarte-stabilized velocity pass and a
//! pseudo-velocity position-projection pass, both running Gauss-Seidel
//! over the contact buffer in fixed `(body_a, body_b)` order.

use crate::collision::Contact;
use crate::config::{
    BAUMGARTE_FACTOR, POSITION_CORRECTION_FACTOR, POSITION_SLOP, RESTITUTION_VELOCITY_THRESHOLD,
    VELOCITY_SLOP,
};
use crate::core::Body;

/// Runs one Gauss-Seidel velocity-impulse pass over `contacts`.
///
/// Each contact reads the velocities already updated by the contacts
/// solved earlier in this same pass — this ordering dependency is load
/// bearing, not incidental, and must not be parallelized.
pub fn solve_velocities(bodies: &mut [Body], contacts: &[Contact], dt: f32, iterations: u32) {
    for _ in 0..iterations {
        for contact in contacts {
            solve_contact_velocity(bodies, contact, dt);
        }
    }
}

fn solve_contact_velocity(bodies: &mut [Body], contact: &Contact, dt: f32) {
    let inv_mass_a = bodies[contact.body_a.index()].inverse_mass;
    let inv_mass_b = bodies[contact.body_b.index()].inverse_mass;
    let inv_mass_sum = inv_mass_a + inv_mass_b;
    if inv_mass_sum == 0.0 {
        return;
    }

    let n = contact.normal;
    let pen = (contact.penetration - VELOCITY_SLOP).max(0.0);

    let rv = bodies[contact.body_b.index()].velocity - bodies[contact.body_a.index()].velocity;
    let vn = rv.dot(n);
    if vn > 0.0 && pen <= 0.0 {
        return;
    }

    let restitution = if vn < RESTITUTION_VELOCITY_THRESHOLD {
        contact.restitution
    } else {
        0.0
    };
    let bias = if dt > 0.0 { BAUMGARTE_FACTOR * pen / dt } else { 0.0 };

    let jn = (-(1.0 + restitution) * vn - bias) / inv_mass_sum;
    let jn = jn.max(0.0);

    bodies[contact.body_a.index()].velocity -= n * (jn * inv_mass_a);
    bodies[contact.body_b.index()].velocity += n * (jn * inv_mass_b);

    let rv = bodies[contact.body_b.index()].velocity - bodies[contact.body_a.index()].velocity;
    let tangent_raw = rv - n * rv.dot(n);
    let tangent_len_sq = tangent_raw.length_squared();
    if tangent_len_sq <= 1e-12 {
        return;
    }

    let t = tangent_raw / tangent_len_sq.sqrt();
    let jt = -(rv.dot(t)) / inv_mass_sum;
    let max_friction = contact.friction * jn;
    let jt = jt.clamp(-max_friction, max_friction);

    bodies[contact.body_a.index()].velocity -= t * (jt * inv_mass_a);
    bodies[contact.body_b.index()].velocity += t * (jt * inv_mass_b);
}

/// Runs one position-projection pass over `contacts`, nudging bodies apart
/// proportionally to their inverse mass.
pub fn correct_positions(bodies: &mut [Body], contacts: &[Contact]) {
    for contact in contacts {
        let inv_mass_a = bodies[contact.body_a.index()].inverse_mass;
        let inv_mass_b = bodies[contact.body_b.index()].inverse_mass;
        let inv_mass_sum = inv_mass_a + inv_mass_b;
        if inv_mass_sum == 0.0 {
            continue;
        }

        let correction = (contact.penetration - POSITION_SLOP).max(0.0);
        if correction <= 0.0 {
            continue;
        }
        let magnitude = POSITION_CORRECTION_FACTOR * correction / inv_mass_sum;
        let n = contact.normal;

        bodies[contact.body_a.index()].position -= n * (magnitude * inv_mass_a);
        bodies[contact.body_b.index()].position += n * (magnitude * inv_mass_b);
    }
}
