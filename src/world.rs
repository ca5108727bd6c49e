//! The simulation container and its fixed-timestep substep loop.

use glam::Vec3;
use log::{debug, trace};

use crate::collision::{generate_contacts, Contact};
use crate::config::DEFAULT_GRAVITY;
use crate::core::{Body, BodyDef, BodyId};
use crate::dynamics::solver::{correct_positions, solve_velocities};
use crate::error::{PhysicsError, PhysicsResult};
use crate::utils::logging::ScopedTimer;

use crate::config::{POSITION_ITERATIONS, VELOCITY_ITERATIONS};

/// Owns every body in the simulation plus the scratch contact buffer
/// reused across substeps.
///
/// Bodies are appended, never removed, so a [`BodyId`] returned by
/// [`World::create_body`] stays valid for the life of the `World`.
pub struct World {
    bodies: Vec<Body>,
    gravity: Vec3,
    contacts: Vec<Contact>,
}

impl World {
    /// Creates a world using the default gravity vector `(0, -9.81, 0)`.
    pub fn new() -> Self {
        Self::with_gravity(Vec3::from(DEFAULT_GRAVITY))
    }

    /// Creates a world with a caller-supplied gravity vector.
    pub fn with_gravity(gravity: Vec3) -> Self {
        Self {
            bodies: Vec::new(),
            gravity,
            contacts: Vec::new(),
        }
    }

    /// Appends a body built from `def` and returns its stable index.
    pub fn create_body(&mut self, def: BodyDef) -> BodyId {
        let id = BodyId(self.bodies.len() as u32);
        self.bodies.push(Body::from_def(def));
        id
    }

    /// Read-only access to every body, in creation order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.index())
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id.index())
    }

    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }

    /// Ensures the contact buffer has capacity for every unordered pair of
    /// the current body count, returning [`PhysicsError::OutOfMemory`] if
    /// the allocator cannot satisfy the reservation.
    fn reserve_contact_capacity(&mut self) -> PhysicsResult<()> {
        let n = self.bodies.len();
        let pairs = n.saturating_mul(n.saturating_sub(1)) / 2;
        if self.contacts.capacity() < pairs {
            let additional = pairs - self.contacts.capacity();
            self.contacts
                .try_reserve(additional)
                .map_err(|_| PhysicsError::OutOfMemory { pairs })?;
        }
        Ok(())
    }

    /// Advances the simulation by `timestep`, split into `substep` equal
    /// fixed steps.
    ///
    /// `substep == 0` is a programmer error, enforced with
    /// `debug_assert!` rather than a `Result`, since it never arises from
    /// external/runtime conditions the way `OutOfMemory` can.
    pub fn step(&mut self, timestep: f32, substep: u16) -> PhysicsResult<()> {
        debug_assert!(substep > 0, "World::step requires substep > 0");
        let _timer = ScopedTimer::new("world.step");

        self.reserve_contact_capacity()?;
        let dt = timestep / substep as f32;

        for _ in 0..substep {
            self.integrate_velocities(dt);

            generate_contacts(&self.bodies, &mut self.contacts);
            trace!("generated {} contacts", self.contacts.len());

            {
                let _timer = ScopedTimer::new("world.solve_velocities");
                solve_velocities(&mut self.bodies, &self.contacts, dt, VELOCITY_ITERATIONS);
            }

            self.integrate_positions(dt);
        }

        debug!(
            "stepped {} substeps over {} bodies, {} contacts in last substep",
            substep,
            self.bodies.len(),
            self.contacts.len()
        );
        Ok(())
    }

    fn integrate_velocities(&mut self, dt: f32) {
        for body in &mut self.bodies {
            if body.is_static() {
                continue;
            }
            body.velocity += self.gravity * dt;
        }
    }

    /// Integrates positions, then runs [`POSITION_ITERATIONS`] passes of
    /// {regenerate contacts, project positions} to resolve the
    /// penetration introduced by this step's motion.
    fn integrate_positions(&mut self, dt: f32) {
        for body in &mut self.bodies {
            if body.is_static() {
                continue;
            }
            body.position += body.velocity * dt;
        }

        let _timer = ScopedTimer::new("world.correct_positions");
        for _ in 0..POSITION_ITERATIONS {
            generate_contacts(&self.bodies, &mut self.contacts);
            correct_positions(&mut self.bodies, &self.contacts);
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
