//! Point-mass particle state and its per-tick integration step.

use crate::precision::{Real, REAL_MAX};
use crate::vector::Vector3;

/// A single independent point mass.
///
/// The owning simulation loop drives each particle once per tick: zero or
/// more [`add_force`](Particle::add_force) calls followed by exactly one
/// [`integrate`](Particle::integrate) call, after which the force
/// accumulator is guaranteed clear.
///
/// Fields are private so the mass/inverse-mass invariant (zero inverse
/// mass means infinite mass, never a zero mass) is enforced at the
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// World-space position.
    position: Vector3,
    /// World-space velocity.
    velocity: Vector3,
    /// Standing acceleration field (typically gravity). Constant across
    /// steps; only an explicit setter changes it.
    acceleration: Vector3,
    /// Sum of forces applied since the last integration step. Zeroed at
    /// the end of every `integrate` call.
    force_accum: Vector3,
    /// Per-second multiplicative velocity decay, raised to the elapsed
    /// duration each step so drag is frame-rate independent. Conceptually
    /// in [0, 1]; not clamped here.
    damping: Real,
    /// Reciprocal of mass. Zero represents infinite mass (immovable).
    inverse_mass: Real,
}

impl Particle {
    /// Create a particle at the origin, at rest, with unit mass, no
    /// standing acceleration, and no damping (`damping = 1`).
    pub fn new() -> Self {
        Self {
            position: Vector3::ZERO,
            velocity: Vector3::ZERO,
            acceleration: Vector3::ZERO,
            force_accum: Vector3::ZERO,
            damping: 1.0,
            inverse_mass: 1.0,
        }
    }

    /// Advance the particle by `duration` seconds using semi-implicit
    /// Euler integration.
    ///
    /// In order: position moves by the pre-step velocity, then velocity
    /// picks up the standing acceleration plus the accumulated forces
    /// scaled by inverse mass, then damping decays the velocity, then the
    /// force accumulator is cleared.
    ///
    /// An infinite-mass particle (`inverse_mass <= 0`) does not move, but
    /// its accumulator is still cleared so stale forces cannot leak into
    /// a later mass change.
    ///
    /// # Panics
    ///
    /// Panics if `duration` is not strictly positive; that is a caller
    /// bug, not a recoverable condition.
    pub fn integrate(&mut self, duration: Real) {
        assert!(duration > 0.0, "integration duration must be positive");

        if self.inverse_mass <= 0.0 {
            self.clear_accumulator();
            return;
        }

        // Position update uses the velocity from before this step.
        self.position.add_scaled_vector(self.velocity, duration);

        let mut resulting_acc = self.acceleration;
        resulting_acc.add_scaled_vector(self.force_accum, self.inverse_mass);

        self.velocity.add_scaled_vector(resulting_acc, duration);

        // Drag scaled by elapsed time, so behavior is tick-rate independent.
        self.velocity *= self.damping.powf(duration);

        self.clear_accumulator();
    }

    /// Set the particle's mass.
    ///
    /// # Panics
    ///
    /// Panics if `mass` is zero. Use [`set_inverse_mass`](Self::set_inverse_mass)
    /// with `0.0` to make a particle immovable.
    pub fn set_mass(&mut self, mass: Real) {
        assert!(mass != 0.0, "particle mass may not be zero");
        self.inverse_mass = 1.0 / mass;
    }

    /// The particle's mass, or [`REAL_MAX`] for an infinite-mass particle.
    pub fn mass(&self) -> Real {
        if self.inverse_mass == 0.0 {
            REAL_MAX
        } else {
            1.0 / self.inverse_mass
        }
    }

    /// Set the inverse mass directly. Zero makes the particle immovable.
    /// Negative values are not checked here.
    pub fn set_inverse_mass(&mut self, inverse_mass: Real) {
        self.inverse_mass = inverse_mass;
    }

    /// The particle's inverse mass.
    pub fn inverse_mass(&self) -> Real {
        self.inverse_mass
    }

    /// Whether the particle has finite (positive inverse) mass.
    pub fn has_finite_mass(&self) -> bool {
        self.inverse_mass > 0.0
    }

    /// Set the per-second damping factor.
    pub fn set_damping(&mut self, damping: Real) {
        self.damping = damping;
    }

    /// The per-second damping factor.
    pub fn damping(&self) -> Real {
        self.damping
    }

    /// Set the world-space position.
    pub fn set_position(&mut self, position: Vector3) {
        self.position = position;
    }

    /// The world-space position.
    pub fn position(&self) -> Vector3 {
        self.position
    }

    /// Set the world-space velocity.
    pub fn set_velocity(&mut self, velocity: Vector3) {
        self.velocity = velocity;
    }

    /// The world-space velocity.
    pub fn velocity(&self) -> Vector3 {
        self.velocity
    }

    /// Set the standing acceleration field (e.g. gravity).
    pub fn set_acceleration(&mut self, acceleration: Vector3) {
        self.acceleration = acceleration;
    }

    /// The standing acceleration field.
    pub fn acceleration(&self) -> Vector3 {
        self.acceleration
    }

    /// Zero the force accumulator. Called automatically at the end of
    /// every integration step.
    pub fn clear_accumulator(&mut self) {
        self.force_accum.clear();
    }

    /// Add a force to be applied at the next integration step only.
    ///
    /// Forces accumulate: independent force generators each add their
    /// contribution without awareness of one another.
    pub fn add_force(&mut self, force: Vector3) {
        self.force_accum += force;
    }

    /// The force accumulated since the last integration step.
    pub fn force_accum(&self) -> Vector3 {
        self.force_accum
    }
}

impl Default for Particle {
    fn default() -> Self {
        Self::new()
    }
}
