//! # Particle Dynamics
//!
//! Core kinematic primitives for a force-driven particle simulation: a 3D
//! vector value type ([`Vector3`]) and a point-mass particle ([`Particle`])
//! advanced by semi-implicit Euler integration with velocity damping.
//!
//! The crate is a library with no orchestration of its own. An external
//! stepper owns the per-frame loop: for each tick it applies forces to
//! each particle via [`Particle::add_force`], then calls
//! [`Particle::integrate`] exactly once per particle. Particles never
//! read each other's state during integration, so the population can be
//! stepped in parallel without locking.
//!
//! Numeric precision is fixed at build time; see the [`precision`] module.

pub mod constants;
pub mod particle;
pub mod precision;
pub mod vector;

pub use constants::*;
pub use particle::*;
pub use precision::*;
pub use vector::*;
