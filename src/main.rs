//! Ballistic particle demo.
//!
//! Plays the role of the external stepper the core deliberately leaves
//! out: spawns a small population, applies forces, and drives the per-tick
//! protocol (any number of `add_force` calls, then exactly one `integrate`
//! per particle).

use log::info;
use particle_dynamics::{constants, Particle, Real, Vector3};
use rand::Rng;

const PARTICLE_COUNT: usize = 12;
const TIMESTEP: Real = 1.0 / 60.0;
const TICKS: usize = 300;

/// A constant crosswind applied as a force each tick, so heavier
/// particles drift less than lighter ones.
const WIND: Vector3 = Vector3::new(1.5, 0.0, 0.4);

/// Launch particles upward with jittered velocities, plus one immovable
/// anchor to exercise the infinite-mass path.
fn spawn_particles() -> Vec<Particle> {
    let mut rng = rand::rng();
    let mut particles = Vec::with_capacity(PARTICLE_COUNT + 1);

    for _ in 0..PARTICLE_COUNT {
        let mut p = Particle::new();
        p.set_mass(rng.random_range(0.5..2.0));
        p.set_damping(constants::DEFAULT_DAMPING);
        p.set_acceleration(constants::GRAVITY);
        p.set_velocity(Vector3::new(
            rng.random_range(-2.0..2.0),
            rng.random_range(8.0..14.0),
            rng.random_range(-2.0..2.0),
        ));
        particles.push(p);
    }

    let mut anchor = Particle::new();
    anchor.set_inverse_mass(0.0);
    anchor.set_position(Vector3::new(0.0, 5.0, 0.0));
    particles.push(anchor);

    particles
}

fn main() {
    env_logger::init();

    let mut particles = spawn_particles();
    info!("spawned {} particles (one immovable anchor)", particles.len());

    for tick in 0..TICKS {
        for particle in particles.iter_mut() {
            particle.add_force(WIND);
            particle.integrate(TIMESTEP);
        }

        if tick % 60 == 0 {
            let leader = &particles[0];
            info!(
                "tick {tick:3}: particle 0 at {:?}, velocity {:?}",
                leader.position(),
                leader.velocity()
            );
        }
    }

    let anchor = particles.last().expect("population is non-empty");
    info!(
        "done after {TICKS} ticks; anchor still at {:?}",
        anchor.position()
    );
}
