//! Particles - registry, emission, and kinematics
//!
//! One `ParticleSystem` is the whole simulation context: it owns the live
//! particle set, the population ceiling, the clock, and the RNG used for
//! stochastic emission. The host constructs it once and drives it with
//! `update(delta, tilemap)` per tick and `draw(viewpoint, target)` per
//! frame. There is no module-level state.
//!
//! Registry and eviction policy in system/, spawn throttling in emission/,
//! per-particle lifecycle in particle/ and kinetic/.

use std::collections::HashMap;

#[path = "particle/particle.rs"]
mod particle;
#[path = "kinetic/kinetic.rs"]
mod kinetic;
#[path = "system/system.rs"]
mod system;
#[path = "system/emission.rs"]
mod emission;
#[path = "init/random.rs"]
mod random;
#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "types/types.rs"]
mod types;

pub use kinetic::KineticBody;
pub use particle::{Particle, ParticleBody, ParticleId};
pub use perf_stats::PerfStats;
pub use types::{Puff, Spark};

use perf_timer::PerfTimer;

/// Random number generator (xorshift32)
#[inline]
pub(crate) fn xorshift32(state: &mut u32) -> u32 {
    random::xorshift32(state)
}

/// Default population ceiling; hosts override via `set_particle_limit`.
const DEFAULT_PARTICLE_LIMIT: usize = 300;

/// Eviction walks the radius-sorted population with this stride, removing
/// one particle per stride position. See `ParticleSystem::remove_particles`.
const EVICTION_STRIDE: usize = 5;

/// The particle registry and simulation context
pub struct ParticleSystem {
    particles: HashMap<ParticleId, Box<dyn Particle>>,
    particle_limit: usize,
    /// Simulation clock in time units; advances by `delta` each update.
    now: f64,
    /// Next handle value; handles are never reused.
    next_id: u64,
    rng_state: u32,
    perf_stats: PerfStats,
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
