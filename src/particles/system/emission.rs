//! Emission controller: spawn throttling under population pressure
//!
//! Factories are plain closures `(position, spawn_time) -> particle`;
//! whatever extra construction data a variant needs rides along in the
//! closure's captures. Emission only ever inserts - eviction is the
//! update pass's job.

use crate::math::Vec2;

use super::particle::Particle;
use super::ParticleSystem;

/// Floor of the bulk-emission throttle; bulk spawning slows near the
/// ceiling but never fully stops.
const THROTTLE_FLOOR: f64 = 0.1;

impl ParticleSystem {
    /// Spawn roughly `amount` particles, throttled by population pressure.
    ///
    /// The requested amount is scaled by `max(0.1, 1 - (fill * 0.9)^6)`:
    /// close to 1 while the registry is empty, decaying smoothly toward
    /// the floor as the fill ratio passes the limit. The fractional
    /// remainder spawns stochastically, so continuous sub-unit emission
    /// rates average out correctly over many calls.
    pub fn emit<P, F>(&mut self, mut factory: F, amount: f64, position: Vec2)
    where
        P: Particle + 'static,
        F: FnMut(Vec2, f64) -> P,
    {
        // percent of limit filled
        let limit_filled = self.particles.len() as f64 / self.particle_limit as f64;
        // spawn less when near/over limit
        let mut amount = amount * (1.0 - (limit_filled * 0.9).powi(6)).max(THROTTLE_FLOOR);

        while amount > 1.0 || amount > self.random() {
            let particle = factory(position, self.now);
            self.add_particle(Box::new(particle));

            amount -= 1.0;
        }
    }

    /// Spawn exactly one particle, with no rate scaling.
    ///
    /// Only once the registry is already over its ceiling does suppression
    /// kick in, and then only probabilistically: the further over the
    /// limit, the likelier the spawn is skipped, but every call rolls
    /// independently.
    pub fn emit_single<P, F>(&mut self, factory: F, position: Vec2)
    where
        P: Particle + 'static,
        F: FnOnce(Vec2, f64) -> P,
    {
        // percent of limit filled
        let limit_filled = self.particles.len() as f64 / self.particle_limit as f64;
        // don't spawn less when over limit
        if limit_filled > 1.0 && limit_filled > 1.0 + self.random() {
            return;
        }

        let particle = factory(position, self.now);
        self.add_particle(Box::new(particle));
    }
}
