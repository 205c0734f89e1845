//! Registry core: tick updates, viewport-filtered draw, and eviction

use std::collections::HashMap;

use crate::fast;

use crate::render::{DrawTarget, Viewpoint};
use crate::tilemap::Tilemap;

use super::{
    ParticleId, ParticleSystem, PerfStats, PerfTimer, xorshift32, DEFAULT_PARTICLE_LIMIT,
    EVICTION_STRIDE,
};
use super::particle::Particle;

/// Any fixed non-zero seed works; hosts that need determinism use `with_seed`.
const DEFAULT_RNG_SEED: u32 = 0x9E37_79B9;

impl ParticleSystem {
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_RNG_SEED)
    }

    pub fn with_seed(seed: u32) -> Self {
        Self {
            particles: HashMap::new(),
            particle_limit: DEFAULT_PARTICLE_LIMIT,
            now: 0.0,
            next_id: 0,
            // Zero is a fixed point of xorshift; nudge it off.
            rng_state: if seed == 0 { 1 } else { seed },
            perf_stats: PerfStats::default(),
        }
    }

    /// Advance the simulation by `delta` time units.
    ///
    /// Every live particle is updated exactly once (order independent),
    /// the dead are killed and removed, and if the population then exceeds
    /// the ceiling an eviction pass thins it. The caller is trusted to hand
    /// in a non-negative, finite delta.
    pub fn update(&mut self, delta: f64, map: &dyn Tilemap) {
        let t0 = PerfTimer::start();
        self.now += delta;
        let now = self.now;

        let mut dead: Vec<ParticleId> = Vec::new();
        for (id, particle) in self.particles.iter_mut() {
            particle.update(delta, map);

            if !particle.alive(now) {
                dead.push(*id);
            }
        }

        for id in dead {
            if let Some(mut particle) = self.particles.remove(&id) {
                particle.kill();
                self.perf_stats.expired_total += 1;
            }
        }

        if self.particles.len() > self.particle_limit {
            self.remove_particles(self.particles.len() - self.particle_limit);
        }

        self.perf_stats.particle_count = self.particles.len() as u32;
        self.perf_stats.update_ms = t0.elapsed_ms();
    }

    /// Paint every particle visible through `view` onto `target`.
    ///
    /// Visibility is an AABB test of `position ± radius` against the view
    /// area; both axes must overlap. Invisible particles get no paint call
    /// at all. This pass never mutates particle state.
    pub fn draw(&self, view: &dyn Viewpoint, target: &mut dyn DrawTarget) {
        let view_area = view.view_area(target);

        for particle in self.particles.values() {
            let position = particle.position();
            let radius = particle.radius();

            let visible_x =
                position.x + radius > view_area.min_x && position.x - radius < view_area.max_x;
            let visible_y =
                position.y + radius > view_area.min_y && position.y - radius < view_area.max_y;

            if visible_x && visible_y {
                target.push();

                target.translate(position.x, position.y);
                target.scale(radius);

                particle.draw(target);

                target.pop();
            }
        }
    }

    /// Removes old particles when too many are in the scene.
    ///
    /// The population is sorted ascending by radius and walked with a
    /// stride of 5, killing one particle per stride position. A single
    /// call thins roughly a fifth of the requested excess; repeated ticks
    /// converge the population back under the limit.
    pub fn remove_particles(&mut self, amount: usize) {
        let mut sorted: Vec<(ParticleId, f32)> = self
            .particles
            .iter()
            .map(|(id, particle)| (*id, particle.radius()))
            .collect();
        // Ties fall back to handle order so repeated passes are stable.
        sorted.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));

        let amount = amount.min(sorted.len() / EVICTION_STRIDE);

        let mut i = 0;
        while i < amount * EVICTION_STRIDE {
            let (id, _) = *fast!(sorted, [i]);
            if let Some(mut particle) = self.particles.remove(&id) {
                particle.kill();
                self.perf_stats.evicted_total += 1;
            }
            i += EVICTION_STRIDE;
        }
    }

    /// Replace the population ceiling. No immediate eviction; the new
    /// ceiling takes effect on the next `update`.
    pub fn set_particle_limit(&mut self, limit: usize) {
        self.particle_limit = limit;
    }

    /// Insert a pre-built particle under a fresh handle.
    pub fn add_particle(&mut self, particle: Box<dyn Particle>) -> ParticleId {
        let id = ParticleId(self.next_id);
        self.next_id += 1;
        self.particles.insert(id, particle);
        self.perf_stats.spawned_total += 1;
        id
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn particle_limit(&self) -> usize {
        self.particle_limit
    }

    /// Current simulation clock reading.
    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }

    /// Uniform sample in [0, 1).
    pub(super) fn random(&mut self) -> f64 {
        xorshift32(&mut self.rng_state) as f64 / (u32::MAX as f64 + 1.0)
    }
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new()
    }
}
