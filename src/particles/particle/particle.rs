//! Per-particle lifecycle: identity, age, and the dispatch surface
//!
//! Variant particle types implement `Particle` and the registry holds them
//! as trait objects; it never assumes a concrete type. `ParticleBody` is
//! the shared state every variant embeds.

use crate::math::Vec2;
use crate::render::DrawTarget;
use crate::tilemap::Tilemap;

/// Placeholder paint: small magenta dot (ABGR), hard to miss on screen.
const PLACEHOLDER_COLOR: u32 = 0xFFFF00FF;

/// Opaque unique handle for a live particle.
///
/// Assigned monotonically and never reused. The inner value carries no
/// meaning beyond identity; ordering is only used internally to make
/// radius-sort ties deterministic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticleId(pub(super) u64);

/// Capability set the registry needs from every particle variant.
pub trait Particle {
    /// Advance one tick. `delta` is the caller-supplied frame duration;
    /// kinematic variants resolve against `map` here.
    fn update(&mut self, delta: f64, map: &dyn Tilemap);

    /// Paint in local space: the registry has already translated to the
    /// particle's position and scaled by its radius.
    fn draw(&self, g: &mut dyn DrawTarget);

    /// True while `age < 1` for the given clock reading.
    fn alive(&self, now: f64) -> bool;

    /// Death hook, invoked exactly once when the registry removes the
    /// particle (aged out or evicted). Nothing by default.
    fn kill(&mut self) {}

    fn position(&self) -> Vec2;

    fn radius(&self) -> f32;
}

/// Shared state for every particle variant
#[derive(Clone, Copy, Debug)]
pub struct ParticleBody {
    pub position: Vec2,
    /// Visual size and collision extent. >= 0.
    pub radius: f32,
    /// Duration in time units; `f64::INFINITY` makes the particle immortal.
    pub lifetime: f64,
    spawn_time: f64,
}

impl ParticleBody {
    /// `now` is the registry clock at the moment of spawning.
    pub fn new(position: Vec2, now: f64) -> Self {
        Self {
            position,
            radius: 1.0,
            lifetime: 5000.0,
            spawn_time: now,
        }
    }

    /// Progress through the lifetime as a ratio; dead at 1.
    pub fn age(&self, now: f64) -> f64 {
        (now - self.spawn_time) / self.lifetime
    }

    pub fn alive(&self, now: f64) -> bool {
        self.age(now) < 1.0
    }

    /// Default paint, used by variants without a look of their own.
    pub fn draw(&self, g: &mut dyn DrawTarget) {
        g.fill_circle(0.0, 0.0, 2.0, PLACEHOLDER_COLOR);
    }
}
