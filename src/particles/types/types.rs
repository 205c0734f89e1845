//! Built-in particle variants
//!
//! Two stock effects prove out the dispatch surface and back the facade's
//! emitters: `Spark` is the kinematic case (collides with the tilemap),
//! `Puff` drifts freely and ignores it. Game-specific variants live on the
//! host and implement `Particle` the same way.

use crate::math::Vec2;
use crate::render::DrawTarget;
use crate::tilemap::Tilemap;

use super::kinetic::KineticBody;
use super::particle::{Particle, ParticleBody};

// Colors packed ABGR, same layout the canvas blitter expects.
const SPARK_COLOR: u32 = 0xFF2FA6FF;
const PUFF_COLOR: u32 = 0xFF9A9A9A;

const SPARK_RADIUS: f32 = 1.5;
const SPARK_LIFETIME: f64 = 600.0;
/// Per-tick velocity decay, frame-based like the rest of the kinematics.
const SPARK_DRAG: f32 = 0.96;
/// Below this speed a spark is considered settled and stops drifting.
const SPARK_REST_SPEED: f32 = 0.001;

const PUFF_RADIUS: f32 = 4.0;
const PUFF_LIFETIME: f64 = 1200.0;
/// Radius growth per time unit; a puff swells as it fades.
const PUFF_GROWTH: f32 = 0.002;

/// Hot debris: flies, bounces off solid tiles, settles quickly.
pub struct Spark {
    kinetic: KineticBody,
}

impl Spark {
    pub fn new(position: Vec2, now: f64, velocity: Vec2) -> Self {
        let mut body = ParticleBody::new(position, now);
        body.radius = SPARK_RADIUS;
        body.lifetime = SPARK_LIFETIME;

        Self {
            kinetic: KineticBody::new(body, velocity),
        }
    }
}

impl Particle for Spark {
    fn update(&mut self, delta: f64, map: &dyn Tilemap) {
        self.kinetic.integrate(delta);
        self.kinetic.collide(map);

        self.kinetic.velocity = self.kinetic.velocity * SPARK_DRAG;
        if self.kinetic.velocity.length() < SPARK_REST_SPEED {
            self.kinetic.velocity = Vec2::zero();
        }
    }

    fn draw(&self, g: &mut dyn DrawTarget) {
        g.fill_circle(0.0, 0.0, 2.0, SPARK_COLOR);
    }

    fn alive(&self, now: f64) -> bool {
        self.kinetic.body.alive(now)
    }

    fn position(&self) -> Vec2 {
        self.kinetic.body.position
    }

    fn radius(&self) -> f32 {
        self.kinetic.body.radius
    }
}

/// Smoke-like drifter: no collision, grows while it lives.
pub struct Puff {
    body: ParticleBody,
    drift: Vec2,
}

impl Puff {
    pub fn new(position: Vec2, now: f64, drift: Vec2) -> Self {
        let mut body = ParticleBody::new(position, now);
        body.radius = PUFF_RADIUS;
        body.lifetime = PUFF_LIFETIME;

        Self { body, drift }
    }
}

impl Particle for Puff {
    fn update(&mut self, delta: f64, _map: &dyn Tilemap) {
        self.body.position = self.body.position + self.drift * delta as f32;
        self.body.radius += PUFF_GROWTH * delta as f32;
    }

    fn draw(&self, g: &mut dyn DrawTarget) {
        g.fill_circle(0.0, 0.0, 2.0, PUFF_COLOR);
    }

    fn alive(&self, now: f64) -> bool {
        self.body.alive(now)
    }

    fn position(&self) -> Vec2 {
        self.body.position
    }

    fn radius(&self) -> f32 {
        self.body.radius
    }
}
