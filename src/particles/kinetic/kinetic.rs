//! Kinematic specialization: velocity integration and tile collision
//!
//! Collision is axis-separated: each of the four axis-directions is tested
//! independently in cell-space, and penetration is corrected by snapping
//! the particle's edge back onto the cell boundary. The "solid then open"
//! pattern (blocking cell backed by an open cell) finds the true boundary
//! even when the particle is already embedded one cell deep from a partial
//! correction on an earlier tick.

use crate::math::Vec2;
use crate::particles::ParticleBody;
use crate::tilemap::Tilemap;

/// Moving circular body; position changes only through `integrate` or
/// collision correction.
#[derive(Clone, Copy, Debug)]
pub struct KineticBody {
    pub body: ParticleBody,
    pub velocity: Vec2,
}

impl KineticBody {
    pub fn new(body: ParticleBody, velocity: Vec2) -> Self {
        Self { body, velocity }
    }

    /// Plain Euler step: `position += velocity * delta`.
    pub fn integrate(&mut self, delta: f64) {
        self.body.position = self.body.position + self.velocity * delta as f32;
    }

    /// Resolve penetration against the tile grid.
    ///
    /// Works in cell-space (world / tile_size, floor to index; a point
    /// exactly on a boundary belongs to the lower cell). When both axes
    /// penetrate, only the deeper one is corrected this tick - the next
    /// tick picks up the remainder. The corrected axis has its velocity
    /// component zeroed.
    pub fn collide(&mut self, map: &dyn Tilemap) {
        let tile_size = map.tile_size();
        let scaled = self.body.position / tile_size;
        let (x, y) = (scaled.x, scaled.y);
        let radius = self.body.radius / tile_size;
        let mut delta_x = 0.0f32;
        let mut delta_y = 0.0f32;

        let cell = |v: f32| v.floor() as i32;

        // -x: left edge inside a solid cell whose right neighbour is open
        if map.is_solid(cell(x - radius), cell(y)) && !map.is_solid(cell(x - radius) + 1, cell(y)) {
            delta_x = (x - radius).ceil() + radius - x;
        }

        // +x: squeezed from both sides keeps the smaller correction
        if map.is_solid(cell(x + radius), cell(y)) && !map.is_solid(cell(x + radius) - 1, cell(y)) {
            let new_delta_x = (x + radius).floor() - radius - x;
            if delta_x == 0.0 || new_delta_x.abs() < delta_x.abs() {
                delta_x = new_delta_x;
            }
        }

        // -y
        if map.is_solid(cell(x), cell(y - radius)) && !map.is_solid(cell(x), cell(y - radius) + 1) {
            delta_y = (y - radius).ceil() + radius - y;
        }

        // +y
        if map.is_solid(cell(x), cell(y + radius)) && !map.is_solid(cell(x), cell(y + radius) - 1) {
            let new_delta_y = (y + radius).floor() - radius - y;
            if delta_y == 0.0 || new_delta_y.abs() < delta_y.abs() {
                delta_y = new_delta_y;
            }
        }

        if delta_x != 0.0 && delta_y != 0.0 {
            // Both axes penetrate: resolve the deeper one first, leave the
            // shallower for the next tick.
            if delta_x.abs() >= delta_y.abs() {
                self.body.position.x += delta_x * tile_size;
                self.velocity.x = 0.0;
            } else {
                self.body.position.y += delta_y * tile_size;
                self.velocity.y = 0.0;
            }
        } else if delta_x != 0.0 {
            self.body.position.x += delta_x * tile_size;
            self.velocity.x = 0.0;
        } else if delta_y != 0.0 {
            self.body.position.y += delta_y * tile_size;
            self.velocity.y = 0.0;
        }
    }
}
