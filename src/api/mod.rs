//! WASM facade - everything the JS host touches
//!
//! The core is host-agnostic; this module supplies the concrete
//! collaborators a browser host needs: a dense solid-cell grid satisfying
//! the `Tilemap` contract, a sprite buffer satisfying `DrawTarget` that
//! records visible circles into flat arrays (read zero-copy from JS via
//! ptr/len getters), and a fixed camera viewpoint. `ParticleWorld` bundles
//! them around one `ParticleSystem`.

use wasm_bindgen::prelude::*;

use crate::fast;

use serde::Deserialize;

use crate::math::Vec2;
use crate::particles::{xorshift32, ParticleSystem, Puff, Spark};
use crate::render::{DrawTarget, ViewArea, Viewpoint};
use crate::tilemap::Tilemap;

/// Dense bitmap of solid cells, owned by the host side of the boundary.
struct CellGrid {
    width: u32,
    height: u32,
    tile_size: f32,
    solid: Vec<u8>,
}

impl CellGrid {
    fn new(width: u32, height: u32, tile_size: f32) -> Self {
        Self {
            width,
            height,
            tile_size,
            solid: vec![0; (width * height) as usize],
        }
    }

    fn set_solid(&mut self, x: u32, y: u32, solid: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = (y * self.width + x) as usize;
        fast!(self.solid, [idx] = solid as u8);
    }
}

impl Tilemap for CellGrid {
    fn tile_size(&self) -> f32 {
        self.tile_size
    }

    // Total over all integers: anything outside the map is open space.
    fn is_solid(&self, cell_x: i32, cell_y: i32) -> bool {
        if cell_x < 0 || cell_y < 0 || cell_x >= self.width as i32 || cell_y >= self.height as i32 {
            return false;
        }
        let idx = (cell_y as u32 * self.width + cell_x as u32) as usize;
        *fast!(self.solid, [idx]) != 0
    }
}

/// Translation + uniform scale, the only transforms particles use.
#[derive(Clone, Copy)]
struct Transform {
    ox: f32,
    oy: f32,
    scale: f32,
}

impl Transform {
    fn identity() -> Self {
        Self { ox: 0.0, oy: 0.0, scale: 1.0 }
    }
}

/// Draw target that flattens paint calls into sprite records.
///
/// Layout: `data` holds `[x, y, radius]` per sprite (world space), `colors`
/// the parallel ABGR color. JS reads both straight out of wasm memory.
struct SpriteBuffer {
    view_w: f32,
    view_h: f32,
    stack: Vec<Transform>,
    current: Transform,
    data: Vec<f32>,
    colors: Vec<u32>,
}

impl SpriteBuffer {
    fn new() -> Self {
        Self {
            view_w: 0.0,
            view_h: 0.0,
            stack: Vec::new(),
            current: Transform::identity(),
            data: Vec::new(),
            colors: Vec::new(),
        }
    }

    fn begin(&mut self, view_w: f32, view_h: f32) {
        self.view_w = view_w;
        self.view_h = view_h;
        self.stack.clear();
        self.current = Transform::identity();
        self.data.clear();
        self.colors.clear();
    }
}

impl DrawTarget for SpriteBuffer {
    fn push(&mut self) {
        self.stack.push(self.current);
    }

    fn pop(&mut self) {
        self.current = self.stack.pop().unwrap_or_else(Transform::identity);
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.current.ox += x * self.current.scale;
        self.current.oy += y * self.current.scale;
    }

    fn scale(&mut self, factor: f32) {
        self.current.scale *= factor;
    }

    fn fill_circle(&mut self, x: f32, y: f32, diameter: f32, color: u32) {
        let t = self.current;
        self.data.push(t.ox + x * t.scale);
        self.data.push(t.oy + y * t.scale);
        self.data.push(diameter * t.scale * 0.5);
        self.colors.push(color);
    }

    fn width(&self) -> f32 {
        self.view_w
    }

    fn height(&self) -> f32 {
        self.view_h
    }
}

/// Camera centered on a world point; the target's extent gives the zoomless
/// view rectangle.
struct Camera {
    center: Vec2,
}

impl Viewpoint for Camera {
    fn view_area(&self, target: &dyn DrawTarget) -> ViewArea {
        let half = Vec2::new(target.width(), target.height()) * 0.5;
        let min = self.center - half;
        let max = self.center + half;

        ViewArea {
            min_x: min.x,
            max_x: max.x,
            min_y: min.y,
            max_y: max.y,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParticleSettings {
    particle_limit: Option<u32>,
    rng_seed: Option<u32>,
}

const TAU: f32 = std::f32::consts::TAU;

fn rand_unit(state: &mut u32) -> f32 {
    xorshift32(state) as f32 / (u32::MAX as f32 + 1.0)
}

/// The particle simulation as seen from JS
#[wasm_bindgen]
pub struct ParticleWorld {
    system: ParticleSystem,
    tilemap: CellGrid,
    sprites: SpriteBuffer,
    /// Separate stream from the emission RNG so visual jitter never shifts
    /// the spawn-count sequence.
    effect_rng: u32,
}

#[wasm_bindgen]
impl ParticleWorld {
    /// Grid dimensions in cells; `tile_size` in world units per cell.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, tile_size: f32) -> Result<ParticleWorld, String> {
        if !(tile_size > 0.0) {
            return Err(format!("tile_size must be > 0, got {}", tile_size));
        }

        Ok(ParticleWorld {
            system: ParticleSystem::new(),
            tilemap: CellGrid::new(width, height, tile_size),
            sprites: SpriteBuffer::new(),
            effect_rng: 0xC0FF_EE01,
        })
    }

    pub fn set_solid(&mut self, x: u32, y: u32, solid: bool) {
        self.tilemap.set_solid(x, y, solid);
    }

    pub fn set_particle_limit(&mut self, limit: u32) {
        self.system.set_particle_limit(limit as usize);
    }

    /// Apply a JSON settings blob (camelCase keys, all fields optional).
    pub fn apply_settings(&mut self, json: &str) -> Result<(), String> {
        let settings: ParticleSettings =
            serde_json::from_str(json).map_err(|e| e.to_string())?;

        if let Some(limit) = settings.particle_limit {
            self.system.set_particle_limit(limit as usize);
        }
        if let Some(seed) = settings.rng_seed {
            self.effect_rng = if seed == 0 { 1 } else { seed };
        }
        Ok(())
    }

    /// One simulation tick. `delta` in milliseconds; the host clamps
    /// pathological deltas (tab stalls) before calling.
    pub fn update(&mut self, delta: f64) {
        self.system.update(delta, &self.tilemap);
    }

    /// Burst of sparks from (x, y), headed in random directions.
    pub fn emit_sparks(&mut self, x: f32, y: f32, amount: f64, speed: f32) -> Result<(), String> {
        if !(x.is_finite() && y.is_finite() && speed.is_finite()) {
            return Err("spark emitter needs finite position and speed".to_string());
        }

        let rng = &mut self.effect_rng;
        self.system.emit(
            |position, now| {
                let angle = rand_unit(rng) * TAU;
                let pace = speed * (0.5 + rand_unit(rng) * 0.5);
                let velocity = Vec2::new(angle.cos(), angle.sin()) * pace;

                Spark::new(position, now, velocity)
            },
            amount,
            Vec2::new(x, y),
        );
        Ok(())
    }

    /// Single smoke puff drifting along (drift_x, drift_y).
    pub fn emit_puff(&mut self, x: f32, y: f32, drift_x: f32, drift_y: f32) -> Result<(), String> {
        if !(x.is_finite() && y.is_finite() && drift_x.is_finite() && drift_y.is_finite()) {
            return Err("puff emitter needs finite position and drift".to_string());
        }

        let drift = Vec2::new(drift_x, drift_y);
        self.system.emit_single(
            |position, now| Puff::new(position, now, drift),
            Vec2::new(x, y),
        );
        Ok(())
    }

    /// Fill the sprite buffer with every particle visible from a camera
    /// centered at (cam_x, cam_y) over a view_w x view_h rectangle.
    pub fn extract_sprites(&mut self, cam_x: f32, cam_y: f32, view_w: f32, view_h: f32) {
        self.sprites.begin(view_w, view_h);
        let camera = Camera { center: Vec2::new(cam_x, cam_y) };

        self.system.draw(&camera, &mut self.sprites);
    }

    pub fn sprites_ptr(&self) -> *const f32 {
        self.sprites.data.as_ptr()
    }

    /// Number of sprite records; `sprites_ptr` holds 3 floats per record.
    pub fn sprite_count(&self) -> u32 {
        self.sprites.colors.len() as u32
    }

    pub fn colors_ptr(&self) -> *const u32 {
        self.sprites.colors.as_ptr()
    }

    pub fn particle_count(&self) -> u32 {
        self.system.particle_count() as u32
    }

    pub fn perf_stats_json(&self) -> String {
        serde_json::to_string(&self.system.perf_stats()).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_grid_is_total_over_out_of_range_cells() {
        let mut grid = CellGrid::new(4, 4, 32.0);
        grid.set_solid(1, 1, true);

        assert!(grid.is_solid(1, 1));
        assert!(!grid.is_solid(-1, 0));
        assert!(!grid.is_solid(0, -5));
        assert!(!grid.is_solid(4, 0));
        assert!(!grid.is_solid(0, i32::MAX));
    }

    #[test]
    fn sprite_buffer_composes_translate_then_scale() {
        let mut buffer = SpriteBuffer::new();
        buffer.begin(100.0, 100.0);

        buffer.push();
        buffer.translate(10.0, 20.0);
        buffer.scale(3.0);
        buffer.fill_circle(0.0, 0.0, 2.0, 0xFF00_00FF);
        buffer.pop();

        // Circle lands at the translation point with radius = scale.
        assert_eq!(&buffer.data, &[10.0, 20.0, 3.0]);
        assert_eq!(&buffer.colors, &[0xFF00_00FF]);
    }

    #[test]
    fn world_round_trip_spawns_updates_and_extracts() {
        let mut world = ParticleWorld::new(8, 8, 32.0).expect("valid grid");

        world.emit_sparks(100.0, 100.0, 5.0, 2.0).unwrap();
        assert!(world.particle_count() >= 5);

        world.update(16.0);
        world.extract_sprites(100.0, 100.0, 200.0, 200.0);

        assert_eq!(world.sprite_count(), world.particle_count());
        assert_eq!(world.sprites_ptr() as usize % 4, 0);
    }

    #[test]
    fn invalid_construction_and_emitter_inputs_surface_errors() {
        assert!(ParticleWorld::new(8, 8, 0.0).is_err());

        let mut world = ParticleWorld::new(8, 8, 32.0).unwrap();
        assert!(world.emit_sparks(f32::NAN, 0.0, 1.0, 1.0).is_err());
        assert!(world.emit_puff(0.0, 0.0, f32::INFINITY, 0.0).is_err());
        assert_eq!(world.particle_count(), 0);
    }
}
