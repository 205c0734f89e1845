//! Motes Engine - particle simulation core in WASM
//!
//! The crate owns only the simulation logic: particle lifecycles, the
//! population-limited registry, rate-limited emission, and swept collision
//! resolution against a tile grid. The things that surround it in a full
//! game - the canvas renderer, the camera, the tilemap data - stay on the
//! host side and are reached through the contracts in `render` and `tilemap`.
//!
//! Architecture:
//! - core/      - Utility macros
//! - math/      - Vector value type
//! - tilemap/   - Tile grid query contract
//! - render/    - Draw target and viewpoint contracts
//! - particles/ - Registry, emission, kinematics (the simulation itself)
//! - api/       - WASM facade for the JS host

// Utils with safety macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod math;
pub mod tilemap;
pub mod render;
pub mod particles;
pub mod api;

use wasm_bindgen::prelude::*;

// Re-export main types
pub use api::ParticleWorld;
pub use math::Vec2;
pub use particles::{KineticBody, Particle, ParticleBody, ParticleId, ParticleSystem};
pub use render::{DrawTarget, ViewArea, Viewpoint};
pub use tilemap::Tilemap;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"✨ Motes WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
