//! Math primitives consumed by the simulation

mod vec2;

pub use vec2::Vec2;
