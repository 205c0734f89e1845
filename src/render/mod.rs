//! Draw target and viewpoint contracts
//!
//! Rendering stays on the host side. The registry only needs a 2D transform
//! stack to position each particle and a visible rectangle to cull against;
//! actual shape painting is delegated back to the particle through
//! `fill_circle`.

/// Visible rectangle in world coordinates, as reported by a viewpoint.
#[derive(Clone, Copy, Debug)]
pub struct ViewArea {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

/// Surface a particle paints itself onto.
///
/// Transform model matches an immediate-mode 2D canvas: `push`/`pop` save
/// and restore the current transform, `translate` and `scale` compose onto
/// it. Shapes are drawn in the transformed space.
pub trait DrawTarget {
    fn push(&mut self);
    fn pop(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    /// Uniform scale only; particles are scaled by their radius.
    fn scale(&mut self, factor: f32);
    /// Filled circle at (x, y) with the given diameter, color packed ABGR.
    fn fill_circle(&mut self, x: f32, y: f32, diameter: f32, color: u32);
    /// Extent of the surface, used by viewpoints to derive the view area.
    fn width(&self) -> f32;
    fn height(&self) -> f32;
}

/// Camera abstraction: maps a draw target to the world rectangle it shows.
pub trait Viewpoint {
    fn view_area(&self, target: &dyn DrawTarget) -> ViewArea;
}
