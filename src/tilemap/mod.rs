//! Tile grid query contract
//!
//! The simulation never owns tile data; it only asks the host's grid two
//! questions: how big a tile is, and whether a cell is solid. Collision
//! resolution divides world coordinates by `tile_size` and floors to get
//! cell coordinates.

/// Read-only view of a static orthogonal tile grid.
pub trait Tilemap {
    /// World-space size of one tile. Must be > 0.
    fn tile_size(&self) -> f32;

    /// Whether the cell at (cell_x, cell_y) blocks particles.
    ///
    /// Must be total: any integer pair gets an answer, never a panic.
    /// Out-of-range cells should answer `false` (open boundary), otherwise
    /// particles treat the edge of the map as a wall of unknown depth.
    fn is_solid(&self, cell_x: i32, cell_y: i32) -> bool;
}
