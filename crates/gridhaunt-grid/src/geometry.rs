//! Affine mapping between grid cells and continuous render space.

use glam::Vec2;

use gridhaunt_core::constants::DEFAULT_CELL_SIZE;
use gridhaunt_core::types::GridCell;

/// Placement of the grid in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellGeometry {
    /// World position of the lower-left corner of cell (0, 0).
    pub origin: Vec2,
    /// World units per cell.
    pub cell_size: f32,
}

impl Default for CellGeometry {
    fn default() -> Self {
        Self {
            origin: Vec2::ZERO,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

impl CellGeometry {
    pub fn new(origin: Vec2, cell_size: f32) -> Self {
        Self { origin, cell_size }
    }

    /// Center of `cell` in world space.
    pub fn cell_to_world(&self, cell: GridCell) -> Vec2 {
        let corner = Vec2::new(cell.x as f32, cell.y as f32) * self.cell_size;
        self.origin + corner + Vec2::splat(self.cell_size * 0.5)
    }

    /// Cell containing a world position.
    pub fn world_to_cell(&self, position: Vec2) -> GridCell {
        let local = (position - self.origin) / self.cell_size;
        GridCell::new(local.x.floor() as i32, local.y.floor() as i32)
    }
}
