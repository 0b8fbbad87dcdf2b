//! TileMap: which cells of a level carry a walkable tile.

use gridhaunt_core::config::LevelConfig;
use gridhaunt_core::constants::TILE_CHAR;
use gridhaunt_core::types::{GridBounds, GridCell};

use crate::geometry::CellGeometry;

/// Loaded tile layout with its world placement.
#[derive(Debug, Clone)]
pub struct TileMap {
    bounds: GridBounds,
    /// Row-major occupancy, bottom row first (index = dy * width + dx).
    tiles: Vec<bool>,
    geometry: CellGeometry,
}

impl TileMap {
    /// Every cell inside `bounds` carries a tile.
    pub fn open(bounds: GridBounds, geometry: CellGeometry) -> Self {
        Self {
            bounds,
            tiles: vec![true; bounds.cell_count()],
            geometry,
        }
    }

    /// Build from ASCII rows, top row first. Rows shorter than the bounds
    /// leave the missing cells empty; extra characters are ignored.
    pub fn from_layout(bounds: GridBounds, rows: &[String], geometry: CellGeometry) -> Self {
        let mut map = Self {
            bounds,
            tiles: vec![false; bounds.cell_count()],
            geometry,
        };
        let height = bounds.height as usize;
        for (row, line) in rows.iter().take(height).enumerate() {
            let dy = height - 1 - row;
            for (dx, ch) in line.chars().take(bounds.width as usize).enumerate() {
                if ch == TILE_CHAR {
                    map.tiles[dy * bounds.width as usize + dx] = true;
                }
            }
        }
        map
    }

    /// Tile map described by a level configuration.
    pub fn from_level(level: &LevelConfig) -> Self {
        let geometry = CellGeometry::new(level.world_origin, level.cell_size);
        match &level.tiles {
            Some(rows) => Self::from_layout(level.bounds, rows, geometry),
            None => Self::open(level.bounds, geometry),
        }
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    pub fn geometry(&self) -> &CellGeometry {
        &self.geometry
    }

    fn index_of(&self, cell: GridCell) -> Option<usize> {
        if !self.bounds.contains(cell) {
            return None;
        }
        let dx = (cell.x - self.bounds.origin.x) as usize;
        let dy = (cell.y - self.bounds.origin.y) as usize;
        Some(dy * self.bounds.width as usize + dx)
    }

    /// True iff a tile exists at `cell`.
    pub fn has_tile(&self, cell: GridCell) -> bool {
        self.index_of(cell).is_some_and(|i| self.tiles[i])
    }

    pub fn set_tile(&mut self, cell: GridCell, present: bool) {
        if let Some(i) = self.index_of(cell) {
            self.tiles[i] = present;
        }
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.iter().filter(|&&t| t).count()
    }
}
