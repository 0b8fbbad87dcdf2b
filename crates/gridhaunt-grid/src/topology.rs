//! GridTopology: validity queries against the currently loaded map.
//!
//! With no map loaded every cell is invalid, so agents stall instead of
//! wandering off into undefined space.

use glam::Vec2;

use gridhaunt_core::types::{GridBounds, GridCell};

use crate::geometry::CellGeometry;
use crate::tilemap::TileMap;

#[derive(Debug, Clone, Default)]
pub struct GridTopology {
    map: Option<TileMap>,
}

impl GridTopology {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_map(map: TileMap) -> Self {
        Self { map: Some(map) }
    }

    /// Replace the loaded map.
    pub fn load(&mut self, map: TileMap) {
        tracing::debug!(
            bounds = ?map.bounds(),
            tiles = map.tile_count(),
            "tile map loaded"
        );
        self.map = Some(map);
    }

    pub fn unload(&mut self) {
        self.map = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.map.is_some()
    }

    pub fn map(&self) -> Option<&TileMap> {
        self.map.as_ref()
    }

    pub fn bounds(&self) -> Option<GridBounds> {
        self.map.as_ref().map(TileMap::bounds)
    }

    /// True iff a tile exists at `cell` in the loaded map.
    pub fn is_valid_cell(&self, cell: GridCell) -> bool {
        self.map.as_ref().is_some_and(|map| map.has_tile(cell))
    }

    /// Center of `cell` in render space. Uses unit geometry when no map is loaded.
    pub fn cell_to_world(&self, cell: GridCell) -> Vec2 {
        match &self.map {
            Some(map) => map.geometry().cell_to_world(cell),
            None => CellGeometry::default().cell_to_world(cell),
        }
    }

    /// Greedy step: the valid neighbor of `current` closest to `target`.
    ///
    /// Ties go to the first neighbor in up, down, left, right order. With no
    /// valid neighbor the agent stays on `current`.
    pub fn next_step(&self, current: GridCell, target: GridCell) -> GridCell {
        let mut best = current;
        let mut closest = f32::MAX;
        for step in current.neighbors() {
            if !self.is_valid_cell(step) {
                continue;
            }
            let distance = step.distance_to(&target);
            if distance < closest {
                closest = distance;
                best = step;
            }
        }
        best
    }
}
