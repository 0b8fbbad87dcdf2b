//! Grid topology for gridhaunt.
//!
//! Tile maps, cell-to-world conversion, and the greedy next-step
//! heuristic agents use to walk toward their targets.

pub use gridhaunt_core as core;

pub mod geometry;
pub mod tilemap;
pub mod topology;

// Re-export key types for convenience.
pub use geometry::CellGeometry;
pub use tilemap::TileMap;
pub use topology::GridTopology;

#[cfg(test)]
mod tests;
