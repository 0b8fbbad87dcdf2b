//! Simulation constants and tuning parameters.

use glam::Vec2;

use crate::types::GridCell;

// --- Determinism ---

/// Global seed used when none is supplied.
pub const DEFAULT_SEED: i64 = 1234;

/// Upper bound on ids handed out per pool within one session.
pub const MAX_AGENTS_PER_KIND: u32 = 1_000_000;

/// Seed role offset for ghost movement streams.
pub const GHOST_SEED_OFFSET: i64 = 0;

/// Seed role offset for human movement streams. Must be >= MAX_AGENTS_PER_KIND.
pub const HUMAN_SEED_OFFSET: i64 = MAX_AGENTS_PER_KIND as i64;

// --- Movement ---

/// Seconds to interpolate across one cell.
pub const DEFAULT_MOVE_DURATION: f32 = 0.5;

/// Render position of agents that have not been placed yet.
pub const OFFSCREEN_POSITION: Vec2 = Vec2::new(-1000.0, -1000.0);

/// Cell of agents that have not been placed yet.
pub const OFFSCREEN_CELL: GridCell = GridCell::new(-1000, -1000);

// --- Grid ---

/// World units per cell.
pub const DEFAULT_CELL_SIZE: f32 = 1.0;

/// Width and height of a level that does not specify bounds.
pub const DEFAULT_GRID_SIZE: u32 = 8;

/// Largest number of cells a level grid may cover.
pub const MAX_GRID_CELLS: usize = 1 << 20;

/// Character marking a walkable tile in ASCII layouts.
pub const TILE_CHAR: char = '#';

// --- Souls ---

/// Seconds per regenerated soul.
pub const DEFAULT_REGEN_PERIOD: f32 = 5.0;

/// Soul max gained per human destroyed by a ghost.
pub const DEFAULT_SOUL_MAX_PER_HUMAN: u32 = 1;

// --- Portals ---

/// Portals per level when unspecified (one per spirit type).
pub const DEFAULT_PORTAL_COUNT: u32 = 4;
