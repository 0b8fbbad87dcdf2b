//! Per-level configuration supplied by the host, plus validation.
//!
//! A `LevelConfig` is read-only input: the simulation never mutates it.
//! `validate` runs before any state changes so a bad level never leaves
//! the engine half-loaded.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::enums::SpiritType;
use crate::types::{GridBounds, GridCell};

/// Errors raised while loading or validating level data.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("level index {index} is out of range ({available} levels available)")]
    InvalidLevelIndex { index: usize, available: usize },
    #[error("level {level} has {spawn_points} human spawn points but needs {required}")]
    SpawnPointMismatch {
        level: usize,
        spawn_points: usize,
        required: u32,
    },
    #[error("grid bounds must be at least 1x1")]
    EmptyGrid,
    #[error("grid bounds {bounds:?} overflow the cell coordinate range or cover too many cells")]
    BoundsOverflow { bounds: GridBounds },
    #[error("tile layout has {found} rows, grid height is {expected}")]
    TileRowCount { found: usize, expected: u32 },
    #[error("tile row {row} has {found} columns, grid width is {expected}")]
    TileRowWidth {
        row: usize,
        found: usize,
        expected: u32,
    },
    #[error("regen period must be positive and finite, got {0}")]
    InvalidRegenPeriod(f32),
    #[error("move duration must be positive and finite, got {0}")]
    InvalidMoveDuration(f32),
    #[error("cell size must be positive and finite, got {0}")]
    InvalidCellSize(f32),
    #[error("world origin must be finite, got {0}")]
    InvalidWorldOrigin(Vec2),
    #[error("human spawn point {cell} lies outside the grid")]
    SpawnOutsideGrid { cell: GridCell },
    #[error("initial {kind} count {count} exceeds the per-kind limit")]
    TooManyAgents { kind: &'static str, count: u32 },
    #[error("failed to parse level data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A fixed human spawn location with its type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HumanSpawn {
    pub cell: GridCell,
    pub spirit: SpiritType,
}

/// Everything the simulation needs to start one level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    pub index: usize,
    pub name: String,
    pub bounds: GridBounds,
    /// ASCII tile layout, top row first. `TILE_CHAR` marks a walkable tile.
    /// `None` means every cell inside `bounds` is walkable.
    pub tiles: Option<Vec<String>>,
    /// World units per cell.
    pub cell_size: f32,
    /// World position of the lower-left corner of cell (0, 0).
    pub world_origin: Vec2,
    pub initial_ghost_count: u32,
    pub initial_human_count: u32,
    /// Optional fixed human placements; used in order when present.
    pub human_spawns: Vec<HumanSpawn>,
    pub soul_max: u32,
    /// Seconds per regenerated soul.
    pub regen_period: f32,
    pub portal_count: u32,
    /// Soul max gained per human destroyed.
    pub soul_max_per_human: u32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            index: 0,
            name: String::new(),
            bounds: GridBounds::default(),
            tiles: None,
            cell_size: DEFAULT_CELL_SIZE,
            world_origin: Vec2::ZERO,
            initial_ghost_count: 4,
            initial_human_count: 4,
            human_spawns: Vec::new(),
            soul_max: 3,
            regen_period: DEFAULT_REGEN_PERIOD,
            portal_count: DEFAULT_PORTAL_COUNT,
            soul_max_per_human: DEFAULT_SOUL_MAX_PER_HUMAN,
        }
    }
}

impl LevelConfig {
    /// Check internal consistency. Called before any level state is touched.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bounds.is_empty() {
            return Err(ConfigError::EmptyGrid);
        }
        if !self.bounds.fits_coordinates() || self.bounds.cell_count() > MAX_GRID_CELLS {
            return Err(ConfigError::BoundsOverflow {
                bounds: self.bounds,
            });
        }
        if !(self.regen_period.is_finite() && self.regen_period > 0.0) {
            return Err(ConfigError::InvalidRegenPeriod(self.regen_period));
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }
        if !self.world_origin.is_finite() {
            return Err(ConfigError::InvalidWorldOrigin(self.world_origin));
        }
        if self.initial_ghost_count > MAX_AGENTS_PER_KIND {
            return Err(ConfigError::TooManyAgents {
                kind: "ghost",
                count: self.initial_ghost_count,
            });
        }
        if self.initial_human_count > MAX_AGENTS_PER_KIND {
            return Err(ConfigError::TooManyAgents {
                kind: "human",
                count: self.initial_human_count,
            });
        }

        if let Some(rows) = &self.tiles {
            if rows.len() != self.bounds.height as usize {
                return Err(ConfigError::TileRowCount {
                    found: rows.len(),
                    expected: self.bounds.height,
                });
            }
            for (row, line) in rows.iter().enumerate() {
                let found = line.chars().count();
                if found != self.bounds.width as usize {
                    return Err(ConfigError::TileRowWidth {
                        row,
                        found,
                        expected: self.bounds.width,
                    });
                }
            }
        }

        if !self.human_spawns.is_empty() {
            if self.human_spawns.len() < self.initial_human_count as usize {
                return Err(ConfigError::SpawnPointMismatch {
                    level: self.index,
                    spawn_points: self.human_spawns.len(),
                    required: self.initial_human_count,
                });
            }
            if let Some(spawn) = self
                .human_spawns
                .iter()
                .find(|spawn| !self.bounds.contains(spawn.cell))
            {
                return Err(ConfigError::SpawnOutsideGrid { cell: spawn.cell });
            }
        }

        Ok(())
    }

    /// Human placements actually used for this level, if any.
    pub fn active_human_spawns(&self) -> &[HumanSpawn] {
        let count = (self.initial_human_count as usize).min(self.human_spawns.len());
        &self.human_spawns[..count]
    }
}

/// Validate a per-cell interpolation duration.
pub fn validate_move_duration(duration: f32) -> Result<(), ConfigError> {
    if duration.is_finite() && duration > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidMoveDuration(duration))
    }
}
