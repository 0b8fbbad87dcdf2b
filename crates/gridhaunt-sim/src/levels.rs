//! Level catalog: the ordered list of levels a session plays through.
//!
//! Levels come either from the built-in set below or from JSON supplied by
//! the host. Each entry is validated before the engine touches any state.

use serde::{Deserialize, Serialize};

use gridhaunt_core::config::{ConfigError, HumanSpawn, LevelConfig};
use gridhaunt_core::enums::SpiritType;
use gridhaunt_core::types::{GridBounds, GridCell};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub levels: Vec<LevelConfig>,
}

impl Campaign {
    pub fn new(levels: Vec<LevelConfig>) -> Self {
        Self { levels }
    }

    /// Parse a campaign from JSON and validate every level.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let campaign: Campaign = serde_json::from_str(json)?;
        for level in &campaign.levels {
            level.validate()?;
        }
        Ok(campaign)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The levels shipped with the game.
    pub fn builtin() -> Self {
        Self::new(vec![
            build_haunting(),
            build_courtyard(),
            build_crossroads(),
            build_manor(),
        ])
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&LevelConfig, ConfigError> {
        self.levels
            .get(index)
            .ok_or(ConfigError::InvalidLevelIndex {
                index,
                available: self.levels.len(),
            })
    }

    pub fn is_last_level(&self, index: usize) -> bool {
        index + 1 == self.levels.len()
    }
}

fn rows(layout: &[&str]) -> Option<Vec<String>> {
    Some(layout.iter().map(|row| row.to_string()).collect())
}

/// "First Haunting": small open room, two ghosts, one human.
fn build_haunting() -> LevelConfig {
    LevelConfig {
        index: 0,
        name: "First Haunting".into(),
        bounds: GridBounds::sized(5, 5),
        initial_ghost_count: 2,
        initial_human_count: 1,
        soul_max: 1,
        ..Default::default()
    }
}

/// "Courtyard": open 7x7, one ghost and one human of every type.
fn build_courtyard() -> LevelConfig {
    LevelConfig {
        index: 1,
        name: "Courtyard".into(),
        bounds: GridBounds::sized(7, 7),
        initial_ghost_count: 4,
        initial_human_count: 4,
        soul_max: 2,
        ..Default::default()
    }
}

/// "Crossroads": pillars break up the floor.
fn build_crossroads() -> LevelConfig {
    LevelConfig {
        index: 2,
        name: "Crossroads".into(),
        bounds: GridBounds::sized(7, 7),
        tiles: rows(&[
            "#######",
            "#.###.#",
            "#######",
            "###.###",
            "#######",
            "#.###.#",
            "#######",
        ]),
        initial_ghost_count: 6,
        initial_human_count: 6,
        soul_max: 3,
        regen_period: 4.0,
        ..Default::default()
    }
}

/// "Manor": humans start in fixed rooms.
fn build_manor() -> LevelConfig {
    let spawn = |x, y, spirit| HumanSpawn {
        cell: GridCell::new(x, y),
        spirit,
    };
    LevelConfig {
        index: 3,
        name: "Manor".into(),
        bounds: GridBounds::sized(8, 6),
        tiles: rows(&[
            "########",
            "#..##..#",
            "########",
            "########",
            "#..##..#",
            "########",
        ]),
        initial_ghost_count: 4,
        initial_human_count: 5,
        human_spawns: vec![
            spawn(0, 0, SpiritType::Red),
            spawn(7, 0, SpiritType::Blue),
            spawn(0, 5, SpiritType::Green),
            spawn(7, 5, SpiritType::Yellow),
            spawn(3, 3, SpiritType::Red),
        ],
        soul_max: 3,
        regen_period: 3.0,
        ..Default::default()
    }
}
