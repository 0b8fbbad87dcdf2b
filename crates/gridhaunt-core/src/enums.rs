//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Type tag shared by ghosts and humans. Collisions match on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpiritType {
    #[default]
    Red,
    Blue,
    Green,
    Yellow,
}

/// Which pool an agent belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentKind {
    Ghost,
    Human,
}

/// Movement state of a single agent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovePhase {
    /// Waiting for the next move signal.
    #[default]
    Idle,
    /// Interpolating from the current cell toward the step cell.
    Stepping,
}

/// Top-level state of the simulation loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No level loaded.
    #[default]
    Idle,
    Active,
    Paused,
    /// Every human was destroyed.
    LevelComplete,
    /// Every ghost was destroyed.
    GameOver,
}

impl SpiritType {
    pub const ALL: [SpiritType; 4] = [
        SpiritType::Red,
        SpiritType::Blue,
        SpiritType::Green,
        SpiritType::Yellow,
    ];

    /// Number of distinct spirit types.
    pub const COUNT: usize = Self::ALL.len();

    /// Round-robin assignment: `index mod COUNT`.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }
}

impl AgentKind {
    /// Seed role offset keeping ghost and human RNG streams disjoint.
    pub fn seed_offset(self) -> i64 {
        match self {
            AgentKind::Ghost => crate::constants::GHOST_SEED_OFFSET,
            AgentKind::Human => crate::constants::HUMAN_SEED_OFFSET,
        }
    }
}

impl GamePhase {
    /// Level ended, either way.
    pub fn is_finished(self) -> bool {
        matches!(self, GamePhase::LevelComplete | GamePhase::GameOver)
    }
}
