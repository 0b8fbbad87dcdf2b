//! Events emitted by the simulation for presentation code.
//!
//! The engine queues events during a tick and hands them out with the
//! snapshot; each event is delivered exactly once.

use serde::{Deserialize, Serialize};

use crate::enums::SpiritType;
use crate::types::{AgentId, GridCell};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    LevelStarted {
        level_index: usize,
    },
    /// Level could not be loaded; previous state is untouched.
    LevelLoadFailed {
        reason: String,
    },
    GhostSpawned {
        id: AgentId,
        spirit: SpiritType,
    },
    GhostDestroyed {
        id: AgentId,
        cell: GridCell,
    },
    HumanDestroyed {
        id: AgentId,
        cell: GridCell,
    },
    /// Two or more same-type ghosts met; one new ghost was requested.
    GhostsMerged {
        cell: GridCell,
        spirit: SpiritType,
        count: usize,
    },
    /// Ghosts of mixed types met and were all destroyed.
    GhostsAnnihilated {
        cell: GridCell,
        count: usize,
    },
    SoulConsumed {
        portal_id: u32,
        remaining: u32,
    },
    /// Portal activation refused for lack of souls.
    SoulDenied {
        portal_id: u32,
    },
    /// Portal activation refused: no portal with that id in this level.
    PortalUnknown {
        portal_id: u32,
    },
    SoulsRegenerated {
        amount: u32,
        current: u32,
    },
    /// Every human is gone.
    LevelComplete {
        level_index: usize,
        final_level: bool,
    },
    /// Every ghost is gone.
    GameOver {
        level_index: usize,
    },
}
