//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Level flow ---
    /// Load a level from the campaign by index.
    StartLevel { index: usize },
    /// Reload the current level from scratch.
    ResetLevel,
    /// Advance to the level after the current one.
    NextLevel,

    // --- Gameplay ---
    /// Spend one soul to summon a ghost of the portal's type.
    OpenPortal { portal_id: u32 },

    // --- Simulation control ---
    Pause,
    Resume,
}
