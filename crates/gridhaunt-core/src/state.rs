//! Simulation snapshot: the visible state handed to presentation each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{AgentId, GridCell, SimTime};

/// Complete simulation state returned from each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub level_index: Option<usize>,
    pub ghosts: Vec<AgentView>,
    pub humans: Vec<AgentView>,
    pub souls: SoulView,
    pub portals: Vec<PortalView>,
    pub events: Vec<SimEvent>,
}

/// One agent as seen by rendering and animation code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentView {
    pub id: AgentId,
    pub spirit: SpiritType,
    pub cell: GridCell,
    pub target: GridCell,
    /// Interpolated render position.
    pub position: Vec2,
    pub is_moving: bool,
}

/// Soul economy status for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SoulView {
    pub current: u32,
    pub max: u32,
    /// Fraction of the way to the next soul (0.0 - 1.0).
    pub regen_progress: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortalView {
    pub id: u32,
    pub spirit: SpiritType,
    /// Whether activating the portal would succeed right now.
    pub ready: bool,
}

impl SimSnapshot {
    pub fn ghost_count(&self) -> usize {
        self.ghosts.len()
    }

    pub fn human_count(&self) -> usize {
        self.humans.len()
    }
}
