//! Components stored on agent entities.
//!
//! Components are plain data. Behavior lives in `movement` and `pool`.

use glam::Vec2;

use gridhaunt_core::constants::{OFFSCREEN_CELL, OFFSCREEN_POSITION};
use gridhaunt_core::enums::{AgentKind, MovePhase, SpiritType};
use gridhaunt_core::types::{AgentId, GridCell};

use crate::rng::AgentRng;

/// Identity and type of an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentTag {
    pub id: AgentId,
    pub kind: AgentKind,
    pub spirit: SpiritType,
}

/// Lightweight reference recorded with arrival events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentRef {
    pub id: AgentId,
    pub spirit: SpiritType,
}

/// Grid movement state.
#[derive(Debug, Clone, PartialEq)]
pub struct Movement {
    pub current: GridCell,
    pub target: GridCell,
    /// Next cell toward `target`, chosen by the greedy heuristic.
    pub step: GridCell,
    pub phase: MovePhase,
    /// Seconds spent on the current step.
    pub elapsed: f32,
    /// Seconds per step.
    pub duration: f32,
    /// Interpolated render position.
    pub position: Vec2,
}

/// The agent's private random stream.
#[derive(Debug, Clone)]
pub struct RngStream(pub AgentRng);

impl AgentTag {
    pub fn agent_ref(&self) -> AgentRef {
        AgentRef {
            id: self.id,
            spirit: self.spirit,
        }
    }
}

impl Movement {
    /// Unplaced movement state: every cell at the offscreen sentinel.
    pub fn offscreen(duration: f32) -> Self {
        Self {
            current: OFFSCREEN_CELL,
            target: OFFSCREEN_CELL,
            step: OFFSCREEN_CELL,
            phase: MovePhase::Idle,
            elapsed: 0.0,
            duration,
            position: OFFSCREEN_POSITION,
        }
    }

    pub fn is_moving(&self) -> bool {
        self.phase == MovePhase::Stepping
    }
}
