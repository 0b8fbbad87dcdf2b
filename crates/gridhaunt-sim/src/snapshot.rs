//! Snapshot builder: reads engine state into a `SimSnapshot`.
//!
//! Read-only; never modifies the pools or the economy.

use gridhaunt_core::enums::GamePhase;
use gridhaunt_core::events::SimEvent;
use gridhaunt_core::state::SimSnapshot;
use gridhaunt_core::types::SimTime;

use crate::economy::SoulEconomy;
use crate::pool::AgentPool;
use crate::portal::PortalBank;

#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    time: &SimTime,
    phase: GamePhase,
    level_index: Option<usize>,
    ghosts: &AgentPool,
    humans: &AgentPool,
    economy: &SoulEconomy,
    portals: &PortalBank,
    events: Vec<SimEvent>,
) -> SimSnapshot {
    SimSnapshot {
        time: *time,
        phase,
        level_index,
        ghosts: ghosts.views(),
        humans: humans.views(),
        souls: economy.view(),
        portals: portals.views(economy),
        events,
    }
}
