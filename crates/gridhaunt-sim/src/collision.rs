//! Collision resolution between agents that landed on the same cell.
//!
//! Arrivals are bookkept per kind and per cell during the move phase. On a
//! ready tick `resolve` turns them into intents (spawns and destructions)
//! for the caller to apply, then forgets every arrival.
//!
//! Rules, per cell with at least one ghost:
//! - a human dies iff some ghost there shares its type;
//! - two or more ghosts of one type request exactly one new ghost;
//! - two or more ghosts of mixed types are all destroyed.

use std::collections::BTreeMap;

use gridhaunt_core::enums::{AgentKind, SpiritType};
use gridhaunt_core::types::{AgentId, GridCell};

use crate::components::AgentRef;

/// Same-type ghost meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Merge {
    pub cell: GridCell,
    pub spirit: SpiritType,
    pub count: usize,
}

/// Mixed-type ghost meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annihilation {
    pub cell: GridCell,
    pub count: usize,
}

/// Intents produced by one resolution pass. Cells are visited in ascending
/// (x, y) order, arrivals within a cell in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionOutcome {
    pub spawn_requests: Vec<SpiritType>,
    pub ghosts_to_destroy: Vec<AgentId>,
    pub humans_to_destroy: Vec<AgentId>,
    pub merges: Vec<Merge>,
    pub annihilations: Vec<Annihilation>,
}

impl CollisionOutcome {
    pub fn is_empty(&self) -> bool {
        self.spawn_requests.is_empty()
            && self.ghosts_to_destroy.is_empty()
            && self.humans_to_destroy.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct CollisionResolver {
    ghost_arrivals: BTreeMap<GridCell, Vec<AgentRef>>,
    human_arrivals: BTreeMap<GridCell, Vec<AgentRef>>,
}

impl CollisionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `agent` landed on `cell` this tick.
    pub fn register_arrival(&mut self, kind: AgentKind, cell: GridCell, agent: AgentRef) {
        tracing::trace!(?kind, id = agent.id, %cell, "arrival");
        let lookup = match kind {
            AgentKind::Ghost => &mut self.ghost_arrivals,
            AgentKind::Human => &mut self.human_arrivals,
        };
        lookup.entry(cell).or_default().push(agent);
    }

    /// Number of arrivals waiting for resolution.
    pub fn pending_arrivals(&self) -> usize {
        self.ghost_arrivals.values().map(Vec::len).sum::<usize>()
            + self.human_arrivals.values().map(Vec::len).sum::<usize>()
    }

    /// Apply the collision rules to this tick's arrivals and clear them.
    pub fn resolve(&mut self) -> CollisionOutcome {
        let mut outcome = CollisionOutcome::default();

        for (&cell, ghosts) in &self.ghost_arrivals {
            if let Some(humans) = self.human_arrivals.get(&cell) {
                for human in humans {
                    if ghosts.iter().any(|g| g.spirit == human.spirit) {
                        tracing::debug!(id = human.id, %cell, spirit = ?human.spirit, "human caught");
                        outcome.humans_to_destroy.push(human.id);
                    }
                }
            }

            if ghosts.len() < 2 {
                continue;
            }

            let spirit = ghosts[0].spirit;
            if ghosts.iter().all(|g| g.spirit == spirit) {
                tracing::debug!(%cell, ?spirit, count = ghosts.len(), "same-type ghosts merged");
                outcome.spawn_requests.push(spirit);
                outcome.merges.push(Merge {
                    cell,
                    spirit,
                    count: ghosts.len(),
                });
            } else {
                tracing::debug!(%cell, count = ghosts.len(), "mixed ghosts annihilated");
                outcome.ghosts_to_destroy.extend(ghosts.iter().map(|g| g.id));
                outcome.annihilations.push(Annihilation {
                    cell,
                    count: ghosts.len(),
                });
            }
        }

        self.clear();
        outcome
    }

    /// Drop every recorded arrival.
    pub fn clear(&mut self) {
        self.ghost_arrivals.clear();
        self.human_arrivals.clear();
    }
}
