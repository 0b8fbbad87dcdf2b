//! Portals: soul-gated ghost summoning.
//!
//! Each portal summons one spirit type (round-robin by portal id). Opening a
//! portal spends a soul; the summoned ghost is queued on the ghost pool and
//! appears at the next tick boundary.

use gridhaunt_core::enums::SpiritType;
use gridhaunt_core::state::PortalView;

use crate::economy::SoulEconomy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Portal {
    pub id: u32,
    pub spirit: SpiritType,
}

/// Result of trying to open a portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortalActivation {
    /// A soul was spent; a ghost of `spirit` should be queued.
    Summoned { spirit: SpiritType, remaining: u32 },
    /// No soul available; nothing changed.
    Denied,
    /// No portal with that id in this level.
    UnknownPortal,
}

#[derive(Debug, Clone, Default)]
pub struct PortalBank {
    portals: Vec<Portal>,
}

impl PortalBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the portals with `count` fresh ones.
    pub fn initialize(&mut self, count: u32) {
        self.portals = (0..count)
            .map(|id| Portal {
                id,
                spirit: SpiritType::from_index(id as usize),
            })
            .collect();
    }

    pub fn clear(&mut self) {
        self.portals.clear();
    }

    pub fn len(&self) -> usize {
        self.portals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.portals.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Portal> {
        self.portals.get(id as usize)
    }

    /// Spend a soul through portal `id`.
    pub fn activate(&self, id: u32, economy: &mut SoulEconomy) -> PortalActivation {
        let Some(portal) = self.get(id) else {
            tracing::warn!(portal_id = id, "unknown portal");
            return PortalActivation::UnknownPortal;
        };
        match economy.try_consume() {
            Ok(remaining) => PortalActivation::Summoned {
                spirit: portal.spirit,
                remaining,
            },
            Err(err) => {
                tracing::warn!(portal_id = id, %err, "portal denied");
                PortalActivation::Denied
            }
        }
    }

    pub fn views(&self, economy: &SoulEconomy) -> Vec<PortalView> {
        self.portals
            .iter()
            .map(|portal| PortalView {
                id: portal.id,
                spirit: portal.spirit,
                ready: economy.can_consume(),
            })
            .collect()
    }
}
