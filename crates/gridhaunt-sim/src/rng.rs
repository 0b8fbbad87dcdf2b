//! Per-agent deterministic random streams.
//!
//! Each agent gets its own generator seeded from (global seed, agent id,
//! role offset), so its trajectory does not depend on how many other agents
//! exist or in which order they were spawned.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use gridhaunt_core::types::{AgentId, GridBounds, GridCell};

/// Random stream owned by one agent.
pub type AgentRng = ChaCha8Rng;

/// Combined seed for one agent. Wrapping so extreme global seeds never panic.
pub fn derive_seed(global_seed: i64, agent_id: AgentId, role_offset: i64) -> u64 {
    global_seed
        .wrapping_add(agent_id as i64)
        .wrapping_add(role_offset) as u64
}

/// Stream for one agent. Same triple, same stream.
pub fn for_agent(global_seed: i64, agent_id: AgentId, role_offset: i64) -> AgentRng {
    ChaCha8Rng::seed_from_u64(derive_seed(global_seed, agent_id, role_offset))
}

/// Uniform cell inside `bounds`: x first, then y, each from its half-open range.
/// Degenerate bounds collapse to the origin.
pub fn next_grid_position(rng: &mut AgentRng, bounds: &GridBounds) -> GridCell {
    if bounds.is_empty() {
        return bounds.origin;
    }
    let x = rng.gen_range(bounds.x_range());
    let y = rng.gen_range(bounds.y_range());
    GridCell::new(x, y)
}
