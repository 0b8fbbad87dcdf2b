//! Per-agent grid movement state machine.
//!
//! Idle -> Stepping on a move signal; Stepping interpolates the render
//! position from the current cell to the step cell over `duration`
//! seconds, then lands, reports the arrival and drops back to Idle.
//! Pure functions over plain data, no ECS dependency.

use gridhaunt_core::enums::MovePhase;
use gridhaunt_core::types::{GridBounds, GridCell};
use gridhaunt_grid::GridTopology;

use crate::components::Movement;
use crate::rng::{next_grid_position, AgentRng};

/// Place an agent: current cell (drawn unless `start` is given), then target,
/// then the first greedy step. The render position stays offscreen until the
/// agent first moves.
pub fn setup(
    rng: &mut AgentRng,
    bounds: &GridBounds,
    topology: &GridTopology,
    start: Option<GridCell>,
    duration: f32,
) -> Movement {
    let current = match start {
        Some(cell) => cell,
        None => next_grid_position(rng, bounds),
    };
    let target = next_grid_position(rng, bounds);
    Movement {
        current,
        target,
        step: topology.next_step(current, target),
        ..Movement::offscreen(duration)
    }
}

/// Advance one agent by `dt` seconds. Returns the landing cell on the tick
/// the agent arrives, `None` otherwise.
pub fn tick(
    movement: &mut Movement,
    rng: &mut AgentRng,
    bounds: &GridBounds,
    topology: &GridTopology,
    dt: f32,
    begin_move: bool,
) -> Option<GridCell> {
    if begin_move && movement.phase == MovePhase::Idle {
        movement.phase = MovePhase::Stepping;
    }
    if movement.phase != MovePhase::Stepping {
        return None;
    }

    movement.elapsed += dt;
    let t = (movement.elapsed / movement.duration).clamp(0.0, 1.0);

    let from = topology.cell_to_world(movement.current);
    let to = topology.cell_to_world(movement.step);
    movement.position = from.lerp(to, t);

    if t < 1.0 {
        return None;
    }

    movement.current = movement.step;
    movement.phase = MovePhase::Idle;
    if movement.current == movement.target {
        movement.target = next_grid_position(rng, bounds);
    }
    movement.step = topology.next_step(movement.current, movement.target);
    movement.elapsed = 0.0;

    Some(movement.current)
}
