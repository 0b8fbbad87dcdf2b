//! Simulation engine for gridhaunt.
//!
//! Owns the ghost and human pools, the collision resolver and the soul
//! economy, advances them once per host tick, and produces `SimSnapshot`s
//! for presentation code.

pub mod collision;
pub mod components;
pub mod economy;
pub mod engine;
pub mod levels;
pub mod movement;
pub mod pool;
pub mod portal;
pub mod rng;
pub mod snapshot;

pub use gridhaunt_core as core;
pub use gridhaunt_grid as grid;

pub use engine::{SimConfig, SimulationEngine};
