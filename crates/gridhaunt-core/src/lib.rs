//! Core types and definitions for the gridhaunt simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! grid coordinates, agent tags, commands, events, snapshots, level
//! configuration and constants. It has no dependency on any runtime.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
