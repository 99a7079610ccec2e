//! Simulation engine for SENTINEL.
//!
//! Owns the hecs ECS world, processes queued operator commands, runs all
//! systems at a fixed tick rate, and produces `SimSnapshot`s. Completely
//! headless — presentation layers consume snapshots and events only.

pub mod engine;
pub mod leaderboard;
pub mod scoring;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use leaderboard::{Leaderboard, LeaderboardError};

pub use sentinel_core as core;

#[cfg(test)]
mod tests;
