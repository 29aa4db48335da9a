//! Simulation engine for SKYSHIELD.
//!
//! Owns the hecs ECS world, steps every system once per tick,
//! and produces GameStateSnapshots for the presentation layer.

pub mod engine;
pub mod session;
pub mod systems;
pub mod upgrades;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use skyshield_core as core;
