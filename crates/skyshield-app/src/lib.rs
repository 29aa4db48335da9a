//! SKYSHIELD headless driver.
//!
//! Runs the simulation on a dedicated game loop thread and feeds it player
//! commands from stdin or from the built-in autopilot.

pub mod autopilot;
pub mod config;
pub mod game_loop;
pub mod state;

pub use skyshield_core as core;
