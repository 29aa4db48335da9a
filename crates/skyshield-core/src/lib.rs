//! Core types and definitions for the SKYSHIELD simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, constants and the
//! difficulty table. It has no dependency on any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod difficulty;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
