//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state. Entity state lives in components, session state in
//! `SessionState`.

pub mod collision;
pub mod detonation;
pub mod fire_control;
pub mod movement;
pub mod outcome;
pub mod snapshot;
pub mod spawner;
