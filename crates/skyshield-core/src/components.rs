//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::DetonationKind;
use crate::types::Position;

/// Session-unique entity number, assigned from a monotonic counter at spawn.
/// Systems iterate in ascending serial order so a seeded run is reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Serial(pub u32);

/// Enemy projectile homing on a ground installation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Threat {
    /// Aim point, fixed at spawn.
    pub target: Position,
    /// Distance covered per tick.
    pub speed: f64,
}

/// Player-fired projectile flying a straight line to an aim point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interceptor {
    pub start: Position,
    pub target: Position,
    /// Distance covered per tick.
    pub speed: f64,
    /// Fraction of the straight-line path travelled, 0.0..=1.0.
    pub progress: f64,
    /// Slot of the launcher that fired it.
    pub launcher_slot: u8,
}

/// Expanding-then-fading blast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detonation {
    pub radius: f64,
    pub max_radius: f64,
    /// True until the radius first reaches `max_radius`.
    pub growing: bool,
    /// Render opacity, 1.0 fading to 0.0 while shrinking.
    pub alpha: f64,
    pub kind: DetonationKind,
}

/// Defended ground asset ("city").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Structure {
    pub slot: u8,
    pub active: bool,
}

/// Ammo-limited firing platform ("turret").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Launcher {
    pub slot: u8,
    pub ammo: u32,
    pub max_ammo: u32,
    pub active: bool,
}
