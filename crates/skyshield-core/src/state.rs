//! Game state snapshot: the complete visible state sent to the presentation
//! layer each tick.

use serde::{Deserialize, Serialize};

use crate::constants::{
    BEAM_SCALE_PER_TIER, DETONATION_BASE_MAX_RADIUS, DETONATION_RADIUS_PER_TIER,
};
use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{Position, SimTime};

/// Complete game state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub difficulty: Difficulty,
    pub round: RoundView,
    pub score: u32,
    pub currency: u32,
    pub upgrades: UpgradeLevels,
    /// Interceptor beam width multiplier derived from the beam tier.
    pub beam_scale: f64,
    pub threats: Vec<ThreatView>,
    pub interceptors: Vec<InterceptorView>,
    pub detonations: Vec<DetonationView>,
    pub structures: Vec<StructureView>,
    pub launchers: Vec<LauncherView>,
    pub events: Vec<SimEvent>,
}

/// Purchased upgrade tiers, each 0..=3. Persist across rounds of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeLevels {
    pub explosion_radius: u8,
    pub split_shot: u8,
    pub beam_thickness: u8,
}

impl UpgradeLevels {
    pub fn level_for(&self, kind: UpgradeKind) -> u8 {
        match kind {
            UpgradeKind::ExplosionRadius => self.explosion_radius,
            UpgradeKind::SplitShot => self.split_shot,
            UpgradeKind::BeamThickness => self.beam_thickness,
        }
    }

    pub fn set_level(&mut self, kind: UpgradeKind, level: u8) {
        match kind {
            UpgradeKind::ExplosionRadius => self.explosion_radius = level,
            UpgradeKind::SplitShot => self.split_shot = level,
            UpgradeKind::BeamThickness => self.beam_thickness = level,
        }
    }

    /// Max radius of a primary detonation at the current explosion tier.
    pub fn detonation_max_radius(&self) -> f64 {
        DETONATION_BASE_MAX_RADIUS + self.explosion_radius as f64 * DETONATION_RADIUS_PER_TIER
    }

    /// Beam width multiplier for the renderer. Has no effect on collision.
    pub fn beam_scale(&self) -> f64 {
        1.0 + self.beam_thickness as f64 * BEAM_SCALE_PER_TIER
    }
}

/// Per-round counters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RoundView {
    /// 1-based round number.
    pub number: u32,
    pub quota: u32,
    pub spawned: u32,
    pub destroyed: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatView {
    pub serial: u32,
    pub position: Position,
    pub target: Position,
    /// Heading toward the target (radians), for sprite rotation.
    pub heading: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterceptorView {
    pub serial: u32,
    pub start: Position,
    pub position: Position,
    pub target: Position,
    pub progress: f64,
    pub launcher_slot: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetonationView {
    pub serial: u32,
    pub position: Position,
    pub radius: f64,
    pub max_radius: f64,
    pub alpha: f64,
    pub kind: DetonationKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureView {
    pub slot: u8,
    pub position: Position,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LauncherView {
    pub slot: u8,
    pub position: Position,
    pub ammo: u32,
    pub max_ammo: u32,
    pub active: bool,
}
