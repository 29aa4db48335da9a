//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Difficulty tier chosen at the start of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Sparse, slow raids and extra ammunition.
    Easy,
    /// Baseline tuning.
    #[default]
    Hard,
    /// Dense, fast raids.
    Hell,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No round loaded. The presentation layer is showing its menus.
    #[default]
    Menu,
    /// A round is in progress; only this phase advances the world.
    Playing,
    /// Quota spent and the sky is clear. Upgrades may be bought.
    RoundEnd,
    /// Target score reached.
    Won,
    /// Every launcher destroyed.
    Lost,
}

impl GamePhase {
    /// Whether the session is over (a new session must be started).
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// Purchasable persistent modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeKind {
    /// +20 detonation max radius per tier.
    ExplosionRadius,
    /// One extra free interceptor per tier.
    SplitShot,
    /// Cosmetic beam width for the renderer.
    BeamThickness,
}

impl UpgradeKind {
    pub const ALL: [UpgradeKind; 3] = [
        UpgradeKind::ExplosionRadius,
        UpgradeKind::SplitShot,
        UpgradeKind::BeamThickness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExplosionRadius => "explosion_radius",
            Self::SplitShot => "split_shot",
            Self::BeamThickness => "beam_thickness",
        }
    }
}

/// What produced a detonation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetonationKind {
    /// Interceptor reached its aim point.
    Interceptor,
    /// Threat reached its ground target.
    Impact,
    /// Secondary blast where a threat was destroyed.
    Chain,
}
