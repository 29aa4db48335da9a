//! Player commands sent from the presentation layer to the simulation.
//!
//! Commands are applied synchronously, between ticks. A command that is not
//! valid in the current phase is ignored.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Combat ---
    /// Fire at a playfield point (pointer/touch down).
    Fire { x: f64, y: f64 },

    // --- Economy ---
    /// Buy the next tier of an upgrade.
    PurchaseUpgrade { kind: UpgradeKind },

    // --- Session flow ---
    /// Begin a fresh session at round 1.
    StartRound { difficulty: Difficulty },
    /// Continue to the next round after a cleared round.
    AdvanceRound,
    /// Restart at round 1 on the same difficulty after a win or loss.
    Retry,
    /// Abandon the session and clear the world.
    ReturnToMenu,
}
