//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// One-shot happenings, drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A new threat entered the playfield.
    ThreatLaunched { serial: u32, x: f64 },
    /// A launcher fired; `count` includes split-shot copies.
    InterceptorsFired { launcher_slot: u8, count: u32 },
    /// A detonation was created. `kind: Impact` means a threat got through.
    Detonation { x: f64, y: f64, kind: DetonationKind },
    /// A threat was destroyed by a detonation.
    ThreatDestroyed { serial: u32, chain: bool },
    /// A structure was knocked out.
    StructureLost { slot: u8 },
    /// A launcher was knocked out.
    LauncherLost { slot: u8 },
    /// An upgrade tier was bought.
    UpgradePurchased { kind: UpgradeKind, tier: u8 },
    /// The session phase changed.
    PhaseChanged { from: GamePhase, to: GamePhase },
}
