//! Built-in input source for unattended runs.
//!
//! Reads each snapshot and answers with the commands a simple player would
//! issue: shoot at the lowest threat, spend currency between rounds, move on.

use skyshield_core::commands::PlayerCommand;
use skyshield_core::enums::{Difficulty, GamePhase, UpgradeKind};
use skyshield_core::state::{GameStateSnapshot, ThreatView};
use skyshield_core::types::Position;
use skyshield_sim::upgrades::upgrade_cost;

/// Ticks between shots.
const FIRE_INTERVAL: u64 = 20;
/// How far ahead of a threat along its heading to aim.
const LEAD_DISTANCE: f64 = 30.0;

#[derive(Debug, Clone)]
pub struct Autopilot {
    difficulty: Difficulty,
    last_fire: Option<u64>,
}

impl Autopilot {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            last_fire: None,
        }
    }

    /// Commands to apply before the next tick.
    pub fn decide(&mut self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
        match snapshot.phase {
            GamePhase::Menu => vec![PlayerCommand::StartRound {
                difficulty: self.difficulty,
            }],
            GamePhase::Playing => self.fire(snapshot).into_iter().collect(),
            GamePhase::RoundEnd => {
                self.last_fire = None;
                let mut commands: Vec<PlayerCommand> = shopping_list(snapshot)
                    .into_iter()
                    .map(|kind| PlayerCommand::PurchaseUpgrade { kind })
                    .collect();
                commands.push(PlayerCommand::AdvanceRound);
                commands
            }
            GamePhase::Won | GamePhase::Lost => Vec::new(),
        }
    }

    fn fire(&mut self, snapshot: &GameStateSnapshot) -> Option<PlayerCommand> {
        let now = snapshot.time.tick;
        if let Some(last) = self.last_fire {
            if now < last + FIRE_INTERVAL {
                return None;
            }
        }
        let threat = lowest_threat(&snapshot.threats)?;
        let aim = lead_point(threat);
        self.last_fire = Some(now);
        Some(PlayerCommand::Fire { x: aim.x, y: aim.y })
    }
}

/// The threat closest to the ground (largest y). Ties go to the lowest serial.
pub fn lowest_threat(threats: &[ThreatView]) -> Option<&ThreatView> {
    threats.iter().fold(None, |best: Option<&ThreatView>, t| match best {
        Some(b) if b.position.y >= t.position.y => Some(b),
        _ => Some(t),
    })
}

/// Aim point a little ahead of `threat` along its heading.
pub fn lead_point(threat: &ThreatView) -> Position {
    threat.position.offset(
        threat.heading.cos() * LEAD_DISTANCE,
        threat.heading.sin() * LEAD_DISTANCE,
    )
}

/// Upgrades to buy with the snapshot's currency, cheapest tier first.
/// Beam thickness is cosmetic and never bought.
pub fn shopping_list(snapshot: &GameStateSnapshot) -> Vec<UpgradeKind> {
    let mut currency = snapshot.currency;
    let mut levels = snapshot.upgrades;
    let mut bought = Vec::new();
    loop {
        let next = UpgradeKind::ALL
            .into_iter()
            .filter(|kind| *kind != UpgradeKind::BeamThickness)
            .filter_map(|kind| upgrade_cost(kind, levels.level_for(kind)).map(|c| (kind, c)))
            .min_by_key(|(_, cost)| *cost);
        match next {
            Some((kind, cost)) if cost <= currency => {
                currency -= cost;
                levels.set_level(kind, levels.level_for(kind) + 1);
                bought.push(kind);
            }
            _ => return bought,
        }
    }
}
