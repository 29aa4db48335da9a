//! Session and round bookkeeping.
//!
//! Stored in `SimulationEngine` alongside the world, NOT as ECS entities.

use skyshield_core::difficulty::DifficultyProfile;
use skyshield_core::enums::Difficulty;
use skyshield_core::state::{RoundView, UpgradeLevels};

/// Values carried from one round into the next.
#[derive(Debug, Clone, Copy, Default)]
pub struct Carryover {
    pub score: u32,
    pub currency: u32,
    pub upgrades: UpgradeLevels,
}

/// Cumulative session state plus the counters of the current round.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub difficulty: Difficulty,
    /// 1-based round number.
    pub round: u32,
    pub score: u32,
    pub currency: u32,
    pub upgrades: UpgradeLevels,
    /// Threats to spawn this round.
    pub quota: u32,
    pub spawned: u32,
    pub destroyed: u32,
}

impl SessionState {
    /// Fresh counters for `round`. Round 1 always starts with no upgrades;
    /// later rounds keep whatever the caller carries over.
    pub fn begin_round(difficulty: Difficulty, round: u32, carry: Carryover) -> Self {
        let upgrades = if round <= 1 {
            UpgradeLevels::default()
        } else {
            carry.upgrades
        };
        Self {
            difficulty,
            round,
            score: carry.score,
            currency: carry.currency,
            upgrades,
            quota: difficulty.profile().round_quota(round),
            spawned: 0,
            destroyed: 0,
        }
    }

    pub fn profile(&self) -> DifficultyProfile {
        self.difficulty.profile()
    }

    pub fn carryover(&self) -> Carryover {
        Carryover {
            score: self.score,
            currency: self.currency,
            upgrades: self.upgrades,
        }
    }

    pub fn round_view(&self) -> RoundView {
        RoundView {
            number: self.round,
            quota: self.quota,
            spawned: self.spawned,
            destroyed: self.destroyed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_one_resets_upgrades() {
        let carry = Carryover {
            score: 300,
            currency: 12,
            upgrades: UpgradeLevels {
                explosion_radius: 2,
                split_shot: 1,
                beam_thickness: 3,
            },
        };
        let session = SessionState::begin_round(Difficulty::Hard, 1, carry);
        assert_eq!(session.upgrades, UpgradeLevels::default());
        assert_eq!(session.score, 300);
        assert_eq!(session.quota, 15);
    }

    #[test]
    fn later_rounds_keep_carryover() {
        let carry = Carryover {
            score: 300,
            currency: 12,
            upgrades: UpgradeLevels {
                explosion_radius: 2,
                split_shot: 1,
                beam_thickness: 0,
            },
        };
        let session = SessionState::begin_round(Difficulty::Easy, 3, carry);
        assert_eq!(session.upgrades, carry.upgrades);
        assert_eq!(session.currency, 12);
        assert_eq!(session.spawned, 0);
        assert_eq!(session.destroyed, 0);
        // floor(25 * 0.6) = 15
        assert_eq!(session.quota, 15);
    }
}
