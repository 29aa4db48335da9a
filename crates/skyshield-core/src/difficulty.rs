//! Per-difficulty tuning table.
//!
//! Every difficulty-dependent literal lives here so resolvers never branch on
//! `Difficulty` directly.

use serde::{Deserialize, Serialize};

use crate::constants::{
    BASE_ROUND_QUOTA, LAUNCHER_COUNT, QUOTA_PER_ROUND, THREAT_BASE_SPEED, THREAT_SPEED_PER_ROUND,
};
use crate::enums::Difficulty;

/// Tuning parameters for one difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Probability of spawning a threat on any given tick.
    pub spawn_chance: f64,
    /// Multiplier on the per-round threat speed.
    pub threat_speed_multiplier: f64,
    /// Multiplier on the per-round spawn quota.
    pub quota_multiplier: f64,
    /// Ammunition each launcher starts a round with (left, centre, right).
    pub launcher_ammo: [u32; LAUNCHER_COUNT],
    /// Nominal magazine size of each launcher (left, centre, right).
    pub launcher_max_ammo: [u32; LAUNCHER_COUNT],
    /// Interceptor speed in units per tick.
    pub interceptor_speed: f64,
}

impl Difficulty {
    /// Look up the tuning table entry for this tier.
    pub fn profile(&self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                spawn_chance: 0.01,
                threat_speed_multiplier: 0.7,
                quota_multiplier: 0.6,
                launcher_ammo: [30, 60, 30],
                launcher_max_ammo: [20, 40, 20],
                interceptor_speed: 8.0,
            },
            Difficulty::Hard => DifficultyProfile {
                spawn_chance: 0.015,
                threat_speed_multiplier: 1.0,
                quota_multiplier: 1.0,
                launcher_ammo: [20, 40, 20],
                launcher_max_ammo: [20, 40, 20],
                interceptor_speed: 12.0,
            },
            Difficulty::Hell => DifficultyProfile {
                spawn_chance: 0.03,
                threat_speed_multiplier: 1.4,
                quota_multiplier: 1.5,
                launcher_ammo: [20, 40, 20],
                launcher_max_ammo: [20, 40, 20],
                interceptor_speed: 12.0,
            },
        }
    }
}

impl DifficultyProfile {
    /// Number of threats to spawn in `round` (1-based).
    pub fn round_quota(&self, round: u32) -> u32 {
        let base = (BASE_ROUND_QUOTA + round * QUOTA_PER_ROUND) as f64;
        (base * self.quota_multiplier).floor() as u32
    }

    /// Threat speed in units per tick for `round` (1-based).
    pub fn threat_speed(&self, round: u32) -> f64 {
        (THREAT_BASE_SPEED + round as f64 * THREAT_SPEED_PER_ROUND) * self.threat_speed_multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_scales_with_round_and_tier() {
        assert_eq!(Difficulty::Hard.profile().round_quota(1), 15);
        assert_eq!(Difficulty::Hard.profile().round_quota(2), 20);
        // floor(15 * 0.6) = 9
        assert_eq!(Difficulty::Easy.profile().round_quota(1), 9);
        // floor(20 * 1.5) = 30
        assert_eq!(Difficulty::Hell.profile().round_quota(2), 30);
    }

    #[test]
    fn threat_speed_formula() {
        let hard = Difficulty::Hard.profile();
        assert!((hard.threat_speed(1) - 1.2).abs() < 1e-12);
        assert!((hard.threat_speed(5) - 2.0).abs() < 1e-12);

        let easy = Difficulty::Easy.profile();
        assert!((easy.threat_speed(1) - 1.2 * 0.7).abs() < 1e-12);

        let hell = Difficulty::Hell.profile();
        assert!((hell.threat_speed(1) - 1.2 * 1.4).abs() < 1e-12);
    }

    #[test]
    fn spawn_chance_ordering() {
        let easy = Difficulty::Easy.profile().spawn_chance;
        let hard = Difficulty::Hard.profile().spawn_chance;
        let hell = Difficulty::Hell.profile().spawn_chance;
        assert!(easy < hard && hard < hell);
    }
}
