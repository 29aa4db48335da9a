//! Upgrade economy: currency-gated purchase of persistent modifiers.

use thiserror::Error;

use skyshield_core::constants::{MAX_UPGRADE_TIER, UPGRADE_COSTS};
use skyshield_core::enums::UpgradeKind;
use skyshield_core::state::UpgradeLevels;

/// Why a purchase was refused. The engine treats both as no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UpgradeError {
    #[error("{} already at max tier", .0.as_str())]
    MaxTier(UpgradeKind),
    #[error("insufficient currency: have {have}, need {need}")]
    InsufficientFunds { have: u32, need: u32 },
}

/// Cost of the next tier given the current one, or `None` at max tier.
/// Every upgrade kind shares the same price ladder.
pub fn upgrade_cost(_kind: UpgradeKind, current_tier: u8) -> Option<u32> {
    UPGRADE_COSTS.get(current_tier as usize).copied()
}

/// Buy the next tier of `kind`. On success the cost is deducted from
/// `currency` and the new tier is returned. On failure nothing changes.
pub fn purchase(
    upgrades: &mut UpgradeLevels,
    currency: &mut u32,
    kind: UpgradeKind,
) -> Result<u8, UpgradeError> {
    let current = upgrades.level_for(kind);
    if current >= MAX_UPGRADE_TIER {
        return Err(UpgradeError::MaxTier(kind));
    }
    let cost = upgrade_cost(kind, current).ok_or(UpgradeError::MaxTier(kind))?;
    if *currency < cost {
        return Err(UpgradeError::InsufficientFunds {
            have: *currency,
            need: cost,
        });
    }
    *currency -= cost;
    upgrades.set_level(kind, current + 1);
    Ok(current + 1)
}
