//! Round/outcome evaluation, run once at the end of every `Playing` tick.

use hecs::World;

use skyshield_core::components::{Detonation, Launcher, Threat};
use skyshield_core::constants::TARGET_SCORE;
use skyshield_core::enums::GamePhase;

use crate::session::SessionState;

/// Everything the outcome rules look at, gathered from the post-tick world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeInputs {
    pub score: u32,
    pub launchers_active: usize,
    pub quota: u32,
    pub spawned: u32,
    pub threats_remaining: usize,
    pub detonations_remaining: usize,
}

impl OutcomeInputs {
    pub fn gather(world: &World, session: &SessionState) -> Self {
        let launchers_active = world
            .query::<&Launcher>()
            .iter()
            .filter(|(_, l)| l.active)
            .count();
        let threats_remaining = world.query::<&Threat>().iter().count();
        let detonations_remaining = world.query::<&Detonation>().iter().count();
        Self {
            score: session.score,
            launchers_active,
            quota: session.quota,
            spawned: session.spawned,
            threats_remaining,
            detonations_remaining,
        }
    }
}

/// Phase implied by `inputs`, in priority order: win, loss, round clear.
/// Returns `Playing` when none applies. Pure, so evaluating twice on the
/// same state gives the same answer.
pub fn evaluate(inputs: &OutcomeInputs) -> GamePhase {
    if inputs.score >= TARGET_SCORE {
        GamePhase::Won
    } else if inputs.launchers_active == 0 {
        GamePhase::Lost
    } else if inputs.spawned >= inputs.quota
        && inputs.threats_remaining == 0
        && inputs.detonations_remaining == 0
    {
        GamePhase::RoundEnd
    } else {
        GamePhase::Playing
    }
}
