//! Threat spawning system: probabilistic, gated by the round quota.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyshield_core::components::{Launcher, Structure};
use skyshield_core::constants::THREAT_SPAWN_Y;
use skyshield_core::events::SimEvent;
use skyshield_core::types::{Playfield, Position};

use crate::session::SessionState;

/// Roll for one spawn this tick.
///
/// Nothing happens once the quota is spent. When the roll succeeds but every
/// installation is already down, the spawn is skipped without counting
/// against the quota.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    session: &mut SessionState,
    playfield: &Playfield,
    next_serial: &mut u32,
    events: &mut Vec<SimEvent>,
) {
    if session.spawned >= session.quota {
        return;
    }

    let profile = session.profile();
    if rng.gen::<f64>() >= profile.spawn_chance {
        return;
    }

    let targets = live_targets(world);
    if targets.is_empty() {
        return;
    }
    let target = targets[rng.gen_range(0..targets.len())];

    let position = Position::new(rng.gen::<f64>() * playfield.width, THREAT_SPAWN_Y);
    let speed = profile.threat_speed(session.round);
    let (_, serial) =
        crate::world_setup::spawn_threat(world, next_serial, position, target, speed);
    session.spawned += 1;

    events.push(SimEvent::ThreatLaunched {
        serial: serial.0,
        x: position.x,
    });
}

/// Positions of all active installations: structures first, then
/// launchers, each in slot order.
pub fn live_targets(world: &World) -> Vec<Position> {
    let mut structures: Vec<(u8, Position)> = world
        .query::<(&Structure, &Position)>()
        .iter()
        .filter(|(_, (s, _))| s.active)
        .map(|(_, (s, pos))| (s.slot, *pos))
        .collect();
    structures.sort_by_key(|(slot, _)| *slot);

    let mut launchers: Vec<(u8, Position)> = world
        .query::<(&Launcher, &Position)>()
        .iter()
        .filter(|(_, (l, _))| l.active)
        .map(|(_, (l, pos))| (l.slot, *pos))
        .collect();
    launchers.sort_by_key(|(slot, _)| *slot);

    structures
        .into_iter()
        .chain(launchers)
        .map(|(_, pos)| pos)
        .collect()
}
