//! Fire control: turns a pointer press into interceptor launches.

use hecs::{Entity, World};

use skyshield_core::components::Launcher;
use skyshield_core::constants::{INTERCEPTOR_LAUNCH_OFFSET_Y, SPLIT_SHOT_OFFSETS};
use skyshield_core::events::SimEvent;
use skyshield_core::state::UpgradeLevels;
use skyshield_core::types::Position;

use crate::world_setup;

/// Pick the launcher that answers a shot at `aim`: the nearest active
/// launcher with ammo left. Ties go to the lowest slot.
pub fn select_launcher(world: &World, aim: &Position) -> Option<Entity> {
    let mut candidates: Vec<(u8, Entity, f64)> = world
        .query::<(&Launcher, &Position)>()
        .iter()
        .filter(|(_, (l, _))| l.active && l.ammo > 0)
        .map(|(e, (l, pos))| (l.slot, e, pos.distance_to(aim)))
        .collect();
    candidates.sort_by_key(|(slot, _, _)| *slot);

    let mut best: Option<(Entity, f64)> = None;
    for (_, entity, distance) in candidates {
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((entity, distance)),
        }
    }
    best.map(|(entity, _)| entity)
}

/// Aim points for one trigger pull: the pointer itself, then one offset copy
/// per split-shot tier.
pub fn aim_points(aim: &Position, split_shot: u8) -> Vec<Position> {
    let copies = (split_shot as usize).min(SPLIT_SHOT_OFFSETS.len());
    std::iter::once(*aim)
        .chain(
            SPLIT_SHOT_OFFSETS[..copies]
                .iter()
                .map(|&(dx, dy)| aim.offset(dx, dy)),
        )
        .collect()
}

/// Fire at `aim`. Costs one round of ammo however many copies split shot
/// adds. Returns the number of interceptors launched, or `None` if no
/// launcher could answer.
pub fn fire(
    world: &mut World,
    aim: Position,
    upgrades: &UpgradeLevels,
    interceptor_speed: f64,
    next_serial: &mut u32,
    events: &mut Vec<SimEvent>,
) -> Option<u32> {
    let entity = select_launcher(world, &aim)?;

    let (slot, base) = {
        let (launcher, pos) = world
            .query_one_mut::<(&mut Launcher, &Position)>(entity)
            .ok()?;
        launcher.ammo -= 1;
        (launcher.slot, *pos)
    };
    let start = base.offset(0.0, -INTERCEPTOR_LAUNCH_OFFSET_Y);

    let points = aim_points(&aim, upgrades.split_shot);
    let count = points.len() as u32;
    for target in points {
        world_setup::spawn_interceptor(world, next_serial, start, target, interceptor_speed, slot);
    }

    events.push(SimEvent::InterceptorsFired {
        launcher_slot: slot,
        count,
    });
    Some(count)
}
