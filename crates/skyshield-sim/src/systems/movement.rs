//! Motion and targeting.
//!
//! Threats home on their fixed target, re-aiming every tick, and detonate on
//! arrival, knocking out any installation at the impact point. Interceptors
//! fly a straight line parameterised by `progress` and detonate at their aim
//! point.

use hecs::{Entity, World};

use skyshield_core::components::*;
use skyshield_core::constants::{IMPACT_MATCH_HALF_EXTENT, THREAT_ARRIVAL_DISTANCE};
use skyshield_core::enums::DetonationKind;
use skyshield_core::events::SimEvent;
use skyshield_core::types::Position;

use crate::world_setup;

/// Whether a threat at `position` has reached `target`. Strict `<`.
pub fn has_arrived(position: &Position, target: &Position) -> bool {
    position.distance_to(target) < THREAT_ARRIVAL_DISTANCE
}

/// Advance all threats by one tick.
///
/// A threat already within arrival distance does not move this tick: it is
/// removed and a primary detonation is spawned at its target.
pub fn run_threats(
    world: &mut World,
    detonation_max_radius: f64,
    next_serial: &mut u32,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
) {
    despawn_buffer.clear();

    let mut impacts: Vec<(Serial, Position)> = Vec::new();
    for (entity, (serial, pos, threat)) in
        world.query_mut::<(&Serial, &mut Position, &Threat)>()
    {
        if has_arrived(pos, &threat.target) {
            impacts.push((*serial, threat.target));
            despawn_buffer.push(entity);
        } else {
            *pos = pos.step_toward(&threat.target, threat.speed);
        }
    }
    impacts.sort_by_key(|(serial, _)| *serial);

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    for (_, target) in impacts {
        world_setup::spawn_detonation(
            world,
            next_serial,
            target,
            detonation_max_radius,
            DetonationKind::Impact,
        );
        events.push(SimEvent::Detonation {
            x: target.x,
            y: target.y,
            kind: DetonationKind::Impact,
        });
        damage_installations(world, &target, events);
    }
}

/// Knock out the first structure and the first launcher whose position lies
/// inside the impact box around `impact`.
fn damage_installations(world: &mut World, impact: &Position, events: &mut Vec<SimEvent>) {
    let mut structures: Vec<(u8, Entity, Position)> = world
        .query::<(&Structure, &Position)>()
        .iter()
        .map(|(e, (s, pos))| (s.slot, e, *pos))
        .collect();
    structures.sort_by_key(|(slot, _, _)| *slot);
    if let Some(&(slot, entity, _)) = structures
        .iter()
        .find(|(_, _, pos)| pos.within_box(impact, IMPACT_MATCH_HALF_EXTENT))
    {
        if let Ok(mut structure) = world.get::<&mut Structure>(entity) {
            if structure.active {
                structure.active = false;
                events.push(SimEvent::StructureLost { slot });
            }
        }
    }

    let mut launchers: Vec<(u8, Entity, Position)> = world
        .query::<(&Launcher, &Position)>()
        .iter()
        .map(|(e, (l, pos))| (l.slot, e, *pos))
        .collect();
    launchers.sort_by_key(|(slot, _, _)| *slot);
    if let Some(&(slot, entity, _)) = launchers
        .iter()
        .find(|(_, _, pos)| pos.within_box(impact, IMPACT_MATCH_HALF_EXTENT))
    {
        if let Ok(mut launcher) = world.get::<&mut Launcher>(entity) {
            if launcher.active {
                launcher.active = false;
                events.push(SimEvent::LauncherLost { slot });
            }
        }
    }
}

/// Advance an interceptor's path fraction by one tick.
///
/// Returns `true` once the aim point is reached. A zero-length path arrives
/// immediately instead of dividing by zero.
pub fn advance_progress(interceptor: &mut Interceptor) -> bool {
    let total = interceptor.start.distance_to(&interceptor.target);
    if total <= 0.0 {
        interceptor.progress = 1.0;
        return true;
    }
    interceptor.progress += interceptor.speed / total;
    if interceptor.progress >= 1.0 {
        interceptor.progress = 1.0;
        return true;
    }
    false
}

/// Advance all interceptors by one tick; arrivals become detonations.
pub fn run_interceptors(
    world: &mut World,
    detonation_max_radius: f64,
    next_serial: &mut u32,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
) {
    despawn_buffer.clear();

    let mut arrivals: Vec<(Serial, Position)> = Vec::new();
    for (entity, (serial, pos, interceptor)) in
        world.query_mut::<(&Serial, &mut Position, &mut Interceptor)>()
    {
        if advance_progress(interceptor) {
            arrivals.push((*serial, interceptor.target));
            despawn_buffer.push(entity);
        } else {
            *pos = interceptor
                .start
                .lerp(&interceptor.target, interceptor.progress);
        }
    }
    arrivals.sort_by_key(|(serial, _)| *serial);

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    for (_, target) in arrivals {
        world_setup::spawn_detonation(
            world,
            next_serial,
            target,
            detonation_max_radius,
            DetonationKind::Interceptor,
        );
        events.push(SimEvent::Detonation {
            x: target.x,
            y: target.y,
            kind: DetonationKind::Interceptor,
        });
    }
}
