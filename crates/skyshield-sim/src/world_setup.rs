//! Entity spawn factories for setting up the simulation world.
//!
//! Creates installations for a new round and the projectile/detonation
//! entities the systems spawn mid-tick. Every factory takes the engine's
//! serial counter so spawn order is recorded on the entity.

use hecs::World;

use skyshield_core::components::*;
use skyshield_core::constants::*;
use skyshield_core::difficulty::DifficultyProfile;
use skyshield_core::enums::DetonationKind;
use skyshield_core::types::{Playfield, Position};

/// Take the next serial number.
pub fn next_serial(counter: &mut u32) -> Serial {
    let serial = Serial(*counter);
    *counter = counter.wrapping_add(1);
    serial
}

/// Clear the world and lay out launchers and structures for a new round.
pub fn setup_round(
    world: &mut World,
    playfield: &Playfield,
    profile: &DifficultyProfile,
    next: &mut u32,
) {
    world.clear();
    spawn_launchers(world, playfield, profile, next);
    spawn_structures(world, playfield, next);
}

/// Launch positions along the ground line, left to right.
pub fn launcher_positions(playfield: &Playfield) -> [Position; LAUNCHER_COUNT] {
    LAUNCHER_X_FRACTIONS.map(|fx| {
        Position::new(
            playfield.width * fx,
            playfield.height - LAUNCHER_GROUND_OFFSET,
        )
    })
}

/// Structure positions along the ground line, left to right.
pub fn structure_positions(playfield: &Playfield) -> [Position; STRUCTURE_COUNT] {
    STRUCTURE_X_FRACTIONS.map(|fx| {
        Position::new(
            playfield.width * fx,
            playfield.height - STRUCTURE_GROUND_OFFSET,
        )
    })
}

fn spawn_launchers(
    world: &mut World,
    playfield: &Playfield,
    profile: &DifficultyProfile,
    next: &mut u32,
) {
    for (slot, position) in launcher_positions(playfield).into_iter().enumerate() {
        world.spawn((
            next_serial(next),
            position,
            Launcher {
                slot: slot as u8,
                ammo: profile.launcher_ammo[slot],
                max_ammo: profile.launcher_max_ammo[slot],
                active: true,
            },
        ));
    }
}

fn spawn_structures(world: &mut World, playfield: &Playfield, next: &mut u32) {
    for (slot, position) in structure_positions(playfield).into_iter().enumerate() {
        world.spawn((
            next_serial(next),
            position,
            Structure {
                slot: slot as u8,
                active: true,
            },
        ));
    }
}

/// Spawn a threat at `position` homing on `target`.
pub fn spawn_threat(
    world: &mut World,
    next: &mut u32,
    position: Position,
    target: Position,
    speed: f64,
) -> (hecs::Entity, Serial) {
    let serial = next_serial(next);
    let entity = world.spawn((serial, position, Threat { target, speed }));
    (entity, serial)
}

/// Spawn an interceptor at `start` flying to `target`.
pub fn spawn_interceptor(
    world: &mut World,
    next: &mut u32,
    start: Position,
    target: Position,
    speed: f64,
    launcher_slot: u8,
) -> hecs::Entity {
    world.spawn((
        next_serial(next),
        start,
        Interceptor {
            start,
            target,
            speed,
            progress: 0.0,
            launcher_slot,
        },
    ))
}

/// Spawn a primary detonation (interceptor arrival or threat impact).
pub fn spawn_detonation(
    world: &mut World,
    next: &mut u32,
    center: Position,
    max_radius: f64,
    kind: DetonationKind,
) -> hecs::Entity {
    world.spawn((
        next_serial(next),
        center,
        Detonation {
            radius: 0.0,
            max_radius,
            growing: true,
            alpha: 1.0,
            kind,
        },
    ))
}

/// Spawn the smaller secondary detonation left by a destroyed threat.
/// `upgraded_max` is the current primary max radius.
pub fn spawn_chain_detonation(
    world: &mut World,
    next: &mut u32,
    center: Position,
    upgraded_max: f64,
) -> hecs::Entity {
    world.spawn((next_serial(next), center, chain_detonation(upgraded_max)))
}

/// Component value for a fresh chain detonation.
pub fn chain_detonation(upgraded_max: f64) -> Detonation {
    Detonation {
        radius: CHAIN_DETONATION_START_RADIUS,
        max_radius: upgraded_max * CHAIN_DETONATION_SCALE,
        growing: true,
        alpha: 1.0,
        kind: DetonationKind::Chain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serial_counter_wraps() {
        let mut counter = u32::MAX;
        assert_eq!(next_serial(&mut counter), Serial(u32::MAX));
        assert_eq!(counter, 0);
        assert_eq!(next_serial(&mut counter), Serial(0));
    }

    #[test]
    fn round_layout_fills_slots() {
        let mut world = World::new();
        let mut next = 0;
        let profile = skyshield_core::enums::Difficulty::Hard.profile();
        setup_round(&mut world, &Playfield::default(), &profile, &mut next);
        assert_eq!(world.query::<&Launcher>().iter().count(), LAUNCHER_COUNT);
        assert_eq!(world.query::<&Structure>().iter().count(), STRUCTURE_COUNT);
        assert_eq!(next, (LAUNCHER_COUNT + STRUCTURE_COUNT) as u32);
    }
}
