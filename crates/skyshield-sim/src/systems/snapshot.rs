//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! Read-only: never modifies the world.

use hecs::World;

use skyshield_core::components::*;
use skyshield_core::enums::GamePhase;
use skyshield_core::events::SimEvent;
use skyshield_core::state::*;
use skyshield_core::types::{Position, SimTime};

use crate::session::SessionState;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    session: &SessionState,
    events: Vec<SimEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        difficulty: session.difficulty,
        round: session.round_view(),
        score: session.score,
        currency: session.currency,
        upgrades: session.upgrades,
        beam_scale: session.upgrades.beam_scale(),
        threats: build_threats(world),
        interceptors: build_interceptors(world),
        detonations: build_detonations(world),
        structures: build_structures(world),
        launchers: build_launchers(world),
        events,
    }
}

fn build_threats(world: &World) -> Vec<ThreatView> {
    let mut threats: Vec<ThreatView> = world
        .query::<(&Serial, &Position, &Threat)>()
        .iter()
        .map(|(_, (serial, pos, threat))| ThreatView {
            serial: serial.0,
            position: *pos,
            target: threat.target,
            heading: pos.bearing_to(&threat.target),
        })
        .collect();

    threats.sort_by_key(|t| t.serial);
    threats
}

fn build_interceptors(world: &World) -> Vec<InterceptorView> {
    let mut interceptors: Vec<InterceptorView> = world
        .query::<(&Serial, &Position, &Interceptor)>()
        .iter()
        .map(|(_, (serial, pos, interceptor))| InterceptorView {
            serial: serial.0,
            start: interceptor.start,
            position: *pos,
            target: interceptor.target,
            progress: interceptor.progress,
            launcher_slot: interceptor.launcher_slot,
        })
        .collect();

    interceptors.sort_by_key(|i| i.serial);
    interceptors
}

fn build_detonations(world: &World) -> Vec<DetonationView> {
    let mut detonations: Vec<DetonationView> = world
        .query::<(&Serial, &Position, &Detonation)>()
        .iter()
        .map(|(_, (serial, pos, d))| DetonationView {
            serial: serial.0,
            position: *pos,
            radius: d.radius,
            max_radius: d.max_radius,
            alpha: d.alpha,
            kind: d.kind,
        })
        .collect();

    detonations.sort_by_key(|d| d.serial);
    detonations
}

fn build_structures(world: &World) -> Vec<StructureView> {
    let mut structures: Vec<StructureView> = world
        .query::<(&Position, &Structure)>()
        .iter()
        .map(|(_, (pos, s))| StructureView {
            slot: s.slot,
            position: *pos,
            active: s.active,
        })
        .collect();

    structures.sort_by_key(|s| s.slot);
    structures
}

fn build_launchers(world: &World) -> Vec<LauncherView> {
    let mut launchers: Vec<LauncherView> = world
        .query::<(&Position, &Launcher)>()
        .iter()
        .map(|(_, (pos, l))| LauncherView {
            slot: l.slot,
            position: *pos,
            ammo: l.ammo,
            max_ammo: l.max_ammo,
            active: l.active,
        })
        .collect();

    launchers.sort_by_key(|l| l.slot);
    launchers
}
