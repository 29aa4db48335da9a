//! Threat-vs-detonation collision.
//!
//! A threat is destroyed when its distance to any detonation centre is
//! strictly less than that detonation's radius. Each kill leaves a chain
//! detonation at the threat's position, which joins the active set straight
//! away: threats checked later in the same pass can be caught by it, so one
//! interceptor can cascade through a tight formation in a single tick.

use hecs::{Entity, World};

use skyshield_core::components::{Detonation, Serial, Threat};
use skyshield_core::constants::{CURRENCY_PER_KILL, SCORE_PER_KILL};
use skyshield_core::enums::DetonationKind;
use skyshield_core::events::SimEvent;
use skyshield_core::types::Position;

use crate::session::SessionState;
use crate::world_setup;

/// A blast as seen by the collision pass.
#[derive(Debug, Clone, Copy)]
pub struct Blast {
    pub center: Position,
    pub radius: f64,
    pub kind: DetonationKind,
}

/// Index of the first blast that overlaps `position`, if any.
pub fn first_overlap(position: &Position, blasts: &[Blast]) -> Option<usize> {
    blasts
        .iter()
        .position(|b| position.distance_to(&b.center) < b.radius)
}

/// Resolve collisions for this tick. Returns the number of threats destroyed.
pub fn run(
    world: &mut World,
    session: &mut SessionState,
    next_serial: &mut u32,
    events: &mut Vec<SimEvent>,
) -> u32 {
    let mut blasts: Vec<(Serial, Blast)> = world
        .query::<(&Serial, &Position, &Detonation)>()
        .iter()
        .map(|(_, (serial, pos, d))| {
            (
                *serial,
                Blast {
                    center: *pos,
                    radius: d.radius,
                    kind: d.kind,
                },
            )
        })
        .collect();
    blasts.sort_by_key(|(serial, _)| *serial);
    let mut blasts: Vec<Blast> = blasts.into_iter().map(|(_, b)| b).collect();

    let mut threats: Vec<(Serial, Entity, Position)> = world
        .query::<(&Serial, &Position, &Threat)>()
        .iter()
        .map(|(e, (serial, pos, _))| (*serial, e, *pos))
        .collect();
    threats.sort_by_key(|(serial, _, _)| *serial);

    let upgraded_max = session.upgrades.detonation_max_radius();
    let chain_template = world_setup::chain_detonation(upgraded_max);

    let mut kills: Vec<(Entity, Position)> = Vec::new();
    for (serial, entity, pos) in threats {
        let Some(hit) = first_overlap(&pos, &blasts) else {
            continue;
        };
        events.push(SimEvent::ThreatDestroyed {
            serial: serial.0,
            chain: blasts[hit].kind == DetonationKind::Chain,
        });
        blasts.push(Blast {
            center: pos,
            radius: chain_template.radius,
            kind: DetonationKind::Chain,
        });
        kills.push((entity, pos));
    }

    let destroyed = kills.len() as u32;
    for (entity, pos) in kills {
        let _ = world.despawn(entity);
        world_setup::spawn_chain_detonation(world, next_serial, pos, upgraded_max);
        events.push(SimEvent::Detonation {
            x: pos.x,
            y: pos.y,
            kind: DetonationKind::Chain,
        });
    }

    session.score += destroyed * SCORE_PER_KILL;
    session.currency += destroyed * CURRENCY_PER_KILL;
    session.destroyed += destroyed;
    destroyed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blast(x: f64, y: f64, radius: f64) -> Blast {
        Blast {
            center: Position::new(x, y),
            radius,
            kind: DetonationKind::Interceptor,
        }
    }

    #[test]
    fn overlap_is_strict() {
        let blasts = [blast(0.0, 0.0, 10.0)];
        assert_eq!(first_overlap(&Position::new(9.99, 0.0), &blasts), Some(0));
        assert_eq!(first_overlap(&Position::new(10.0, 0.0), &blasts), None);
    }

    #[test]
    fn any_blast_counts() {
        let blasts = [blast(0.0, 0.0, 1.0), blast(100.0, 0.0, 30.0)];
        assert_eq!(first_overlap(&Position::new(80.0, 0.0), &blasts), Some(1));
    }

    #[test]
    fn zero_radius_never_hits() {
        let blasts = [blast(5.0, 5.0, 0.0)];
        assert_eq!(first_overlap(&Position::new(5.0, 5.0), &blasts), None);
    }
}
