//! Detonation aging system.
//!
//! Blasts grow at a fixed rate until they reach their max radius, then shrink
//! and fade. A blast is removed once its radius is no longer positive. Alpha
//! is cosmetic: a fully faded blast with radius left still collides.

use hecs::{Entity, World};

use skyshield_core::components::Detonation;
use skyshield_core::constants::{
    DETONATION_DECAY_RATE, DETONATION_FADE_RATE, DETONATION_GROWTH_RATE,
};

/// Age one detonation by a tick. Returns `false` when it should be removed.
pub fn age(detonation: &mut Detonation) -> bool {
    if detonation.growing {
        detonation.radius += DETONATION_GROWTH_RATE;
        if detonation.radius >= detonation.max_radius {
            detonation.growing = false;
        }
    } else {
        detonation.radius -= DETONATION_DECAY_RATE;
        detonation.alpha = (detonation.alpha - DETONATION_FADE_RATE).max(0.0);
    }
    detonation.radius > 0.0
}

/// Age every detonation in the world and despawn the spent ones.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, detonation) in world.query_mut::<&mut Detonation>() {
        if !age(detonation) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyshield_core::enums::DetonationKind;

    fn fresh(max_radius: f64) -> Detonation {
        Detonation {
            radius: 0.0,
            max_radius,
            growing: true,
            alpha: 1.0,
            kind: DetonationKind::Interceptor,
        }
    }

    #[test]
    fn grows_then_flips_on_reaching_max() {
        let mut d = fresh(3.0);
        assert!(age(&mut d));
        assert!((d.radius - 1.5).abs() < 1e-12);
        assert!(d.growing);

        assert!(age(&mut d));
        assert!((d.radius - 3.0).abs() < 1e-12);
        assert!(!d.growing, "reaching max flips to decay on the same tick");

        assert!(age(&mut d));
        assert!((d.radius - 2.25).abs() < 1e-12);
        assert!((d.alpha - 0.98).abs() < 1e-12);
    }

    #[test]
    fn removed_exactly_when_radius_not_positive() {
        let mut d = fresh(1.5);
        assert!(age(&mut d)); // 1.5, flips
        assert!(age(&mut d)); // 0.75
        assert!(!age(&mut d)); // 0.0
        assert!(d.radius <= 0.0);
    }

    #[test]
    fn alpha_clamps_at_zero_without_removal() {
        let mut d = Detonation {
            radius: 80.0,
            max_radius: 80.0,
            growing: false,
            alpha: 0.01,
            kind: DetonationKind::Chain,
        };
        assert!(age(&mut d));
        assert_eq!(d.alpha, 0.0);
        assert!(age(&mut d));
        assert_eq!(d.alpha, 0.0);
        assert!(d.radius > 0.0);
    }
}
