//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in playfield space (screen units).
/// x = right, y = down (y grows toward the ground line).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Playfield dimensions. Installations are laid out relative to these.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f64,
    pub height: f64,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: crate::constants::DEFAULT_PLAYFIELD_WIDTH,
            height: crate::constants::DEFAULT_PLAYFIELD_HEIGHT,
        }
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Nominal elapsed time in seconds, assuming ticks arrive at `TICK_RATE`.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        DVec2::from(*self).distance(DVec2::from(*other))
    }

    /// Angle of the vector toward `other`, in radians (`atan2(dy, dx)`).
    pub fn bearing_to(&self, other: &Position) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Move `distance` units along the current bearing to `target`.
    ///
    /// The heading is recomputed from the current position on every call,
    /// so repeated steps home in on the target.
    pub fn step_toward(&self, target: &Position, distance: f64) -> Position {
        let angle = self.bearing_to(target);
        Position::new(
            self.x + angle.cos() * distance,
            self.y + angle.sin() * distance,
        )
    }

    /// Linear interpolation between `self` and `other` by fraction `t`.
    pub fn lerp(&self, other: &Position, t: f64) -> Position {
        DVec2::from(*self).lerp(DVec2::from(*other), t).into()
    }

    /// Translate by a fixed offset.
    pub fn offset(&self, dx: f64, dy: f64) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }

    /// Whether `other` lies strictly inside the axis-aligned box of
    /// half-extent `half_extent` centred on `self`.
    pub fn within_box(&self, other: &Position, half_extent: f64) -> bool {
        (self.x - other.x).abs() < half_extent && (self.y - other.y).abs() < half_extent
    }
}

impl From<Position> for DVec2 {
    fn from(p: Position) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Position::new(v.x, v.y)
    }
}

impl SimTime {
    /// Nominal seconds per tick.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
