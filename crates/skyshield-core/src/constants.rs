//! Simulation constants and tuning parameters.
//!
//! Physics is tied to tick count, not wall-clock time: every speed and growth
//! rate below is expressed in units per tick.

/// Nominal tick rate (Hz). One tick per display frame.
pub const TICK_RATE: u32 = 60;

// --- Playfield ---

/// Default playfield width (screen units).
pub const DEFAULT_PLAYFIELD_WIDTH: f64 = 1280.0;

/// Default playfield height (screen units).
pub const DEFAULT_PLAYFIELD_HEIGHT: f64 = 720.0;

/// Spawn altitude for threats, above the visible area.
pub const THREAT_SPAWN_Y: f64 = -20.0;

// --- Layout ---

/// Number of launchers per round.
pub const LAUNCHER_COUNT: usize = 3;

/// Launcher x positions as fractions of playfield width.
pub const LAUNCHER_X_FRACTIONS: [f64; LAUNCHER_COUNT] = [0.15, 0.5, 0.85];

/// Launcher distance above the bottom edge.
pub const LAUNCHER_GROUND_OFFSET: f64 = 60.0;

/// Number of structures per round.
pub const STRUCTURE_COUNT: usize = 4;

/// Structure x positions as fractions of playfield width.
pub const STRUCTURE_X_FRACTIONS: [f64; STRUCTURE_COUNT] = [0.3, 0.4, 0.6, 0.7];

/// Structure distance above the bottom edge.
pub const STRUCTURE_GROUND_OFFSET: f64 = 40.0;

/// Interceptors leave the launcher this far above its base.
pub const INTERCEPTOR_LAUNCH_OFFSET_Y: f64 = 30.0;

// --- Threats ---

/// Threat speed at round 0, before the difficulty multiplier.
pub const THREAT_BASE_SPEED: f64 = 1.0;

/// Threat speed added per round.
pub const THREAT_SPEED_PER_ROUND: f64 = 0.2;

/// A threat closer than this to its target has arrived (strict `<`).
pub const THREAT_ARRIVAL_DISTANCE: f64 = 5.0;

/// Per-axis half-extent of the box that matches an impact to an installation.
pub const IMPACT_MATCH_HALF_EXTENT: f64 = 20.0;

// --- Rounds ---

/// Spawn quota at round 0, before the difficulty multiplier.
pub const BASE_ROUND_QUOTA: u32 = 10;

/// Spawn quota added per round.
pub const QUOTA_PER_ROUND: u32 = 5;

/// Score at which the session is won.
pub const TARGET_SCORE: u32 = 1000;

/// Score per destroyed threat.
pub const SCORE_PER_KILL: u32 = 20;

/// Currency per destroyed threat.
pub const CURRENCY_PER_KILL: u32 = 1;

// --- Detonations ---

/// Base maximum detonation radius, before upgrades.
pub const DETONATION_BASE_MAX_RADIUS: f64 = 45.0;

/// Max radius added per explosion-radius upgrade tier.
pub const DETONATION_RADIUS_PER_TIER: f64 = 20.0;

/// Radius growth per tick while growing.
pub const DETONATION_GROWTH_RATE: f64 = 1.5;

/// Radius decay per tick once fully grown.
pub const DETONATION_DECAY_RATE: f64 = DETONATION_GROWTH_RATE * 0.5;

/// Alpha fade per tick once fully grown.
pub const DETONATION_FADE_RATE: f64 = 0.02;

/// Starting radius of a chain detonation.
pub const CHAIN_DETONATION_START_RADIUS: f64 = 5.0;

/// Chain detonation max radius as a fraction of the current upgraded max.
pub const CHAIN_DETONATION_SCALE: f64 = 0.6;

// --- Fire control ---

/// Aim-point offsets for split-shot copies, in unlock order.
pub const SPLIT_SHOT_OFFSETS: [(f64, f64); 3] = [(-40.0, 0.0), (40.0, 0.0), (0.0, -40.0)];

// --- Upgrades ---

/// Highest tier any upgrade can reach.
pub const MAX_UPGRADE_TIER: u8 = 3;

/// Cost of buying the next tier, indexed by the current tier.
pub const UPGRADE_COSTS: [u32; MAX_UPGRADE_TIER as usize] = [30, 50, 100];

/// Beam width multiplier added per beam-thickness tier (cosmetic).
pub const BEAM_SCALE_PER_TIER: f64 = 0.5;
