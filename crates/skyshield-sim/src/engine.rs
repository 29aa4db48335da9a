//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, applies player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use skyshield_core::commands::PlayerCommand;
use skyshield_core::enums::{Difficulty, GamePhase, UpgradeKind};
use skyshield_core::events::SimEvent;
use skyshield_core::state::GameStateSnapshot;
use skyshield_core::types::{Playfield, Position, SimTime};

use crate::session::{Carryover, SessionState};
use crate::systems;
use crate::systems::outcome::OutcomeInputs;
use crate::upgrades;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Playfield dimensions used for layout and spawning.
    pub playfield: Playfield,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            playfield: Playfield::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    playfield: Playfield,
    session: SessionState,
    next_serial: u32,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            playfield: config.playfield,
            session: SessionState::default(),
            next_serial: 0,
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Apply a player command immediately. Commands that make no sense in
    /// the current phase are ignored.
    pub fn apply_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Fire { x, y } => self.fire(Position::new(x, y)),
            PlayerCommand::StartRound { difficulty } => {
                if matches!(
                    self.phase,
                    GamePhase::Menu | GamePhase::Won | GamePhase::Lost
                ) {
                    self.start_session(difficulty);
                } else {
                    debug!(phase = ?self.phase, "start ignored");
                }
            }
            PlayerCommand::Retry => {
                if self.phase.is_terminal() {
                    self.start_session(self.session.difficulty);
                } else {
                    debug!(phase = ?self.phase, "retry ignored");
                }
            }
            PlayerCommand::AdvanceRound => {
                if self.phase == GamePhase::RoundEnd {
                    let next_round = self.session.round + 1;
                    let carry = self.session.carryover();
                    self.begin_round(self.session.difficulty, next_round, carry);
                } else {
                    debug!(phase = ?self.phase, "advance ignored");
                }
            }
            PlayerCommand::PurchaseUpgrade { kind } => self.purchase(kind),
            PlayerCommand::ReturnToMenu => {
                self.world.clear();
                self.set_phase(GamePhase::Menu);
            }
        }
    }

    /// Apply several commands in order.
    pub fn apply_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        for command in commands {
            self.apply_command(command);
        }
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    /// Outside `Playing` the world is frozen and time does not advance.
    pub fn tick(&mut self) -> GameStateSnapshot {
        if self.phase == GamePhase::Playing {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, &self.session, events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the playfield dimensions.
    pub fn playfield(&self) -> Playfield {
        self.playfield
    }

    /// Session counters: score, currency, upgrades, round progress.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    /// Force a phase without running any transition logic (for testing).
    #[cfg(test)]
    pub fn force_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
    }

    /// Spawn a threat at `position` homing on `target` (for testing).
    #[cfg(test)]
    pub fn spawn_test_threat(&mut self, position: Position, target: Position, speed: f64) -> u32 {
        let (_, serial) =
            world_setup::spawn_threat(&mut self.world, &mut self.next_serial, position, target, speed);
        serial.0
    }

    /// Spawn a primary detonation at `center` (for testing).
    #[cfg(test)]
    pub fn spawn_test_detonation(
        &mut self,
        center: Position,
        max_radius: f64,
    ) -> hecs::Entity {
        world_setup::spawn_detonation(
            &mut self.world,
            &mut self.next_serial,
            center,
            max_radius,
            skyshield_core::enums::DetonationKind::Interceptor,
        )
    }

    /// New session at round 1: score, currency and upgrades start from zero.
    fn start_session(&mut self, difficulty: Difficulty) {
        self.time = SimTime::default();
        self.next_serial = 0;
        self.begin_round(difficulty, 1, Carryover::default());
    }

    fn begin_round(&mut self, difficulty: Difficulty, round: u32, carry: Carryover) {
        self.session = SessionState::begin_round(difficulty, round, carry);
        let profile = self.session.profile();
        world_setup::setup_round(&mut self.world, &self.playfield, &profile, &mut self.next_serial);
        info!(
            ?difficulty,
            round,
            quota = self.session.quota,
            "round started"
        );
        self.set_phase(GamePhase::Playing);
    }

    fn fire(&mut self, aim: Position) {
        if self.phase != GamePhase::Playing {
            debug!(phase = ?self.phase, "fire ignored");
            return;
        }
        let speed = self.session.profile().interceptor_speed;
        let fired = systems::fire_control::fire(
            &mut self.world,
            aim,
            &self.session.upgrades,
            speed,
            &mut self.next_serial,
            &mut self.events,
        );
        if fired.is_none() {
            debug!(x = aim.x, y = aim.y, "no launcher available");
        }
    }

    fn purchase(&mut self, kind: UpgradeKind) {
        match upgrades::purchase(&mut self.session.upgrades, &mut self.session.currency, kind) {
            Ok(tier) => {
                info!(kind = kind.as_str(), tier, "upgrade purchased");
                self.events.push(SimEvent::UpgradePurchased { kind, tier });
            }
            Err(err) => debug!(%err, "purchase rejected"),
        }
    }

    fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        if from == to {
            return;
        }
        info!(?from, ?to, "phase changed");
        self.phase = to;
        self.events.push(SimEvent::PhaseChanged { from, to });
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Threat spawning
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.session,
            &self.playfield,
            &mut self.next_serial,
            &mut self.events,
        );

        let max_radius = self.session.upgrades.detonation_max_radius();
        // 2. Threat movement and ground impacts
        systems::movement::run_threats(
            &mut self.world,
            max_radius,
            &mut self.next_serial,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        // 3. Interceptor flight and arrival detonations
        systems::movement::run_interceptors(
            &mut self.world,
            max_radius,
            &mut self.next_serial,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        // 4. Detonation growth and decay
        systems::detonation::run(&mut self.world, &mut self.despawn_buffer);
        // 5. Blast/threat collisions with chain reactions
        let destroyed = systems::collision::run(
            &mut self.world,
            &mut self.session,
            &mut self.next_serial,
            &mut self.events,
        );
        if destroyed > 0 {
            debug!(destroyed, score = self.session.score, "threats destroyed");
        }
        // 6. Round outcome
        let next = systems::outcome::evaluate(&OutcomeInputs::gather(&self.world, &self.session));
        self.set_phase(next);
    }
}
