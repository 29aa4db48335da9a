//! Game loop thread: runs the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is moved into this thread and never shared. Commands arrive via
//! an `mpsc` channel; snapshots are stored in shared state for polling.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use skyshield_core::constants::TICK_RATE;
use skyshield_core::enums::GamePhase;
use skyshield_core::state::GameStateSnapshot;
use skyshield_sim::SimulationEngine;

use crate::autopilot::Autopilot;
use crate::state::{GameLoopCommand, SharedSnapshot};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// How the loop paces itself and when it stops on its own.
#[derive(Debug, Clone, Default)]
pub struct LoopOptions {
    /// Sleep to the next frame boundary after each tick.
    pub realtime: bool,
    /// Stop after this many iterations.
    pub max_ticks: Option<u64>,
    /// Feed commands from the autopilot; the loop ends when the session does.
    pub autopilot: Option<Autopilot>,
}

/// Where the loop was when it stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSummary {
    pub iterations: u64,
    pub phase: GamePhase,
    pub round: u32,
    pub score: u32,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle, which yields the
/// summary once the loop stops.
pub fn spawn_game_loop(
    engine: SimulationEngine,
    options: LoopOptions,
    latest_snapshot: SharedSnapshot,
) -> (mpsc::Sender<GameLoopCommand>, JoinHandle<LoopSummary>) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("skyshield-game-loop".into())
        .spawn(move || run_game_loop(engine, options, cmd_rx, &latest_snapshot))
        .expect("Failed to spawn game loop thread");

    (cmd_tx, handle)
}

/// The game loop. Runs until Shutdown, channel disconnect, or one of the
/// stop conditions in `options`.
pub fn run_game_loop(
    mut engine: SimulationEngine,
    mut options: LoopOptions,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &std::sync::Mutex<Option<GameStateSnapshot>>,
) -> LoopSummary {
    let mut iterations = 0u64;
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => {
                    debug!(?cmd, "command");
                    engine.apply_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    info!(iterations, "game loop stopped");
                    return summarize(&engine, iterations);
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick (engine freezes the world outside Playing)
        let snapshot = engine.tick();
        iterations += 1;

        // 3. Let the autopilot react to what it sees
        let session_over = snapshot.phase.is_terminal();
        if let Some(pilot) = options.autopilot.as_mut() {
            engine.apply_commands(pilot.decide(&snapshot));
        }

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if options.max_ticks.is_some_and(|max| iterations >= max)
            || (options.autopilot.is_some() && session_over)
        {
            info!(iterations, phase = ?engine.phase(), "game loop finished");
            return summarize(&engine, iterations);
        }

        // 5. Sleep until next tick
        if options.realtime {
            next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > TICK_DURATION * 2 {
                // Too far behind: reset to avoid a catch-up spiral
                next_tick_time = now;
            }
        }
    }
}

fn summarize(engine: &SimulationEngine, iterations: u64) -> LoopSummary {
    let session = engine.session();
    LoopSummary {
        iterations,
        phase: engine.phase(),
        round: session.round,
        score: session.score,
    }
}
