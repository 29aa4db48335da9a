use std::io::BufRead;
use std::path::PathBuf;

use anyhow::{anyhow, Context};
use tracing::{info, warn};

use skyshield_app::autopilot::Autopilot;
use skyshield_app::config::AppConfig;
use skyshield_app::game_loop::{self, LoopOptions};
use skyshield_app::state::AppState;
use skyshield_core::commands::PlayerCommand;
use skyshield_sim::SimulationEngine;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

/// Forward JSON commands from stdin, one per line, until EOF or `quit`.
fn read_commands(state: &AppState) -> anyhow::Result<()> {
    for line in std::io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" {
            break;
        }
        match serde_json::from_str::<PlayerCommand>(line) {
            Ok(command) => {
                if !state.send(command) {
                    break;
                }
            }
            Err(err) => warn!(%err, line, "ignoring malformed command"),
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = match std::env::args_os().nth(1) {
        Some(path) => {
            let path = PathBuf::from(path);
            AppConfig::load(&path).with_context(|| format!("loading {}", path.display()))?
        }
        None => AppConfig::default(),
    };
    info!(
        seed = config.seed,
        autopilot = config.autopilot,
        realtime = config.realtime,
        "starting skyshield"
    );

    let state = AppState::new();
    let options = LoopOptions {
        realtime: config.realtime,
        max_ticks: config.max_ticks,
        autopilot: config.autopilot.then(|| Autopilot::new(config.difficulty)),
    };
    let engine = SimulationEngine::new(config.sim_config());
    let (tx, handle) = game_loop::spawn_game_loop(engine, options, state.latest_snapshot.clone());
    *state
        .command_tx
        .lock()
        .map_err(|_| anyhow!("command channel lock poisoned"))? = Some(tx);

    if !config.autopilot {
        read_commands(&state)?;
        state.shutdown();
    }

    let summary = handle
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))?;
    info!(
        iterations = summary.iterations,
        phase = ?summary.phase,
        round = summary.round,
        score = summary.score,
        "session finished"
    );

    if let Some(snapshot) = state.snapshot() {
        println!("{}", serde_json::to_string(&snapshot)?);
    }
    Ok(())
}
