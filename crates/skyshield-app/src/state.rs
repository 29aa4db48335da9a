//! State shared between the driver and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use skyshield_core::commands::PlayerCommand;
use skyshield_core::state::GameStateSnapshot;

/// Commands sent from the driver to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot published by the game loop.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

/// Driver-side handle on a running simulation.
#[derive(Default)]
pub struct AppState {
    /// Channel to the game loop thread. `None` until the loop is started.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Updated by the game loop thread after each tick.
    pub latest_snapshot: SharedSnapshot,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward a player command. Returns `false` if the loop is not running.
    pub fn send(&self, command: PlayerCommand) -> bool {
        let Ok(lock) = self.command_tx.lock() else {
            return false;
        };
        match lock.as_ref() {
            Some(tx) => tx.send(GameLoopCommand::Player(command)).is_ok(),
            None => false,
        }
    }

    /// Ask the loop to stop and drop the sender.
    pub fn shutdown(&self) {
        if let Ok(mut lock) = self.command_tx.lock() {
            if let Some(tx) = lock.take() {
                let _ = tx.send(GameLoopCommand::Shutdown);
            }
        }
    }

    /// Clone of the most recent snapshot, if any tick has run.
    pub fn snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|lock| lock.clone())
    }
}
