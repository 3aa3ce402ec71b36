//! Stand-in host collaborators driven by the script.

use std::sync::{Mutex, RwLock};

use hashbrown::HashMap;
use runecraft_core::events::GameState;
use runecraft_core::{Client, HostEvent, Notifier};

/// Client whose state is whatever the script last reported.
#[derive(Debug, Default)]
pub struct ReplayClient {
    state: RwLock<GameState>,
    varbits: RwLock<HashMap<i32, i32>>,
}

impl ReplayClient {
    /// Mirror state-bearing events before the plugin sees them.
    pub fn observe(&self, event: &HostEvent) {
        match event {
            HostEvent::GameStateChanged { state } => {
                *self.state.write().unwrap_or_else(|p| p.into_inner()) = *state;
            }
            HostEvent::VarbitChanged { varbit_id, value } => {
                self.varbits
                    .write()
                    .unwrap_or_else(|p| p.into_inner())
                    .insert(*varbit_id, *value);
            }
            _ => {}
        }
    }
}

impl Client for ReplayClient {
    fn game_state(&self) -> GameState {
        *self.state.read().unwrap_or_else(|p| p.into_inner())
    }

    fn varbit_value(&self, varbit_id: i32) -> i32 {
        self.varbits
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .get(&varbit_id)
            .copied()
            .unwrap_or(0)
    }
}

/// Logs notifications and keeps them for the step report.
#[derive(Debug, Default)]
pub struct LogNotifier {
    pending: Mutex<Vec<String>>,
}

impl LogNotifier {
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.pending.lock().unwrap_or_else(|p| p.into_inner()))
    }
}

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::info!(message, "notification");
        self.pending
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push(message.to_string());
    }
}
