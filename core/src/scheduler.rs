//! 1 Hz tick for hosts that do not schedule the inactivity sweep themselves.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::context::RunecraftPlugin;
use crate::events::{EventSubscriber, HostEvent};

pub const SWEEP_PERIOD: Duration = Duration::from_secs(1);

/// Deliver `HostEvent::Tick` to the plugin once per second until it shuts down.
///
/// The plugin lock is only held for the duration of one tick, never across an
/// await point.
pub fn spawn_timeout_sweeper(plugin: Arc<Mutex<RunecraftPlugin>>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SWEEP_PERIOD);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;

            let mut guard = plugin.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            if !guard.is_running() {
                tracing::debug!("plugin stopped, ending timeout sweeper");
                break;
            }
            guard.handle_event(&HostEvent::Tick);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Client, ManualClock, Notifier, SharedConfig};
    use crate::events::{GameState, Item};
    use crate::game_ids::{inventory_id, item_id};
    use chrono::NaiveDate;
    use runecraft_types::RunecraftConfig;

    struct LoggedIn;

    impl Client for LoggedIn {
        fn game_state(&self) -> GameState {
            GameState::LoggedIn
        }

        fn varbit_value(&self, _varbit_id: i32) -> i32 {
            0
        }
    }

    struct Silent;

    impl Notifier for Silent {
        fn notify(&self, _message: &str) {}
    }

    fn blocks(n: usize) -> HostEvent {
        HostEvent::InventoryChanged {
            container_id: inventory_id::INVENTORY,
            items: vec![Item::new(item_id::DENSE_ESSENCE_BLOCK, 1); n],
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_resets_idle_session_and_stops_on_shutdown() {
        let clock = Arc::new(ManualClock::new(
            NaiveDate::from_ymd_opt(2025, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        ));
        let config = Arc::new(SharedConfig::new(RunecraftConfig {
            stat_timeout: 1,
            ..RunecraftConfig::default()
        }));
        let mut plugin =
            RunecraftPlugin::new(Arc::new(LoggedIn), Arc::new(Silent), config).with_clock(clock.clone());
        plugin.start_up();
        plugin.handle_event(&blocks(0));
        plugin.handle_event(&blocks(1));
        let session = plugin.session().clone();
        let plugin = Arc::new(Mutex::new(plugin));

        let handle = spawn_timeout_sweeper(Arc::clone(&plugin));

        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert_eq!(session.snapshot().unwrap().total_chipped, 1);

        clock.advance(chrono::Duration::seconds(61));
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(session.snapshot().unwrap().total_chipped, 0);

        plugin.lock().unwrap().shut_down();
        handle.await.unwrap();
    }
}
