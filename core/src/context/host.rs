//! Collaborators the plugin requires from the host client.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::RwLock;

use runecraft_types::RunecraftConfig;

use crate::events::GameState;
use crate::game_ids::animation_id;

/// Synchronous reads of client state.
pub trait Client: Send + Sync {
    fn game_state(&self) -> GameState;

    /// Whether [`Client::local_player_animation`] is backed by the host.
    /// Hosts without a synchronous accessor keep the default and send
    /// `HostEvent::AnimationChanged` instead.
    fn has_animation_accessor(&self) -> bool {
        false
    }

    /// Current animation of the local player, `None` when there is no local
    /// player.
    fn local_player_animation(&self) -> Option<i32> {
        None
    }

    fn varbit_value(&self, varbit_id: i32) -> i32;
}

/// Desktop notification sink.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Live view of the plugin's config group.
pub trait ConfigProvider: Send + Sync {
    fn config(&self) -> RunecraftConfig;
}

/// In-memory config store for hosts that push whole configs.
#[derive(Debug, Default)]
pub struct SharedConfig {
    inner: RwLock<RunecraftConfig>,
}

impl SharedConfig {
    pub fn new(config: RunecraftConfig) -> Self {
        Self {
            inner: RwLock::new(config),
        }
    }

    pub fn set(&self, config: RunecraftConfig) {
        *self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner()) = config;
    }

    pub fn update(&self, f: impl FnOnce(&mut RunecraftConfig)) {
        let mut guard = self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut *guard);
    }
}

impl ConfigProvider for SharedConfig {
    fn config(&self) -> RunecraftConfig {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

/// Last animation reported through `AnimationChanged`, readable from the
/// render thread.
#[derive(Debug)]
pub struct CachedAnimation {
    animation_id: AtomicI32,
}

impl Default for CachedAnimation {
    fn default() -> Self {
        Self {
            animation_id: AtomicI32::new(animation_id::IDLE),
        }
    }
}

impl CachedAnimation {
    pub fn set(&self, animation_id: Option<i32>) {
        self.animation_id
            .store(animation_id.unwrap_or(animation_id::IDLE), Ordering::Release);
    }

    pub fn get(&self) -> Option<i32> {
        match self.animation_id.load(Ordering::Acquire) {
            animation_id::IDLE => None,
            id => Some(id),
        }
    }
}

/// Animation source for the overlay: the client's accessor when it has one,
/// otherwise the cached event value. A missing local player never falls back
/// to the cache.
pub fn current_animation(client: &dyn Client, cache: &CachedAnimation) -> Option<i32> {
    if client.has_animation_accessor() {
        client.local_player_animation()
    } else {
        cache.get()
    }
}
