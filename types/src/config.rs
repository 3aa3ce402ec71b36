//! Runecraft plugin configuration.
//!
//! Every field carries a serde default so partial TOML payloads from the host
//! config store deserialize cleanly.

use serde::{Deserialize, Serialize};

/// Config group the plugin listens to for change notifications.
pub const CONFIG_GROUP: &str = "runecraft";

/// Inactivity window, in minutes, before session stats reset.
pub const DEFAULT_STAT_TIMEOUT_MINUTES: i32 = 5;

/// Smallest accepted inactivity window. Lower values are clamped up.
pub const MIN_STAT_TIMEOUT_MINUTES: i32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunecraftConfig {
    /// Show the "Chipping" / "NOT chipping" panel
    pub show_chipping_state: bool,
    /// Minutes without a chip before the session resets
    pub stat_timeout: i32,
    /// Notify when a rune pouch decays
    pub degrading_notification: bool,

    // Per-rift rendering gates
    pub show_air: bool,
    pub show_blood: bool,
    pub show_body: bool,
    pub show_chaos: bool,
    pub show_cosmic: bool,
    pub show_death: bool,
    pub show_earth: bool,
    pub show_fire: bool,
    pub show_law: bool,
    pub show_mind: bool,
    pub show_nature: bool,
    pub show_soul: bool,
    pub show_water: bool,
}

impl Default for RunecraftConfig {
    fn default() -> Self {
        Self {
            show_chipping_state: true,
            stat_timeout: DEFAULT_STAT_TIMEOUT_MINUTES,
            degrading_notification: true,
            show_air: true,
            show_blood: true,
            show_body: true,
            show_chaos: true,
            show_cosmic: true,
            show_death: true,
            show_earth: true,
            show_fire: true,
            show_law: true,
            show_mind: true,
            show_nature: true,
            show_soul: true,
            show_water: true,
        }
    }
}

impl RunecraftConfig {
    /// Inactivity timeout in whole minutes, clamped to at least one.
    pub fn stat_timeout_minutes(&self) -> u32 {
        self.stat_timeout.max(MIN_STAT_TIMEOUT_MINUTES) as u32
    }

    /// True when the configured timeout had to be clamped.
    pub fn stat_timeout_clamped(&self) -> bool {
        self.stat_timeout < MIN_STAT_TIMEOUT_MINUTES
    }
}
