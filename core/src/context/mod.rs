mod clock;
mod config;
mod host;
mod plugin;


pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ConfigError, parse_config, validate_config};
pub use host::{CachedAnimation, Client, ConfigProvider, Notifier, SharedConfig, current_animation};
pub use plugin::{POUCH_DECAYED_MESSAGE, POUCH_DECAYED_NOTIFICATION, RunecraftPlugin};
