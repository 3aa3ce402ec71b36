//! Shared types for the Runecraft companion.
//!
//! Kept free of runtime dependencies so hosts can deserialize the plugin's
//! configuration without pulling in the tracker itself.

pub mod color;
pub mod config;

pub use color::Color;
pub use config::{CONFIG_GROUP, DEFAULT_STAT_TIMEOUT_MINUTES, MIN_STAT_TIMEOUT_MINUTES, RunecraftConfig};
