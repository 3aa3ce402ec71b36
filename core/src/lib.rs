//! Dense-essence chipping tracker and Runecraft overlay state.
//!
//! The host client owns the event bus, renderer, config store and notifier;
//! this crate consumes [`HostEvent`]s and exposes render models.

pub mod context;
pub mod events;
pub mod game_ids;
pub mod overlay;
pub mod rifts;
pub mod scheduler;
pub mod session;
pub mod tracker;

// Re-exports for convenience
pub use context::{Client, ConfigProvider, Notifier, RunecraftPlugin};
pub use events::{EventBus, EventSubscriber, HostEvent};
pub use session::{RuneKind, SessionSnapshot, SharedSession};
