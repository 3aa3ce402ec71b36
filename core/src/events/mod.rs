pub mod bus;
pub mod handler;
pub mod host_event;

pub use bus::EventBus;
pub use handler::EventSubscriber;
pub use host_event::{ChatMessageType, GameState, HostEvent, Item, Npc, SceneObject};
