pub mod shared;
pub mod state;

pub use shared::SharedSession;
pub use state::{RuneKind, SessionSnapshot, SessionState};
