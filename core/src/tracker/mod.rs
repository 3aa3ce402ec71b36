//! Dense-essence chipping session tracking.
//!
//! The tracker infers a chipping session from indirect signals:
//! - **activity**: block-count deltas between inventory snapshots mark chips,
//!   animation ids answer "chipping right now?"
//! - **mint**: rune creation tallies within the active session
//! - **timeout**: inactivity resets the session on the 1 Hz tick
//!
//! ```text
//! inventory snapshot ──► ActivityInferencer ──► SessionState ◄── sweep (1 Hz)
//! rune minted ─────────► record_rune_mint ────────┘
//! ```

mod activity;
mod mint;
mod timeout;

pub use activity::{ActivityInferencer, ChipObservation, count_dense_blocks, is_chipping};
pub use mint::record_rune_mint;
pub use timeout::{StatTimeout, sweep_inactive_session};
