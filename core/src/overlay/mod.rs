//! Render models handed to the host's overlay renderer.
//!
//! Nothing here draws pixels. Each overlay produces plain data (panel lines,
//! highlighted objects) that the host paints on its presentation thread.

mod chipping;
mod markers;
mod panel;

pub use chipping::ChippingOverlay;
pub use markers::{DarkMageHighlight, RiftMarker, RunestoneHighlight, RunestoneSide};
pub use panel::{PanelComponent, TitleComponent};
