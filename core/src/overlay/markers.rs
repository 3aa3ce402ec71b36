use runecraft_types::Color;
use serde::Serialize;

use crate::events::{Npc, SceneObject};
use crate::rifts::AbyssRift;

/// A rift decoration to mark in the scene and on the minimap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiftMarker {
    pub rift: AbyssRift,
    pub object: SceneObject,
    /// Rune item whose icon marks the rift on the minimap
    pub icon_item_id: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunestoneSide {
    North,
    South,
}

/// A dense runestone with its mining availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunestoneHighlight {
    pub side: RunestoneSide,
    pub object: SceneObject,
    pub mineable: bool,
}

impl RunestoneHighlight {
    pub fn color(&self) -> Color {
        if self.mineable { Color::GREEN } else { Color::RED }
    }
}

/// The Dark Mage, highlighted while a degraded pouch needs repair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DarkMageHighlight {
    pub npc: Npc,
}
