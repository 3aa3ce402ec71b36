use chrono::NaiveDateTime;

use crate::events::Item;
use crate::game_ids::{is_mining_animation, item_id};

const DENSE_ESSENCE_BLOCK: Item = Item::new(item_id::DENSE_ESSENCE_BLOCK, 1);

/// Outcome of feeding one inventory snapshot to the inferencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipObservation {
    /// First snapshot since start; stored as the baseline only.
    Seeded,
    /// Block count grew: exactly one chip, whatever the delta.
    Chipped,
    /// Block count unchanged or lower.
    NoChange,
}

/// Number of slots holding exactly one dense essence block.
///
/// Blocks never stack, so whole-slot equality is the signal. Summing quantities
/// would pick up unrelated stack changes.
pub fn count_dense_blocks(items: &[Item]) -> usize {
    items.iter().filter(|item| **item == DENSE_ESSENCE_BLOCK).count()
}

/// Live chipping predicate.
///
/// The animation alone is not enough: mining unrelated rocks plays the same
/// pickaxe animations, so it only counts once a chip has been seen.
pub fn is_chipping(animation_id: Option<i32>, last_activity_at: Option<NaiveDateTime>) -> bool {
    last_activity_at.is_some() && animation_id.is_some_and(is_mining_animation)
}

/// Turns successive inventory snapshots into chip events.
#[derive(Debug, Default)]
pub struct ActivityInferencer {
    prev_inventory: Option<Vec<Item>>,
}

impl ActivityInferencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe_inventory(&mut self, items: &[Item]) -> ChipObservation {
        let Some(prev) = self.prev_inventory.as_mut() else {
            self.prev_inventory = Some(items.to_vec());
            return ChipObservation::Seeded;
        };

        let prev_blocks = count_dense_blocks(prev);
        let curr_blocks = count_dense_blocks(items);

        prev.clear();
        prev.extend_from_slice(items);

        if curr_blocks > prev_blocks {
            ChipObservation::Chipped
        } else {
            ChipObservation::NoChange
        }
    }

    /// Drop the baseline; the next snapshot seeds again.
    pub fn reset(&mut self) {
        self.prev_inventory = None;
    }

    pub fn prev_inventory(&self) -> Option<&[Item]> {
        self.prev_inventory.as_deref()
    }
}
