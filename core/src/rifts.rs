//! Abyssal rift kinds and their per-kind rendering gates.

use hashbrown::HashSet;
use runecraft_types::RunecraftConfig;
use serde::Serialize;

use crate::game_ids::{item_id, object_id};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AbyssRift {
    Air,
    Blood,
    Body,
    Chaos,
    Cosmic,
    Death,
    Earth,
    Fire,
    Law,
    Mind,
    Nature,
    Soul,
    Water,
}

impl AbyssRift {
    pub const ALL: [AbyssRift; 13] = [
        AbyssRift::Air,
        AbyssRift::Blood,
        AbyssRift::Body,
        AbyssRift::Chaos,
        AbyssRift::Cosmic,
        AbyssRift::Death,
        AbyssRift::Earth,
        AbyssRift::Fire,
        AbyssRift::Law,
        AbyssRift::Mind,
        AbyssRift::Nature,
        AbyssRift::Soul,
        AbyssRift::Water,
    ];

    /// Decorative object id of the rift in the Abyss.
    pub fn object_id(self) -> i32 {
        match self {
            Self::Air => object_id::AIR_RIFT,
            Self::Blood => object_id::BLOOD_RIFT,
            Self::Body => object_id::BODY_RIFT,
            Self::Chaos => object_id::CHAOS_RIFT,
            Self::Cosmic => object_id::COSMIC_RIFT,
            Self::Death => object_id::DEATH_RIFT,
            Self::Earth => object_id::EARTH_RIFT,
            Self::Fire => object_id::FIRE_RIFT,
            Self::Law => object_id::LAW_RIFT,
            Self::Mind => object_id::MIND_RIFT,
            Self::Nature => object_id::NATURE_RIFT,
            Self::Soul => object_id::SOUL_RIFT,
            Self::Water => object_id::WATER_RIFT,
        }
    }

    /// Rune item shown as the minimap icon for the rift.
    pub fn rune_item_id(self) -> i32 {
        match self {
            Self::Air => item_id::AIR_RUNE,
            Self::Blood => item_id::BLOOD_RUNE,
            Self::Body => item_id::BODY_RUNE,
            Self::Chaos => item_id::CHAOS_RUNE,
            Self::Cosmic => item_id::COSMIC_RUNE,
            Self::Death => item_id::DEATH_RUNE,
            Self::Earth => item_id::EARTH_RUNE,
            Self::Fire => item_id::FIRE_RUNE,
            Self::Law => item_id::LAW_RUNE,
            Self::Mind => item_id::MIND_RUNE,
            Self::Nature => item_id::NATURE_RUNE,
            Self::Soul => item_id::SOUL_RUNE,
            Self::Water => item_id::WATER_RUNE,
        }
    }

    pub fn from_object_id(id: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|rift| rift.object_id() == id)
    }

    pub fn is_enabled(self, config: &RunecraftConfig) -> bool {
        match self {
            Self::Air => config.show_air,
            Self::Blood => config.show_blood,
            Self::Body => config.show_body,
            Self::Chaos => config.show_chaos,
            Self::Cosmic => config.show_cosmic,
            Self::Death => config.show_death,
            Self::Earth => config.show_earth,
            Self::Fire => config.show_fire,
            Self::Law => config.show_law,
            Self::Mind => config.show_mind,
            Self::Nature => config.show_nature,
            Self::Soul => config.show_soul,
            Self::Water => config.show_water,
        }
    }
}

/// Rift kinds the config currently allows to be drawn.
pub fn enabled_rifts(config: &RunecraftConfig) -> HashSet<AbyssRift> {
    AbyssRift::ALL
        .into_iter()
        .filter(|rift| rift.is_enabled(config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_ids_round_trip() {
        for rift in AbyssRift::ALL {
            assert_eq!(AbyssRift::from_object_id(rift.object_id()), Some(rift));
        }
        assert_eq!(AbyssRift::from_object_id(object_id::DENSE_RUNESTONE_NORTH), None);
    }

    #[test]
    fn test_enabled_rifts_follow_config() {
        assert_eq!(enabled_rifts(&RunecraftConfig::default()).len(), 13);

        let config = RunecraftConfig {
            show_law: false,
            show_death: false,
            ..RunecraftConfig::default()
        };
        let rifts = enabled_rifts(&config);
        assert_eq!(rifts.len(), 11);
        assert!(!rifts.contains(&AbyssRift::Law));
        assert!(!rifts.contains(&AbyssRift::Death));
        assert!(rifts.contains(&AbyssRift::Soul));
    }
}
