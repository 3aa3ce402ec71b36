//! Host identifiers used by the plugin.
//!
//! These are opaque sentinels reported by the game client. Nothing here is
//! interpreted beyond equality and set membership.

use phf::phf_set;

pub mod item_id {
    pub const DENSE_ESSENCE_BLOCK: i32 = 13445;

    pub const MEDIUM_POUCH_DEGRADED: i32 = 5511;
    pub const LARGE_POUCH_DEGRADED: i32 = 5513;
    pub const GIANT_POUCH_DEGRADED: i32 = 5515;

    pub const FIRE_RUNE: i32 = 554;
    pub const WATER_RUNE: i32 = 555;
    pub const AIR_RUNE: i32 = 556;
    pub const EARTH_RUNE: i32 = 557;
    pub const MIND_RUNE: i32 = 558;
    pub const BODY_RUNE: i32 = 559;
    pub const DEATH_RUNE: i32 = 560;
    pub const NATURE_RUNE: i32 = 561;
    pub const CHAOS_RUNE: i32 = 562;
    pub const LAW_RUNE: i32 = 563;
    pub const COSMIC_RUNE: i32 = 564;
    pub const BLOOD_RUNE: i32 = 565;
    pub const SOUL_RUNE: i32 = 566;
}

pub mod animation_id {
    pub const MINING_BRONZE_PICKAXE: i32 = 625;
    pub const MINING_IRON_PICKAXE: i32 = 626;
    pub const MINING_STEEL_PICKAXE: i32 = 627;
    pub const MINING_BLACK_PICKAXE: i32 = 3873;
    pub const MINING_MITHRIL_PICKAXE: i32 = 629;
    pub const MINING_ADAMANT_PICKAXE: i32 = 628;
    pub const MINING_RUNE_PICKAXE: i32 = 624;
    pub const MINING_GILDED_PICKAXE: i32 = 8313;
    pub const MINING_DRAGON_PICKAXE: i32 = 7139;
    pub const MINING_DRAGON_PICKAXE_UPGRADED: i32 = 642;
    pub const MINING_DRAGON_PICKAXE_OR: i32 = 8346;
    pub const MINING_INFERNAL_PICKAXE: i32 = 4482;
    pub const MINING_CRYSTAL_PICKAXE: i32 = 8347;
    pub const MINING_3A_PICKAXE: i32 = 7283;
    pub const DENSE_ESSENCE_CHIPPING: i32 = 7201;

    /// Reported by the client when the local player is idle.
    pub const IDLE: i32 = -1;
}

pub mod object_id {
    pub const DENSE_RUNESTONE_SOUTH: i32 = 10796;
    pub const DENSE_RUNESTONE_NORTH: i32 = 8981;

    pub const FIRE_RIFT: i32 = 24971;
    pub const EARTH_RIFT: i32 = 24972;
    pub const BODY_RIFT: i32 = 24973;
    pub const COSMIC_RIFT: i32 = 24974;
    pub const NATURE_RIFT: i32 = 24975;
    pub const CHAOS_RIFT: i32 = 24976;
    pub const LAW_RIFT: i32 = 25034;
    pub const DEATH_RIFT: i32 = 25035;
    pub const WATER_RIFT: i32 = 25376;
    pub const SOUL_RIFT: i32 = 25377;
    pub const AIR_RIFT: i32 = 25378;
    pub const MIND_RIFT: i32 = 25379;
    pub const BLOOD_RIFT: i32 = 25380;
}

pub mod npc_id {
    pub const DARK_MAGE: i32 = 2583;
}

pub mod varbit_id {
    pub const DENSE_RUNESTONE_NORTH_DEPLETED: i32 = 4927;
    pub const DENSE_RUNESTONE_SOUTH_DEPLETED: i32 = 4928;
}

pub mod inventory_id {
    pub const INVENTORY: i32 = 93;
}

/// Animations that count as "mining-like" for the live chipping predicate:
/// every pickaxe variant plus the dedicated chipping animation.
pub static MINING_ANIMATION_IDS: phf::Set<i32> = phf_set! {
    625_i32,  // bronze
    626_i32,  // iron
    627_i32,  // steel
    3873_i32, // black
    629_i32,  // mithril
    628_i32,  // adamant
    624_i32,  // rune
    8313_i32, // gilded
    7139_i32, // dragon
    642_i32,  // dragon (upgraded)
    8346_i32, // dragon (or)
    4482_i32, // infernal
    8347_i32, // crystal
    7283_i32, // 3rd age
    7201_i32, // dense essence chipping
};

/// Degraded medium, large and giant pouches.
pub static DEGRADED_POUCHES: phf::Set<i32> = phf_set! {
    5511_i32,
    5513_i32,
    5515_i32,
};

pub fn is_mining_animation(animation_id: i32) -> bool {
    MINING_ANIMATION_IDS.contains(&animation_id)
}

pub fn is_degraded_pouch(item_id: i32) -> bool {
    DEGRADED_POUCHES.contains(&item_id)
}
