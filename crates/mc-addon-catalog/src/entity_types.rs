//! Vanilla entity identifiers.

catalog! {
    ALLAY => "allay",
    ARMADILLO => "armadillo",
    AXOLOTL => "axolotl",
    BAT => "bat",
    BEE => "bee",
    BLAZE => "blaze",
    BREEZE => "breeze",
    CAMEL => "camel",
    CAT => "cat",
    CAVE_SPIDER => "cave_spider",
    CHICKEN => "chicken",
    COD => "cod",
    COW => "cow",
    CREEPER => "creeper",
    DOLPHIN => "dolphin",
    DONKEY => "donkey",
    DROWNED => "drowned",
    ELDER_GUARDIAN => "elder_guardian",
    ENDER_DRAGON => "ender_dragon",
    ENDERMAN => "enderman",
    ENDERMITE => "endermite",
    EVOCATION_ILLAGER => "evocation_illager",
    FOX => "fox",
    FROG => "frog",
    GHAST => "ghast",
    GLOW_SQUID => "glow_squid",
    GOAT => "goat",
    GUARDIAN => "guardian",
    HOGLIN => "hoglin",
    HORSE => "horse",
    HUSK => "husk",
    IRON_GOLEM => "iron_golem",
    LLAMA => "llama",
    MAGMA_CUBE => "magma_cube",
    MOOSHROOM => "mooshroom",
    MULE => "mule",
    OCELOT => "ocelot",
    PANDA => "panda",
    PARROT => "parrot",
    PHANTOM => "phantom",
    PIG => "pig",
    PIGLIN => "piglin",
    PIGLIN_BRUTE => "piglin_brute",
    PILLAGER => "pillager",
    POLAR_BEAR => "polar_bear",
    PUFFERFISH => "pufferfish",
    RABBIT => "rabbit",
    RAVAGER => "ravager",
    SALMON => "salmon",
    SHEEP => "sheep",
    SHULKER => "shulker",
    SILVERFISH => "silverfish",
    SKELETON => "skeleton",
    SKELETON_HORSE => "skeleton_horse",
    SLIME => "slime",
    SNIFFER => "sniffer",
    SNOW_GOLEM => "snow_golem",
    SPIDER => "spider",
    SQUID => "squid",
    STRAY => "stray",
    STRIDER => "strider",
    TADPOLE => "tadpole",
    TRADER_LLAMA => "trader_llama",
    TROPICALFISH => "tropicalfish",
    TURTLE => "turtle",
    VEX => "vex",
    VILLAGER_V2 => "villager_v2",
    VINDICATOR => "vindicator",
    WANDERING_TRADER => "wandering_trader",
    WARDEN => "warden",
    WITCH => "witch",
    WITHER => "wither",
    WITHER_SKELETON => "wither_skeleton",
    WOLF => "wolf",
    ZOGLIN => "zoglin",
    ZOMBIE => "zombie",
    ZOMBIE_HORSE => "zombie_horse",
    ZOMBIE_PIGMAN => "zombie_pigman",
    ZOMBIE_VILLAGER_V2 => "zombie_villager_v2",
    ARMOR_STAND => "armor_stand",
    ARROW => "arrow",
    BOAT => "boat",
    ITEM => "item",
    LIGHTNING_BOLT => "lightning_bolt",
    MINECART => "minecart",
    NPC => "npc",
    PLAYER => "player",
    SNOWBALL => "snowball",
    TNT => "tnt",
    XP_ORB => "xp_orb",
}

/// Spawn grouping of a vanilla mob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MobCategory {
    Hostile,
    Neutral,
    Passive,
    /// Not a mob: projectiles, vehicles, the player.
    Other,
}

const HOSTILE: &[&str] = &[
    BLAZE, BREEZE, CAVE_SPIDER, CREEPER, DROWNED, ELDER_GUARDIAN, ENDER_DRAGON, ENDERMITE,
    EVOCATION_ILLAGER, GHAST, GUARDIAN, HOGLIN, HUSK, MAGMA_CUBE, PHANTOM, PIGLIN_BRUTE, PILLAGER,
    RAVAGER, SHULKER, SILVERFISH, SKELETON, SLIME, SPIDER, STRAY, VEX, VINDICATOR, WARDEN, WITCH,
    WITHER, WITHER_SKELETON, ZOGLIN, ZOMBIE, ZOMBIE_VILLAGER_V2,
];

const NEUTRAL: &[&str] = &[
    BEE, DOLPHIN, ENDERMAN, GOAT, IRON_GOLEM, LLAMA, PANDA, PIGLIN, POLAR_BEAR, TRADER_LLAMA,
    WOLF, ZOMBIE_PIGMAN,
];

const OTHER: &[&str] = &[
    ARMOR_STAND, ARROW, BOAT, ITEM, LIGHTNING_BOLT, MINECART, NPC, PLAYER, SNOWBALL, TNT, XP_ORB,
];

/// Category of a vanilla entity; unknown identifiers are `Other`.
pub fn category(id: &str) -> MobCategory {
    let id = crate::namespaced(id);
    let id: &str = &id;
    if HOSTILE.contains(&id) {
        MobCategory::Hostile
    } else if NEUTRAL.contains(&id) {
        MobCategory::Neutral
    } else if OTHER.contains(&id) || !contains(id) {
        MobCategory::Other
    } else {
        MobCategory::Passive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories() {
        assert_eq!(category(ZOMBIE), MobCategory::Hostile);
        assert_eq!(category(WOLF), MobCategory::Neutral);
        assert_eq!(category(COW), MobCategory::Passive);
        assert_eq!(category(ARROW), MobCategory::Other);
        assert_eq!(category("custom:ghoul"), MobCategory::Other);
    }

    #[test]
    fn bare_names_match_namespaced() {
        assert_eq!(category("zombie"), MobCategory::Hostile);
        assert_eq!(category("wolf"), MobCategory::Neutral);
        assert_eq!(category("cow"), MobCategory::Passive);
        assert_eq!(category("arrow"), MobCategory::Other);
        assert_eq!(category("ghoul"), MobCategory::Other);
    }
}
