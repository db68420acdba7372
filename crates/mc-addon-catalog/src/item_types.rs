//! Vanilla item identifiers.

catalog! {
    ACACIA_BOAT => "acacia_boat",
    ACACIA_DOOR => "acacia_door",
    ACACIA_SIGN => "acacia_sign",
    AMETHYST_SHARD => "amethyst_shard",
    APPLE => "apple",
    ARMOR_STAND => "armor_stand",
    ARROW => "arrow",
    BAKED_POTATO => "baked_potato",
    BAMBOO => "bamboo",
    BEEF => "beef",
    BEETROOT => "beetroot",
    BEETROOT_SEEDS => "beetroot_seeds",
    BEETROOT_SOUP => "beetroot_soup",
    BLAZE_POWDER => "blaze_powder",
    BLAZE_ROD => "blaze_rod",
    BONE => "bone",
    BONE_MEAL => "bone_meal",
    BOOK => "book",
    BOW => "bow",
    BOWL => "bowl",
    BREAD => "bread",
    BRICK => "brick",
    BRUSH => "brush",
    BUCKET => "bucket",
    CAKE => "cake",
    CARROT => "carrot",
    CARROT_ON_A_STICK => "carrot_on_a_stick",
    CHAINMAIL_BOOTS => "chainmail_boots",
    CHAINMAIL_CHESTPLATE => "chainmail_chestplate",
    CHAINMAIL_HELMET => "chainmail_helmet",
    CHAINMAIL_LEGGINGS => "chainmail_leggings",
    CHARCOAL => "charcoal",
    CHEST_MINECART => "chest_minecart",
    CHICKEN => "chicken",
    CHORUS_FRUIT => "chorus_fruit",
    CLAY_BALL => "clay_ball",
    CLOCK => "clock",
    COAL => "coal",
    COCOA_BEANS => "cocoa_beans",
    COD => "cod",
    COD_BUCKET => "cod_bucket",
    COMPASS => "compass",
    COOKED_BEEF => "cooked_beef",
    COOKED_CHICKEN => "cooked_chicken",
    COOKED_COD => "cooked_cod",
    COOKED_MUTTON => "cooked_mutton",
    COOKED_PORKCHOP => "cooked_porkchop",
    COOKED_RABBIT => "cooked_rabbit",
    COOKED_SALMON => "cooked_salmon",
    COOKIE => "cookie",
    COPPER_INGOT => "copper_ingot",
    CROSSBOW => "crossbow",
    DIAMOND => "diamond",
    DIAMOND_AXE => "diamond_axe",
    DIAMOND_BOOTS => "diamond_boots",
    DIAMOND_CHESTPLATE => "diamond_chestplate",
    DIAMOND_HELMET => "diamond_helmet",
    DIAMOND_HOE => "diamond_hoe",
    DIAMOND_HORSE_ARMOR => "diamond_horse_armor",
    DIAMOND_LEGGINGS => "diamond_leggings",
    DIAMOND_PICKAXE => "diamond_pickaxe",
    DIAMOND_SHOVEL => "diamond_shovel",
    DIAMOND_SWORD => "diamond_sword",
    DRAGON_BREATH => "dragon_breath",
    DRIED_KELP => "dried_kelp",
    ECHO_SHARD => "echo_shard",
    EGG => "egg",
    ELYTRA => "elytra",
    EMERALD => "emerald",
    ENCHANTED_BOOK => "enchanted_book",
    ENCHANTED_GOLDEN_APPLE => "enchanted_golden_apple",
    END_CRYSTAL => "end_crystal",
    ENDER_EYE => "ender_eye",
    ENDER_PEARL => "ender_pearl",
    EXPERIENCE_BOTTLE => "experience_bottle",
    FEATHER => "feather",
    FERMENTED_SPIDER_EYE => "fermented_spider_eye",
    FILLED_MAP => "filled_map",
    FIRE_CHARGE => "fire_charge",
    FIREWORK_ROCKET => "firework_rocket",
    FISHING_ROD => "fishing_rod",
    FLINT => "flint",
    FLINT_AND_STEEL => "flint_and_steel",
    GLASS_BOTTLE => "glass_bottle",
    GLISTERING_MELON_SLICE => "glistering_melon_slice",
    GLOW_BERRIES => "glow_berries",
    GLOW_INK_SAC => "glow_ink_sac",
    GLOWSTONE_DUST => "glowstone_dust",
    GOLD_INGOT => "gold_ingot",
    GOLD_NUGGET => "gold_nugget",
    GOLDEN_APPLE => "golden_apple",
    GOLDEN_AXE => "golden_axe",
    GOLDEN_BOOTS => "golden_boots",
    GOLDEN_CARROT => "golden_carrot",
    GOLDEN_CHESTPLATE => "golden_chestplate",
    GOLDEN_HELMET => "golden_helmet",
    GOLDEN_HOE => "golden_hoe",
    GOLDEN_LEGGINGS => "golden_leggings",
    GOLDEN_PICKAXE => "golden_pickaxe",
    GOLDEN_SHOVEL => "golden_shovel",
    GOLDEN_SWORD => "golden_sword",
    GUNPOWDER => "gunpowder",
    HEART_OF_THE_SEA => "heart_of_the_sea",
    HONEY_BOTTLE => "honey_bottle",
    HONEYCOMB => "honeycomb",
    HOPPER_MINECART => "hopper_minecart",
    INK_SAC => "ink_sac",
    IRON_AXE => "iron_axe",
    IRON_BOOTS => "iron_boots",
    IRON_CHESTPLATE => "iron_chestplate",
    IRON_HELMET => "iron_helmet",
    IRON_HOE => "iron_hoe",
    IRON_INGOT => "iron_ingot",
    IRON_LEGGINGS => "iron_leggings",
    IRON_NUGGET => "iron_nugget",
    IRON_PICKAXE => "iron_pickaxe",
    IRON_SHOVEL => "iron_shovel",
    IRON_SWORD => "iron_sword",
    KELP => "kelp",
    LAPIS_LAZULI => "lapis_lazuli",
    LAVA_BUCKET => "lava_bucket",
    LEAD => "lead",
    LEATHER => "leather",
    LEATHER_BOOTS => "leather_boots",
    LEATHER_CHESTPLATE => "leather_chestplate",
    LEATHER_HELMET => "leather_helmet",
    LEATHER_LEGGINGS => "leather_leggings",
    MAGMA_CREAM => "magma_cream",
    MAP => "map",
    MELON_SEEDS => "melon_seeds",
    MELON_SLICE => "melon_slice",
    MILK_BUCKET => "milk_bucket",
    MINECART => "minecart",
    MUSHROOM_STEW => "mushroom_stew",
    MUSIC_DISC_13 => "music_disc_13",
    MUSIC_DISC_CAT => "music_disc_cat",
    MUSIC_DISC_PIGSTEP => "music_disc_pigstep",
    MUTTON => "mutton",
    NAME_TAG => "name_tag",
    NAUTILUS_SHELL => "nautilus_shell",
    NETHER_STAR => "nether_star",
    NETHER_WART => "nether_wart",
    NETHERITE_AXE => "netherite_axe",
    NETHERITE_BOOTS => "netherite_boots",
    NETHERITE_CHESTPLATE => "netherite_chestplate",
    NETHERITE_HELMET => "netherite_helmet",
    NETHERITE_HOE => "netherite_hoe",
    NETHERITE_INGOT => "netherite_ingot",
    NETHERITE_LEGGINGS => "netherite_leggings",
    NETHERITE_PICKAXE => "netherite_pickaxe",
    NETHERITE_SCRAP => "netherite_scrap",
    NETHERITE_SHOVEL => "netherite_shovel",
    NETHERITE_SWORD => "netherite_sword",
    OAK_BOAT => "oak_boat",
    OAK_DOOR => "oak_door",
    OAK_SIGN => "oak_sign",
    PAINTING => "painting",
    PAPER => "paper",
    PHANTOM_MEMBRANE => "phantom_membrane",
    POISONOUS_POTATO => "poisonous_potato",
    PORKCHOP => "porkchop",
    POTATO => "potato",
    POTION => "potion",
    PRISMARINE_CRYSTALS => "prismarine_crystals",
    PRISMARINE_SHARD => "prismarine_shard",
    PUFFERFISH => "pufferfish",
    PUMPKIN_PIE => "pumpkin_pie",
    PUMPKIN_SEEDS => "pumpkin_seeds",
    QUARTZ => "quartz",
    RABBIT => "rabbit",
    RABBIT_FOOT => "rabbit_foot",
    RABBIT_HIDE => "rabbit_hide",
    RABBIT_STEW => "rabbit_stew",
    RAW_COPPER => "raw_copper",
    RAW_GOLD => "raw_gold",
    RAW_IRON => "raw_iron",
    RECOVERY_COMPASS => "recovery_compass",
    REDSTONE => "redstone",
    ROTTEN_FLESH => "rotten_flesh",
    SADDLE => "saddle",
    SALMON => "salmon",
    SCUTE => "scute",
    SHEARS => "shears",
    SHIELD => "shield",
    SHULKER_SHELL => "shulker_shell",
    SLIME_BALL => "slime_ball",
    SNOWBALL => "snowball",
    SPIDER_EYE => "spider_eye",
    SPLASH_POTION => "splash_potion",
    SPYGLASS => "spyglass",
    STICK => "stick",
    STONE_AXE => "stone_axe",
    STONE_HOE => "stone_hoe",
    STONE_PICKAXE => "stone_pickaxe",
    STONE_SHOVEL => "stone_shovel",
    STONE_SWORD => "stone_sword",
    STRING => "string",
    SUGAR => "sugar",
    SUGAR_CANE => "sugar_cane",
    SUSPICIOUS_STEW => "suspicious_stew",
    SWEET_BERRIES => "sweet_berries",
    TNT_MINECART => "tnt_minecart",
    TOTEM_OF_UNDYING => "totem_of_undying",
    TRIDENT => "trident",
    TROPICAL_FISH => "tropical_fish",
    TURTLE_HELMET => "turtle_helmet",
    WATER_BUCKET => "water_bucket",
    WHEAT => "wheat",
    WHEAT_SEEDS => "wheat_seeds",
    WOODEN_AXE => "wooden_axe",
    WOODEN_HOE => "wooden_hoe",
    WOODEN_PICKAXE => "wooden_pickaxe",
    WOODEN_SHOVEL => "wooden_shovel",
    WOODEN_SWORD => "wooden_sword",
    WRITABLE_BOOK => "writable_book",
    WRITTEN_BOOK => "written_book",
}

const SINGLE_SUFFIXES: &[&str] = &[
    "_sword", "_axe", "_pickaxe", "_shovel", "_hoe", "_helmet", "_chestplate", "_leggings",
    "_boots", "_boat", "_minecart", "_horse_armor", "_bucket", "_stew", "_soup",
];

const SINGLE_ITEMS: &[&str] = &[
    BOW, BRUSH, CAKE, CARROT_ON_A_STICK, CROSSBOW, ELYTRA, ENCHANTED_BOOK, FISHING_ROD,
    FLINT_AND_STEEL, MINECART, POTION, SADDLE, SHEARS, SHIELD, SPLASH_POTION, SPYGLASS,
    TOTEM_OF_UNDYING, TRIDENT, TURTLE_HELMET, WRITABLE_BOOK,
];

const SIXTEEN_ITEMS: &[&str] = &[
    ARMOR_STAND, BUCKET, EGG, ENDER_PEARL, HONEY_BOTTLE, SNOWBALL, WRITTEN_BOOK,
];

/// Maximum stack size of a vanilla item. Unknown items default to 64.
pub fn max_stack_size(id: &str) -> u8 {
    let id = crate::namespaced(id);
    let id: &str = &id;
    if SIXTEEN_ITEMS.contains(&id) || id.ends_with("_sign") {
        16
    } else if SINGLE_ITEMS.contains(&id)
        || id.starts_with("minecraft:music_disc_")
        || SINGLE_SUFFIXES.iter().any(|s| id.ends_with(s))
    {
        1
    } else {
        64
    }
}
