//! Vanilla block identifiers.

catalog! {
    ACACIA_LOG => "acacia_log",
    ACACIA_PLANKS => "acacia_planks",
    AIR => "air",
    AMETHYST_BLOCK => "amethyst_block",
    ANCIENT_DEBRIS => "ancient_debris",
    ANDESITE => "andesite",
    ANVIL => "anvil",
    BARREL => "barrel",
    BARRIER => "barrier",
    BASALT => "basalt",
    BEACON => "beacon",
    BEDROCK => "bedrock",
    BEEHIVE => "beehive",
    BELL => "bell",
    BLACKSTONE => "blackstone",
    BLAST_FURNACE => "blast_furnace",
    BLUE_ICE => "blue_ice",
    BONE_BLOCK => "bone_block",
    BOOKSHELF => "bookshelf",
    BREWING_STAND => "brewing_stand",
    BRICK_BLOCK => "brick_block",
    BROWN_MUSHROOM => "brown_mushroom",
    CACTUS => "cactus",
    CALCITE => "calcite",
    CAMPFIRE => "campfire",
    CARTOGRAPHY_TABLE => "cartography_table",
    CARVED_PUMPKIN => "carved_pumpkin",
    CAULDRON => "cauldron",
    CHAIN => "chain",
    CHEST => "chest",
    CHISELED_BOOKSHELF => "chiseled_bookshelf",
    CLAY => "clay",
    COAL_BLOCK => "coal_block",
    COAL_ORE => "coal_ore",
    COBBLED_DEEPSLATE => "cobbled_deepslate",
    COBBLESTONE => "cobblestone",
    COBWEB => "cobweb",
    COMPOSTER => "composter",
    COPPER_BLOCK => "copper_block",
    COPPER_ORE => "copper_ore",
    CRAFTING_TABLE => "crafting_table",
    CRYING_OBSIDIAN => "crying_obsidian",
    DAYLIGHT_DETECTOR => "daylight_detector",
    DEAD_BUSH => "dead_bush",
    DEEPSLATE => "deepslate",
    DEEPSLATE_COAL_ORE => "deepslate_coal_ore",
    DEEPSLATE_DIAMOND_ORE => "deepslate_diamond_ore",
    DEEPSLATE_IRON_ORE => "deepslate_iron_ore",
    DIAMOND_BLOCK => "diamond_block",
    DIAMOND_ORE => "diamond_ore",
    DIORITE => "diorite",
    DIRT => "dirt",
    DIRT_WITH_ROOTS => "dirt_with_roots",
    DISPENSER => "dispenser",
    DRAGON_EGG => "dragon_egg",
    DRIPSTONE_BLOCK => "dripstone_block",
    DROPPER => "dropper",
    EMERALD_BLOCK => "emerald_block",
    EMERALD_ORE => "emerald_ore",
    ENCHANTING_TABLE => "enchanting_table",
    END_PORTAL_FRAME => "end_portal_frame",
    END_STONE => "end_stone",
    ENDER_CHEST => "ender_chest",
    FARMLAND => "farmland",
    FLETCHING_TABLE => "fletching_table",
    FLOWER_POT => "flower_pot",
    FURNACE => "furnace",
    GILDED_BLACKSTONE => "gilded_blackstone",
    GLASS => "glass",
    GLOWSTONE => "glowstone",
    GOLD_BLOCK => "gold_block",
    GOLD_ORE => "gold_ore",
    GRANITE => "granite",
    GRASS_BLOCK => "grass_block",
    GRASS_PATH => "grass_path",
    GRAVEL => "gravel",
    GRINDSTONE => "grindstone",
    HAY_BLOCK => "hay_block",
    HONEY_BLOCK => "honey_block",
    HOPPER => "hopper",
    ICE => "ice",
    IRON_BARS => "iron_bars",
    IRON_BLOCK => "iron_block",
    IRON_DOOR => "iron_door",
    IRON_ORE => "iron_ore",
    JUKEBOX => "jukebox",
    KELP => "kelp",
    LADDER => "ladder",
    LANTERN => "lantern",
    LAPIS_BLOCK => "lapis_block",
    LAPIS_ORE => "lapis_ore",
    LAVA => "lava",
    LECTERN => "lectern",
    LEVER => "lever",
    LODESTONE => "lodestone",
    LOOM => "loom",
    MAGMA => "magma",
    MELON_BLOCK => "melon_block",
    MOSS_BLOCK => "moss_block",
    MOSSY_COBBLESTONE => "mossy_cobblestone",
    MUD => "mud",
    MYCELIUM => "mycelium",
    NETHER_BRICK => "nether_brick",
    NETHER_GOLD_ORE => "nether_gold_ore",
    NETHERITE_BLOCK => "netherite_block",
    NETHERRACK => "netherrack",
    NOTE_BLOCK => "note_block",
    OAK_FENCE => "oak_fence",
    OAK_LEAVES => "oak_leaves",
    OAK_LOG => "oak_log",
    OAK_PLANKS => "oak_planks",
    OAK_STAIRS => "oak_stairs",
    OBSERVER => "observer",
    OBSIDIAN => "obsidian",
    PACKED_ICE => "packed_ice",
    PISTON => "piston",
    PODZOL => "podzol",
    POLISHED_ANDESITE => "polished_andesite",
    POLISHED_BLACKSTONE => "polished_blackstone",
    PRISMARINE => "prismarine",
    PUMPKIN => "pumpkin",
    PURPUR_BLOCK => "purpur_block",
    QUARTZ_BLOCK => "quartz_block",
    QUARTZ_ORE => "quartz_ore",
    RED_MUSHROOM => "red_mushroom",
    RED_SAND => "red_sand",
    REDSTONE_BLOCK => "redstone_block",
    REDSTONE_LAMP => "redstone_lamp",
    REDSTONE_ORE => "redstone_ore",
    REDSTONE_WIRE => "redstone_wire",
    REINFORCED_DEEPSLATE => "reinforced_deepslate",
    RESPAWN_ANCHOR => "respawn_anchor",
    SAND => "sand",
    SANDSTONE => "sandstone",
    SCAFFOLDING => "scaffolding",
    SCULK => "sculk",
    SCULK_SENSOR => "sculk_sensor",
    SCULK_SHRIEKER => "sculk_shrieker",
    SEA_LANTERN => "sea_lantern",
    SHROOMLIGHT => "shroomlight",
    SLIME => "slime",
    SMITHING_TABLE => "smithing_table",
    SMOKER => "smoker",
    SNOW => "snow",
    SNOW_LAYER => "snow_layer",
    SOUL_SAND => "soul_sand",
    SOUL_SOIL => "soul_soil",
    SOUL_TORCH => "soul_torch",
    SPAWNER => "spawner",
    SPONGE => "sponge",
    SPRUCE_LOG => "spruce_log",
    SPRUCE_PLANKS => "spruce_planks",
    STONE => "stone",
    STONE_BRICKS => "stone_bricks",
    STONECUTTER_BLOCK => "stonecutter_block",
    STRUCTURE_BLOCK => "structure_block",
    STRUCTURE_VOID => "structure_void",
    SWEET_BERRY_BUSH => "sweet_berry_bush",
    TARGET => "target",
    TNT => "tnt",
    TORCH => "torch",
    TRAPPED_CHEST => "trapped_chest",
    TUFF => "tuff",
    WARPED_STEM => "warped_stem",
    WATER => "water",
    WEB => "web",
    WHEAT => "wheat",
    WHITE_WOOL => "white_wool",
}
