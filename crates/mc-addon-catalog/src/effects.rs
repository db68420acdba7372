//! Mob effect identifiers, as used by `has_mob_effect` filters and
//! `minecraft:spell_effects`.

catalog! {
    SPEED => "speed",
    SLOWNESS => "slowness",
    HASTE => "haste",
    MINING_FATIGUE => "mining_fatigue",
    STRENGTH => "strength",
    INSTANT_HEALTH => "instant_health",
    INSTANT_DAMAGE => "instant_damage",
    JUMP_BOOST => "jump_boost",
    NAUSEA => "nausea",
    REGENERATION => "regeneration",
    RESISTANCE => "resistance",
    FIRE_RESISTANCE => "fire_resistance",
    WATER_BREATHING => "water_breathing",
    INVISIBILITY => "invisibility",
    BLINDNESS => "blindness",
    NIGHT_VISION => "night_vision",
    HUNGER => "hunger",
    WEAKNESS => "weakness",
    POISON => "poison",
    WITHER => "wither",
    HEALTH_BOOST => "health_boost",
    ABSORPTION => "absorption",
    SATURATION => "saturation",
    LEVITATION => "levitation",
    FATAL_POISON => "fatal_poison",
    CONDUIT_POWER => "conduit_power",
    SLOW_FALLING => "slow_falling",
    BAD_OMEN => "bad_omen",
    VILLAGE_HERO => "village_hero",
    DARKNESS => "darkness",
    WIND_CHARGED => "wind_charged",
    WEAVING => "weaving",
    OOZING => "oozing",
    INFESTED => "infested",
}

/// The effect name without namespace, as written in `spell_effects` and
/// `mob_effect` components.
pub fn short_name(id: &str) -> &str {
    id.strip_prefix("minecraft:").unwrap_or(id)
}
