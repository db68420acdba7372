//! Components that react to damage, interaction, the environment or time.

use mc_addon_core::{component, json, Component, Filter};

use crate::{event_trigger, filtered_trigger};

/// Damage causes accepted by `cause` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageCause {
    All,
    Anvil,
    BlockExplosion,
    Contact,
    Drowning,
    EntityAttack,
    EntityExplosion,
    Fall,
    FallingBlock,
    Fire,
    FireTick,
    Fireworks,
    FlyIntoWall,
    Freezing,
    Lava,
    Lightning,
    Magic,
    Magma,
    None,
    Override,
    Piston,
    Projectile,
    Stalactite,
    Stalagmite,
    Starve,
    Suffocation,
    Thorns,
    Void,
    Wither,
}

impl DamageCause {
    pub fn as_str(self) -> &'static str {
        match self {
            DamageCause::All => "all",
            DamageCause::Anvil => "anvil",
            DamageCause::BlockExplosion => "block_explosion",
            DamageCause::Contact => "contact",
            DamageCause::Drowning => "drowning",
            DamageCause::EntityAttack => "entity_attack",
            DamageCause::EntityExplosion => "entity_explosion",
            DamageCause::Fall => "fall",
            DamageCause::FallingBlock => "falling_block",
            DamageCause::Fire => "fire",
            DamageCause::FireTick => "fire_tick",
            DamageCause::Fireworks => "fireworks",
            DamageCause::FlyIntoWall => "fly_into_wall",
            DamageCause::Freezing => "freezing",
            DamageCause::Lava => "lava",
            DamageCause::Lightning => "lightning",
            DamageCause::Magic => "magic",
            DamageCause::Magma => "magma",
            DamageCause::None => "none",
            DamageCause::Override => "override",
            DamageCause::Piston => "piston",
            DamageCause::Projectile => "projectile",
            DamageCause::Stalactite => "stalactite",
            DamageCause::Stalagmite => "stalagmite",
            DamageCause::Starve => "starve",
            DamageCause::Suffocation => "suffocation",
            DamageCause::Thorns => "thorns",
            DamageCause::Void => "void",
            DamageCause::Wither => "wither",
        }
    }
}

/// Whether a sensed hit still hurts the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DealsDamage {
    #[default]
    Yes,
    No,
    NoButSideEffectsApply,
}

impl DealsDamage {
    pub fn as_str(self) -> &'static str {
        match self {
            DealsDamage::Yes => "yes",
            DealsDamage::No => "no",
            DealsDamage::NoButSideEffectsApply => "no_but_side_effects_apply",
        }
    }
}

/// One entry of `minecraft:damage_sensor`.
#[derive(Debug, Clone, PartialEq)]
pub struct DamageTrigger(Component);

impl DamageTrigger {
    pub fn new(cause: DamageCause) -> Self {
        let mut c = Component::object();
        c.add_field_if_ne("cause", cause.as_str(), "all");
        Self(c)
    }

    pub fn deals_damage(mut self, value: DealsDamage) -> Self {
        self.0
            .add_field_if_ne("deals_damage", value.as_str(), DealsDamage::Yes.as_str());
        self
    }

    pub fn damage_multiplier(mut self, value: f64) -> Self {
        self.0.add_field_if_ne("damage_multiplier", value, 1.0);
        self
    }

    pub fn damage_modifier(mut self, value: f64) -> Self {
        self.0.add_field_if_ne("damage_modifier", value, 0.0);
        self
    }

    pub fn on_damage(mut self, filters: Option<Filter>, event: Option<&str>) -> Self {
        self.0
            .add_field("on_damage", filtered_trigger(event, None, filters));
        self
    }

    pub fn on_damage_sound_event(mut self, sound: &str) -> Self {
        self.0.add_field("on_damage_sound_event", sound);
        self
    }
}

component!(
    /// `minecraft:damage_sensor`
    DamageSensor, "minecraft:damage_sensor"
);

impl DamageSensor {
    pub fn new() -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field("triggers", Vec::<serde_json::Value>::new());
        Self(c)
    }

    pub fn trigger(mut self, trigger: DamageTrigger) -> Self {
        self.0.push_field("triggers", trigger.0);
        self
    }

    /// Shorthand for a sensor that cancels one damage cause entirely.
    pub fn immune_to(cause: DamageCause) -> Self {
        Self::new().trigger(DamageTrigger::new(cause).deals_damage(DealsDamage::No))
    }
}

impl Default for DamageSensor {
    fn default() -> Self {
        Self::new()
    }
}

/// One entry of `minecraft:interact`.
#[derive(Debug, Clone, PartialEq)]
pub struct Interaction(Component);

impl Interaction {
    pub fn new() -> Self {
        Self(Component::object())
    }

    pub fn on_interact(mut self, filters: Option<Filter>, event: Option<&str>, target: Option<&str>) -> Self {
        self.0
            .add_field("on_interact", filtered_trigger(event, target, filters));
        self
    }

    pub fn use_item(mut self, value: bool) -> Self {
        self.0.add_flag("use_item", value);
        self
    }

    pub fn hurt_item(mut self, damage: u32) -> Self {
        self.0.add_field_if_ne("hurt_item", damage, 0);
        self
    }

    pub fn swing(mut self, value: bool) -> Self {
        self.0.add_flag("swing", value);
        self
    }

    /// Localization key shown on touch controls.
    pub fn interact_text(mut self, text: &str) -> Self {
        self.0.add_field("interact_text", text);
        self
    }

    pub fn play_sounds(mut self, sounds: &str) -> Self {
        self.0.add_field("play_sounds", sounds);
        self
    }

    pub fn spawn_items(mut self, table: &str) -> Self {
        self.0.add_field("spawn_items", json!({ "table": table }));
        self
    }

    pub fn transform_to_item(mut self, item: &str) -> Self {
        self.0.add_field("transform_to_item", item);
        self
    }

    /// Seconds before the interaction can happen again.
    pub fn cooldown(mut self, seconds: f64) -> Self {
        self.0.add_field_if_ne("cooldown", seconds, 0.0);
        self
    }
}

impl Default for Interaction {
    fn default() -> Self {
        Self::new()
    }
}

component!(
    /// `minecraft:interact`
    Interact, "minecraft:interact"
);

impl Interact {
    pub fn new() -> Self {
        Self(Component::new(Self::IDENTIFIER))
    }

    pub fn interaction(mut self, interaction: Interaction) -> Self {
        self.0.push_field("interactions", interaction.0);
        self
    }
}

impl Default for Interact {
    fn default() -> Self {
        Self::new()
    }
}

component!(
    /// `minecraft:environment_sensor`
    EnvironmentSensor, "minecraft:environment_sensor"
);

impl EnvironmentSensor {
    pub fn new() -> Self {
        Self(Component::new(Self::IDENTIFIER))
    }

    /// Fire `event` whenever `filters` pass.
    pub fn trigger(mut self, filters: Filter, event: &str) -> Self {
        self.0
            .push_field("triggers", filtered_trigger(Some(event), None, Some(filters)));
        self
    }
}

impl Default for EnvironmentSensor {
    fn default() -> Self {
        Self::new()
    }
}

component!(
    /// `minecraft:timer`
    Timer, "minecraft:timer"
);

impl Timer {
    /// Fire `event` after `seconds`.
    pub fn new(seconds: f64, event: &str) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field("time", seconds)
            .add_field("time_down_event", event_trigger(event, None));
        Self(c)
    }

    /// Pick the delay uniformly from `[min, max]` seconds.
    pub fn random_time(mut self, min: f64, max: f64) -> Self {
        self.0.add_field("time", json!([min, max]));
        self
    }

    pub fn looping(mut self, value: bool) -> Self {
        self.0.add_field_if_ne("looping", value, true);
        self
    }

    pub fn random_interval(mut self, value: bool) -> Self {
        self.0.add_field_if_ne("randomInterval", value, true);
        self
    }

    pub fn target(mut self, target: &str) -> Self {
        if let Some(event) = self
            .0
            .get_field("time_down_event")
            .and_then(|e| e.get("event"))
            .and_then(|e| e.as_str())
            .map(String::from)
        {
            self.0
                .add_field("time_down_event", event_trigger(&event, Some(target)));
        }
        self
    }
}

component!(
    /// `minecraft:hurt_on_condition`
    HurtOnCondition, "minecraft:hurt_on_condition"
);

impl HurtOnCondition {
    pub fn new() -> Self {
        Self(Component::new(Self::IDENTIFIER))
    }

    pub fn condition(mut self, filters: Filter, cause: DamageCause, damage_per_tick: u32) -> Self {
        let mut entry = Component::object();
        entry
            .add_field("filters", filters)
            .add_field("cause", cause.as_str())
            .add_field_if_ne("damage_per_tick", damage_per_tick, 1);
        self.0.push_field("damage_conditions", entry);
        self
    }
}

impl Default for HurtOnCondition {
    fn default() -> Self {
        Self::new()
    }
}
