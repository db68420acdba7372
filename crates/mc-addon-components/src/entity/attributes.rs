//! Attribute and marker components of server entities.

use mc_addon_core::value::{clamp_field, round_to};
use mc_addon_core::{component, json, Component, Range};

component!(
    /// `minecraft:health`
    Health, "minecraft:health"
);

impl Health {
    pub fn new(value: u32) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field("value", value);
        Self(c)
    }

    /// Random starting health.
    pub fn range(range: Range<u32>) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field("value", range);
        Self(c)
    }

    /// Maximum health; omitted when it matches the fixed starting value.
    pub fn max(mut self, max: u32) -> Self {
        match self.0.get_field("value").and_then(|v| v.as_u64()) {
            Some(value) => self.0.add_field_if_ne("max", u64::from(max), value),
            None => self.0.add_field("max", max),
        };
        self
    }
}

component!(
    /// `minecraft:movement`
    Movement, "minecraft:movement"
);

impl Movement {
    pub fn new(value: f64) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field("value", value);
        Self(c)
    }

    /// Movement attribute for a relative speed `v`, using the curve
    /// `0.152 * sqrt(v)`.
    pub fn from_speed(v: f64) -> Self {
        Self::new(movement_value(v))
    }

    pub fn max(mut self, max: f64) -> Self {
        self.0.add_field("max", max);
        self
    }
}

/// `0.152 * sqrt(v)`; negative input is treated as 0.
pub fn movement_value(v: f64) -> f64 {
    0.152 * v.max(0.0).sqrt()
}

component!(
    /// `minecraft:underwater_movement`
    UnderwaterMovement, "minecraft:underwater_movement"
);

impl UnderwaterMovement {
    pub fn new(value: f64) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field("value", value);
        Self(c)
    }
}

component!(
    /// `minecraft:attack`
    Attack, "minecraft:attack"
);

impl Attack {
    pub fn new(damage: u32) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field("damage", damage);
        Self(c)
    }

    pub fn range(damage: Range<u32>) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field("damage", damage.as_pair());
        Self(c)
    }

    /// Mob effect applied on hit, with its duration in seconds.
    pub fn effect(mut self, effect: &str, duration: f64) -> Self {
        self.0
            .add_field("effect_name", mc_addon_catalog::effects::short_name(effect))
            .add_field("effect_duration", duration);
        self
    }
}

component!(
    /// `minecraft:collision_box`
    CollisionBox, "minecraft:collision_box"
);

impl CollisionBox {
    pub fn new(width: f64, height: f64) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field_if_ne("width", width, 1.0)
            .add_field_if_ne("height", height, 1.0);
        Self(c)
    }
}

component!(
    /// `minecraft:scale`
    Scale, "minecraft:scale"
);

impl Scale {
    pub fn new(value: f64) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field("value", clamp_field("scale", value, 0.01, f64::MAX));
        Self(c)
    }
}

component!(
    /// `minecraft:knockback_resistance`
    KnockbackResistance, "minecraft:knockback_resistance"
);

impl KnockbackResistance {
    pub fn new(value: f64) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field(
            "value",
            round_to(clamp_field("knockback_resistance", value, 0.0, 1.0), 4),
        );
        Self(c)
    }

    pub fn max(mut self, max: f64) -> Self {
        self.0.add_field("max", clamp_field("knockback_resistance.max", max, 0.0, 1.0));
        self
    }
}

component!(
    /// `minecraft:follow_range`
    FollowRange, "minecraft:follow_range"
);

impl FollowRange {
    pub fn new(value: u32) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field("value", value);
        Self(c)
    }

    pub fn max(mut self, max: u32) -> Self {
        self.0.add_field("max", max);
        self
    }
}

component!(
    /// `minecraft:type_family`
    TypeFamily, "minecraft:type_family"
);

impl TypeFamily {
    pub fn new<'a>(families: impl IntoIterator<Item = &'a str>) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        let families: Vec<&str> = families.into_iter().collect();
        c.add_field("family", families);
        Self(c)
    }
}

component!(
    /// `minecraft:physics`
    Physics, "minecraft:physics"
);

impl Physics {
    pub fn new() -> Self {
        Self(Component::new(Self::IDENTIFIER))
    }

    pub fn has_gravity(mut self, value: bool) -> Self {
        self.0.add_field_if_ne("has_gravity", value, true);
        self
    }

    pub fn has_collision(mut self, value: bool) -> Self {
        self.0.add_field_if_ne("has_collision", value, true);
        self
    }
}

impl Default for Physics {
    fn default() -> Self {
        Self::new()
    }
}

component!(
    /// `minecraft:pushable`
    Pushable, "minecraft:pushable"
);

impl Pushable {
    pub fn new(is_pushable: bool, is_pushable_by_piston: bool) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field_if_ne("is_pushable", is_pushable, true)
            .add_field_if_ne("is_pushable_by_piston", is_pushable_by_piston, true);
        Self(c)
    }
}

component!(
    /// `minecraft:push_through`
    PushThrough, "minecraft:push_through"
);

impl PushThrough {
    pub fn new(value: f64) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field_if_ne("value", value, 0.0);
        Self(c)
    }
}

component!(
    /// `minecraft:jump.static`
    JumpStatic, "minecraft:jump.static"
);

impl JumpStatic {
    pub fn new(jump_power: f64) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field_if_ne("jump_power", jump_power, 0.42);
        Self(c)
    }
}

component!(
    /// `minecraft:breathable`
    Breathable, "minecraft:breathable"
);

impl Breathable {
    pub fn new() -> Self {
        Self(Component::new(Self::IDENTIFIER))
    }

    /// Seconds of air the entity can hold.
    pub fn total_supply(mut self, seconds: u32) -> Self {
        self.0.add_field_if_ne("total_supply", seconds, 15);
        self
    }

    /// Seconds between suffocation damage; negative values delay the first hit.
    pub fn suffocate_time(mut self, seconds: i32) -> Self {
        self.0.add_field_if_ne("suffocate_time", seconds, -20);
        self
    }

    pub fn breathes_air(mut self, value: bool) -> Self {
        self.0.add_field_if_ne("breathes_air", value, true);
        self
    }

    pub fn breathes_water(mut self, value: bool) -> Self {
        self.0.add_flag("breathes_water", value);
        self
    }

    pub fn breathes_lava(mut self, value: bool) -> Self {
        self.0.add_field_if_ne("breathes_lava", value, true);
        self
    }

    pub fn breathes_solids(mut self, value: bool) -> Self {
        self.0.add_flag("breathes_solids", value);
        self
    }

    pub fn generates_bubbles(mut self, value: bool) -> Self {
        self.0.add_field_if_ne("generates_bubbles", value, true);
        self
    }

    pub fn breathe_block(mut self, block: &str) -> Self {
        self.0.push_field("breathe_blocks", block);
        self
    }

    pub fn non_breathe_block(mut self, block: &str) -> Self {
        self.0.push_field("non_breathe_blocks", block);
        self
    }
}

impl Default for Breathable {
    fn default() -> Self {
        Self::new()
    }
}

/// Components whose presence alone toggles a behaviour.
macro_rules! marker {
    ($($(#[$meta:meta])* $name:ident => $id:literal;)*) => {
        $(
            component!($(#[$meta])* $name, $id);

            impl $name {
                pub fn new() -> Self {
                    Self(Component::new(Self::IDENTIFIER))
                }
            }

            impl Default for $name {
                fn default() -> Self {
                    Self::new()
                }
            }
        )*
    };
}

marker! {
    /// `minecraft:fire_immune`
    FireImmune => "minecraft:fire_immune";
    /// `minecraft:persistent`
    Persistent => "minecraft:persistent";
    /// `minecraft:is_baby`
    IsBaby => "minecraft:is_baby";
    /// `minecraft:is_tamed`
    IsTamed => "minecraft:is_tamed";
    /// `minecraft:is_saddled`
    IsSaddled => "minecraft:is_saddled";
    /// `minecraft:is_chested`
    IsChested => "minecraft:is_chested";
    /// `minecraft:is_hidden_when_invisible`
    IsHiddenWhenInvisible => "minecraft:is_hidden_when_invisible";
    /// `minecraft:can_climb`
    CanClimb => "minecraft:can_climb";
    /// `minecraft:can_fly`
    CanFly => "minecraft:can_fly";
    /// `minecraft:can_power_jump`
    CanPowerJump => "minecraft:can_power_jump";
}

/// Integer selectors read by render controllers.
macro_rules! int_value {
    ($($(#[$meta:meta])* $name:ident => $id:literal;)*) => {
        $(
            component!($(#[$meta])* $name, $id);

            impl $name {
                pub fn new(value: i32) -> Self {
                    let mut c = Component::new(Self::IDENTIFIER);
                    c.add_field("value", value);
                    Self(c)
                }
            }
        )*
    };
}

int_value! {
    /// `minecraft:variant`
    Variant => "minecraft:variant";
    /// `minecraft:mark_variant`
    MarkVariant => "minecraft:mark_variant";
    /// `minecraft:skin_id`
    SkinId => "minecraft:skin_id";
    /// `minecraft:color`
    Color => "minecraft:color";
}

component!(
    /// `minecraft:loot`
    Loot, "minecraft:loot"
);

impl Loot {
    /// `table` is relative to the behavior pack root, e.g.
    /// `loot_tables/entities/ghoul.json`.
    pub fn new(table: &str) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field("table", table);
        Self(c)
    }
}

component!(
    /// `minecraft:experience_reward`
    ExperienceReward, "minecraft:experience_reward"
);

impl ExperienceReward {
    pub fn new() -> Self {
        Self(Component::new(Self::IDENTIFIER))
    }

    /// Molang expression evaluated on death.
    pub fn on_death(mut self, expr: &str) -> Self {
        self.0.add_field("on_death", expr);
        self
    }

    pub fn on_bred(mut self, expr: &str) -> Self {
        self.0.add_field("on_bred", expr);
        self
    }
}

impl Default for ExperienceReward {
    fn default() -> Self {
        Self::new()
    }
}

component!(
    /// `minecraft:equipment`
    Equipment, "minecraft:equipment"
);

impl Equipment {
    pub fn new(table: &str) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field("table", table);
        Self(c)
    }

    /// Chance in `0.0..=1.0` that the item in `slot` drops on death.
    pub fn slot_drop_chance(mut self, slot: &str, chance: f64) -> Self {
        self.0.push_field(
            "slot_drop_chance",
            json!({ "slot": slot, "drop_chance": clamp_field("drop_chance", chance, 0.0, 1.0) }),
        );
        self
    }
}

/// Container kinds for [`Inventory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerType {
    None,
    Horse,
    MinecartChest,
    MinecartHopper,
    Inventory,
    Container,
    Hopper,
}

impl ContainerType {
    pub fn as_str(self) -> &'static str {
        match self {
            ContainerType::None => "none",
            ContainerType::Horse => "horse",
            ContainerType::MinecartChest => "minecart_chest",
            ContainerType::MinecartHopper => "minecart_hopper",
            ContainerType::Inventory => "inventory",
            ContainerType::Container => "container",
            ContainerType::Hopper => "hopper",
        }
    }
}

component!(
    /// `minecraft:inventory`
    Inventory, "minecraft:inventory"
);

impl Inventory {
    pub fn new(container_type: ContainerType, size: u32) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field_if_ne("container_type", container_type.as_str(), "none")
            .add_field_if_ne("inventory_size", size, 5);
        Self(c)
    }

    pub fn private(mut self, value: bool) -> Self {
        self.0.add_flag("private", value);
        self
    }

    pub fn restrict_to_owner(mut self, value: bool) -> Self {
        self.0.add_flag("restrict_to_owner", value);
        self
    }

    pub fn can_be_siphoned_from(mut self, value: bool) -> Self {
        self.0.add_flag("can_be_siphoned_from", value);
        self
    }

    pub fn additional_slots_per_strength(mut self, slots: u32) -> Self {
        self.0.add_field_if_ne("additional_slots_per_strength", slots, 0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mc_addon_core::{AsComponent, Value};

    fn body(c: &impl AsComponent) -> Value {
        c.component().body()
    }

    #[test]
    fn health_max_omitted_when_equal() {
        assert_eq!(body(&Health::new(20).max(20)), json!({ "value": 20 }));
        assert_eq!(body(&Health::new(20).max(40)), json!({ "value": 20, "max": 40 }));
        assert_eq!(
            body(&Health::range(Range::new(10, 20)).max(20)),
            json!({ "value": { "min": 10, "max": 20 }, "max": 20 })
        );
    }

    #[test]
    fn movement_speed_curve() {
        assert_eq!(body(&Movement::from_speed(4.0)), json!({ "value": 0.304 }));
        assert_eq!(movement_value(0.0), 0.0);
        assert_eq!(movement_value(-3.0), 0.0);
        assert_eq!(movement_value(1.0), 0.152);
    }

    #[test]
    fn knockback_resistance_is_clamped() {
        assert_eq!(body(&KnockbackResistance::new(1.7)), json!({ "value": 1.0 }));
        assert_eq!(body(&KnockbackResistance::new(-0.2)), json!({ "value": 0.0 }));
    }

    #[test]
    fn physics_defaults_omitted() {
        assert_eq!(body(&Physics::new()), json!({}));
        assert_eq!(
            body(&Physics::new().has_gravity(false).has_collision(true)),
            json!({ "has_gravity": false })
        );
    }

    #[test]
    fn collision_box_and_family() {
        assert_eq!(
            body(&CollisionBox::new(0.6, 1.9)),
            json!({ "width": 0.6, "height": 1.9 })
        );
        assert_eq!(body(&CollisionBox::new(1.0, 1.0)), json!({}));
        assert_eq!(
            body(&TypeFamily::new(["ghoul", "monster", "mob"])),
            json!({ "family": ["ghoul", "monster", "mob"] })
        );
    }

    #[test]
    fn breathable_water_mob() {
        let b = Breathable::new()
            .breathes_air(false)
            .breathes_water(true)
            .total_supply(15)
            .suffocate_time(0);
        assert_eq!(
            body(&b),
            json!({ "breathes_air": false, "breathes_water": true, "suffocate_time": 0 })
        );
    }

    #[test]
    fn attack_with_effect() {
        let a = Attack::new(4).effect(mc_addon_catalog::effects::WITHER, 5.0);
        assert_eq!(
            body(&a),
            json!({ "damage": 4, "effect_name": "wither", "effect_duration": 5.0 })
        );
        assert_eq!(body(&Attack::range(Range::new(2, 6))), json!({ "damage": [2, 6] }));
    }

    #[test]
    fn markers_and_variants() {
        assert_eq!(FireImmune::new().identifier(), "minecraft:fire_immune");
        assert!(FireImmune::new().component().is_empty());
        assert_eq!(body(&Variant::new(2)), json!({ "value": 2 }));
        assert_eq!(MarkVariant::IDENTIFIER, "minecraft:mark_variant");
    }

    #[test]
    fn inventory_and_equipment() {
        assert_eq!(body(&Inventory::new(ContainerType::None, 5)), json!({}));
        assert_eq!(
            body(&Inventory::new(ContainerType::Horse, 16).private(true)),
            json!({ "container_type": "horse", "inventory_size": 16, "private": true })
        );
        assert_eq!(
            body(&Equipment::new("loot_tables/equipment/ghoul.json").slot_drop_chance("slot.weapon.mainhand", 2.0)),
            json!({
                "table": "loot_tables/equipment/ghoul.json",
                "slot_drop_chance": [{ "slot": "slot.weapon.mainhand", "drop_chance": 1.0 }]
            })
        );
    }
}
