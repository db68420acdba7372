//! Components of `minecraft:item` definitions.
//!
//! Several item components take a bare value instead of an object
//! (`"minecraft:glint": true`); those builders go through
//! [`Component::set_value`].

use mc_addon_core::value::clamp_field;
use mc_addon_core::{component, json, Component, Range};

/// Declare components whose whole body is a single raw value.
macro_rules! raw_value {
    ($($(#[$meta:meta])* $name:ident($ty:ty) => $id:literal;)*) => {
        $(
            component!($(#[$meta])* $name, $id);

            impl $name {
                pub fn new(value: $ty) -> Self {
                    let mut c = Component::new(Self::IDENTIFIER);
                    c.set_value(value);
                    Self(c)
                }
            }
        )*
    };
}

raw_value! {
    /// `minecraft:glint`
    Glint(bool) => "minecraft:glint";
    /// `minecraft:hand_equipped`
    HandEquipped(bool) => "minecraft:hand_equipped";
    /// `minecraft:allow_off_hand`
    AllowOffHand(bool) => "minecraft:allow_off_hand";
    /// `minecraft:can_destroy_in_creative`
    CanDestroyInCreative(bool) => "minecraft:can_destroy_in_creative";
    /// `minecraft:stacked_by_data`
    StackedByData(bool) => "minecraft:stacked_by_data";
    /// `minecraft:liquid_clipped`
    LiquidClipped(bool) => "minecraft:liquid_clipped";
    /// `minecraft:should_despawn`
    ShouldDespawn(bool) => "minecraft:should_despawn";
    /// `minecraft:damage`
    Damage(u32) => "minecraft:damage";
    /// `minecraft:use_animation`, e.g. `eat`, `drink`, `bow`
    UseAnimation(&str) => "minecraft:use_animation";
    /// `minecraft:hover_text_color`
    HoverTextColor(&str) => "minecraft:hover_text_color";
}

component!(
    /// `minecraft:display_name`
    DisplayName, "minecraft:display_name"
);

impl DisplayName {
    /// Literal text or a localization key.
    pub fn new(value: &str) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field("value", value);
        Self(c)
    }
}

component!(
    /// `minecraft:icon`
    Icon, "minecraft:icon"
);

impl Icon {
    /// `texture` is a short name from `textures/item_texture.json`.
    pub fn new(texture: &str) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field("textures", json!({ "default": texture }));
        Self(c)
    }

    /// Texture used while the item is equipped as armor trim or dyed.
    pub fn texture(mut self, slot: &str, texture: &str) -> Self {
        let mut textures = self
            .0
            .get_field("textures")
            .cloned()
            .unwrap_or_else(|| json!({}));
        if let Some(map) = textures.as_object_mut() {
            map.insert(slot.to_string(), texture.into());
        }
        self.0.add_field("textures", textures);
        self
    }
}

component!(
    /// `minecraft:max_stack_size`
    MaxStackSize, "minecraft:max_stack_size"
);

impl MaxStackSize {
    /// Written as a bare number, clamped to `1..=64`.
    pub fn new(value: u32) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.set_value(clamp_field("max_stack_size", value, 1, 64));
        Self(c)
    }
}

component!(
    /// `minecraft:durability`
    Durability, "minecraft:durability"
);

impl Durability {
    pub fn new(max_durability: u32) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field("max_durability", max_durability);
        Self(c)
    }

    /// Percent chance, per use, that durability is lost. The game default
    /// is always (`100..100`).
    pub fn damage_chance(mut self, chance: Range<u32>) -> Self {
        let chance = Range::new(
            clamp_field("damage_chance.min", chance.min, 0, 100),
            clamp_field("damage_chance.max", chance.max, 0, 100),
        );
        if chance == Range::fixed(100) {
            self.0.remove_field("damage_chance");
        } else {
            self.0.add_field("damage_chance", chance);
        }
        self
    }
}

component!(
    /// `minecraft:food`
    Food, "minecraft:food"
);

impl Food {
    pub fn new(nutrition: u32) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field_if_ne("nutrition", nutrition, 0);
        Self(c)
    }

    pub fn saturation_modifier(mut self, value: f64) -> Self {
        self.0.add_field_if_ne("saturation_modifier", value, 0.6);
        self
    }

    pub fn can_always_eat(mut self, value: bool) -> Self {
        self.0.add_flag("can_always_eat", value);
        self
    }

    /// Item left behind after eating, e.g. `minecraft:bowl`.
    pub fn using_converts_to(mut self, item: &str) -> Self {
        self.0.add_field("using_converts_to", item);
        self
    }
}

component!(
    /// `minecraft:use_modifiers`
    UseModifiers, "minecraft:use_modifiers"
);

impl UseModifiers {
    /// `use_duration` in seconds.
    pub fn new(use_duration: f64) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field_if_ne("use_duration", use_duration, 0.0);
        Self(c)
    }

    pub fn movement_modifier(mut self, value: f64) -> Self {
        let value = clamp_field("movement_modifier", value, 0.0, 1.0);
        self.0.add_field_if_ne("movement_modifier", value, 1.0);
        self
    }
}

/// Armor slots accepted by [`Wearable`] and [`Enchantable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipSlot {
    Head,
    Chest,
    Legs,
    Feet,
    MainHand,
    OffHand,
}

impl EquipSlot {
    pub fn wearable_slot(self) -> &'static str {
        match self {
            EquipSlot::Head => "slot.armor.head",
            EquipSlot::Chest => "slot.armor.chest",
            EquipSlot::Legs => "slot.armor.legs",
            EquipSlot::Feet => "slot.armor.feet",
            EquipSlot::MainHand => "slot.weapon.mainhand",
            EquipSlot::OffHand => "slot.weapon.offhand",
        }
    }

    pub fn enchant_slot(self) -> &'static str {
        match self {
            EquipSlot::Head => "armor_head",
            EquipSlot::Chest => "armor_torso",
            EquipSlot::Legs => "armor_legs",
            EquipSlot::Feet => "armor_feet",
            EquipSlot::MainHand => "sword",
            EquipSlot::OffHand => "shield",
        }
    }
}

component!(
    /// `minecraft:wearable`
    Wearable, "minecraft:wearable"
);

impl Wearable {
    pub fn new(slot: EquipSlot) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field("slot", slot.wearable_slot());
        Self(c)
    }

    pub fn protection(mut self, points: u32) -> Self {
        self.0.add_field_if_ne("protection", points, 0);
        self
    }
}

component!(
    /// `minecraft:enchantable`
    Enchantable, "minecraft:enchantable"
);

impl Enchantable {
    /// `slot` is an enchant slot name such as `sword`, `bow` or `armor_head`.
    pub fn new(slot: &str, value: u32) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field("slot", slot).add_field("value", value);
        Self(c)
    }

    pub fn for_slot(slot: EquipSlot, value: u32) -> Self {
        Self::new(slot.enchant_slot(), value)
    }
}

component!(
    /// `minecraft:fuel`
    Fuel, "minecraft:fuel"
);

impl Fuel {
    /// Burn time in seconds; the game rejects values under 0.05.
    pub fn new(duration: f64) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field("duration", clamp_field("duration", duration, 0.05, f64::MAX));
        Self(c)
    }
}

component!(
    /// `minecraft:cooldown`
    Cooldown, "minecraft:cooldown"
);

impl Cooldown {
    /// Items sharing a `category` share the cooldown.
    pub fn new(category: &str, duration: f64) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field("category", category).add_field("duration", duration);
        Self(c)
    }
}

component!(
    /// `minecraft:throwable`
    Throwable, "minecraft:throwable"
);

impl Throwable {
    pub fn new() -> Self {
        Self(Component::new(Self::IDENTIFIER))
    }

    pub fn do_swing_animation(mut self, value: bool) -> Self {
        self.0.add_flag("do_swing_animation", value);
        self
    }

    pub fn launch_power_scale(mut self, value: f64) -> Self {
        self.0.add_field_if_ne("launch_power_scale", value, 1.0);
        self
    }

    pub fn max_launch_power(mut self, value: f64) -> Self {
        self.0.add_field_if_ne("max_launch_power", value, 1.0);
        self
    }

    pub fn draw_duration(mut self, min: f64, max: f64) -> Self {
        self.0
            .add_field_if_ne("min_draw_duration", min, 0.0)
            .add_field_if_ne("max_draw_duration", max, 0.0);
        self
    }

    pub fn scale_power_by_draw_duration(mut self, value: bool) -> Self {
        self.0.add_flag("scale_power_by_draw_duration", value);
        self
    }
}

impl Default for Throwable {
    fn default() -> Self {
        Self::new()
    }
}

component!(
    /// `minecraft:projectile`
    Projectile, "minecraft:projectile"
);

impl Projectile {
    pub fn new(projectile_entity: &str) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field("projectile_entity", projectile_entity);
        Self(c)
    }

    pub fn minimum_critical_power(mut self, value: f64) -> Self {
        self.0.add_field_if_ne("minimum_critical_power", value, 0.0);
        self
    }
}

component!(
    /// `minecraft:shooter`
    Shooter, "minecraft:shooter"
);

impl Shooter {
    pub fn new() -> Self {
        Self(Component::new(Self::IDENTIFIER))
    }

    pub fn ammunition(mut self, item: &str, use_offhand: bool, search_inventory: bool, use_in_creative: bool) -> Self {
        let mut a = Component::object();
        a.add_field("item", item)
            .add_flag("use_offhand", use_offhand)
            .add_flag("search_inventory", search_inventory)
            .add_flag("use_in_creative", use_in_creative);
        self.0.push_field("ammunition", a);
        self
    }

    pub fn charge_on_draw(mut self, value: bool) -> Self {
        self.0.add_flag("charge_on_draw", value);
        self
    }

    pub fn max_draw_duration(mut self, seconds: f64) -> Self {
        self.0.add_field_if_ne("max_draw_duration", seconds, 0.0);
        self
    }

    pub fn scale_power_by_draw_duration(mut self, value: bool) -> Self {
        self.0.add_flag("scale_power_by_draw_duration", value);
        self
    }
}

impl Default for Shooter {
    fn default() -> Self {
        Self::new()
    }
}

component!(
    /// `minecraft:repairable`
    Repairable, "minecraft:repairable"
);

impl Repairable {
    pub fn new() -> Self {
        Self(Component::new(Self::IDENTIFIER))
    }

    /// `amount` may be a number or a Molang expression string.
    pub fn repair_with(mut self, items: &[&str], amount: impl Into<mc_addon_core::Value>) -> Self {
        let mut entry = Component::object();
        entry
            .add_field("items", items.to_vec())
            .add_field("repair_amount", amount);
        self.0.push_field("repair_items", entry);
        self
    }
}

impl Default for Repairable {
    fn default() -> Self {
        Self::new()
    }
}

component!(
    /// `minecraft:tags`
    Tags, "minecraft:tags"
);

impl Tags {
    pub fn new<'a>(tags: impl IntoIterator<Item = &'a str>) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field("tags", tags.into_iter().collect::<Vec<_>>());
        Self(c)
    }
}

/// Item name colour tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RarityLevel {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
}

impl RarityLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RarityLevel::Common => "common",
            RarityLevel::Uncommon => "uncommon",
            RarityLevel::Rare => "rare",
            RarityLevel::Epic => "epic",
        }
    }
}

component!(
    /// `minecraft:rarity`
    Rarity, "minecraft:rarity"
);

impl Rarity {
    pub fn new(level: RarityLevel) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.set_value(level.as_str());
        Self(c)
    }
}

component!(
    /// `minecraft:block_placer`
    BlockPlacer, "minecraft:block_placer"
);

impl BlockPlacer {
    pub fn new(block: &str) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field("block", block);
        Self(c)
    }

    /// Restrict placement to these blocks.
    pub fn use_on(mut self, block: &str) -> Self {
        self.0.push_field("use_on", block);
        self
    }

    pub fn replace_block_item(mut self, value: bool) -> Self {
        self.0.add_flag("replace_block_item", value);
        self
    }
}

component!(
    /// `minecraft:entity_placer`
    EntityPlacer, "minecraft:entity_placer"
);

impl EntityPlacer {
    pub fn new(entity: &str) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field("entity", entity);
        Self(c)
    }

    pub fn use_on(mut self, block: &str) -> Self {
        self.0.push_field("use_on", block);
        self
    }

    pub fn dispense_on(mut self, block: &str) -> Self {
        self.0.push_field("dispense_on", block);
        self
    }
}

component!(
    /// `minecraft:digger`
    Digger, "minecraft:digger"
);

impl Digger {
    pub fn new() -> Self {
        Self(Component::new(Self::IDENTIFIER))
    }

    pub fn use_efficiency(mut self, value: bool) -> Self {
        self.0.add_flag("use_efficiency", value);
        self
    }

    /// Mining speed for a block identifier.
    pub fn destroy_speed(mut self, block: &str, speed: u32) -> Self {
        self.0
            .push_field("destroy_speeds", json!({ "block": block, "speed": speed }));
        self
    }

    /// Mining speed for every block matching a Molang tag query, e.g.
    /// `q.any_tag('stone', 'metal')`.
    pub fn destroy_speed_tags(mut self, tags: &str, speed: u32) -> Self {
        self.0.push_field(
            "destroy_speeds",
            json!({ "block": { "tags": tags }, "speed": speed }),
        );
        self
    }
}

impl Default for Digger {
    fn default() -> Self {
        Self::new()
    }
}

component!(
    /// `minecraft:record`
    Record, "minecraft:record"
);

impl Record {
    pub fn new(sound_event: &str, duration: f64) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field("sound_event", sound_event)
            .add_field("duration", duration);
        Self(c)
    }

    /// Redstone signal strength of a jukebox playing this record.
    pub fn comparator_signal(mut self, signal: u32) -> Self {
        let signal = clamp_field("comparator_signal", signal, 1, 15);
        self.0.add_field_if_ne("comparator_signal", signal, 1);
        self
    }
}

component!(
    /// `minecraft:dyeable`
    Dyeable, "minecraft:dyeable"
);

impl Dyeable {
    /// `default_color` as `#rrggbb`.
    pub fn new(default_color: &str) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field("default_color", default_color);
        Self(c)
    }
}

component!(
    /// `minecraft:interact_button`
    InteractButton, "minecraft:interact_button"
);

impl InteractButton {
    /// Show the default "Use Item" button text.
    pub fn new() -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.set_value(true);
        Self(c)
    }

    pub fn text(text: &str) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.set_value(text);
        Self(c)
    }
}

impl Default for InteractButton {
    fn default() -> Self {
        Self::new()
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
    fn raw_value_components() {
        assert_eq!(body(&Glint::new(true)), json!(true));
        assert_eq!(body(&Damage::new(7)), json!(7));
        assert_eq!(body(&UseAnimation::new("eat")), json!("eat"));
        assert_eq!(body(&Rarity::new(RarityLevel::Epic)), json!("epic"));
        assert_eq!(body(&InteractButton::text("Use")), json!("Use"));
    }

    #[test]
    fn max_stack_size_is_clamped() {
        assert_eq!(body(&MaxStackSize::new(16)), json!(16));
        assert_eq!(body(&MaxStackSize::new(0)), json!(1));
        assert_eq!(body(&MaxStackSize::new(99)), json!(64));
    }

    #[test]
    fn durability_damage_chance_default() {
        assert_eq!(
            body(&Durability::new(250).damage_chance(Range::fixed(100))),
            json!({ "max_durability": 250 })
        );
        assert_eq!(
            body(&Durability::new(250).damage_chance(Range::new(60, 150))),
            json!({ "max_durability": 250, "damage_chance": { "min": 60, "max": 100 } })
        );
    }

    #[test]
    fn food_and_use_modifiers() {
        let food = Food::new(4)
            .saturation_modifier(0.6)
            .can_always_eat(true)
            .using_converts_to("minecraft:bowl");
        assert_eq!(
            body(&food),
            json!({ "nutrition": 4, "can_always_eat": true, "using_converts_to": "minecraft:bowl" })
        );
        assert_eq!(
            body(&UseModifiers::new(1.6).movement_modifier(0.35)),
            json!({ "use_duration": 1.6, "movement_modifier": 0.35 })
        );
        assert_eq!(body(&UseModifiers::new(0.0).movement_modifier(1.0)), json!({}));
    }

    #[test]
    fn icon_extra_textures() {
        assert_eq!(
            body(&Icon::new("ruby").texture("dyed", "ruby_dyed")),
            json!({ "textures": { "default": "ruby", "dyed": "ruby_dyed" } })
        );
    }

    #[test]
    fn wearable_and_enchantable_slots() {
        assert_eq!(
            body(&Wearable::new(EquipSlot::Head).protection(3)),
            json!({ "slot": "slot.armor.head", "protection": 3 })
        );
        assert_eq!(
            body(&Enchantable::for_slot(EquipSlot::Head, 10)),
            json!({ "slot": "armor_head", "value": 10 })
        );
    }

    #[test]
    fn shooter_ammunition() {
        let s = Shooter::new()
            .ammunition("minecraft:arrow", true, true, false)
            .charge_on_draw(true)
            .max_draw_duration(1.0);
        assert_eq!(
            body(&s),
            json!({
                "ammunition": [{ "item": "minecraft:arrow", "use_offhand": true, "search_inventory": true }],
                "charge_on_draw": true,
                "max_draw_duration": 1.0
            })
        );
    }

    #[test]
    fn digger_and_repairable() {
        let d = Digger::new()
            .use_efficiency(true)
            .destroy_speed("minecraft:stone", 6)
            .destroy_speed_tags("q.any_tag('wood')", 4);
        assert_eq!(body(&d)["destroy_speeds"][1]["block"]["tags"], json!("q.any_tag('wood')"));

        let r = Repairable::new().repair_with(&["custom:ruby"], "context.other->q.remaining_durability + 0.05 * context.other->q.max_durability");
        assert_eq!(body(&r)["repair_items"][0]["items"], json!(["custom:ruby"]));
    }

    #[test]
    fn fuel_and_record_clamps() {
        assert_eq!(body(&Fuel::new(0.0)), json!({ "duration": 0.05 }));
        assert_eq!(
            body(&Record::new("record.cat", 185.0).comparator_signal(20)),
            json!({ "sound_event": "record.cat", "duration": 185.0, "comparator_signal": 15 })
        );
    }

    #[test]
    fn tags_list() {
        assert_eq!(
            body(&Tags::new(["minecraft:is_sword", "custom:gem"])),
            json!({ "tags": ["minecraft:is_sword", "custom:gem"] })
        );
    }
}
