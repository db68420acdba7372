//! Taming, breeding, growth, riding, naming and despawn rules.

use mc_addon_core::value::clamp_field;
use mc_addon_core::{component, json, Component, Filter, Range};

use crate::event_trigger;

component!(
    /// `minecraft:nameable`
    Nameable, "minecraft:nameable"
);

impl Nameable {
    pub fn new() -> Self {
        Self(Component::new(Self::IDENTIFIER))
    }

    pub fn always_show(mut self, value: bool) -> Self {
        self.0.add_flag("always_show", value);
        self
    }

    pub fn allow_name_tag_renaming(mut self, value: bool) -> Self {
        self.0.add_field_if_ne("allow_name_tag_renaming", value, true);
        self
    }

    pub fn default_trigger(mut self, event: &str) -> Self {
        self.0.add_field("default_trigger", event_trigger(event, None));
        self
    }

    /// Fire `event` when the entity is given one of `names`.
    pub fn name_action(mut self, names: &[&str], event: &str) -> Self {
        self.0.push_field(
            "name_actions",
            json!({ "name_filter": names, "on_named": { "event": event } }),
        );
        self
    }
}

impl Default for Nameable {
    fn default() -> Self {
        Self::new()
    }
}

component!(
    /// `minecraft:despawn`
    Despawn, "minecraft:despawn"
);

impl Despawn {
    pub fn new() -> Self {
        Self(Component::new(Self::IDENTIFIER))
    }

    pub fn from_distance(mut self, min_distance: u32, max_distance: u32) -> Self {
        self.0.add_field_if_ne(
            "despawn_from_distance",
            json!({ "min_distance": min_distance, "max_distance": max_distance }),
            json!({ "min_distance": 32, "max_distance": 128 }),
        );
        self
    }

    pub fn from_chance(mut self, value: bool) -> Self {
        self.0.add_field_if_ne("despawn_from_chance", value, true);
        self
    }

    pub fn from_inactivity(mut self, value: bool) -> Self {
        self.0.add_field_if_ne("despawn_from_inactivity", value, true);
        self
    }

    pub fn from_simulation_edge(mut self, value: bool) -> Self {
        self.0
            .add_field_if_ne("despawn_from_simulation_edge", value, true);
        self
    }

    pub fn min_range_inactivity_timer(mut self, seconds: u32) -> Self {
        self.0
            .add_field_if_ne("min_range_inactivity_timer", seconds, 30);
        self
    }

    pub fn min_range_random_chance(mut self, chance: u32) -> Self {
        self.0.add_field_if_ne("min_range_random_chance", chance, 800);
        self
    }

    pub fn remove_child_entities(mut self, value: bool) -> Self {
        self.0.add_flag("remove_child_entities", value);
        self
    }

    pub fn filters(mut self, filters: Filter) -> Self {
        self.0.add_field("filters", filters);
        self
    }
}

impl Default for Despawn {
    fn default() -> Self {
        Self::new()
    }
}

component!(
    /// `minecraft:tameable`
    Tameable, "minecraft:tameable"
);

impl Tameable {
    pub fn new<'a>(tame_items: impl IntoIterator<Item = &'a str>) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        let items: Vec<&str> = tame_items.into_iter().collect();
        c.add_field("tame_items", items);
        Self(c)
    }

    /// Chance per item in `0.0..=1.0`.
    pub fn probability(mut self, probability: f64) -> Self {
        let p = clamp_field("tameable.probability", probability, 0.0, 1.0);
        self.0.add_field_if_ne("probability", p, 1.0);
        self
    }

    pub fn tame_event(mut self, event: &str) -> Self {
        self.0.add_field("tame_event", event_trigger(event, None));
        self
    }
}

/// A `breeds_with` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct BreedsWith {
    pub mate_type: String,
    pub baby_type: String,
    pub breed_event: Option<String>,
}

impl BreedsWith {
    pub fn new(mate_type: &str, baby_type: &str) -> Self {
        Self {
            mate_type: mate_type.to_string(),
            baby_type: baby_type.to_string(),
            breed_event: None,
        }
    }

    pub fn event(mut self, event: &str) -> Self {
        self.breed_event = Some(event.to_string());
        self
    }
}

component!(
    /// `minecraft:breedable`
    Breedable, "minecraft:breedable"
);

impl Breedable {
    pub fn new<'a>(breed_items: impl IntoIterator<Item = &'a str>) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        let items: Vec<&str> = breed_items.into_iter().collect();
        c.add_field("breed_items", items);
        Self(c)
    }

    pub fn breeds_with(mut self, entry: BreedsWith) -> Self {
        let mut o = Component::object();
        o.add_field("mate_type", entry.mate_type)
            .add_field("baby_type", entry.baby_type);
        if let Some(event) = entry.breed_event {
            o.add_field("breed_event", event_trigger(&event, Some("baby")));
        }
        self.0.push_field("breeds_with", o);
        self
    }

    pub fn require_tame(mut self, value: bool) -> Self {
        self.0.add_field_if_ne("require_tame", value, true);
        self
    }

    pub fn require_full_health(mut self, value: bool) -> Self {
        self.0.add_flag("require_full_health", value);
        self
    }

    pub fn inherit_tamed(mut self, value: bool) -> Self {
        self.0.add_field_if_ne("inherit_tamed", value, true);
        self
    }

    pub fn causes_pregnancy(mut self, value: bool) -> Self {
        self.0.add_flag("causes_pregnancy", value);
        self
    }

    pub fn allow_sitting(mut self, value: bool) -> Self {
        self.0.add_flag("allow_sitting", value);
        self
    }

    pub fn extra_baby_chance(mut self, chance: f64) -> Self {
        let chance = clamp_field("extra_baby_chance", chance, 0.0, 1.0);
        self.0.add_field_if_ne("extra_baby_chance", chance, 0.0);
        self
    }

    pub fn love_filters(mut self, filters: Filter) -> Self {
        self.0.add_field("love_filters", filters);
        self
    }
}

component!(
    /// `minecraft:ageable`
    Ageable, "minecraft:ageable"
);

impl Ageable {
    /// `duration` in seconds until the baby grows up.
    pub fn new(duration: f64, grow_up_event: &str) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field_if_ne("duration", duration, 1200.0)
            .add_field("grow_up", event_trigger(grow_up_event, Some("self")));
        Self(c)
    }

    pub fn feed_item(mut self, item: &str, growth: f64) -> Self {
        self.0
            .push_field("feed_items", json!({ "item": item, "growth": growth }));
        self
    }

    pub fn drop_item(mut self, item: &str) -> Self {
        self.0.push_field("drop_items", item);
        self
    }
}

/// A seat of a [`Rideable`] entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Seat {
    pub position: [f64; 3],
    pub min_rider_count: u32,
    pub max_rider_count: u32,
    pub rotate_rider_by: Option<f64>,
    pub lock_rider_rotation: Option<f64>,
}

impl Seat {
    pub fn at(position: [f64; 3]) -> Self {
        Self {
            position,
            min_rider_count: 0,
            max_rider_count: 0,
            rotate_rider_by: None,
            lock_rider_rotation: None,
        }
    }

    fn to_component(&self) -> Component {
        let mut o = Component::object();
        o.add_field("position", json!(self.position))
            .add_field_if_ne("min_rider_count", self.min_rider_count, 0)
            .add_field_if_ne("max_rider_count", self.max_rider_count, 0)
            .add_optional("rotate_rider_by", self.rotate_rider_by)
            .add_optional("lock_rider_rotation", self.lock_rider_rotation);
        o
    }
}

component!(
    /// `minecraft:rideable`
    Rideable, "minecraft:rideable"
);

impl Rideable {
    pub fn new(seats: &[Seat]) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field_if_ne("seat_count", seats.len() as u64, 1);
        let seats: Vec<serde_json::Value> = seats.iter().map(|s| s.to_component().into()).collect();
        c.add_field("seats", seats);
        Self(c)
    }

    pub fn family_types<'a>(mut self, families: impl IntoIterator<Item = &'a str>) -> Self {
        let families: Vec<&str> = families.into_iter().collect();
        self.0.add_field("family_types", families);
        self
    }

    pub fn controlling_seat(mut self, seat: u32) -> Self {
        self.0.add_field_if_ne("controlling_seat", seat, 0);
        self
    }

    pub fn crouching_skip_interact(mut self, value: bool) -> Self {
        self.0.add_field_if_ne("crouching_skip_interact", value, true);
        self
    }

    pub fn interact_text(mut self, text: &str) -> Self {
        self.0.add_field("interact_text", text);
        self
    }

    pub fn pull_in_entities(mut self, value: bool) -> Self {
        self.0.add_flag("pull_in_entities", value);
        self
    }

    pub fn rider_can_interact(mut self, value: bool) -> Self {
        self.0.add_flag("rider_can_interact", value);
        self
    }
}

component!(
    /// `minecraft:leashable`
    Leashable, "minecraft:leashable"
);

impl Leashable {
    pub fn new() -> Self {
        Self(Component::new(Self::IDENTIFIER))
    }

    /// Distances in blocks; `soft <= hard <= max` is enforced by swapping.
    pub fn distances(mut self, soft: f64, hard: f64, max: f64) -> Self {
        let mut d = [soft, hard, max];
        d.sort_by(|a, b| a.total_cmp(b));
        self.0
            .add_field_if_ne("soft_distance", d[0], 4.0)
            .add_field_if_ne("hard_distance", d[1], 6.0)
            .add_field_if_ne("max_distance", d[2], 10.0);
        self
    }

    pub fn can_be_stolen(mut self, value: bool) -> Self {
        self.0.add_flag("can_be_stolen", value);
        self
    }

    pub fn on_leash(mut self, event: &str) -> Self {
        self.0.add_field("on_leash", event_trigger(event, Some("self")));
        self
    }

    pub fn on_unleash(mut self, event: &str) -> Self {
        self.0.add_field("on_unleash", event_trigger(event, Some("self")));
        self
    }
}

impl Default for Leashable {
    fn default() -> Self {
        Self::new()
    }
}

component!(
    /// `minecraft:balloonable`
    Balloonable, "minecraft:balloonable"
);

impl Balloonable {
    pub fn new() -> Self {
        Self(Component::new(Self::IDENTIFIER))
    }

    pub fn soft_distance(mut self, distance: f64) -> Self {
        self.0.add_field_if_ne("soft_distance", distance, 2.0);
        self
    }

    pub fn max_distance(mut self, distance: f64) -> Self {
        self.0.add_field_if_ne("max_distance", distance, 10.0);
        self
    }

    pub fn mass(mut self, mass: f64) -> Self {
        self.0.add_field_if_ne("mass", mass, 1.0);
        self
    }
}

impl Default for Balloonable {
    fn default() -> Self {
        Self::new()
    }
}

component!(
    /// `minecraft:projectile`
    Projectile, "minecraft:projectile"
);

impl Projectile {
    pub fn new() -> Self {
        Self(Component::new(Self::IDENTIFIER))
    }

    pub fn power(mut self, power: f64) -> Self {
        self.0.add_field_if_ne("power", power, 1.3);
        self
    }

    pub fn gravity(mut self, gravity: f64) -> Self {
        self.0.add_field_if_ne("gravity", gravity, 0.05);
        self
    }

    pub fn inertia(mut self, inertia: f64) -> Self {
        self.0.add_field_if_ne("inertia", inertia, 0.99);
        self
    }

    pub fn liquid_inertia(mut self, inertia: f64) -> Self {
        self.0.add_field_if_ne("liquid_inertia", inertia, 0.6);
        self
    }

    pub fn uncertainty(mut self, base: f64, multiplier: f64) -> Self {
        self.0
            .add_field_if_ne("uncertainty_base", base, 0.0)
            .add_field_if_ne("uncertainty_multiplier", multiplier, 0.0);
        self
    }

    pub fn anchor(mut self, anchor: u32) -> Self {
        self.0.add_field_if_ne("anchor", anchor, 0);
        self
    }

    pub fn offset(mut self, offset: [f64; 3]) -> Self {
        self.0.add_field_if_ne("offset", json!(offset), json!([0.0, 0.0, 0.0]));
        self
    }

    pub fn catch_fire(mut self, value: bool) -> Self {
        self.0.add_flag("catch_fire", value);
        self
    }

    pub fn should_bounce(mut self, value: bool) -> Self {
        self.0.add_flag("should_bounce", value);
        self
    }

    pub fn hit_sound(mut self, sound: &str) -> Self {
        self.0.add_field("hit_sound", sound);
        self
    }

    /// Damage dealt on impact, optionally with knockback, then removed.
    pub fn impact_damage(mut self, damage: Range<u32>, knockback: bool) -> Self {
        let mut impact = Component::object();
        if damage.min == damage.max {
            impact.add_field("damage", damage.min);
        } else {
            impact.add_field("damage", damage.as_pair());
        }
        impact.add_field_if_ne("knockback", knockback, true);
        self.0.add_field(
            "on_hit",
            json!({ "impact_damage": impact, "remove_on_hit": {} }),
        );
        self
    }
}

impl Default for Projectile {
    fn default() -> Self {
        Self::new()
    }
}

component!(
    /// `minecraft:shooter`
    Shooter, "minecraft:shooter"
);

impl Shooter {
    /// `def` is the projectile entity identifier.
    pub fn new(def: &str) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field("def", def);
        Self(c)
    }

    pub fn aux_val(mut self, value: i32) -> Self {
        self.0.add_field_if_ne("aux_val", value, -1);
        self
    }

    pub fn power(mut self, power: f64) -> Self {
        self.0.add_field_if_ne("power", power, 0.0);
        self
    }

    pub fn magic(mut self, value: bool) -> Self {
        self.0.add_flag("magic", value);
        self
    }
}

/// Difficulty names used by difficulty-gated components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Peaceful,
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Peaceful => "peaceful",
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }
}

component!(
    /// `minecraft:annotation.break_door`
    BreakDoorAnnotation, "minecraft:annotation.break_door"
);

impl BreakDoorAnnotation {
    pub fn new() -> Self {
        Self(Component::new(Self::IDENTIFIER))
    }

    pub fn break_time(mut self, seconds: f64) -> Self {
        self.0.add_field_if_ne("break_time", seconds, 12.0);
        self
    }

    pub fn min_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.0
            .add_field_if_ne("min_difficulty", difficulty.as_str(), "hard");
        self
    }
}

impl Default for BreakDoorAnnotation {
    fn default() -> Self {
        Self::new()
    }
}
