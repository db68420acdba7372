//! Targeting, attacking and avoidance goals.

use mc_addon_core::value::clamp_field;
use mc_addon_core::{Component, Filter, Subject, Value};

use super::{goal, speed_multiplier};
use crate::event_trigger;

/// One `entity_types` entry: which entities a targeting or avoidance goal
/// reacts to.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityTypeFilter(Component);

impl EntityTypeFilter {
    pub fn new(filters: Filter) -> Self {
        let mut c = Component::object();
        c.add_field("filters", filters);
        Self(c)
    }

    /// Shorthand for `is_family` on the other entity.
    pub fn family(family: &str) -> Self {
        Self::new(Filter::is_family(family).subject(Subject::Other))
    }

    pub fn max_dist(mut self, blocks: f64) -> Self {
        self.0.add_field_if_ne("max_dist", blocks, 16.0);
        self
    }

    pub fn must_see(mut self, value: bool) -> Self {
        self.0.add_flag("must_see", value);
        self
    }

    pub fn must_see_forget_duration(mut self, seconds: f64) -> Self {
        self.0
            .add_field_if_ne("must_see_forget_duration", seconds, 3.0);
        self
    }

    pub fn reevaluate_description(mut self, value: bool) -> Self {
        self.0.add_flag("reevaluate_description", value);
        self
    }

    pub fn walk_speed_multiplier(mut self, value: f64) -> Self {
        self.0.add_field_if_ne("walk_speed_multiplier", value, 1.0);
        self
    }

    pub fn sprint_speed_multiplier(mut self, value: f64) -> Self {
        self.0.add_field_if_ne("sprint_speed_multiplier", value, 1.0);
        self
    }

    pub fn max_flee(mut self, blocks: f64) -> Self {
        self.0.add_field_if_ne("max_flee", blocks, 10.0);
        self
    }
}

impl From<EntityTypeFilter> for Value {
    fn from(f: EntityTypeFilter) -> Self {
        f.0.into()
    }
}

macro_rules! entity_types {
    ($($name:ident),*) => {
        $(
            impl $name {
                pub fn entity_type(mut self, entry: EntityTypeFilter) -> Self {
                    self.0.push_field("entity_types", entry);
                    self
                }
            }
        )*
    };
}

goal!(
    /// `minecraft:behavior.melee_attack`
    MeleeAttack, "minecraft:behavior.melee_attack"
);

goal!(
    /// `minecraft:behavior.delayed_attack`
    DelayedAttack, "minecraft:behavior.delayed_attack"
);

goal!(
    /// `minecraft:behavior.stomp_attack`
    StompAttack, "minecraft:behavior.stomp_attack"
);

macro_rules! melee_setters {
    ($($name:ident),*) => {
        $(
            impl $name {
                pub fn track_target(mut self, value: bool) -> Self {
                    self.0.add_flag("track_target", value);
                    self
                }

                pub fn require_complete_path(mut self, value: bool) -> Self {
                    self.0.add_flag("require_complete_path", value);
                    self
                }

                pub fn reach_multiplier(mut self, value: f64) -> Self {
                    self.0.add_field_if_ne("reach_multiplier", value, 2.0);
                    self
                }

                /// Seconds between attacks.
                pub fn cooldown_time(mut self, seconds: f64) -> Self {
                    self.0.add_field_if_ne("cooldown_time", seconds, 1.0);
                    self
                }

                pub fn attack_once(mut self, value: bool) -> Self {
                    self.0.add_flag("attack_once", value);
                    self
                }

                pub fn random_stop_interval(mut self, ticks: u32) -> Self {
                    self.0.add_field_if_ne("random_stop_interval", ticks, 0);
                    self
                }

                pub fn on_attack(mut self, event: &str) -> Self {
                    self.0.add_field("on_attack", event_trigger(event, Some("self")));
                    self
                }
            }
        )*
    };
}

melee_setters!(MeleeAttack, DelayedAttack, StompAttack);

impl DelayedAttack {
    pub fn attack_duration(mut self, seconds: f64) -> Self {
        self.0.add_field_if_ne("attack_duration", seconds, 0.75);
        self
    }

    /// Fraction of the attack animation after which the hit lands.
    pub fn hit_delay_pct(mut self, pct: f64) -> Self {
        let pct = clamp_field("hit_delay_pct", pct, 0.0, 1.0);
        self.0.add_field_if_ne("hit_delay_pct", pct, 0.5);
        self
    }
}

impl StompAttack {
    pub fn stomp_range_multiplier(mut self, value: f64) -> Self {
        self.0.add_field_if_ne("stomp_range_multiplier", value, 2.0);
        self
    }

    pub fn no_damage_range_multiplier(mut self, value: f64) -> Self {
        self.0
            .add_field_if_ne("no_damage_range_multiplier", value, 2.0);
        self
    }
}

goal!(
    /// `minecraft:behavior.ranged_attack`
    RangedAttack, "minecraft:behavior.ranged_attack"
);

impl RangedAttack {
    /// Seconds between shots, picked from `[min, max]`.
    pub fn attack_interval(mut self, min: f64, max: f64) -> Self {
        self.0
            .add_field_if_ne("attack_interval_min", min, 0.0)
            .add_field_if_ne("attack_interval_max", max, 0.0);
        self
    }

    pub fn attack_radius(mut self, blocks: f64) -> Self {
        self.0.add_field_if_ne("attack_radius", blocks, 0.0);
        self
    }

    pub fn burst(mut self, shots: u32, interval: f64) -> Self {
        self.0
            .add_field_if_ne("burst_shots", shots, 1)
            .add_field_if_ne("burst_interval", interval, 0.0);
        self
    }

    pub fn charge(mut self, charged_trigger: f64, shoot_trigger: f64) -> Self {
        self.0
            .add_field_if_ne("charge_charged_trigger", charged_trigger, 0.0)
            .add_field_if_ne("charge_shoot_trigger", shoot_trigger, 0.0);
        self
    }

    pub fn swing(mut self, value: bool) -> Self {
        self.0.add_flag("swing", value);
        self
    }

    pub fn ranged_fov(mut self, degrees: f64) -> Self {
        self.0.add_field_if_ne("ranged_fov", degrees, 90.0);
        self
    }
}

goal!(
    /// `minecraft:behavior.leap_at_target`
    LeapAtTarget, "minecraft:behavior.leap_at_target"
);

impl LeapAtTarget {
    pub fn must_be_on_ground(mut self, value: bool) -> Self {
        self.0.add_field_if_ne("must_be_on_ground", value, true);
        self
    }

    pub fn set_persistent(mut self, value: bool) -> Self {
        self.0.add_flag("set_persistent", value);
        self
    }

    /// Vertical leap velocity.
    pub fn yd(mut self, value: f64) -> Self {
        self.0.add_field_if_ne("yd", value, 0.0);
        self
    }
}

goal!(
    /// `minecraft:behavior.nearest_attackable_target`
    NearestAttackableTarget, "minecraft:behavior.nearest_attackable_target"
);

impl NearestAttackableTarget {
    pub fn must_see(mut self, value: bool) -> Self {
        self.0.add_flag("must_see", value);
        self
    }

    pub fn must_reach(mut self, value: bool) -> Self {
        self.0.add_flag("must_reach", value);
        self
    }

    pub fn reselect_targets(mut self, value: bool) -> Self {
        self.0.add_flag("reselect_targets", value);
        self
    }

    pub fn scan_interval(mut self, ticks: u32) -> Self {
        self.0.add_field_if_ne("scan_interval", ticks, 10);
        self
    }

    pub fn within_radius(mut self, blocks: f64) -> Self {
        self.0.add_field_if_ne("within_radius", blocks, 0.0);
        self
    }

    pub fn persist_time(mut self, seconds: f64) -> Self {
        self.0.add_field_if_ne("persist_time", seconds, 0.0);
        self
    }

    pub fn attack_interval(mut self, ticks: u32) -> Self {
        self.0.add_field_if_ne("attack_interval", ticks, 0);
        self
    }
}

goal!(
    /// `minecraft:behavior.hurt_by_target`
    HurtByTarget, "minecraft:behavior.hurt_by_target"
);

impl HurtByTarget {
    pub fn alert_same_type(mut self, value: bool) -> Self {
        self.0.add_flag("alert_same_type", value);
        self
    }

    pub fn hurt_owner(mut self, value: bool) -> Self {
        self.0.add_flag("hurt_owner", value);
        self
    }
}

goal!(
    /// `minecraft:behavior.owner_hurt_by_target`
    OwnerHurtByTarget, "minecraft:behavior.owner_hurt_by_target"
);

goal!(
    /// `minecraft:behavior.owner_hurt_target`
    OwnerHurtTarget, "minecraft:behavior.owner_hurt_target"
);

goal!(
    /// `minecraft:behavior.avoid_mob_type`
    AvoidMobType, "minecraft:behavior.avoid_mob_type"
);

impl AvoidMobType {
    pub fn probability_per_strength(mut self, value: f64) -> Self {
        self.0
            .add_field_if_ne("probability_per_strength", value, 1.0);
        self
    }

    pub fn remove_target(mut self, value: bool) -> Self {
        self.0.add_flag("remove_target", value);
        self
    }

    pub fn ignore_visibility(mut self, value: bool) -> Self {
        self.0.add_flag("ignore_visibility", value);
        self
    }

    pub fn check_if_outnumbered(mut self, value: bool) -> Self {
        self.0.add_flag("check_if_outnumbered", value);
        self
    }

    pub fn cooldown(mut self, seconds: f64) -> Self {
        self.0.add_field_if_ne("cooldown", seconds, 0.0);
        self
    }

    pub fn avoid_mob_sound(mut self, sound: &str) -> Self {
        self.0.add_field("avoid_mob_sound", sound);
        self
    }
}

entity_types!(
    NearestAttackableTarget,
    HurtByTarget,
    OwnerHurtByTarget,
    OwnerHurtTarget,
    AvoidMobType
);

speed_multiplier!(MeleeAttack, DelayedAttack, StompAttack, RangedAttack);

/// A step of a [`SendEvent`] choice.
#[derive(Debug, Clone, PartialEq)]
pub struct EventStep {
    pub base_delay: f64,
    pub event: String,
    pub sound_event: Option<String>,
}

/// One weighted choice of [`SendEvent`].
#[derive(Debug, Clone, PartialEq)]
pub struct EventChoice(Component);

impl EventChoice {
    pub fn new(weight: u32) -> Self {
        let mut c = Component::object();
        c.add_field_if_ne("weight", weight, 1);
        Self(c)
    }

    pub fn activation_range(mut self, min: f64, max: f64) -> Self {
        self.0
            .add_field_if_ne("min_activation_range", min, 0.0)
            .add_field_if_ne("max_activation_range", max, 16.0);
        self
    }

    pub fn cooldown_time(mut self, seconds: f64) -> Self {
        self.0.add_field_if_ne("cooldown_time", seconds, 0.0);
        self
    }

    pub fn cast_duration(mut self, seconds: f64) -> Self {
        self.0.add_field("cast_duration", seconds);
        self
    }

    pub fn filters(mut self, filters: Filter) -> Self {
        self.0.add_field("filters", filters);
        self
    }

    pub fn step(mut self, step: EventStep) -> Self {
        let mut s = Component::object();
        s.add_field_if_ne("base_delay", step.base_delay, 0.0)
            .add_field("event", step.event)
            .add_optional("sound_event", step.sound_event);
        self.0.push_field("sequence", s);
        self
    }
}

goal!(
    /// `minecraft:behavior.send_event`
    SendEvent, "minecraft:behavior.send_event"
);

impl SendEvent {
    pub fn choice(mut self, choice: EventChoice) -> Self {
        self.0.push_field("event_choices", choice.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mc_addon_core::{json, AsComponent};

    #[test]
    fn nearest_attackable_target_players() {
        let g = NearestAttackableTarget::new(2)
            .must_see(true)
            .entity_type(EntityTypeFilter::family("player").max_dist(24.0));
        assert_eq!(
            g.component().body(),
            json!({
                "priority": 2,
                "must_see": true,
                "entity_types": [{
                    "filters": { "test": "is_family", "subject": "other", "value": "player" },
                    "max_dist": 24.0
                }]
            })
        );
    }

    #[test]
    fn melee_defaults_omitted() {
        let g = MeleeAttack::new(3)
            .speed_multiplier(1.25)
            .track_target(true)
            .reach_multiplier(2.0)
            .cooldown_time(1.0);
        assert_eq!(
            g.component().body(),
            json!({ "priority": 3, "speed_multiplier": 1.25, "track_target": true })
        );
    }

    #[test]
    fn delayed_attack_clamps_hit_delay() {
        let g = DelayedAttack::new(2).hit_delay_pct(1.4);
        assert_eq!(g.component().get_field("hit_delay_pct"), Some(&json!(1.0)));
    }

    #[test]
    fn ranged_attack_burst() {
        let g = RangedAttack::new(2).attack_interval(1.0, 3.0).burst(1, 0.0).attack_radius(15.0);
        assert_eq!(
            g.component().body(),
            json!({
                "priority": 2,
                "attack_interval_min": 1.0,
                "attack_interval_max": 3.0,
                "attack_radius": 15.0
            })
        );
    }

    #[test]
    fn avoid_mob_type_entries() {
        let g = AvoidMobType::new(3).entity_type(
            EntityTypeFilter::new(Filter::is_family("wolf").subject(Subject::Other))
                .max_dist(6.0)
                .walk_speed_multiplier(1.0)
                .sprint_speed_multiplier(1.2),
        );
        assert_eq!(
            g.component().body()["entity_types"][0],
            json!({
                "filters": { "test": "is_family", "subject": "other", "value": "wolf" },
                "max_dist": 6.0,
                "sprint_speed_multiplier": 1.2
            })
        );
    }

    #[test]
    fn send_event_sequence() {
        let g = SendEvent::new(3).choice(
            EventChoice::new(1)
                .activation_range(0.0, 16.0)
                .cast_duration(3.0)
                .step(EventStep {
                    base_delay: 0.0,
                    event: "custom:summon".into(),
                    sound_event: Some("prepare.summon".into()),
                }),
        );
        assert_eq!(
            g.component().body(),
            json!({
                "priority": 3,
                "event_choices": [{
                    "cast_duration": 3.0,
                    "sequence": [{ "event": "custom:summon", "sound_event": "prepare.summon" }]
                }]
            })
        );
    }
}
