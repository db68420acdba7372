//! Idle, wandering, looking and following goals.

use mc_addon_core::{json, Filter};

use super::{goal, speed_multiplier};
use crate::event_trigger;
use crate::entity::DamageCause;

goal!(
    /// `minecraft:behavior.float`
    Float, "minecraft:behavior.float"
);

impl Float {
    pub fn sink_with_passengers(mut self, value: bool) -> Self {
        self.0.add_flag("sink_with_passengers", value);
        self
    }
}

goal!(
    /// `minecraft:behavior.panic`
    Panic, "minecraft:behavior.panic"
);

impl Panic {
    pub fn force(mut self, value: bool) -> Self {
        self.0.add_flag("force", value);
        self
    }

    pub fn ignore_mob_damage(mut self, value: bool) -> Self {
        self.0.add_flag("ignore_mob_damage", value);
        self
    }

    pub fn prefer_water(mut self, value: bool) -> Self {
        self.0.add_flag("prefer_water", value);
        self
    }

    /// Restrict panicking to these damage causes; the default is all.
    pub fn damage_sources(mut self, causes: &[DamageCause]) -> Self {
        let causes: Vec<&str> = causes.iter().map(|c| c.as_str()).collect();
        self.0.add_field_if_ne("damage_sources", json!(causes), json!(["all"]));
        self
    }

    pub fn panic_sound(mut self, sound: &str) -> Self {
        self.0.add_field("panic_sound", sound);
        self
    }
}

goal!(
    /// `minecraft:behavior.random_stroll`
    RandomStroll, "minecraft:behavior.random_stroll"
);

impl RandomStroll {
    /// 1 in `interval` chance per tick to start strolling.
    pub fn interval(mut self, ticks: u32) -> Self {
        self.0.add_field_if_ne("interval", ticks, 120);
        self
    }

    pub fn xz_dist(mut self, blocks: u32) -> Self {
        self.0.add_field_if_ne("xz_dist", blocks, 10);
        self
    }

    pub fn y_dist(mut self, blocks: u32) -> Self {
        self.0.add_field_if_ne("y_dist", blocks, 7);
        self
    }
}

goal!(
    /// `minecraft:behavior.random_swim`
    RandomSwim, "minecraft:behavior.random_swim"
);

impl RandomSwim {
    pub fn interval(mut self, ticks: u32) -> Self {
        self.0.add_field_if_ne("interval", ticks, 120);
        self
    }

    pub fn xz_dist(mut self, blocks: u32) -> Self {
        self.0.add_field_if_ne("xz_dist", blocks, 10);
        self
    }

    pub fn y_dist(mut self, blocks: u32) -> Self {
        self.0.add_field_if_ne("y_dist", blocks, 7);
        self
    }

    pub fn avoid_surface(mut self, value: bool) -> Self {
        self.0.add_field_if_ne("avoid_surface", value, true);
        self
    }
}

goal!(
    /// `minecraft:behavior.random_fly`
    RandomFly, "minecraft:behavior.random_fly"
);

impl RandomFly {
    pub fn xz_dist(mut self, blocks: u32) -> Self {
        self.0.add_field_if_ne("xz_dist", blocks, 10);
        self
    }

    pub fn y_dist(mut self, blocks: u32) -> Self {
        self.0.add_field_if_ne("y_dist", blocks, 7);
        self
    }

    pub fn y_offset(mut self, offset: f64) -> Self {
        self.0.add_field_if_ne("y_offset", offset, 0.0);
        self
    }

    pub fn can_land_on_trees(mut self, value: bool) -> Self {
        self.0.add_field_if_ne("can_land_on_trees", value, true);
        self
    }
}

goal!(
    /// `minecraft:behavior.move_to_water`
    MoveToWater, "minecraft:behavior.move_to_water"
);

impl MoveToWater {
    pub fn search_range(mut self, blocks: u32) -> Self {
        self.0.add_field_if_ne("search_range", blocks, 0);
        self
    }

    pub fn search_height(mut self, blocks: u32) -> Self {
        self.0.add_field_if_ne("search_height", blocks, 0);
        self
    }

    pub fn search_count(mut self, count: u32) -> Self {
        self.0.add_field_if_ne("search_count", count, 10);
        self
    }

    pub fn goal_radius(mut self, radius: f64) -> Self {
        self.0.add_field_if_ne("goal_radius", radius, 0.5);
        self
    }
}

goal!(
    /// `minecraft:behavior.flee_sun`
    FleeSun, "minecraft:behavior.flee_sun"
);

goal!(
    /// `minecraft:behavior.restrict_sun`
    RestrictSun, "minecraft:behavior.restrict_sun"
);

goal!(
    /// `minecraft:behavior.open_door`
    OpenDoor, "minecraft:behavior.open_door"
);

impl OpenDoor {
    pub fn close_door_after(mut self, value: bool) -> Self {
        self.0.add_field_if_ne("close_door_after", value, true);
        self
    }
}

goal!(
    /// `minecraft:behavior.follow_parent`
    FollowParent, "minecraft:behavior.follow_parent"
);

goal!(
    /// `minecraft:behavior.breed`
    Breed, "minecraft:behavior.breed"
);

goal!(
    /// `minecraft:behavior.follow_owner`
    FollowOwner, "minecraft:behavior.follow_owner"
);

impl FollowOwner {
    /// Start following beyond `start`, stop within `stop` blocks.
    pub fn distances(mut self, start: f64, stop: f64) -> Self {
        self.0
            .add_field_if_ne("start_distance", start, 10.0)
            .add_field_if_ne("stop_distance", stop, 2.0);
        self
    }

    pub fn can_teleport(mut self, value: bool) -> Self {
        self.0.add_field_if_ne("can_teleport", value, true);
        self
    }

    pub fn max_distance(mut self, blocks: f64) -> Self {
        self.0.add_field_if_ne("max_distance", blocks, 60.0);
        self
    }
}

goal!(
    /// `minecraft:behavior.move_towards_target`
    MoveTowardsTarget, "minecraft:behavior.move_towards_target"
);

impl MoveTowardsTarget {
    pub fn within_radius(mut self, blocks: f64) -> Self {
        self.0.add_field_if_ne("within_radius", blocks, 0.0);
        self
    }
}

goal!(
    /// `minecraft:behavior.tempt`
    Tempt, "minecraft:behavior.tempt"
);

impl Tempt {
    pub fn items<'a>(mut self, items: impl IntoIterator<Item = &'a str>) -> Self {
        let items: Vec<&str> = items.into_iter().collect();
        self.0.add_field("items", items);
        self
    }

    pub fn can_get_scared(mut self, value: bool) -> Self {
        self.0.add_flag("can_get_scared", value);
        self
    }

    pub fn can_tempt_vertically(mut self, value: bool) -> Self {
        self.0.add_flag("can_tempt_vertically", value);
        self
    }

    pub fn can_tempt_while_ridden(mut self, value: bool) -> Self {
        self.0.add_flag("can_tempt_while_ridden", value);
        self
    }

    pub fn within_radius(mut self, blocks: f64) -> Self {
        self.0.add_field_if_ne("within_radius", blocks, 0.0);
        self
    }

    pub fn tempt_sound(mut self, sound: &str, interval: (f64, f64)) -> Self {
        self.0
            .add_field("tempt_sound", sound)
            .add_field("sound_interval", json!([interval.0, interval.1]));
        self
    }
}

goal!(
    /// `minecraft:behavior.eat_block`
    EatBlock, "minecraft:behavior.eat_block"
);

impl EatBlock {
    /// `success_chance` is a Molang expression, e.g. `"query.is_baby ? 0.02 : 0.001"`.
    pub fn success_chance(mut self, expr: &str) -> Self {
        self.0.add_field_if_ne("success_chance", expr, "0.02");
        self
    }

    pub fn time_until_eat(mut self, seconds: f64) -> Self {
        self.0.add_field_if_ne("time_until_eat", seconds, 1.8);
        self
    }

    pub fn on_eat(mut self, event: &str) -> Self {
        self.0.add_field("on_eat", event_trigger(event, Some("self")));
        self
    }

    pub fn eat_and_replace(mut self, eat_block: &str, replace_block: &str) -> Self {
        self.0.push_field(
            "eat_and_replace_block_pairs",
            json!({ "eat_block": eat_block, "replace_block": replace_block }),
        );
        self
    }
}

goal!(
    /// `minecraft:behavior.random_look_around`
    RandomLookAround, "minecraft:behavior.random_look_around"
);

goal!(
    /// `minecraft:behavior.look_at_player`
    LookAtPlayer, "minecraft:behavior.look_at_player"
);

goal!(
    /// `minecraft:behavior.look_at_entity`
    LookAtEntity, "minecraft:behavior.look_at_entity"
);

macro_rules! look_setters {
    ($($name:ident),*) => {
        $(
            impl $name {
                /// Seconds to keep looking, `[min, max]`.
                pub fn look_time(mut self, min: f64, max: f64) -> Self {
                    self.0.add_field_if_ne("look_time", json!([min, max]), json!([2.0, 4.0]));
                    self
                }

                pub fn probability(mut self, chance: f64) -> Self {
                    self.0.add_field_if_ne("probability", chance, 0.02);
                    self
                }

                pub fn angle_of_view_horizontal(mut self, degrees: u32) -> Self {
                    self.0.add_field_if_ne("angle_of_view_horizontal", degrees, 360);
                    self
                }

                pub fn angle_of_view_vertical(mut self, degrees: u32) -> Self {
                    self.0.add_field_if_ne("angle_of_view_vertical", degrees, 360);
                    self
                }
            }
        )*
    };
}

look_setters!(RandomLookAround, LookAtPlayer, LookAtEntity);

impl LookAtPlayer {
    pub fn look_distance(mut self, blocks: f64) -> Self {
        self.0.add_field_if_ne("look_distance", blocks, 8.0);
        self
    }
}

impl LookAtEntity {
    pub fn look_distance(mut self, blocks: f64) -> Self {
        self.0.add_field_if_ne("look_distance", blocks, 8.0);
        self
    }

    pub fn filters(mut self, filters: Filter) -> Self {
        self.0.add_field("filters", filters);
        self
    }
}

speed_multiplier!(
    Panic,
    RandomStroll,
    RandomSwim,
    RandomFly,
    MoveToWater,
    FleeSun,
    FollowParent,
    Breed,
    FollowOwner,
    MoveTowardsTarget,
    Tempt,
);

#[cfg(test)]
mod tests {
    use super::*;
    use mc_addon_core::AsComponent;

    #[test]
    fn random_stroll_defaults() {
        let g = RandomStroll::new(6).speed_multiplier(1.0).interval(120);
        assert_eq!(g.component().body(), json!({ "priority": 6 }));
        let g = RandomStroll::new(6).speed_multiplier(0.8).xz_dist(16);
        assert_eq!(
            g.component().body(),
            json!({ "priority": 6, "speed_multiplier": 0.8, "xz_dist": 16 })
        );
    }

    #[test]
    fn panic_sources() {
        let all = Panic::new(1).damage_sources(&[DamageCause::All]);
        assert_eq!(all.component().body(), json!({ "priority": 1 }));
        let fire = Panic::new(1).damage_sources(&[DamageCause::Fire, DamageCause::Lava]);
        assert_eq!(
            fire.component().get_field("damage_sources"),
            Some(&json!(["fire", "lava"]))
        );
    }

    #[test]
    fn look_at_player_fields() {
        let g = LookAtPlayer::new(7).look_distance(6.0).probability(0.02).look_time(2.0, 4.0);
        assert_eq!(g.component().body(), json!({ "priority": 7, "look_distance": 6.0 }));
    }

    #[test]
    fn tempt_items() {
        let g = Tempt::new(4)
            .speed_multiplier(1.2)
            .items(["minecraft:wheat", "minecraft:carrot"])
            .can_tempt_vertically(true);
        assert_eq!(
            g.component().body(),
            json!({
                "priority": 4,
                "speed_multiplier": 1.2,
                "items": ["minecraft:wheat", "minecraft:carrot"],
                "can_tempt_vertically": true
            })
        );
    }

    #[test]
    fn eat_block_pairs() {
        let g = EatBlock::new(6)
            .on_eat("minecraft:on_eat_block")
            .eat_and_replace("minecraft:grass_block", "minecraft:dirt");
        let body = g.component().body();
        assert_eq!(body["on_eat"], json!({ "event": "minecraft:on_eat_block", "target": "self" }));
        assert_eq!(
            body["eat_and_replace_block_pairs"],
            json!([{ "eat_block": "minecraft:grass_block", "replace_block": "minecraft:dirt" }])
        );
    }

    #[test]
    fn follow_owner_distances() {
        let g = FollowOwner::new(6).distances(10.0, 2.0).can_teleport(false);
        assert_eq!(g.component().body(), json!({ "priority": 6, "can_teleport": false }));
    }

    #[test]
    fn list_fields_reset_to_default() {
        let g = LookAtPlayer::new(7).look_time(1.0, 3.0).look_time(2.0, 4.0);
        assert_eq!(g.component().body(), json!({ "priority": 7 }));
        let g = LookAtPlayer::new(7).look_time(1.0, 3.0).look_time(5.0, 6.0);
        assert_eq!(g.component().body(), json!({ "priority": 7, "look_time": [5.0, 6.0] }));

        let p = Panic::new(1)
            .damage_sources(&[DamageCause::Fire])
            .damage_sources(&[DamageCause::All]);
        assert_eq!(p.component().body(), json!({ "priority": 1 }));
    }
}
