//! Movement controllers and navigation.

use mc_addon_core::{json, AsComponent, Component};

/// Which `minecraft:movement.*` controller an entity uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKind {
    Basic,
    Amphibious,
    Fly,
    Generic,
    Hover,
    Jump,
    Skip,
    Swim,
    Sway,
}

impl MovementKind {
    fn identifier(self) -> &'static str {
        match self {
            MovementKind::Basic => "minecraft:movement.basic",
            MovementKind::Amphibious => "minecraft:movement.amphibious",
            MovementKind::Fly => "minecraft:movement.fly",
            MovementKind::Generic => "minecraft:movement.generic",
            MovementKind::Hover => "minecraft:movement.hover",
            MovementKind::Jump => "minecraft:movement.jump",
            MovementKind::Skip => "minecraft:movement.skip",
            MovementKind::Swim => "minecraft:movement.swim",
            MovementKind::Sway => "minecraft:movement.sway",
        }
    }
}

/// `minecraft:movement.<kind>`
#[derive(Debug, Clone, PartialEq)]
pub struct MovementType(Component);

impl MovementType {
    pub fn new(kind: MovementKind) -> Self {
        Self(Component::new(kind.identifier()))
    }

    /// Maximum degrees the entity can turn per tick.
    pub fn max_turn(mut self, degrees: f64) -> Self {
        self.0.add_field_if_ne("max_turn", degrees, 30.0);
        self
    }

    /// Only meaningful for [`MovementKind::Sway`].
    pub fn sway_amplitude(mut self, amplitude: f64) -> Self {
        self.0.add_field_if_ne("sway_amplitude", amplitude, 0.05);
        self
    }

    /// Only meaningful for [`MovementKind::Jump`]; `[min, max]` seconds.
    pub fn jump_delay(mut self, min: f64, max: f64) -> Self {
        self.0.add_field_if_ne("jump_delay", json!([min, max]), json!([0.0, 0.0]));
        self
    }
}

impl AsComponent for MovementType {
    fn component(&self) -> &Component {
        &self.0
    }
}

impl From<MovementType> for Component {
    fn from(m: MovementType) -> Self {
        m.0
    }
}

/// Which `minecraft:navigation.*` planner an entity uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    Walk,
    Climb,
    Float,
    Fly,
    Generic,
    Hover,
    Swim,
}

impl NavigationKind {
    fn identifier(self) -> &'static str {
        match self {
            NavigationKind::Walk => "minecraft:navigation.walk",
            NavigationKind::Climb => "minecraft:navigation.climb",
            NavigationKind::Float => "minecraft:navigation.float",
            NavigationKind::Fly => "minecraft:navigation.fly",
            NavigationKind::Generic => "minecraft:navigation.generic",
            NavigationKind::Hover => "minecraft:navigation.hover",
            NavigationKind::Swim => "minecraft:navigation.swim",
        }
    }
}

/// `minecraft:navigation.<kind>`
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation(Component);

macro_rules! nav_flags {
    ($($method:ident => $key:literal, $default:literal;)*) => {
        $(
            pub fn $method(mut self, value: bool) -> Self {
                self.0.add_field_if_ne($key, value, $default);
                self
            }
        )*
    };
}

impl Navigation {
    pub fn new(kind: NavigationKind) -> Self {
        Self(Component::new(kind.identifier()))
    }

    pub fn walk() -> Self {
        Self::new(NavigationKind::Walk)
    }

    nav_flags! {
        avoid_damage_blocks => "avoid_damage_blocks", false;
        avoid_portals => "avoid_portals", false;
        avoid_sun => "avoid_sun", false;
        avoid_water => "avoid_water", false;
        can_breach => "can_breach", false;
        can_break_doors => "can_break_doors", false;
        can_jump => "can_jump", true;
        can_open_doors => "can_open_doors", false;
        can_open_iron_doors => "can_open_iron_doors", false;
        can_pass_doors => "can_pass_doors", true;
        can_path_from_air => "can_path_from_air", false;
        can_path_over_lava => "can_path_over_lava", false;
        can_path_over_water => "can_path_over_water", false;
        can_sink => "can_sink", true;
        can_swim => "can_swim", false;
        can_walk => "can_walk", true;
        can_walk_in_lava => "can_walk_in_lava", false;
        is_amphibious => "is_amphibious", false;
    }

    pub fn block_to_avoid(mut self, block: &str) -> Self {
        self.0.push_field("blocks_to_avoid", block);
        self
    }
}

impl AsComponent for Navigation {
    fn component(&self) -> &Component {
        &self.0
    }
}

impl From<Navigation> for Component {
    fn from(n: Navigation) -> Self {
        n.0
    }
}
