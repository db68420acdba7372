//! Components of `minecraft:block` definitions.

use mc_addon_core::value::clamp_field;
use mc_addon_core::{component, json, Component, Value};

component!(
    /// `minecraft:destructible_by_mining`
    DestructibleByMining, "minecraft:destructible_by_mining"
);

impl DestructibleByMining {
    /// Seconds to mine by hand.
    pub fn new(seconds_to_destroy: f64) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field("seconds_to_destroy", seconds_to_destroy);
        Self(c)
    }

    /// The block can't be mined at all.
    pub fn disabled() -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.set_value(false);
        Self(c)
    }

    /// Faster mining with a specific item or item tag query.
    pub fn item_speed(mut self, item: &str, destroy_speed: f64) -> Self {
        self.0.push_field(
            "item_specific_speeds",
            json!({ "item": item, "destroy_speed": destroy_speed }),
        );
        self
    }
}

component!(
    /// `minecraft:destructible_by_explosion`
    DestructibleByExplosion, "minecraft:destructible_by_explosion"
);

impl DestructibleByExplosion {
    pub fn new(explosion_resistance: f64) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field("explosion_resistance", explosion_resistance);
        Self(c)
    }

    pub fn disabled() -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.set_value(false);
        Self(c)
    }
}

component!(
    /// `minecraft:friction`
    Friction, "minecraft:friction"
);

impl Friction {
    /// Clamped to `0.0..=0.9`; the game default is `0.4`.
    pub fn new(value: f64) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.set_value(clamp_field("friction", value, 0.0, 0.9));
        Self(c)
    }
}

impl Default for Friction {
    fn default() -> Self {
        Self::new(0.4)
    }
}

component!(
    /// `minecraft:light_emission`
    LightEmission, "minecraft:light_emission"
);

impl LightEmission {
    pub fn new(level: u8) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.set_value(clamp_field("light_emission", level, 0, 15));
        Self(c)
    }
}

component!(
    /// `minecraft:light_dampening`
    LightDampening, "minecraft:light_dampening"
);

impl LightDampening {
    pub fn new(level: u8) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.set_value(clamp_field("light_dampening", level, 0, 15));
        Self(c)
    }
}

component!(
    /// `minecraft:map_color`
    MapColor, "minecraft:map_color"
);

impl MapColor {
    /// `#rrggbb` colour string.
    pub fn new(color: &str) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.set_value(color);
        Self(c)
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(&format!("#{r:02x}{g:02x}{b:02x}"))
    }
}

component!(
    /// `minecraft:geometry`
    Geometry, "minecraft:geometry"
);

impl Geometry {
    /// `geometry.*` identifier, or `minecraft:geometry.full_block`.
    pub fn new(identifier: &str) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.add_field("identifier", identifier);
        Self(c)
    }

    /// Bone visibility, either a bool or a Molang expression.
    pub fn bone_visibility(mut self, bone: &str, visible: impl Into<Value>) -> Self {
        let mut bones = self
            .0
            .get_field("bone_visibility")
            .cloned()
            .unwrap_or_else(|| json!({}));
        if let Some(map) = bones.as_object_mut() {
            map.insert(bone.to_string(), visible.into());
        }
        self.0.add_field("bone_visibility", bones);
        self
    }
}

/// Render method of a material instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMethod {
    #[default]
    Opaque,
    DoubleSided,
    Blend,
    AlphaTest,
}

impl RenderMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            RenderMethod::Opaque => "opaque",
            RenderMethod::DoubleSided => "double_sided",
            RenderMethod::Blend => "blend",
            RenderMethod::AlphaTest => "alpha_test",
        }
    }
}

component!(
    /// `minecraft:material_instances`
    MaterialInstances, "minecraft:material_instances"
);

impl MaterialInstances {
    pub fn new() -> Self {
        Self(Component::new(Self::IDENTIFIER))
    }

    /// Material for a face (`*`, `up`, `down`, `north`, ...) or a named
    /// instance referenced by the geometry.
    pub fn material(mut self, face: &str, texture: &str, render_method: RenderMethod) -> Self {
        let mut m = Component::object();
        m.add_field("texture", texture).add_field_if_ne(
            "render_method",
            render_method.as_str(),
            RenderMethod::Opaque.as_str(),
        );
        self.0.add_field(face, m);
        self
    }

    /// Point `face` at another instance by name.
    pub fn alias(mut self, face: &str, target: &str) -> Self {
        self.0.add_field(face, target);
        self
    }
}

impl Default for MaterialInstances {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! block_box {
    ($($(#[$meta:meta])* $name:ident => $id:literal;)*) => {
        $(
            component!($(#[$meta])* $name, $id);

            impl $name {
                /// `origin` and `size` in pixels. A full block
                /// (`[-8, 0, -8]` + `[16, 16, 16]`) is written as `true`.
                pub fn new(origin: [f64; 3], size: [f64; 3]) -> Self {
                    let mut c = Component::new(Self::IDENTIFIER);
                    if origin != [-8.0, 0.0, -8.0] || size != [16.0, 16.0, 16.0] {
                        let size = [
                            clamp_field("size.x", size[0], 0.0, 16.0),
                            clamp_field("size.y", size[1], 0.0, 16.0),
                            clamp_field("size.z", size[2], 0.0, 16.0),
                        ];
                        c.add_field("origin", origin.to_vec())
                            .add_field("size", size.to_vec());
                    } else {
                        c.set_value(true);
                    }
                    Self(c)
                }

                pub fn full() -> Self {
                    Self::new([-8.0, 0.0, -8.0], [16.0, 16.0, 16.0])
                }

                pub fn disabled() -> Self {
                    let mut c = Component::new(Self::IDENTIFIER);
                    c.set_value(false);
                    Self(c)
                }
            }
        )*
    };
}

block_box! {
    /// `minecraft:collision_box`
    CollisionBox => "minecraft:collision_box";
    /// `minecraft:selection_box`
    SelectionBox => "minecraft:selection_box";
}

component!(
    /// `minecraft:display_name` on a block
    BlockDisplayName, "minecraft:display_name"
);

impl BlockDisplayName {
    pub fn new(value: &str) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.set_value(value);
        Self(c)
    }
}

component!(
    /// `minecraft:loot` on a block
    BlockLoot, "minecraft:loot"
);

impl BlockLoot {
    /// `table` is relative to the behavior pack, e.g. `loot_tables/blocks/ruby_ore.json`.
    pub fn new(table: &str) -> Self {
        let mut c = Component::new(Self::IDENTIFIER);
        c.set_value(table);
        Self(c)
    }
}

component!(
    /// `minecraft:flammable`
    Flammable, "minecraft:flammable"
);

impl Flammable {
    pub fn new() -> Self {
        Self(Component::new(Self::IDENTIFIER))
    }

    pub fn catch_chance_modifier(mut self, value: u32) -> Self {
        self.0.add_field_if_ne("catch_chance_modifier", value, 5);
        self
    }

    pub fn destroy_chance_modifier(mut self, value: u32) -> Self {
        self.0.add_field_if_ne("destroy_chance_modifier", value, 20);
        self
    }
}

impl Default for Flammable {
    fn default() -> Self {
        Self::new()
    }
}

component!(
    /// `minecraft:placement_filter`
    PlacementFilter, "minecraft:placement_filter"
);

impl PlacementFilter {
    pub fn new() -> Self {
        Self(Component::new(Self::IDENTIFIER))
    }

    /// Allow placement on `faces` (`up`, `side`, `all`, ...) when the
    /// supporting block is one of `blocks`. Empty lists leave the
    /// restriction out.
    pub fn condition(mut self, faces: &[&str], blocks: &[&str]) -> Self {
        let mut cond = Component::object();
        if !faces.is_empty() {
            cond.add_field("allowed_faces", faces.to_vec());
        }
        if !blocks.is_empty() {
            cond.add_field("block_filter", blocks.to_vec());
        }
        self.0.push_field("conditions", cond);
        self
    }
}

impl Default for PlacementFilter {
    fn default() -> Self {
        Self::new()
    }
}

component!(
    /// `minecraft:transformation`
    Transformation, "minecraft:transformation"
);

impl Transformation {
    pub fn new() -> Self {
        Self(Component::new(Self::IDENTIFIER))
    }

    pub fn translation(mut self, t: [f64; 3]) -> Self {
        if t == [0.0; 3] {
            self.0.remove_field("translation");
        } else {
            self.0.add_field("translation", t.to_vec());
        }
        self
    }

    /// Degrees; each axis must be a multiple of 90.
    pub fn rotation(mut self, r: [f64; 3]) -> Self {
        let r = r.map(|deg| (deg / 90.0).round() * 90.0);
        if r == [0.0; 3] {
            self.0.remove_field("rotation");
        } else {
            self.0.add_field("rotation", r.to_vec());
        }
        self
    }

    pub fn scale(mut self, s: [f64; 3]) -> Self {
        if s == [1.0; 3] {
            self.0.remove_field("scale");
        } else {
            self.0.add_field("scale", s.to_vec());
        }
        self
    }
}

impl Default for Transformation {
    fn default() -> Self {
        Self::new()
    }
}

/// Molang `condition` for a block permutation, e.g.
/// `q.block_state('custom:lit') == true`.
pub fn state_condition(state: &str, value: impl Into<Value>) -> String {
    match value.into() {
        Value::String(s) => format!("q.block_state('{state}') == '{s}'"),
        v => format!("q.block_state('{state}') == {v}"),
    }
}
