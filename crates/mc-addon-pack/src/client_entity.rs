//! Resource pack entity definitions (`entity/*.entity.json`).

use mc_addon_core::{json, FormatVersion, Identifier, Value};
use serde_json::Map;

/// A `minecraft:client_entity` document: how an entity looks.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientEntityDefinition {
    identifier: Identifier,
    materials: Map<String, Value>,
    textures: Map<String, Value>,
    geometry: Map<String, Value>,
    render_controllers: Vec<Value>,
    animations: Map<String, Value>,
    scripts: Map<String, Value>,
    spawn_egg: Option<Value>,
}

impl ClientEntityDefinition {
    pub fn new(identifier: Identifier) -> Self {
        Self {
            identifier,
            materials: Map::new(),
            textures: Map::new(),
            geometry: Map::new(),
            render_controllers: Vec::new(),
            animations: Map::new(),
            scripts: Map::new(),
            spawn_egg: None,
        }
    }

    /// One texture, one geometry and the default render controller.
    pub fn simple(identifier: Identifier, texture: &str, geometry: &str) -> Self {
        Self::new(identifier)
            .material("default", "entity_alphatest")
            .texture("default", texture)
            .geometry("default", geometry)
            .render_controller("controller.render.default")
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn material(mut self, key: &str, material: &str) -> Self {
        self.materials.insert(key.to_string(), material.into());
        self
    }

    /// `path` is relative to the resource pack, without extension.
    pub fn texture(mut self, key: &str, path: &str) -> Self {
        self.textures.insert(key.to_string(), path.into());
        self
    }

    pub fn geometry(mut self, key: &str, geometry: &str) -> Self {
        self.geometry.insert(key.to_string(), geometry.into());
        self
    }

    pub fn render_controller(mut self, controller: &str) -> Self {
        self.render_controllers.push(controller.into());
        self
    }

    /// Render controller applied only while `condition` (Molang) holds.
    pub fn render_controller_when(mut self, controller: &str, condition: &str) -> Self {
        self.render_controllers
            .push(json!({ controller: condition }));
        self
    }

    pub fn animation(mut self, key: &str, animation: &str) -> Self {
        self.animations.insert(key.to_string(), animation.into());
        self
    }

    /// Run the animation bound to `key` every frame.
    pub fn animate(mut self, key: &str) -> Self {
        self.push_script("animate", key.into());
        self
    }

    pub fn animate_when(mut self, key: &str, condition: &str) -> Self {
        self.push_script("animate", json!({ key: condition }));
        self
    }

    pub fn initialize(mut self, expression: &str) -> Self {
        self.push_script("initialize", expression.into());
        self
    }

    pub fn pre_animation(mut self, expression: &str) -> Self {
        self.push_script("pre_animation", expression.into());
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scripts
            .insert("scale".to_string(), scale.to_string().into());
        self
    }

    /// Spawn egg drawn from two colours, `#rrggbb`.
    pub fn spawn_egg_colors(mut self, base: &str, overlay: &str) -> Self {
        self.spawn_egg = Some(json!({ "base_color": base, "overlay_color": overlay }));
        self
    }

    /// Spawn egg using an item texture short name.
    pub fn spawn_egg_texture(mut self, texture: &str) -> Self {
        self.spawn_egg = Some(json!({ "texture": texture }));
        self
    }

    pub fn has_spawn_egg(&self) -> bool {
        self.spawn_egg.is_some()
    }

    fn push_script(&mut self, key: &str, value: Value) {
        match self.scripts.get_mut(key) {
            Some(Value::Array(items)) => items.push(value),
            _ => {
                self.scripts.insert(key.to_string(), Value::Array(vec![value]));
            }
        }
    }

    pub fn to_json(&self) -> Value {
        let mut description = Map::new();
        description.insert("identifier".into(), self.identifier.to_string().into());
        let maps = [
            ("materials", &self.materials),
            ("textures", &self.textures),
            ("geometry", &self.geometry),
            ("animations", &self.animations),
            ("scripts", &self.scripts),
        ];
        for (key, map) in maps {
            if !map.is_empty() {
                description.insert(key.into(), Value::Object(map.clone()));
            }
        }
        if !self.render_controllers.is_empty() {
            description.insert(
                "render_controllers".into(),
                Value::Array(self.render_controllers.clone()),
            );
        }
        if let Some(egg) = &self.spawn_egg {
            description.insert("spawn_egg".into(), egg.clone());
        }

        json!({
            "format_version": FormatVersion::CLIENT_ENTITY,
            "minecraft:client_entity": { "description": description },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> Identifier {
        Identifier::custom("custom:ghoul").unwrap()
    }

    #[test]
    fn simple_client_entity() {
        let json = ClientEntityDefinition::simple(id(), "textures/entity/ghoul", "geometry.ghoul")
            .spawn_egg_colors("#2f4f2f", "#a0a0a0")
            .to_json();
        assert_eq!(json["format_version"], "1.10.0");
        let d = &json["minecraft:client_entity"]["description"];
        assert_eq!(d["identifier"], "custom:ghoul");
        assert_eq!(d["materials"], json!({ "default": "entity_alphatest" }));
        assert_eq!(d["textures"]["default"], "textures/entity/ghoul");
        assert_eq!(d["render_controllers"], json!(["controller.render.default"]));
        assert_eq!(d["spawn_egg"]["overlay_color"], "#a0a0a0");
        assert!(d.get("scripts").is_none());
    }

    #[test]
    fn scripts_and_animations() {
        let json = ClientEntityDefinition::new(id())
            .animation("walk", "animation.ghoul.walk")
            .animation("look_at_target", "animation.common.look_at_target")
            .animate("look_at_target")
            .animate_when("walk", "q.modified_move_speed > 0.1")
            .initialize("v.flap = 0;")
            .render_controller_when("controller.render.ghoul_glow", "q.is_angry")
            .to_json();
        let d = &json["minecraft:client_entity"]["description"];
        assert_eq!(
            d["scripts"],
            json!({
                "animate": ["look_at_target", { "walk": "q.modified_move_speed > 0.1" }],
                "initialize": ["v.flap = 0;"]
            })
        );
        assert_eq!(d["render_controllers"][0], json!({ "controller.render.ghoul_glow": "q.is_angry" }));
    }
}
