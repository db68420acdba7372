//! Custom block definitions (`blocks/*.json`).

use mc_addon_core::{json, Component, FormatVersion, Identifier, Result, Value};
use serde::Deserialize;
use serde_json::Map;

use crate::entity::insert_component;
use crate::item::MenuCategory;

/// Components that apply while a Molang condition over block states holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Permutation {
    condition: String,
    components: Map<String, Value>,
}

impl Permutation {
    pub fn new(condition: &str) -> Self {
        Self {
            condition: condition.to_string(),
            components: Map::new(),
        }
    }

    pub fn component(mut self, component: impl Into<Component>) -> Self {
        let owner = format!("permutation '{}'", self.condition);
        insert_component(&mut self.components, &owner, component.into());
        self
    }

    fn to_value(&self) -> Value {
        json!({ "condition": self.condition, "components": self.components })
    }
}

/// A `minecraft:block` document.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockDefinition {
    identifier: Identifier,
    menu_category: Option<MenuCategory>,
    states: Map<String, Value>,
    components: Map<String, Value>,
    permutations: Vec<Permutation>,
    display_name: Option<String>,
}

impl BlockDefinition {
    pub fn new(identifier: Identifier) -> Self {
        Self {
            identifier,
            menu_category: None,
            states: Map::new(),
            components: Map::new(),
            permutations: Vec::new(),
            display_name: None,
        }
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn menu_category(mut self, menu: MenuCategory) -> Self {
        self.menu_category = Some(menu);
        self
    }

    /// English name registered in the language file.
    pub fn display_name(mut self, name: &str) -> Self {
        self.display_name = Some(name.to_string());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Enumerated state values; the first one is the default.
    pub fn state<T: Into<Value>>(mut self, name: &str, values: impl IntoIterator<Item = T>) -> Self {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.states.insert(name.to_string(), Value::Array(values));
        self
    }

    /// Integer state covering `min..=max`.
    pub fn int_state(mut self, name: &str, min: i32, max: i32) -> Self {
        self.states.insert(
            name.to_string(),
            json!({ "values": { "min": min.min(max), "max": max.max(min) } }),
        );
        self
    }

    pub fn component(mut self, component: impl Into<Component>) -> Self {
        let owner = self.identifier.to_string();
        insert_component(&mut self.components, &owner, component.into());
        self
    }

    pub fn permutation(mut self, permutation: Permutation) -> Self {
        self.permutations.push(permutation);
        self
    }

    pub fn get_component(&self, identifier: &str) -> Option<&Value> {
        self.components.get(identifier)
    }

    pub fn to_json(&self) -> Value {
        let mut description = json!({ "identifier": self.identifier.to_string() });
        if let Some(menu) = &self.menu_category {
            description["menu_category"] = menu.to_value();
        }
        if !self.states.is_empty() {
            description["states"] = Value::Object(self.states.clone());
        }

        let mut body = Map::new();
        body.insert("description".into(), description);
        body.insert("components".into(), Value::Object(self.components.clone()));
        if !self.permutations.is_empty() {
            body.insert(
                "permutations".into(),
                self.permutations.iter().map(Permutation::to_value).collect(),
            );
        }

        json!({
            "format_version": FormatVersion::BLOCK,
            "minecraft:block": body,
        })
    }
}

/// Raw block file structure, as read back from a pack.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockFile {
    pub format_version: String,
    #[serde(rename = "minecraft:block")]
    pub block: BlockBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlockBody {
    pub description: BlockDescription,
    #[serde(default)]
    pub components: Map<String, Value>,
    #[serde(default)]
    pub permutations: Vec<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlockDescription {
    pub identifier: String,
    #[serde(default)]
    pub states: Map<String, Value>,
}

/// Headline properties of a block file.
#[derive(Debug, Clone)]
pub struct BlockSummary {
    pub identifier: String,
    /// Seconds to mine by hand.
    pub hardness: f64,
    pub is_solid: bool,
    pub light_emission: u8,
    pub states: Vec<String>,
    pub permutations: usize,
}

impl BlockFile {
    /// Parse from a JSON string.
    pub fn parse_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn summarize(&self) -> BlockSummary {
        let comps = &self.block.components;
        let hardness = comps
            .get("minecraft:destructible_by_mining")
            .and_then(|v| v.get("seconds_to_destroy").and_then(Value::as_f64))
            .unwrap_or(0.0);

        // Solid unless the collision box is disabled.
        let is_solid = comps
            .get("minecraft:collision_box")
            .and_then(Value::as_bool)
            .unwrap_or(true);

        let light_emission = comps
            .get("minecraft:light_emission")
            .and_then(Value::as_u64)
            .map(|l| l.min(15) as u8)
            .unwrap_or(0);

        BlockSummary {
            identifier: self.block.description.identifier.clone(),
            hardness,
            is_solid,
            light_emission,
            states: self.block.description.states.keys().cloned().collect(),
            permutations: self.block.permutations.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mc_addon_components::block::{
        state_condition, CollisionBox, DestructibleByMining, LightEmission, MaterialInstances, RenderMethod,
    };
    use crate::item::Category;

    fn lamp() -> BlockDefinition {
        BlockDefinition::new(Identifier::custom("custom:ruby_lamp").unwrap())
            .menu_category(MenuCategory::new(Category::Construction))
            .state("custom:lit", [false, true])
            .component(DestructibleByMining::new(1.5))
            .component(MaterialInstances::new().material("*", "ruby_lamp", RenderMethod::Opaque))
            .permutation(
                Permutation::new(&state_condition("custom:lit", true)).component(LightEmission::new(15)),
            )
    }

    #[test]
    fn block_document_layout() {
        let json = lamp().to_json();
        assert_eq!(json["format_version"], FormatVersion::BLOCK);
        let block = &json["minecraft:block"];
        assert_eq!(
            block["description"],
            json!({
                "identifier": "custom:ruby_lamp",
                "menu_category": { "category": "construction" },
                "states": { "custom:lit": [false, true] }
            })
        );
        assert_eq!(
            block["permutations"],
            json!([{
                "condition": "q.block_state('custom:lit') == true",
                "components": { "minecraft:light_emission": 15 }
            }])
        );
    }

    #[test]
    fn int_state_range() {
        let b = BlockDefinition::new(Identifier::custom("custom:crop").unwrap()).int_state("custom:age", 7, 0);
        assert_eq!(
            b.to_json()["minecraft:block"]["description"]["states"]["custom:age"],
            json!({ "values": { "min": 0, "max": 7 } })
        );
    }

    #[test]
    fn generated_block_reads_back() {
        let text = serde_json::to_string(&lamp().component(CollisionBox::disabled()).to_json()).unwrap();
        let b = BlockFile::parse_json(&text).unwrap().summarize();
        assert_eq!(b.identifier, "custom:ruby_lamp");
        assert_eq!(b.hardness, 1.5);
        assert!(!b.is_solid);
        assert_eq!(b.states, vec!["custom:lit"]);
        assert_eq!(b.permutations, 1);
    }

    #[test]
    fn parse_block_defaults() {
        let json = r#"{
            "format_version": "1.20.0",
            "minecraft:block": {
                "description": { "identifier": "custom:soft" },
                "components": { "minecraft:light_emission": 7 }
            }
        }"#;
        let b = BlockFile::parse_json(json).unwrap().summarize();
        assert_eq!(b.hardness, 0.0);
        assert!(b.is_solid);
        assert_eq!(b.light_emission, 7);
        assert!(b.states.is_empty());
    }
}
