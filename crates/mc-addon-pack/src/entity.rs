//! Server entity definitions (`entities/*.json`).

use mc_addon_components::event_trigger;
use mc_addon_core::{json, AddonError, Component, Filter, FormatVersion, Identifier, Result, Value};
use serde::Deserialize;
use serde_json::Map;
use tracing::debug;

/// Insert a component into a components map; a repeated identifier
/// replaces the earlier one.
pub(crate) fn insert_component(map: &mut Map<String, Value>, owner: &str, component: Component) {
    let (id, body) = component.to_entry();
    if map.insert(id.clone(), body).is_some() {
        debug!("{owner}: component {id} replaced");
    }
}

/// Actor property declared in `description.properties`.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityProperty {
    Int { min: i64, max: i64, default: i64, client_sync: bool },
    Float { min: f64, max: f64, default: f64, client_sync: bool },
    Bool { default: bool, client_sync: bool },
    Enum { values: Vec<String>, default: String, client_sync: bool },
}

impl EntityProperty {
    pub fn int(min: i64, max: i64, default: i64) -> Result<Self> {
        check_default("int property", default, min, max)?;
        Ok(EntityProperty::Int { min, max, default, client_sync: false })
    }

    pub fn float(min: f64, max: f64, default: f64) -> Result<Self> {
        check_default("float property", default, min, max)?;
        Ok(EntityProperty::Float { min, max, default, client_sync: false })
    }

    pub fn bool(default: bool) -> Self {
        EntityProperty::Bool { default, client_sync: false }
    }

    /// `default` must be one of `values`.
    pub fn enumeration(values: &[&str], default: &str) -> Result<Self> {
        if !values.contains(&default) {
            return Err(AddonError::MissingField(format!(
                "enum property default '{default}' is not one of its values"
            )));
        }
        Ok(EntityProperty::Enum {
            values: values.iter().map(|v| v.to_string()).collect(),
            default: default.to_string(),
            client_sync: false,
        })
    }

    /// Send the value to clients so resource packs can read it.
    pub fn client_sync(mut self) -> Self {
        match &mut self {
            EntityProperty::Int { client_sync, .. }
            | EntityProperty::Float { client_sync, .. }
            | EntityProperty::Bool { client_sync, .. }
            | EntityProperty::Enum { client_sync, .. } => *client_sync = true,
        }
        self
    }

    pub fn to_value(&self) -> Value {
        let (mut v, sync) = match self {
            EntityProperty::Int { min, max, default, client_sync } => (
                json!({ "type": "int", "range": [min, max], "default": default }),
                *client_sync,
            ),
            EntityProperty::Float { min, max, default, client_sync } => (
                json!({ "type": "float", "range": [min, max], "default": default }),
                *client_sync,
            ),
            EntityProperty::Bool { default, client_sync } => {
                (json!({ "type": "bool", "default": default }), *client_sync)
            }
            EntityProperty::Enum { values, default, client_sync } => (
                json!({ "type": "enum", "values": values, "default": default }),
                *client_sync,
            ),
        };
        if sync {
            v["client_sync"] = true.into();
        }
        v
    }
}

fn check_default<T: PartialOrd + std::fmt::Display>(field: &str, default: T, min: T, max: T) -> Result<()> {
    if default < min || default > max {
        return Err(AddonError::OutOfRange {
            field: field.to_string(),
            value: default.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(())
}

/// Named set of components that events add and remove.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentGroup {
    name: String,
    components: Map<String, Value>,
}

impl ComponentGroup {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            components: Map::new(),
        }
    }

    pub fn component(mut self, component: impl Into<Component>) -> Self {
        insert_component(&mut self.components, &self.name, component.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An entity event, or one nested response of `randomize`/`sequence`.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityEvent {
    name: String,
    body: Component,
}

impl EntityEvent {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            body: Component::object(),
        }
    }

    /// Unnamed response for [`EntityEvent::randomize`] and
    /// [`EntityEvent::sequence`].
    pub fn response() -> Self {
        Self::new("")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_groups(mut self, groups: &[&str]) -> Self {
        self.body
            .add_field("add", json!({ "component_groups": groups }));
        self
    }

    pub fn remove_groups(mut self, groups: &[&str]) -> Self {
        self.body
            .add_field("remove", json!({ "component_groups": groups }));
        self
    }

    pub fn trigger(mut self, event: &str, target: Option<&str>) -> Self {
        self.body.add_field("trigger", event_trigger(event, target));
        self
    }

    pub fn filters(mut self, filters: Filter) -> Self {
        self.body.add_field("filters", filters);
        self
    }

    pub fn set_property(mut self, property: &str, value: impl Into<Value>) -> Self {
        let mut props = self
            .body
            .get_field("set_property")
            .cloned()
            .unwrap_or_else(|| json!({}));
        if let Some(map) = props.as_object_mut() {
            map.insert(property.to_string(), value.into());
        }
        self.body.add_field("set_property", props);
        self
    }

    /// Pick one weighted response.
    pub fn randomize(mut self, options: impl IntoIterator<Item = (u32, EntityEvent)>) -> Self {
        for (weight, option) in options {
            let mut entry = option.body;
            entry.add_field("weight", weight);
            self.body.push_field("randomize", entry);
        }
        self
    }

    /// Run every response in order; each may carry its own filters.
    pub fn sequence(mut self, steps: impl IntoIterator<Item = EntityEvent>) -> Self {
        for step in steps {
            self.body.push_field("sequence", step.body);
        }
        self
    }

    pub fn body(&self) -> Value {
        self.body.body()
    }
}

/// A `minecraft:entity` document.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityDefinition {
    identifier: Identifier,
    is_spawnable: bool,
    is_summonable: bool,
    is_experimental: bool,
    runtime_identifier: Option<String>,
    properties: Map<String, Value>,
    components: Map<String, Value>,
    component_groups: Map<String, Value>,
    events: Map<String, Value>,
    display_name: Option<String>,
}

impl EntityDefinition {
    pub fn new(identifier: Identifier) -> Self {
        Self {
            identifier,
            is_spawnable: true,
            is_summonable: true,
            is_experimental: false,
            runtime_identifier: None,
            properties: Map::new(),
            components: Map::new(),
            component_groups: Map::new(),
            events: Map::new(),
            display_name: None,
        }
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn is_spawnable(mut self, value: bool) -> Self {
        self.is_spawnable = value;
        self
    }

    pub fn is_summonable(mut self, value: bool) -> Self {
        self.is_summonable = value;
        self
    }

    pub fn is_experimental(mut self, value: bool) -> Self {
        self.is_experimental = value;
        self
    }

    /// Borrow hardcoded vanilla behavior, e.g. `minecraft:zombie`.
    pub fn runtime_identifier(mut self, id: &str) -> Self {
        self.runtime_identifier = Some(id.to_string());
        self
    }

    /// English name registered in the resource pack language file.
    pub fn display_name(mut self, name: &str) -> Self {
        self.display_name = Some(name.to_string());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn property(mut self, name: &str, property: EntityProperty) -> Self {
        self.properties.insert(name.to_string(), property.to_value());
        self
    }

    pub fn component(mut self, component: impl Into<Component>) -> Self {
        let owner = self.identifier.to_string();
        insert_component(&mut self.components, &owner, component.into());
        self
    }

    pub fn component_group(mut self, group: ComponentGroup) -> Self {
        self.component_groups
            .insert(group.name, Value::Object(group.components));
        self
    }

    pub fn event(mut self, event: EntityEvent) -> Self {
        let body = event.body();
        self.events.insert(event.name, body);
        self
    }

    pub fn get_component(&self, identifier: &str) -> Option<&Value> {
        self.components.get(identifier)
    }

    pub fn to_json(&self) -> Value {
        let mut description = json!({
            "identifier": self.identifier.to_string(),
            "is_spawnable": self.is_spawnable,
            "is_summonable": self.is_summonable,
        });
        if self.is_experimental {
            description["is_experimental"] = true.into();
        }
        if let Some(runtime) = &self.runtime_identifier {
            description["runtime_identifier"] = runtime.as_str().into();
        }
        if !self.properties.is_empty() {
            description["properties"] = Value::Object(self.properties.clone());
        }

        let mut body = Map::new();
        body.insert("description".into(), description);
        if !self.component_groups.is_empty() {
            body.insert(
                "component_groups".into(),
                Value::Object(self.component_groups.clone()),
            );
        }
        body.insert("components".into(), Value::Object(self.components.clone()));
        if !self.events.is_empty() {
            body.insert("events".into(), Value::Object(self.events.clone()));
        }

        json!({
            "format_version": FormatVersion::ENTITY,
            "minecraft:entity": body,
        })
    }
}

/// Raw entity file structure, as read back from a pack.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityFile {
    pub format_version: String,
    #[serde(rename = "minecraft:entity")]
    pub entity: EntityBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntityBody {
    pub description: EntityDescription,
    #[serde(default)]
    pub components: Map<String, Value>,
    #[serde(default)]
    pub component_groups: Map<String, Value>,
    #[serde(default)]
    pub events: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntityDescription {
    pub identifier: String,
    #[serde(default)]
    pub is_spawnable: bool,
    #[serde(default)]
    pub is_summonable: bool,
}

/// Headline stats of an entity file.
#[derive(Debug, Clone)]
pub struct EntitySummary {
    pub identifier: String,
    pub is_spawnable: bool,
    pub is_summonable: bool,
    pub max_health: f64,
    pub movement_speed: f64,
    pub attack_damage: f64,
    pub bb_width: f64,
    pub bb_height: f64,
    /// `(goal, priority)` for every `minecraft:behavior.*` component,
    /// sorted by priority.
    pub behaviors: Vec<(String, u64)>,
    pub component_groups: Vec<String>,
    pub events: Vec<String>,
}

impl EntityFile {
    /// Parse from a JSON string.
    pub fn parse_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn summarize(&self) -> EntitySummary {
        let comps = &self.entity.components;
        let number = |id: &str, key: &str| comps.get(id).and_then(|v| v.get(key)).and_then(Value::as_f64);

        let max_health = number("minecraft:health", "max")
            .or_else(|| number("minecraft:health", "value"))
            .unwrap_or(10.0);

        let mut behaviors: Vec<(String, u64)> = comps
            .iter()
            .filter_map(|(k, v)| {
                k.strip_prefix("minecraft:behavior.").map(|name| {
                    let priority = v.get("priority").and_then(Value::as_u64).unwrap_or(0);
                    (name.to_string(), priority)
                })
            })
            .collect();
        behaviors.sort_by_key(|(_, p)| *p);

        // A present collision box omits sides equal to 1.0; without the
        // component the mob-sized box applies.
        let (bb_width, bb_height) = if comps.contains_key("minecraft:collision_box") {
            (
                number("minecraft:collision_box", "width").unwrap_or(1.0),
                number("minecraft:collision_box", "height").unwrap_or(1.0),
            )
        } else {
            (0.6, 1.8)
        };

        EntitySummary {
            identifier: self.entity.description.identifier.clone(),
            is_spawnable: self.entity.description.is_spawnable,
            is_summonable: self.entity.description.is_summonable,
            max_health,
            movement_speed: number("minecraft:movement", "value").unwrap_or(0.25),
            attack_damage: number("minecraft:attack", "damage").unwrap_or(0.0),
            bb_width,
            bb_height,
            behaviors,
            component_groups: self.entity.component_groups.keys().cloned().collect(),
            events: self.entity.events.keys().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mc_addon_components::ai::{MeleeAttack, RandomStroll};
    use mc_addon_components::entity::{CollisionBox, Health, Movement, TypeFamily};

    fn guard() -> EntityDefinition {
        EntityDefinition::new(Identifier::custom("custom:guard").unwrap())
            .display_name("Guard")
            .component(Health::new(30).max(30))
            .component(Movement::from_speed(4.0))
            .component(MeleeAttack::new(3))
            .component(RandomStroll::new(6))
    }

    #[test]
    fn entity_document_layout() {
        let json = guard().to_json();
        assert_eq!(json["format_version"], FormatVersion::ENTITY);
        let entity = &json["minecraft:entity"];
        assert_eq!(entity["description"]["identifier"], "custom:guard");
        assert_eq!(entity["description"]["is_spawnable"], true);
        assert_eq!(entity["components"]["minecraft:health"], json!({ "value": 30 }));
        assert_eq!(entity["components"]["minecraft:movement"], json!({ "value": 0.304 }));
        assert!(entity.get("events").is_none());
        assert!(entity.get("component_groups").is_none());
    }

    #[test]
    fn duplicate_component_last_wins() {
        let def = guard().component(Health::new(50));
        assert_eq!(def.get_component("minecraft:health"), Some(&json!({ "value": 50 })));
        let keys: Vec<_> = def.to_json()["minecraft:entity"]["components"]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys[0], "minecraft:health");
        assert_eq!(keys.len(), 4);
    }

    #[test]
    fn groups_and_events() {
        let def = guard()
            .component_group(ComponentGroup::new("custom:angry").component(TypeFamily::new(["guard", "angry"])))
            .event(EntityEvent::new("minecraft:entity_spawned").randomize([
                (3, EntityEvent::response().add_groups(&["custom:calm"])),
                (1, EntityEvent::response().add_groups(&["custom:angry"])),
            ]))
            .event(
                EntityEvent::new("custom:calm_down")
                    .remove_groups(&["custom:angry"])
                    .set_property("custom:mood", "calm"),
            );
        let json = def.to_json();
        let entity = &json["minecraft:entity"];
        assert_eq!(
            entity["component_groups"]["custom:angry"]["minecraft:type_family"],
            json!({ "family": ["guard", "angry"] })
        );
        assert_eq!(
            entity["events"]["minecraft:entity_spawned"]["randomize"][0],
            json!({ "add": { "component_groups": ["custom:calm"] }, "weight": 3 })
        );
        assert_eq!(
            entity["events"]["custom:calm_down"],
            json!({
                "remove": { "component_groups": ["custom:angry"] },
                "set_property": { "custom:mood": "calm" }
            })
        );
    }

    #[test]
    fn sequence_with_filters() {
        let e = EntityEvent::new("custom:check").sequence([
            EntityEvent::response()
                .filters(Filter::is_daytime(true))
                .trigger("custom:sleep", None),
            EntityEvent::response().add_groups(&["custom:awake"]),
        ]);
        assert_eq!(
            e.body(),
            json!({ "sequence": [
                { "filters": { "test": "is_daytime", "value": true }, "trigger": { "event": "custom:sleep" } },
                { "add": { "component_groups": ["custom:awake"] } }
            ]})
        );
    }

    #[test]
    fn properties() {
        let def = guard()
            .property("custom:level", EntityProperty::int(0, 5, 0).unwrap().client_sync())
            .property("custom:mood", EntityProperty::enumeration(&["calm", "angry"], "calm").unwrap());
        let props = &def.to_json()["minecraft:entity"]["description"]["properties"];
        assert_eq!(
            props["custom:level"],
            json!({ "type": "int", "range": [0, 5], "default": 0, "client_sync": true })
        );
        assert_eq!(props["custom:mood"]["values"], json!(["calm", "angry"]));
        assert!(EntityProperty::int(0, 5, 9).is_err());
        assert!(EntityProperty::enumeration(&["a"], "b").is_err());
    }

    #[test]
    fn parse_full_entity() {
        let json = r#"{
            "format_version": "1.20.0",
            "minecraft:entity": {
                "description": {
                    "identifier": "custom:guard",
                    "is_spawnable": true,
                    "is_summonable": true
                },
                "component_groups": { "custom:angry": {} },
                "components": {
                    "minecraft:health": { "value": 30, "max": 30 },
                    "minecraft:movement": { "value": 0.35 },
                    "minecraft:attack": { "damage": 5.0 },
                    "minecraft:collision_box": { "width": 0.7, "height": 2.0 },
                    "minecraft:behavior.random_stroll": { "priority": 6 },
                    "minecraft:behavior.look_at_player": { "priority": 7 },
                    "minecraft:behavior.melee_attack": { "priority": 2 }
                },
                "events": { "custom:anger": {} }
            }
        }"#;
        let e = EntityFile::parse_json(json).unwrap().summarize();
        assert_eq!(e.identifier, "custom:guard");
        assert!(e.is_spawnable);
        assert_eq!(e.max_health, 30.0);
        assert_eq!(e.movement_speed, 0.35);
        assert_eq!(e.attack_damage, 5.0);
        assert_eq!(e.bb_width, 0.7);
        assert_eq!(e.bb_height, 2.0);
        assert_eq!(e.behaviors[0], ("melee_attack".to_string(), 2));
        assert_eq!(e.behaviors.len(), 3);
        assert_eq!(e.component_groups, vec!["custom:angry"]);
        assert_eq!(e.events, vec!["custom:anger"]);
    }

    #[test]
    fn parse_entity_defaults() {
        let json = r#"{
            "format_version": "1.20.0",
            "minecraft:entity": {
                "description": { "identifier": "custom:simple" },
                "components": {}
            }
        }"#;
        let e = EntityFile::parse_json(json).unwrap().summarize();
        assert!(!e.is_spawnable);
        assert_eq!(e.max_health, 10.0);
        assert_eq!(e.movement_speed, 0.25);
        assert!(e.behaviors.is_empty());
    }

    #[test]
    fn generated_entity_reads_back() {
        let text = serde_json::to_string(&guard().to_json()).unwrap();
        let e = EntityFile::parse_json(&text).unwrap().summarize();
        assert_eq!(e.identifier, "custom:guard");
        assert_eq!(e.max_health, 30.0);
        assert_eq!(e.behaviors.len(), 2);
    }

    #[test]
    fn collision_box_reads_back() {
        let tall = guard().component(CollisionBox::new(1.0, 1.9));
        let text = serde_json::to_string(&tall.to_json()).unwrap();
        let e = EntityFile::parse_json(&text).unwrap().summarize();
        assert_eq!((e.bb_width, e.bb_height), (1.0, 1.9));

        let cube = guard().component(CollisionBox::new(1.0, 1.0));
        let text = serde_json::to_string(&cube.to_json()).unwrap();
        let e = EntityFile::parse_json(&text).unwrap().summarize();
        assert_eq!((e.bb_width, e.bb_height), (1.0, 1.0));

        let text = serde_json::to_string(&guard().to_json()).unwrap();
        let e = EntityFile::parse_json(&text).unwrap().summarize();
        assert_eq!((e.bb_width, e.bb_height), (0.6, 1.8));
    }

    #[test]
    fn parse_invalid_entity() {
        assert!(EntityFile::parse_json("not json").is_err());
    }
}
