//! Field accumulation shared by every component builder.
//!
//! A [`Component`] is one `"identifier": { ... }` entry of an entity, item
//! or block document. Builders write fields through the default-omitting
//! helpers so the emitted JSON only carries values that differ from what the
//! game would assume anyway.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// A named JSON fragment such as `"minecraft:health": { "value": 20 }`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Component {
    identifier: String,
    fields: Map<String, Value>,
    /// Set by [`Component::set_value`]; replaces the object body entirely.
    raw: Option<Value>,
}

/// Implemented by every builder that wraps a [`Component`].
pub trait AsComponent {
    fn component(&self) -> &Component;

    fn identifier(&self) -> &str {
        self.component().identifier()
    }
}

impl AsComponent for Component {
    fn component(&self) -> &Component {
        self
    }
}

impl Component {
    /// Create a component with an empty object body.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            fields: Map::new(),
            raw: None,
        }
    }

    /// A detached field map for nested objects such as trigger entries or
    /// entity type filters. Only [`Component::body`] is meaningful.
    pub fn object() -> Self {
        Self::default()
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Insert or replace a field.
    ///
    /// A body previously replaced by [`Component::set_value`] becomes an
    /// object again; if that raw value was itself an object its keys are
    /// kept.
    pub fn add_field(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        if let Some(Value::Object(map)) = self.raw.take() {
            self.fields = map;
        }
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Set `key` only when `value` differs from `default`; otherwise make
    /// sure the key is absent.
    pub fn add_field_if_ne<T>(&mut self, key: &str, value: T, default: T) -> &mut Self
    where
        T: Into<Value> + PartialEq,
    {
        if value == default {
            self.remove_field(key);
        } else {
            self.add_field(key, value);
        }
        self
    }

    /// Boolean field that is only written when `true`.
    pub fn add_flag(&mut self, key: &str, value: bool) -> &mut Self {
        self.add_field_if_ne(key, value, false)
    }

    /// Write the field when a value is present.
    pub fn add_optional<T: Into<Value>>(&mut self, key: &str, value: Option<T>) -> &mut Self {
        match value {
            Some(v) => self.add_field(key, v),
            None => self.remove_field(key),
        }
    }

    /// Append to an array field, creating it if needed.
    pub fn push_field(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        let value = value.into();
        match self.get_field(key) {
            Some(Value::Array(items)) => {
                let mut items = items.clone();
                items.push(value);
                self.add_field(key, items)
            }
            _ => self.add_field(key, vec![value]),
        }
    }

    /// Replace the whole body with a raw value, e.g. `"minecraft:glint": true`.
    pub fn set_value(&mut self, value: impl Into<Value>) -> &mut Self {
        self.fields.clear();
        self.raw = Some(value.into());
        self
    }

    pub fn get_field(&self, key: &str) -> Option<&Value> {
        match &self.raw {
            Some(raw) => raw.get(key),
            None => self.fields.get(key),
        }
    }

    pub fn remove_field(&mut self, key: &str) -> &mut Self {
        match &mut self.raw {
            Some(Value::Object(map)) => {
                map.shift_remove(key);
            }
            Some(_) => {}
            None => {
                self.fields.shift_remove(key);
            }
        }
        self
    }

    /// `true` when the body is an empty object.
    pub fn is_empty(&self) -> bool {
        self.raw.is_none() && self.fields.is_empty()
    }

    /// The JSON body, without the identifier.
    pub fn body(&self) -> Value {
        match &self.raw {
            Some(raw) => raw.clone(),
            None => Value::Object(self.fields.clone()),
        }
    }

    /// `(identifier, body)` ready to be inserted into a components map.
    pub fn to_entry(&self) -> (String, Value) {
        (self.identifier.clone(), self.body())
    }
}

impl Serialize for Component {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.raw {
            Some(raw) => raw.serialize(serializer),
            None => self.fields.serialize(serializer),
        }
    }
}

impl From<Component> for Value {
    fn from(c: Component) -> Self {
        match c.raw {
            Some(raw) => raw,
            None => Value::Object(c.fields),
        }
    }
}

/// Declare a builder type wrapping a [`Component`] with a fixed identifier.
///
/// ```ignore
/// component!(
///     /// `minecraft:health`
///     Health, "minecraft:health"
/// );
/// ```
#[macro_export]
macro_rules! component {
    ($(#[$meta:meta])* $name:ident, $id:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name($crate::Component);

        impl $name {
            pub const IDENTIFIER: &'static str = $id;
        }

        impl $crate::AsComponent for $name {
            fn component(&self) -> &$crate::Component {
                &self.0
            }
        }

        impl From<$name> for $crate::Component {
            fn from(c: $name) -> Self {
                c.0
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fields_keep_insertion_order() {
        let mut c = Component::new("minecraft:health");
        c.add_field("value", 20).add_field("max", 30);
        let (id, body) = c.to_entry();
        assert_eq!(id, "minecraft:health");
        let keys: Vec<_> = body.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["value", "max"]);
    }

    #[test]
    fn default_values_are_omitted() {
        let mut c = Component::new("minecraft:physics");
        c.add_field_if_ne("has_gravity", true, true)
            .add_field_if_ne("has_collision", false, true);
        assert_eq!(c.body(), json!({ "has_collision": false }));

        // Resetting to the default removes the key again.
        c.add_field_if_ne("has_collision", true, true);
        assert!(c.is_empty());
    }

    #[test]
    fn flags_and_optionals() {
        let mut c = Component::new("minecraft:test");
        c.add_flag("a", false)
            .add_flag("b", true)
            .add_optional::<i32>("c", None)
            .add_optional("d", Some("x"));
        assert_eq!(c.body(), json!({ "b": true, "d": "x" }));
    }

    #[test]
    fn set_value_replaces_body() {
        let mut c = Component::new("minecraft:max_stack_size");
        c.add_field("value", 64);
        c.set_value(16);
        assert_eq!(c.body(), json!(16));
        assert!(c.get_field("value").is_none());

        c.add_field("value", 8);
        assert_eq!(c.body(), json!({ "value": 8 }));
    }

    #[test]
    fn set_value_object_merges_on_add() {
        let mut c = Component::new("minecraft:test");
        c.set_value(json!({ "a": 1 }));
        assert_eq!(c.get_field("a"), Some(&json!(1)));
        c.add_field("b", 2);
        assert_eq!(c.body(), json!({ "a": 1, "b": 2 }));
    }

    #[test]
    fn push_field_appends() {
        let mut c = Component::new("minecraft:type_family");
        c.push_field("family", "mob").push_field("family", "zombie");
        assert_eq!(c.body(), json!({ "family": ["mob", "zombie"] }));
    }

    #[test]
    fn detached_object() {
        let mut o = Component::object();
        o.add_field("max_dist", 16);
        assert_eq!(o.identifier(), "");
        assert_eq!(o.body(), json!({ "max_dist": 16 }));
    }

    #[test]
    fn serializes_as_body() {
        let mut c = Component::new("minecraft:scale");
        c.add_field("value", 1.5);
        assert_eq!(serde_json::to_value(&c).unwrap(), json!({ "value": 1.5 }));
    }

    component!(
        /// test builder
        Dummy, "minecraft:dummy"
    );

    #[test]
    fn component_macro_wraps() {
        let d = Dummy(Component::new(Dummy::IDENTIFIER));
        assert_eq!(d.identifier(), "minecraft:dummy");
        let c: Component = d.into();
        assert!(c.is_empty());
    }
}
