//! Custom item definitions (`items/*.json`).

use mc_addon_catalog::item_types;
use mc_addon_core::{json, Component, FormatVersion, Identifier, Result, Value};
use serde::Deserialize;
use serde_json::Map;

use crate::entity::insert_component;

/// Creative inventory tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Construction,
    Equipment,
    Items,
    Nature,
    None,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Construction => "construction",
            Category::Equipment => "equipment",
            Category::Items => "items",
            Category::Nature => "nature",
            Category::None => "none",
        }
    }
}

/// `description.menu_category` of items and blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuCategory {
    pub category: Category,
    /// Expandable group, e.g. `minecraft:itemGroup.name.sword`.
    pub group: Option<String>,
    pub is_hidden_in_commands: bool,
}

impl MenuCategory {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            group: None,
            is_hidden_in_commands: false,
        }
    }

    pub fn group(mut self, group: &str) -> Self {
        self.group = Some(group.to_string());
        self
    }

    pub fn hidden_in_commands(mut self) -> Self {
        self.is_hidden_in_commands = true;
        self
    }

    pub fn to_value(&self) -> Value {
        let mut c = Component::object();
        c.add_field("category", self.category.as_str())
            .add_optional("group", self.group.as_deref())
            .add_flag("is_hidden_in_commands", self.is_hidden_in_commands);
        c.into()
    }
}

/// A `minecraft:item` document.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDefinition {
    identifier: Identifier,
    menu_category: Option<MenuCategory>,
    components: Map<String, Value>,
    display_name: Option<String>,
}

impl ItemDefinition {
    pub fn new(identifier: Identifier) -> Self {
        Self {
            identifier,
            menu_category: None,
            components: Map::new(),
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

    pub fn component(mut self, component: impl Into<Component>) -> Self {
        let owner = self.identifier.to_string();
        insert_component(&mut self.components, &owner, component.into());
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
        json!({
            "format_version": FormatVersion::ITEM,
            "minecraft:item": {
                "description": description,
                "components": self.components,
            },
        })
    }
}

/// Raw item file structure, as read back from a pack.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemFile {
    pub format_version: String,
    #[serde(rename = "minecraft:item")]
    pub item: ItemBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemBody {
    pub description: ItemDescription,
    #[serde(default)]
    pub components: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemDescription {
    pub identifier: String,
    /// Pre-1.20 files put the tab here instead of `menu_category`.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub menu_category: Option<Value>,
}

/// Headline properties of an item file.
#[derive(Debug, Clone)]
pub struct ItemSummary {
    pub identifier: String,
    pub max_stack_size: u8,
    pub category: Option<String>,
    pub components: Vec<String>,
}

impl ItemFile {
    /// Parse from a JSON string.
    pub fn parse_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn summarize(&self) -> ItemSummary {
        let identifier = self.item.description.identifier.clone();
        // Either { "value": 64 } or a bare 64. Vanilla overrides without the
        // component fall back to the catalog.
        let max_stack = self
            .item
            .components
            .get("minecraft:max_stack_size")
            .and_then(|v| v.get("value").and_then(Value::as_u64).or_else(|| v.as_u64()))
            .map(|n| n.min(64) as u8)
            .unwrap_or_else(|| {
                if identifier.starts_with("minecraft:") {
                    item_types::max_stack_size(&identifier)
                } else {
                    64
                }
            });

        let category = self
            .item
            .description
            .menu_category
            .as_ref()
            .and_then(|m| m.get("category"))
            .and_then(Value::as_str)
            .map(String::from)
            .or_else(|| self.item.description.category.clone());

        ItemSummary {
            identifier,
            max_stack_size: max_stack,
            category,
            components: self.item.components.keys().cloned().collect(),
        }
    }
}
